use std::process::ExitCode;

use chrono::Local;
use exclusao_empresas::errors::{EXIT_FATAL, EXIT_SUCCESS};
use exclusao_empresas::{run, AppError, Cli, LogContext};
use exclusao_persistence::{init_dotenv, PgConnectionPool};

fn main() -> ExitCode {
    // Cargar .env si existe (credenciales vía EXCLUSAO_DB_*).
    init_dotenv();

    let cli = match Cli::try_parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help / --version no son errores; cualquier otro fallo de
            // argumentos es fatal (5).
            return ExitCode::from(if e.use_stderr() { EXIT_FATAL } else { EXIT_SUCCESS });
        }
    };

    let logs = match LogContext::init(&cli.log_dir, Local::now()) {
        Ok(logs) => logs,
        Err(e) => {
            eprintln!("Erro fatal não identificado ao configurar logs: {e}");
            return ExitCode::from(EXIT_FATAL);
        }
    };
    let request = cli.request();
    let outcome = run(&request, &logs, &cli.catalog, |cfg| {
        PgConnectionPool::connect(cfg).map_err(|e| AppError::Connectivity(e.to_string()))
    });
    ExitCode::from(outcome.exit_code())
}
