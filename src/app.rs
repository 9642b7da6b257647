//! Orquestación de una invocación: resolver -> pool -> sesión -> ejecutor.
//!
//! `run` es genérico sobre el pool y el catálogo: en producción recibe el
//! pool r2d2 y `NasajonCatalog`; en tests, dobles en memoria.

use std::panic::{self, AssertUnwindSafe};

use exclusao_core::constants::OPERATIONAL_LOGGER;
use exclusao_core::{resolve, CompanyFilter, ConnectionPool, ElapsedTimer, PipelineExecutor, RunReport,
                    StepCatalog};
use exclusao_persistence::DbConfig;
use tracing::{error, info, warn};

use crate::errors::{AppError, EXIT_SUCCESS};
use crate::logging::LogContext;

/// Entrada validada de la CLI.
#[derive(Debug, Clone)]
pub struct ExecutionRequest {
    /// Step o alias pedido (se valida en `resolve`).
    pub step: String,
    pub empresas: CompanyFilter,
    pub db: DbConfig,
}

/// Resultado de la invocación tal como lo ve el proceso.
#[derive(Debug)]
pub enum Outcome {
    Success(RunReport),
    Failed(AppError),
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Success(_) => EXIT_SUCCESS,
            Outcome::Failed(e) => e.exit_code(),
        }
    }
}

/// Corre la invocación completa y registra el tiempo total al final, pase
/// lo que pase.
///
/// `logs` es el contexto creado en `main`; sus rutas quedan en el canal
/// operativo al inicio de la corrida.
pub fn run<C, P, F>(request: &ExecutionRequest, logs: &LogContext, catalog: &C, connect: F) -> Outcome
    where C: StepCatalog + ?Sized,
          P: ConnectionPool,
          F: FnOnce(&DbConfig) -> Result<P, AppError>
{
    let _timer = ElapsedTimer::start(|elapsed| {
        info!(target: OPERATIONAL_LOGGER, "--- TEMPO TOTAL GERAL {} seconds ---", elapsed.as_secs_f64())
    });
    info!(target: OPERATIONAL_LOGGER,
          "Logs: {} | FKs: {}",
          logs.operational_path().display(),
          logs.dependency_path().display());

    let result = panic::catch_unwind(AssertUnwindSafe(|| run_pipeline(request, catalog, connect)))
        .unwrap_or_else(|payload| Err(AppError::Unclassified(panic_message(payload.as_ref()))));

    match result {
        Ok(report) => {
            info!(target: OPERATIONAL_LOGGER,
                  "Processo concluído: {} step(s) executado(s)",
                  report.steps().len());
            Outcome::Success(report)
        }
        Err(err @ AppError::Usage(_)) => {
            warn!(target: OPERATIONAL_LOGGER, "{err}");
            Outcome::Failed(err)
        }
        Err(err) => {
            error!(target: OPERATIONAL_LOGGER, "{err}");
            if let Some(cause) = std::error::Error::source(&err) {
                error!(target: OPERATIONAL_LOGGER, "causa: {cause:?}");
            }
            Outcome::Failed(err)
        }
    }
}

/// Camino sin logging de cierre: útil para inspeccionar el error exacto.
///
/// El plan se resuelve antes de crear el pool: un `--step` inválido no
/// abre conexiones. La sesión se suelta antes que el pool, en cualquier
/// salida.
pub fn run_pipeline<C, P, F>(request: &ExecutionRequest, catalog: &C, connect: F) -> Result<RunReport, AppError>
    where C: StepCatalog + ?Sized,
          P: ConnectionPool,
          F: FnOnce(&DbConfig) -> Result<P, AppError>
{
    let plan = resolve(&request.step)?;

    info!(target: OPERATIONAL_LOGGER, "Abrindo conexão com o banco de dados...");
    let pool = connect(&request.db)?;
    let mut session = pool.borrow()
                          .map_err(|e| AppError::Connectivity(e.to_string()))?;

    let report = PipelineExecutor::new(catalog).execute(&plan, &mut session, &request.empresas)?;
    Ok(report)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic sem mensagem".to_string()
    }
}
