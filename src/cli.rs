//! Interfaz de línea de comandos.

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use clap::{CommandFactory, FromArgMatches, Parser};
use exclusao_core::constants::COMPOSITE_ALIAS;
use exclusao_core::plan::valid_step_names;
use exclusao_core::CompanyFilter;
use exclusao_persistence::DbConfig;
use exclusao_steps::{CatalogError, NasajonCatalog, DEFAULT_ROUTINE_SCHEMA};

use crate::app::ExecutionRequest;

/// Utilitário para exclusão de empresas de um banco de dados.
#[derive(Parser, Debug)]
#[command(name = "exclusao-empresas", version, about, long_about = None)]
pub struct Cli {
    /// Nome do banco de dados para conexão (obrigatório, salvo se EXCLUSAO_DB_NAME ou .env o definir)
    #[arg(short = 'd', long, env = "EXCLUSAO_DB_NAME")]
    pub database: String,

    /// Usuário para conexão com o banco de dados
    #[arg(short = 'u', long, default_value = "postgres", env = "EXCLUSAO_DB_USER")]
    pub user: String,

    /// Senha para conexão com o banco de dados
    #[arg(short = 'p', long, default_value = "postgres", env = "EXCLUSAO_DB_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// IP ou nome do servidor do banco de dados
    #[arg(short = 't', long, default_value = "localhost", env = "EXCLUSAO_DB_HOST")]
    pub host: String,

    /// Porta para conexão com o banco de dados
    #[arg(short = 'o', long, default_value_t = 5432, env = "EXCLUSAO_DB_PORT")]
    pub port: u16,

    /// Lista dos códigos das empresas a excluir (separados por vírgulas)
    #[arg(short = 'e', long, default_value = "", allow_hyphen_values = true)]
    pub empresas: String,

    /// Etapa do processo de exclusão a ser executada
    #[arg(short = 's', long, default_value = COMPOSITE_ALIAS)]
    pub step: String,

    /// Diretório onde os arquivos de log são criados
    #[arg(long, default_value = ".")]
    pub log_dir: PathBuf,

    /// Schema que contém as rotinas dos steps
    #[arg(long = "schema", value_name = "SCHEMA", default_value = DEFAULT_ROUTINE_SCHEMA, value_parser = parse_catalog)]
    pub catalog: NasajonCatalog,

    /// Tempo máximo de espera pela conexão, em segundos
    #[arg(long, default_value_t = 30, value_name = "SECONDS")]
    pub connect_timeout: u64,
}

fn parse_catalog(schema: &str) -> Result<NasajonCatalog, CatalogError> {
    NasajonCatalog::new(schema)
}

impl Cli {
    /// Parsea `args`; la ayuda incluye la lista de steps válidos.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
        where I: IntoIterator<Item = T>,
              T: Into<OsString> + Clone
    {
        let mut matches = Self::command().after_help(format!("Steps válidos: {}", valid_step_names().join(", ")))
                                         .try_get_matches_from(args)?;
        Self::from_arg_matches_mut(&mut matches)
    }

    pub fn request(&self) -> ExecutionRequest {
        let db = DbConfig { user: self.user.clone(),
                            password: self.password.clone(),
                            host: self.host.clone(),
                            port: self.port,
                            database: self.database.clone(),
                            max_connections: 1,
                            connect_timeout: Duration::from_secs(self.connect_timeout) };
        ExecutionRequest { step: self.step.clone(),
                           empresas: CompanyFilter::new(self.empresas.clone()),
                           db }
    }
}
