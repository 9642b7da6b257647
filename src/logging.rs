//! Subsistema de logs.
//!
//! Dos canales independientes por invocación, ambos con nombre derivado de
//! la hora de inicio (resolución de minuto):
//! - operativo (`exclusao - <fecha>.log` + consola): DEBUG o superior;
//!   la consola no lleva fecha, el archivo sí.
//! - dependencias (`fks - <fecha>.log`): sólo el target `log_fks`, mensaje
//!   crudo, sin consola.
//!
//! Dos invocaciones en el mismo minuto comparten archivos (se abren en modo
//! append).

use std::fs::{self, File, OpenOptions};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Local};
use exclusao_core::constants::{DEPENDENCY_LOGGER, OPERATIONAL_LOGGER};
use once_cell::sync::OnceCell;
use thiserror::Error;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

const OPERATIONAL_PREFIX: &str = "exclusao";
const DEPENDENCY_PREFIX: &str = "fks";
const STAMP_FORMAT: &str = "%Y-%m-%d-%H-%M";

/// Crates propios que escriben en el canal operativo.
const WORKSPACE_TARGETS: [&str; 3] = ["exclusao_core", "exclusao_persistence", "exclusao_steps"];

static STARTED: OnceCell<()> = OnceCell::new();

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("logs já configurados neste processo")]
    AlreadyInitialized,
    #[error("não foi possível criar arquivo de log {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("falha ao instalar subscriber: {0}")]
    Subscriber(String),
}

/// Contexto de logs de la invocación. Se crea una sola vez en `main`.
#[derive(Debug, Clone)]
pub struct LogContext {
    stamp: String,
    operational: PathBuf,
    dependency: PathBuf,
}

impl LogContext {
    /// Crea ambos archivos en `dir` e instala el subscriber global.
    ///
    /// Una segunda llamada en el mismo proceso falla con
    /// `LoggingError::AlreadyInitialized` sin tocar disco.
    pub fn init(dir: &Path, started: DateTime<Local>) -> Result<Self, LoggingError> {
        STARTED.set(()).map_err(|_| LoggingError::AlreadyInitialized)?;

        let ctx = Self::for_start(dir, started);
        fs::create_dir_all(dir).map_err(|source| LoggingError::Io { path: dir.to_path_buf(),
                                                                    source })?;
        let operational_file = open_append(&ctx.operational)?;
        let dependency_file = open_append(&ctx.dependency)?;

        let console = fmt::layer().with_writer(io::stdout)
                                  .with_ansi(io::stdout().is_terminal())
                                  .without_time()
                                  .with_target(true)
                                  .with_filter(operational_targets());
        let operational = fmt::layer().with_writer(Mutex::new(operational_file))
                                      .with_ansi(false)
                                      .with_target(true)
                                      .with_filter(operational_targets());
        let dependency = fmt::layer().with_writer(Mutex::new(dependency_file))
                                     .with_ansi(false)
                                     .without_time()
                                     .with_level(false)
                                     .with_target(false)
                                     .with_filter(dependency_targets());

        tracing_subscriber::registry().with(console)
                                      .with(operational)
                                      .with(dependency)
                                      .try_init()
                                      .map_err(|e| LoggingError::Subscriber(e.to_string()))?;
        Ok(ctx)
    }

    /// Nombres de archivo para una hora de inicio, sin crear nada.
    pub fn for_start(dir: &Path, started: DateTime<Local>) -> Self {
        let stamp = started.format(STAMP_FORMAT).to_string();
        Self { operational: dir.join(format!("{OPERATIONAL_PREFIX} - {stamp}.log")),
               dependency: dir.join(format!("{DEPENDENCY_PREFIX} - {stamp}.log")),
               stamp }
    }

    pub fn stamp(&self) -> &str {
        &self.stamp
    }

    pub fn operational_path(&self) -> &Path {
        &self.operational
    }

    pub fn dependency_path(&self) -> &Path {
        &self.dependency
    }
}

fn open_append(path: &Path) -> Result<File, LoggingError> {
    OpenOptions::new().create(true)
                      .append(true)
                      .open(path)
                      .map_err(|source| LoggingError::Io { path: path.to_path_buf(),
                                                           source })
}

fn operational_targets() -> Targets {
    WORKSPACE_TARGETS.iter()
                     .fold(Targets::new().with_default(LevelFilter::WARN)
                                         .with_target(OPERATIONAL_LOGGER, LevelFilter::DEBUG)
                                         .with_target(DEPENDENCY_LOGGER, LevelFilter::OFF),
                           |t, name| t.with_target(*name, LevelFilter::DEBUG))
}

fn dependency_targets() -> Targets {
    Targets::new().with_target(DEPENDENCY_LOGGER, LevelFilter::TRACE)
}
