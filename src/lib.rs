//! exclusao-empresas
//!
//! Utilitário de operador que remove empresas de um banco corriendo una
//! secuencia ordenada de steps de mantenimiento sobre una única conexión.
//!
//! - `cli`: flags de invocación y defaults.
//! - `logging`: canal operativo y canal de dependencias (FKs).
//! - `app`: orquestación y mapeo a códigos de salida.
//! - `errors`: taxonomía de errores de la invocación.

pub mod app;
pub mod cli;
pub mod errors;
pub mod logging;

pub use app::{run, run_pipeline, ExecutionRequest, Outcome};
pub use cli::Cli;
pub use errors::AppError;
pub use logging::{LogContext, LoggingError};
