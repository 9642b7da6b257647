//! exclusao-persistence
//!
//! Capa Postgres (Diesel + r2d2) del proceso de exclusión:
//! - `config`: parámetros de conexión y construcción de la URL.
//! - `error`: clasificación de errores de Diesel/pool.
//! - `pg`: pool acotado, sesión prestada con liberación garantizada y el
//!   adapter que usan los steps.

pub mod config;
pub mod error;
pub mod pg;

pub use config::{init_dotenv, DbConfig};
pub use error::PersistenceError;
pub use pg::{build_pool, PgConnectionPool, PgPool, PgSession};
