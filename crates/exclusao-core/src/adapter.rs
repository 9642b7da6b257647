//! Superficie mínima de base de datos que ven los steps.
//!
//! El core no emite SQL: sólo recibe un adapter de la sesión prestada y lo
//! entrega a cada step. `ConnectionPool` abstrae el préstamo para poder
//! orquestar con un pool real (r2d2) o con dobles en tests.

use tracing::warn;

use crate::errors::{AdapterError, StepError};

/// Primitivas que un step puede usar sobre la sesión compartida.
pub trait DbAdapter {
    /// Ejecuta una o más sentencias sin parámetros.
    fn execute(&mut self, sql: &str) -> Result<(), AdapterError>;

    /// Ejecuta una sentencia con un único parámetro de texto (`$1`).
    /// Devuelve el número de filas afectadas.
    fn execute_with(&mut self, sql: &str, arg: &str) -> Result<usize, AdapterError>;

    /// Ejecuta una consulta con un parámetro de texto (`$1`) que expone una
    /// columna de texto `line`; devuelve esa columna por fila.
    fn query_lines(&mut self, sql: &str, arg: &str) -> Result<Vec<String>, AdapterError>;

    fn begin(&mut self) -> Result<(), AdapterError>;

    fn commit(&mut self) -> Result<(), AdapterError>;

    fn rollback(&mut self) -> Result<(), AdapterError>;
}

/// Fuente acotada de sesiones. Soltar la sesión la devuelve al pool.
pub trait ConnectionPool {
    type Session: DbAdapter;

    fn borrow(&self) -> Result<Self::Session, AdapterError>;
}

/// Ejecuta `f` dentro de una transacción del adapter.
///
/// `commit` si `f` termina bien; `rollback` si falla. Un error de rollback
/// se registra pero no reemplaza al error original.
pub fn in_transaction<T, F>(adapter: &mut dyn DbAdapter, f: F) -> Result<T, StepError>
    where F: FnOnce(&mut dyn DbAdapter) -> Result<T, StepError>
{
    adapter.begin()?;
    match f(&mut *adapter) {
        Ok(value) => {
            adapter.commit()?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rb) = adapter.rollback() {
                warn!("rollback falló tras error del step: {rb}");
            }
            Err(e)
        }
    }
}
