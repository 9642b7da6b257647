//! Pool Postgres (r2d2 + Diesel) y sesión prestada.
//!
//! Notas operativas:
//! - El orquestador pide un pool de tamaño 1: la ejecución es estrictamente
//!   secuencial y el pool serializa cualquier préstamo adicional.
//! - `PgSession` es dueña de la conexión durante toda la corrida; se
//!   devuelve al pool en `Drop`, en cualquier camino de salida.
//! - Si al soltarse queda una transacción abierta (un step falló entre
//!   `begin` y `commit`), se revierte antes de devolver la conexión.

mod adapter;

use std::time::Duration;

use diesel::connection::{AnsiTransactionManager, TransactionManager};
use diesel::pg::PgConnection;
use diesel::r2d2::{self, ConnectionManager};
use exclusao_core::{AdapterError, ConnectionPool};
use log::{debug, info, warn};

use crate::config::DbConfig;
use crate::error::PersistenceError;

/// Alias de tipo para el pool r2d2 de conexiones Postgres.
pub type PgPool = r2d2::Pool<ConnectionManager<PgConnection>>;

type PgPooledConnection = r2d2::PooledConnection<ConnectionManager<PgConnection>>;

/// Construye un pool r2d2 a partir de URL.
///
/// - `max_size == 0` se ajusta a 1.
/// - `min_idle` es 0: la única conexión se abre en el primer préstamo, que
///   espera como máximo `connect_timeout`.
pub fn build_pool(database_url: &str, max_size: u32, connect_timeout: Duration) -> Result<PgPool, PersistenceError> {
    let validated_max = if max_size == 0 { 1 } else { max_size };
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = r2d2::Pool::builder().max_size(validated_max)
                                    .min_idle(Some(0))
                                    .connection_timeout(connect_timeout)
                                    .test_on_check_out(true)
                                    .build(manager)
                                    .map_err(|e| PersistenceError::TransientIo(format!("pool build: {e}")))?;
    Ok(pool)
}

/// Pool acotado con la semántica de préstamo que espera el orquestador.
pub struct PgConnectionPool {
    pool: PgPool,
}

impl PgConnectionPool {
    pub fn connect(cfg: &DbConfig) -> Result<Self, PersistenceError> {
        let url = cfg.url()?;
        info!("Criando pool para {}@{}:{}/{} (max={})",
              cfg.user, cfg.host, cfg.port, cfg.database, cfg.max_connections);
        let pool = build_pool(&url, cfg.max_connections, cfg.connect_timeout)?;
        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl ConnectionPool for PgConnectionPool {
    type Session = PgSession;

    fn borrow(&self) -> Result<PgSession, AdapterError> {
        let conn = self.pool.get().map_err(PersistenceError::from)?;
        debug!("conexão emprestada do pool");
        Ok(PgSession { conn,
                       in_transaction: false })
    }
}

/// Conexión prestada. Implementa `DbAdapter` (ver `adapter.rs`).
pub struct PgSession {
    conn: PgPooledConnection,
    in_transaction: bool,
}

impl PgSession {
    fn connection(&mut self) -> &mut PgConnection {
        &mut self.conn
    }
}

impl Drop for PgSession {
    fn drop(&mut self) {
        if self.in_transaction {
            warn!("sessão liberada com transação aberta; executando rollback");
            if let Err(e) = AnsiTransactionManager::rollback_transaction(self.connection()) {
                warn!("rollback na liberação falhou: {e}");
            }
        }
        debug!("conexão devolvida ao pool");
    }
}
