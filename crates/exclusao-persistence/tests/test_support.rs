use std::time::Duration;

use exclusao_persistence::{build_pool, PgConnectionPool};

/// Pool 1x1 contra `DATABASE_URL`, o `None` si no está definido.
pub fn test_pool() -> Option<PgConnectionPool> {
    let url = std::env::var("DATABASE_URL").ok()?;
    match build_pool(&url, 1, Duration::from_secs(10)) {
        Ok(p) => Some(PgConnectionPool::from_pool(p)),
        Err(e) => {
            eprintln!("No se pudo construir pool de test: {e}");
            None
        }
    }
}
