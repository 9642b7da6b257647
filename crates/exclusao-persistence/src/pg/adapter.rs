//! `DbAdapter` sobre una `PgSession`.

use diesel::connection::{AnsiTransactionManager, SimpleConnection, TransactionManager};
use diesel::sql_types::Text;
use diesel::{QueryableByName, RunQueryDsl};
use exclusao_core::{AdapterError, DbAdapter};
use log::debug;

use super::PgSession;
use crate::error::PersistenceError;

/// Fila de `query_lines`: la consulta debe exponer una columna `line`.
#[derive(QueryableByName, Debug)]
struct LineRow {
    #[diesel(sql_type = Text)]
    line: String,
}

fn transaction_error(e: diesel::result::Error) -> AdapterError {
    AdapterError::Transaction(PersistenceError::from(e).to_string())
}

impl DbAdapter for PgSession {
    fn execute(&mut self, sql: &str) -> Result<(), AdapterError> {
        debug!("execute: {sql}");
        self.connection().batch_execute(sql).map_err(PersistenceError::from)?;
        Ok(())
    }

    fn execute_with(&mut self, sql: &str, arg: &str) -> Result<usize, AdapterError> {
        debug!("execute_with: {sql} [$1={arg:?}]");
        let affected = diesel::sql_query(sql).bind::<Text, _>(arg)
                                             .execute(self.connection())
                                             .map_err(PersistenceError::from)?;
        Ok(affected)
    }

    fn query_lines(&mut self, sql: &str, arg: &str) -> Result<Vec<String>, AdapterError> {
        debug!("query_lines: {sql} [$1={arg:?}]");
        let rows: Vec<LineRow> = diesel::sql_query(sql).bind::<Text, _>(arg)
                                                       .load(self.connection())
                                                       .map_err(PersistenceError::from)?;
        Ok(rows.into_iter().map(|r| r.line).collect())
    }

    fn begin(&mut self) -> Result<(), AdapterError> {
        AnsiTransactionManager::begin_transaction(self.connection()).map_err(transaction_error)?;
        self.in_transaction = true;
        Ok(())
    }

    fn commit(&mut self) -> Result<(), AdapterError> {
        let res = AnsiTransactionManager::commit_transaction(self.connection());
        // Diesel revierte por su cuenta si el commit falla.
        self.in_transaction = false;
        res.map_err(transaction_error)
    }

    fn rollback(&mut self) -> Result<(), AdapterError> {
        let res = AnsiTransactionManager::rollback_transaction(self.connection());
        self.in_transaction = false;
        res.map_err(transaction_error)
    }
}
