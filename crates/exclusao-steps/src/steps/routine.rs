use exclusao_core::constants::{DEPENDENCY_LOGGER, OPERATIONAL_LOGGER};
use exclusao_core::{in_transaction, CompanyFilter, DbAdapter, Step, StepError, StepId};
use tracing::{debug, info};

/// Rutina de base asociada a un step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routine {
    schema: String,
    id: StepId,
}

impl Routine {
    pub fn new(schema: &str, id: StepId) -> Self {
        Self { schema: schema.to_string(),
               id }
    }

    pub fn id(&self) -> StepId {
        self.id
    }

    /// Consulta que invoca la rutina con el filtro como `$1`.
    pub fn sql(&self) -> String {
        format!("SELECT r::text AS line FROM {}.{}($1) AS r", self.schema, self.id)
    }

    /// Corre la rutina en una transacción y devuelve sus líneas no vacías
    /// (una rutina `RETURNS void` produce una sola fila vacía).
    fn call(&self, adapter: &mut dyn DbAdapter, empresas: &CompanyFilter) -> Result<Vec<String>, StepError> {
        let sql = self.sql();
        debug!("{}: {sql} [empresas={:?}]", self.id, empresas.as_str());
        let lines = in_transaction(adapter, |tx| Ok(tx.query_lines(&sql, empresas.as_str())?))?;
        Ok(lines.into_iter().filter(|l| !l.trim().is_empty()).collect())
    }
}

pub struct RoutineStep<'a> {
    routine: Routine,
    adapter: &'a mut dyn DbAdapter,
}

impl<'a> RoutineStep<'a> {
    pub fn new(routine: Routine, adapter: &'a mut dyn DbAdapter) -> Self {
        Self { routine, adapter }
    }
}

impl Step for RoutineStep<'_> {
    fn id(&self) -> StepId {
        self.routine.id()
    }

    fn run(&mut self, empresas: &CompanyFilter) -> Result<(), StepError> {
        let lines = self.routine.call(&mut *self.adapter, empresas)?;
        for line in &lines {
            info!(target: OPERATIONAL_LOGGER, "{}: {line}", self.routine.id());
        }
        Ok(())
    }
}

pub struct DependencyTraceStep<'a> {
    routine: Routine,
    adapter: &'a mut dyn DbAdapter,
}

impl<'a> DependencyTraceStep<'a> {
    pub fn new(routine: Routine, adapter: &'a mut dyn DbAdapter) -> Self {
        Self { routine, adapter }
    }
}

impl Step for DependencyTraceStep<'_> {
    fn id(&self) -> StepId {
        self.routine.id()
    }

    fn run(&mut self, empresas: &CompanyFilter) -> Result<(), StepError> {
        let lines = self.routine.call(&mut *self.adapter, empresas)?;
        for line in &lines {
            info!(target: DEPENDENCY_LOGGER, "{line}");
        }
        info!(target: OPERATIONAL_LOGGER,
              "{}: {} registro(s) de dependência gravados no log de FKs",
              self.routine.id(),
              lines.len());
        Ok(())
    }
}
