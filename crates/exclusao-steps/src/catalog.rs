use exclusao_core::{DbAdapter, Step, StepCatalog, StepId};
use thiserror::Error;

use crate::steps::{DependencyTraceStep, Routine, RoutineStep};

pub const DEFAULT_ROUTINE_SCHEMA: &str = "exclusao_empresas";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("schema de rotinas inválido '{0}': use [a-z_][a-z0-9_]* (até 63 caracteres)")]
    InvalidSchema(String),
}

/// Catálogo total sobre `StepId`.
#[derive(Debug, Clone)]
pub struct NasajonCatalog {
    schema: String,
}

impl NasajonCatalog {
    pub fn new(schema: &str) -> Result<Self, CatalogError> {
        if !is_plain_identifier(schema) {
            return Err(CatalogError::InvalidSchema(schema.to_string()));
        }
        Ok(Self { schema: schema.to_string() })
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }
}

impl Default for NasajonCatalog {
    fn default() -> Self {
        Self { schema: DEFAULT_ROUTINE_SCHEMA.to_string() }
    }
}

impl StepCatalog for NasajonCatalog {
    fn create<'a>(&self, id: StepId, adapter: &'a mut dyn DbAdapter) -> Box<dyn Step + 'a> {
        let routine = Routine::new(&self.schema, id);
        // Sin comodín: un step nuevo obliga a decidir su canal aquí.
        match id {
            StepId::Exclusao | StepId::AutoDependencias => Box::new(DependencyTraceStep::new(routine, adapter)),
            StepId::MelhoriasModelagem
            | StepId::CriacaoBuffer
            | StepId::SelecaoDados
            | StepId::SelecaoDadosIncremental
            | StepId::AjusteBuffer
            | StepId::ApagaBufferTemp
            | StepId::PermissoesNasajon
            | StepId::PopulaPks => Box::new(RoutineStep::new(routine, adapter)),
        }
    }
}

// Identificador SQL sin comillas: se interpola en la sentencia.
fn is_plain_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {}
        _ => return false,
    }
    s.len() <= 63 && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
