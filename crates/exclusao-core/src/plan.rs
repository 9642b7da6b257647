//! Resolución de un identificador pedido a un plan ordenado de steps.
//!
//! La expansión del alias compuesto vive únicamente aquí: el orden de
//! `BASIC_PROCESS` codifica dependencias reales (ajustes de modelado antes
//! de crear el buffer, buffer antes de la selección, selección antes de la
//! exclusión, exclusión antes de borrar el buffer temporal).

use crate::constants::COMPOSITE_ALIAS;
use crate::errors::PipelineError;
use crate::step::StepId;

/// Expansión fija de `processo_basico`.
pub const BASIC_PROCESS: [StepId; 6] = [StepId::MelhoriasModelagem,
                                        StepId::CriacaoBuffer,
                                        StepId::SelecaoDados,
                                        StepId::AjusteBuffer,
                                        StepId::Exclusao,
                                        StepId::ApagaBufferTemp];

/// Lista ordenada de steps a ejecutar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionPlan {
    steps: Vec<StepId>,
}

impl ExecutionPlan {
    pub fn single(id: StepId) -> Self {
        Self { steps: vec![id] }
    }

    pub fn basic_process() -> Self {
        Self { steps: BASIC_PROCESS.to_vec() }
    }

    pub fn steps(&self) -> &[StepId] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<'a> IntoIterator for &'a ExecutionPlan {
    type Item = &'a StepId;
    type IntoIter = std::slice::Iter<'a, StepId>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Valores aceptados por `--step`: el alias y luego el catálogo.
pub fn valid_step_names() -> Vec<&'static str> {
    std::iter::once(COMPOSITE_ALIAS).chain(StepId::ALL.iter().map(|id| id.as_str()))
                                    .collect()
}

/// Resuelve `requested` a un plan.
///
/// - alias compuesto -> `BASIC_PROCESS`
/// - id del catálogo -> `[id]`
/// - otro valor -> `PipelineError::InvalidStep` con la lista de válidos
pub fn resolve(requested: &str) -> Result<ExecutionPlan, PipelineError> {
    if requested == COMPOSITE_ALIAS {
        return Ok(ExecutionPlan::basic_process());
    }
    requested.parse::<StepId>()
             .map(ExecutionPlan::single)
             .map_err(|_| PipelineError::InvalidStep { requested: requested.to_string(),
                                                       valid: valid_step_names() })
}
