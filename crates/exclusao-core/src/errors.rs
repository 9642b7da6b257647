//! Errores del core.
//!
//! - `AdapterError`: fallos del transporte/BD tal como los ve un step.
//! - `StepError`: fallo de un step colaborador.
//! - `PipelineError`: errores de resolución y ejecución del plan.

use thiserror::Error;

use crate::step::StepId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdapterError {
    #[error("connection error: {0}")]
    Connection(String),
    #[error("database error: {0}")]
    Database(String),
    #[error("transaction error: {0}")]
    Transaction(String),
}

#[derive(Debug, Error)]
pub enum StepError {
    #[error(transparent)]
    Adapter(#[from] AdapterError),
    #[error("{0}")]
    Failed(String),
}

#[derive(Debug, Error)]
pub enum PipelineError {
    /// Identificador fuera del catálogo. Es un error de uso, no un fallo interno.
    #[error("Parâmetro step inválido {requested}. Use: {}", .valid.join(", "))]
    InvalidStep { requested: String, valid: Vec<&'static str> },
    /// Un step falló; los siguientes del plan no se ejecutaron.
    #[error("step '{step}' falló: {source}")]
    StepFailed {
        step: StepId,
        #[source]
        source: StepError,
    },
}

impl PipelineError {
    /// `true` si el error se detectó antes de tocar la base de datos.
    pub fn is_usage(&self) -> bool {
        matches!(self, PipelineError::InvalidStep { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_step_message_lists_valid_names() {
        let err = PipelineError::InvalidStep { requested: "naoexiste".into(),
                                               valid: vec!["processo_basico", "exclusao"] };
        let msg = err.to_string();
        assert!(msg.contains("naoexiste"));
        assert!(msg.contains("processo_basico, exclusao"));
        assert!(err.is_usage());
    }

    #[test]
    fn step_failed_keeps_step_and_cause() {
        let err = PipelineError::StepFailed { step: StepId::Exclusao,
                                              source: StepError::Adapter(AdapterError::Database("fk".into())) };
        assert_eq!(err.to_string(), "step 'exclusao' falló: database error: fk");
        assert!(!err.is_usage());
        assert!(std::error::Error::source(&err).is_some());
    }
}
