use exclusao_core::PipelineError;
use thiserror::Error;

/// Códigos de saída: el contrato es cerrado (0, 4, 5).
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_INVALID_STEP: u8 = 4;
pub const EXIT_FATAL: u8 = 5;

/// Taxonomía de errores de la invocación.
#[derive(Debug, Error)]
pub enum AppError {
    /// `--step` fuera del catálogo; se detecta antes de abrir conexiones.
    #[error(transparent)]
    Usage(PipelineError),
    #[error("falha de conexão com o banco de dados: {0}")]
    Connectivity(String),
    #[error(transparent)]
    StepExecution(PipelineError),
    #[error("Erro fatal não identificado. Mensagem original do erro: {0}")]
    Unclassified(String),
}

impl AppError {
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Usage(_) => EXIT_INVALID_STEP,
            AppError::Connectivity(_) | AppError::StepExecution(_) | AppError::Unclassified(_) => EXIT_FATAL,
        }
    }
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        if err.is_usage() {
            AppError::Usage(err)
        } else {
            AppError::StepExecution(err)
        }
    }
}
