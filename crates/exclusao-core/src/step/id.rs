use std::fmt;
use std::str::FromStr;

/// Catálogo cerrado de steps de mantenimiento.
///
/// Cada variante corresponde a un colaborador externo; la lista es fija y no
/// se extiende en tiempo de ejecución.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepId {
    MelhoriasModelagem,
    AutoDependencias,
    CriacaoBuffer,
    SelecaoDados,
    SelecaoDadosIncremental,
    Exclusao,
    AjusteBuffer,
    ApagaBufferTemp,
    PermissoesNasajon,
    PopulaPks,
}

impl StepId {
    /// Todos los steps, en el orden en que se anuncian al operador.
    pub const ALL: [StepId; 10] = [StepId::MelhoriasModelagem,
                                   StepId::AutoDependencias,
                                   StepId::CriacaoBuffer,
                                   StepId::SelecaoDados,
                                   StepId::SelecaoDadosIncremental,
                                   StepId::Exclusao,
                                   StepId::AjusteBuffer,
                                   StepId::ApagaBufferTemp,
                                   StepId::PermissoesNasajon,
                                   StepId::PopulaPks];

    pub fn as_str(self) -> &'static str {
        match self {
            StepId::MelhoriasModelagem => "melhorias_modelagem",
            StepId::AutoDependencias => "auto_dependencias",
            StepId::CriacaoBuffer => "criacao_buffer",
            StepId::SelecaoDados => "selecao_dados",
            StepId::SelecaoDadosIncremental => "selecao_dados_incremental",
            StepId::Exclusao => "exclusao",
            StepId::AjusteBuffer => "ajuste_buffer",
            StepId::ApagaBufferTemp => "apaga_buffer_temp",
            StepId::PermissoesNasajon => "permissoes_nasajon",
            StepId::PopulaPks => "popula_pks",
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identificador que no pertenece al catálogo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStep(pub String);

impl FromStr for StepId {
    type Err = UnknownStep;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StepId::ALL.iter()
                   .copied()
                   .find(|id| id.as_str() == s)
                   .ok_or_else(|| UnknownStep(s.to_string()))
    }
}
