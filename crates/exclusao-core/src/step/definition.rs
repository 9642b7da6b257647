use crate::adapter::DbAdapter;
use crate::errors::StepError;

use super::{CompanyFilter, StepId};

/// Contrato de un step colaborador.
///
/// - Se construye a partir del adapter compartido y se usa una sola vez.
/// - Un filtro vacío significa "todas las empresas elegibles".
/// - Señala fallos devolviendo `Err`, nunca con flags de estado.
/// - No abre conexiones propias: todo pasa por el adapter recibido.
pub trait Step {
    fn id(&self) -> StepId;

    fn run(&mut self, empresas: &CompanyFilter) -> Result<(), StepError>;
}

/// Tabla de despacho `StepId -> Step`.
///
/// Las implementaciones deben ser totales sobre `StepId`: cualquier id del
/// catálogo es construible sólo con el adapter.
pub trait StepCatalog {
    fn create<'a>(&self, id: StepId, adapter: &'a mut dyn DbAdapter) -> Box<dyn Step + 'a>;
}
