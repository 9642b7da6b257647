//! Steps: identificadores del catálogo cerrado, filtro de empresas y el
//! contrato que cumple cada colaborador.

pub mod definition;
mod filter;
mod id;

pub use definition::{Step, StepCatalog};
pub use filter::CompanyFilter;
pub use id::{StepId, UnknownStep};
