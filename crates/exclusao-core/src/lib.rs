//! exclusao-core: orquestación del proceso de exclusión de empresas.
//!
//! - `step`: catálogo cerrado (`StepId`), filtro de empresas y contrato `Step`.
//! - `plan`: resolución de `--step` (incluye el alias `processo_basico`).
//! - `engine`: ejecutor secuencial fail-fast y medición de tiempos.
//! - `adapter`: superficie de BD para los steps y abstracción del pool.
pub mod adapter;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod plan;
pub mod step;

pub use adapter::{in_transaction, ConnectionPool, DbAdapter};
pub use engine::{ElapsedTimer, PipelineExecutor, RunReport};
pub use errors::{AdapterError, PipelineError, StepError};
pub use plan::{resolve, ExecutionPlan};
pub use step::{CompanyFilter, Step, StepCatalog, StepId};
