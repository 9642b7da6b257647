//! Motor de ejecución: corre un `ExecutionPlan` sobre un adapter y mide
//! tiempos.

mod executor;
mod report;

pub use executor::PipelineExecutor;
pub use report::{ElapsedTimer, RunReport};
