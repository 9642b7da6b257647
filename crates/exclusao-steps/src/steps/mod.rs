//! Colaboradores de step.
//!
//! - `RoutineStep`: publica la salida de la rutina en el canal operativo.
//! - `DependencyTraceStep`: la salida es traza de FKs y va a `log_fks`.

mod routine;

pub use routine::{DependencyTraceStep, Routine, RoutineStep};
