//! exclusao-steps: catálogo de producción.
//!
//! Cada step es un colaborador delgado: delega en la rutina homónima del
//! schema de rutinas de la base (`<schema>.<step_id>(empresas text)
//! RETURNS SETOF text`) y publica las líneas devueltas en el canal de log
//! que le corresponde.

pub mod catalog;
pub mod steps;

pub use catalog::{CatalogError, NasajonCatalog, DEFAULT_ROUTINE_SCHEMA};
