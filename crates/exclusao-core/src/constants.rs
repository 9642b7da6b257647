//! Constantes compartidas por el motor de exclusión.
//!
//! Los nombres de logger son también los `target` de `tracing`: el
//! subscriber configurado en el binario enruta cada canal según estos
//! valores, por lo que cambiarlos rompe la separación de archivos de log.

/// Canal operativo (consola + archivo `exclusao - <fecha>.log`).
pub const OPERATIONAL_LOGGER: &str = "exclusao_empresas";

/// Canal de dependencias/FKs (sólo archivo `fks - <fecha>.log`, mensaje crudo).
pub const DEPENDENCY_LOGGER: &str = "log_fks";

/// Alias compuesto que se expande a la secuencia básica de steps.
pub const COMPOSITE_ALIAS: &str = "processo_basico";
