use std::fmt;

/// Filtro textual de empresas (`--empresas`), delimitado por comas.
///
/// El texto se entrega a cada step sin modificar: la interpretación de un
/// filtro vacío pertenece al step. `codes()` es sólo una ayuda.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyFilter(String);

impl CompanyFilter {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Texto original, tal como llegó por CLI.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Códigos no vacíos, sin espacios alrededor.
    pub fn codes(&self) -> Vec<&str> {
        self.0.split(',').map(str::trim).filter(|c| !c.is_empty()).collect()
    }

    /// Sin códigos: "todas las empresas elegibles".
    pub fn is_all(&self) -> bool {
        self.codes().is_empty()
    }
}

impl fmt::Display for CompanyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_all() {
            f.write_str("todas as empresas")
        } else {
            f.write_str(&self.codes().join(","))
        }
    }
}
