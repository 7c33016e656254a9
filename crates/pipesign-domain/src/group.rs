//! Group step: contenedor ordenado de steps anidados.

use serde::{Deserialize, Serialize};

use crate::Step;

/// Step que agrupa una secuencia ordenada de steps anidados (recursivamente
/// de cualquier variante). No tiene estado de firma propio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupStep {
    /// Etiqueta del grupo. La fuente la admite nula o ausente.
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl GroupStep {
    pub fn new(group: Option<String>, steps: Vec<Step>) -> Self {
        Self { group, steps }
    }
}
