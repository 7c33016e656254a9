//! Opciones abiertas para el primitivo de firma.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Conjunto abierto de opciones provisto por el llamador y reenviado tal
/// cual al primitivo de firma. Este crate no interpreta ninguna entrada.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignerOptions {
    values: BTreeMap<String, Value>,
}

impl SignerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Estilo builder: fija una opción arbitraria.
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}
