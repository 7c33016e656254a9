//! Step de tipo desconocido.
//!
//! Centinela para cualquier forma de step que el sistema no interpreta.
//! Conserva el JSON crudo de la fuente (round-trip sin pérdida) pero no
//! tiene semántica firmable: el tree signer se niega a firmar un pipeline
//! que lo contenga.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnknownStep {
    pub contents: Value,
}

impl UnknownStep {
    pub fn new(contents: Value) -> Self {
        Self { contents }
    }
}
