//! Errores del modelo de pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// La fuente no era JSON válido, o una forma reconocida estaba malformada.
    #[error("pipeline json: {0}")]
    Json(#[from] serde_json::Error),
    /// JSON válido pero la raíz no tiene forma de pipeline.
    #[error("pipeline shape: {0}")]
    Shape(String),
}
