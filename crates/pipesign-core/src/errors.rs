//! Errores del núcleo de firmado.
//!
//! Ninguna variante es reintentable dentro de este crate: todo error vuelve al
//! llamador de `sign_steps` y un árbol parcialmente firmado se trata completo
//! como no confiable.

use thiserror::Error;

/// Error opaco del primitivo de firma externo.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum SigningError {
    /// Una selección nombró un campo que esta versión no reconoce y que no
    /// pertenece al namespace externo `env::`.
    #[error("unknown or unsupported field for signing {0:?}")]
    UnsupportedField(String),
    /// Una selección omitió campos obligatorios; enumera todos los faltantes.
    #[error("one or more required fields are not present: [{}]", .0.join(", "))]
    MissingRequiredFields(Vec<String>),
    /// Fail-closed: un step de forma desconocida implica que el entendimiento
    /// del pipeline está incompleto y podría quedar algo sin firmar.
    #[error("refusing to sign pipeline containing a step of unknown type, because the pipeline could be incorrectly parsed - please contact support")]
    UnknownStepType,
    /// El primitivo de firma falló en un command step concreto.
    #[error("signing step with command {command:?}: {source}")]
    Step {
        command: String,
        #[source]
        source: BoxedError,
    },
    /// Falla dentro de la lista anidada de un group step.
    #[error("signing group step: {0}")]
    Group(#[source] Box<SigningError>),
    /// Un valor de campo no pudo codificarse a JSON.
    #[error("encoding field {field:?}: {source}")]
    FieldEncode {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
