//! Firma del árbol de steps.
//!
//! - `sign_steps` recorre la lista ordenada de steps (y las listas anidadas
//!   de los group steps, recursivamente) y firma cada command step en el
//!   lugar.
//! - `StepSigner` es la costura hacia el primitivo de firma externo; este
//!   módulo lo invoca una vez por command step y trata cualquier error como
//!   fatal para ese subárbol.
//! - `SigningKey` y `SignerOptions` se reenvían tal cual al primitivo.

mod options;
mod tree;

use pipesign_domain::Signature;

use crate::errors::BoxedError;
use crate::signable::SignedFielder;

pub use options::SignerOptions;
pub use tree::sign_steps;

/// Clave opaca para el primitivo de firma externo. La gestión de claves,
/// formatos y algoritmos vive con el primitivo; aquí sólo se transporta.
#[derive(Debug, Clone)]
pub struct SigningKey {
    pub id: String,
    pub material: Vec<u8>,
}

impl SigningKey {
    pub fn new(id: impl Into<String>, material: Vec<u8>) -> Self {
        Self { id: id.into(),
               material }
    }
}

/// Primitivo de firma externo.
///
/// Recibe la unidad firmable como `SignedFielder` y decide él mismo si pide
/// el mapa por defecto o un subconjunto nombrado. También es quien resuelve
/// los nombres con prefijo `env::` de una selección, incluido validar (o no)
/// el resto de esos nombres.
pub trait StepSigner {
    fn sign(&self,
            key: &SigningKey,
            unit: &dyn SignedFielder,
            opts: &SignerOptions)
            -> Result<Signature, BoxedError>;
}
