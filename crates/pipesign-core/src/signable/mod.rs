//! Selección determinista de campos a firmar.
//!
//! Este módulo define qué significa "los datos que se firman" para un
//! command step:
//! - `SignedFielder` es la vista que el primitivo de firma externo consume:
//!   o bien el mapa completo por defecto, o bien un subconjunto nombrado con
//!   chequeo estricto de completitud.
//! - `CommandStepWithInvariants` es la única implementación de este crate:
//!   un command step prestado junto a los invariantes del pipeline.
//!
//! Nada aquí muta un step ni conserva estado entre llamadas.

mod invariants;

use std::collections::BTreeMap;

use serde_json::Value;

use crate::errors::SigningError;

pub use invariants::CommandStepWithInvariants;

/// Mapa de campos a firmar. BTreeMap para que la iteración (y por lo tanto la
/// codificación canónica) sea determinista.
pub type FieldMap = BTreeMap<String, Value>;

/// Unidad firmable vista por el primitivo de firma externo.
pub trait SignedFielder {
    /// Mapa completo de campos por defecto, valores ya normalizados.
    fn signed_fields(&self) -> Result<FieldMap, SigningError>;

    /// Subconjunto correspondiente a `fields`, validado contra el conjunto
    /// obligatorio. Los nombres con prefijo `env::` se aceptan sin aportar
    /// valor: los resuelve el llamador, no este crate, y el resto del nombre
    /// no se valida aquí (contrato del primitivo externo).
    fn values_for_fields(&self, fields: &[String]) -> Result<FieldMap, SigningError>;
}
