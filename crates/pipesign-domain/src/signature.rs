//! Firma adjunta a un command step.
//!
//! El valor es opaco para este workspace: lo produce el primitivo de firma
//! externo y lo consume el verificador. Aquí sólo se transporta junto al
//! step, se sobreescribe al re-firmar y nunca se vuelve a leer.

use serde::{Deserialize, Serialize};

/// Firma de un command step.
///
/// `signed_fields` enumera (ordenados) los nombres de campo que entraron a la
/// firma, de modo que el verificador pueda reconstruir exactamente el mismo
/// mapa de valores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub algorithm: String,
    pub signed_fields: Vec<String>,
    pub value: String,
}
