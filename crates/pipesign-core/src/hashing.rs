//! Canonicalización JSON y hash de contenido de mapas de campos.
//!
//! La codificación canónica garantiza que dos mapas de campos iguales
//! produzcan exactamente los mismos bytes: claves en orden (el `FieldMap` es
//! un BTreeMap), objetos anidados reordenados por clave, strings escapados
//! como JSON. Los signers externos consumen esta codificación para que el
//! determinismo byte a byte se sostenga de punta a punta.

use std::collections::BTreeMap;

use blake3::Hasher;
use serde_json::Value;

use crate::signable::FieldMap;

/// Codifica un mapa de campos a su JSON canónico.
pub fn canonical_json(fields: &FieldMap) -> String {
    let items: Vec<String> = fields.iter()
                                   .map(|(key, value)| format!("{}:{}", encode_str(key), canonical_value(value)))
                                   .collect();
    format!("{{{}}}", items.join(","))
}

/// Hash de contenido (hex) del JSON canónico de un mapa de campos.
pub fn hash_fields(fields: &FieldMap) -> String {
    hash_str(&canonical_json(fields))
}

/// Hashea un string y devuelve hex.
pub fn hash_str(input: &str) -> String {
    let mut h = Hasher::new();
    h.update(input.as_bytes());
    h.finalize().to_hex().to_string()
}

fn canonical_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => encode_str(s),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(canonical_value).collect();
            format!("[{}]", items.join(","))
        }
        Value::Object(entries) => {
            let sorted: BTreeMap<&String, String> =
                entries.iter().map(|(k, v)| (k, canonical_value(v))).collect();
            let items: Vec<String> = sorted.into_iter()
                                           .map(|(k, v)| format!("{}:{}", encode_str(k), v))
                                           .collect();
            format!("{{{}}}", items.join(","))
        }
    }
}

fn encode_str(s: &str) -> String {
    serde_json::to_string(s).unwrap()
}
