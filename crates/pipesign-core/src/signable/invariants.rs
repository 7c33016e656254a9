//! Command step + invariantes del pipeline = unidad firmable.

use indexmap::IndexMap;
use pipesign_domain::{CommandStep, Matrix, Plugin};
use serde_json::Value;

use super::{FieldMap, SignedFielder};
use crate::constants::{ENV_NAMESPACE_PREFIX, FIELD_COMMAND, FIELD_ENV, FIELD_MATRIX, FIELD_PLUGINS,
                       FIELD_REPOSITORY_URL, SIGNED_FIELDS};
use crate::errors::SigningError;
use crate::hashing::hash_fields;

/// Un `CommandStep` prestado junto a los invariantes del pipeline
/// (actualmente, la URL del repositorio del que se obtuvo la definición).
///
/// Es efímero: se construye por step durante el recorrido del árbol, sólo
/// lee, y los invariantes llegan idénticos a cada step anidado. El slot de
/// firma del step no es un campo firmable y no participa en ninguna vista.
pub struct CommandStepWithInvariants<'a> {
    step: &'a CommandStep,
    repository_url: &'a str,
}

impl<'a> CommandStepWithInvariants<'a> {
    pub fn new(step: &'a CommandStep, repository_url: &'a str) -> Self {
        Self { step, repository_url }
    }

    /// Identidad estable del contenido que se firmaría: hash del JSON
    /// canónico del mapa de campos por defecto. Independiente de cualquier
    /// firma ya presente en el step.
    pub fn fingerprint(&self) -> Result<String, SigningError> {
        Ok(hash_fields(&self.signed_fields()?))
    }

    fn field_value(&self, field: &str) -> Result<Value, SigningError> {
        match field {
            FIELD_COMMAND => Ok(Value::String(self.step.command.clone())),
            FIELD_ENV => empty_to_null_map(&self.step.env),
            FIELD_PLUGINS => empty_to_null_plugins(&self.step.plugins),
            FIELD_MATRIX => empty_to_null_matrix(self.step.matrix.as_ref()),
            FIELD_REPOSITORY_URL => Ok(Value::String(self.repository_url.to_string())),
            other => Err(SigningError::UnsupportedField(other.to_string())),
        }
    }
}

impl SignedFielder for CommandStepWithInvariants<'_> {
    fn signed_fields(&self) -> Result<FieldMap, SigningError> {
        let mut out = FieldMap::new();
        for field in SIGNED_FIELDS {
            out.insert(field.to_string(), self.field_value(field)?);
        }
        Ok(out)
    }

    fn values_for_fields(&self, fields: &[String]) -> Result<FieldMap, SigningError> {
        // Marcado de obligatorios sobre el arreglo fijo de campos conocidos.
        let mut satisfied = [false; SIGNED_FIELDS.len()];

        // El orden de `fields` no significa nada y los duplicados se toleran:
        // última escritura por nombre gana.
        let mut out = FieldMap::new();
        for field in fields {
            if let Some(idx) = SIGNED_FIELDS.iter().position(|known| *known == field.as_str()) {
                satisfied[idx] = true;
                out.insert(field.clone(), self.field_value(field)?);
                continue;
            }
            // Los valores env:: vienen de fuera del step; los resuelve el signer.
            if field.starts_with(ENV_NAMESPACE_PREFIX) {
                continue;
            }
            return Err(SigningError::UnsupportedField(field.clone()));
        }

        let missing: Vec<String> = SIGNED_FIELDS.iter()
                                                .zip(satisfied)
                                                .filter(|(_, ok)| !*ok)
                                                .map(|(field, _)| (*field).to_string())
                                                .collect();
        if !missing.is_empty() {
            return Err(SigningError::MissingRequiredFields(missing));
        }
        Ok(out)
    }
}

// Normalización: vacío o ausente se representa como null explícito, nunca
// como estructura presente pero vacía. "Lista vacía" y "campo ausente" deben
// codificar distinto de cara al primitivo de firma.
fn empty_to_null_map(env: &IndexMap<String, String>) -> Result<Value, SigningError> {
    if env.is_empty() {
        return Ok(Value::Null);
    }
    serde_json::to_value(env).map_err(|e| SigningError::FieldEncode { field: FIELD_ENV, source: e })
}

fn empty_to_null_plugins(plugins: &[Plugin]) -> Result<Value, SigningError> {
    if plugins.is_empty() {
        return Ok(Value::Null);
    }
    serde_json::to_value(plugins).map_err(|e| SigningError::FieldEncode { field: FIELD_PLUGINS, source: e })
}

fn empty_to_null_matrix(matrix: Option<&Matrix>) -> Result<Value, SigningError> {
    match matrix {
        None => Ok(Value::Null),
        Some(m) if m.is_empty() => Ok(Value::Null),
        Some(m) => Ok(m.0.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipesign_domain::Signature;
    use serde_json::json;

    fn bare_step() -> CommandStep {
        CommandStep::new("echo hi")
    }

    #[test]
    fn default_fields_represent_empty_as_explicit_null() {
        let step = bare_step();
        let unit = CommandStepWithInvariants::new(&step, "https://example.com/repo.git");
        let fields = unit.signed_fields().unwrap();

        let expected: FieldMap = [("command".to_string(), json!("echo hi")),
                                  ("env".to_string(), Value::Null),
                                  ("plugins".to_string(), Value::Null),
                                  ("matrix".to_string(), Value::Null),
                                  ("repository_url".to_string(), json!("https://example.com/repo.git"))].into();
        assert_eq!(fields, expected);
    }

    #[test]
    fn default_fields_keep_populated_values() {
        let mut step = bare_step();
        step.env.insert("FOO".into(), "bar".into());
        step.plugins.push(Plugin::new("docker#v5.0.0", Some(json!({"image": "alpine"}))));
        step.matrix = Some(Matrix(json!(["linux", "macos"])));

        let unit = CommandStepWithInvariants::new(&step, "https://example.com/repo.git");
        let fields = unit.signed_fields().unwrap();
        assert_eq!(fields["env"], json!({"FOO": "bar"}));
        assert_eq!(fields["plugins"], json!([{"docker#v5.0.0": {"image": "alpine"}}]));
        assert_eq!(fields["matrix"], json!(["linux", "macos"]));
    }

    #[test]
    fn empty_but_present_matrix_normalizes_to_null() {
        let mut step = bare_step();
        step.matrix = Some(Matrix(json!({})));
        let unit = CommandStepWithInvariants::new(&step, "r");
        assert_eq!(unit.signed_fields().unwrap()["matrix"], Value::Null);
    }

    #[test]
    fn fingerprint_ignores_signature_slot() {
        let mut step = bare_step();
        let before = CommandStepWithInvariants::new(&step, "r").fingerprint().unwrap();
        step.signature = Some(Signature { algorithm: "EdDSA".into(),
                                          signed_fields: vec!["command".into()],
                                          value: "sig".into() });
        let after = CommandStepWithInvariants::new(&step, "r").fingerprint().unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn fingerprint_depends_on_repository_url() {
        let step = bare_step();
        let a = CommandStepWithInvariants::new(&step, "https://a").fingerprint().unwrap();
        let b = CommandStepWithInvariants::new(&step, "https://b").fingerprint().unwrap();
        assert_ne!(a, b);
    }
}
