//! Command step y sus piezas (plugins, matrix).
//!
//! Un command step es la unidad firmable del pipeline:
//! - `command` es el texto de shell a ejecutar (la forma `commands: [...]`
//!   de la fuente se une con saltos de línea al parsear).
//! - `env` conserva el orden de la fuente (`IndexMap`); la firma ordena por
//!   nombre, no por posición.
//! - `plugins` y `matrix` son contenido opaco para la firma: se transportan
//!   tal cual vienen de la fuente.
//! - `signature` es el slot mutable que escribe el tree signer.

use indexmap::IndexMap;
use serde::de::{Deserializer, Error as DeError};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Signature;

/// Step que ejecuta un comando de shell.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CommandStep {
    pub command: String,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub env: IndexMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<Plugin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix: Option<Matrix>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<Signature>,
}

impl CommandStep {
    pub fn new(command: impl Into<String>) -> Self {
        Self { command: command.into(),
               ..Self::default() }
    }
}

// La fuente admite `command` o `commands`, y en ambos casos un string o una
// lista de strings (la lista se une con "\n"). Por eso el Deserialize es
// manual sobre una forma cruda.
impl<'de> Deserialize<'de> for CommandStep {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: Deserializer<'de>
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Commands {
            Single(String),
            Lines(Vec<String>),
        }

        impl Commands {
            fn join(self) -> String {
                match self {
                    Commands::Single(s) => s,
                    Commands::Lines(lines) => lines.join("\n"),
                }
            }
        }

        impl Default for Commands {
            fn default() -> Self {
                Commands::Single(String::new())
            }
        }

        #[derive(Deserialize)]
        struct Raw {
            #[serde(default, alias = "commands")]
            command: Commands,
            #[serde(default)]
            env: IndexMap<String, String>,
            #[serde(default)]
            plugins: Vec<Plugin>,
            #[serde(default)]
            matrix: Option<Matrix>,
            #[serde(default)]
            signature: Option<Signature>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(CommandStep { command: raw.command.join(),
                         env: raw.env,
                         plugins: raw.plugins,
                         matrix: raw.matrix,
                         signature: raw.signature })
    }
}

/// Referencia a un plugin del step.
///
/// Representación externa: objeto de una sola entrada `{source: config}`.
/// Un string suelto se acepta al parsear como plugin sin configuración.
#[derive(Debug, Clone, PartialEq)]
pub struct Plugin {
    pub source: String,
    pub config: Option<Value>,
}

impl Plugin {
    pub fn new(source: impl Into<String>, config: Option<Value>) -> Self {
        Self { source: source.into(),
               config }
    }
}

impl Serialize for Plugin {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.source, &self.config)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Plugin {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: Deserializer<'de>
    {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::String(source) => Ok(Plugin { source, config: None }),
            Value::Object(map) => {
                let mut entries = map.into_iter();
                match (entries.next(), entries.next()) {
                    (Some((source, config)), None) => {
                        let config = match config {
                            Value::Null => None,
                            other => Some(other),
                        };
                        Ok(Plugin { source, config })
                    }
                    _ => Err(D::Error::custom("plugin object must have a single entry")),
                }
            }
            other => Err(D::Error::custom(format!("plugin must be a string or a single-entry object, got {}",
                                                  type_name(&other)))),
        }
    }
}

/// Matriz de ejecución del step, opaca para la firma.
///
/// La firma la trata como contenido, no interpreta dimensiones ni ajustes.
/// Se considera vacía cuando el valor es null, lista vacía u objeto vacío.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix(pub Value);

impl Matrix {
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Array(items) => items.is_empty(),
            Value::Object(entries) => entries.is_empty(),
            _ => false,
        }
    }
}

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
