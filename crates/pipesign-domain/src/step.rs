//! Variante cerrada de step y su despacho de parseo.
//!
//! Rol en el flujo:
//! - El enum `Step` es cerrado a propósito: el match exhaustivo obliga a que
//!   todo consumidor (el tree signer incluido) maneje o rechace explícitamente
//!   cada forma nueva de step.
//! - El despacho mira las claves del objeto fuente: `command`/`commands` es
//!   command step, `group`/`steps` es group step, y cualquier otra forma cae
//!   al centinela `UnknownStep` conservando su JSON crudo.
//! - Una forma reconocida pero malformada (p. ej. `env` que no es mapa) sí es
//!   error de parseo; sólo lo no reconocido degrada al centinela.

use serde::de::{Deserializer, Error as DeError};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{CommandStep, GroupStep, UnknownStep};

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Command(CommandStep),
    Group(GroupStep),
    Unknown(UnknownStep),
}

impl Step {
    /// Despacho por forma sobre un valor JSON ya parseado.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        match &value {
            Value::Object(obj) if obj.contains_key("command") || obj.contains_key("commands") => {
                serde_json::from_value(value).map(Step::Command)
            }
            Value::Object(obj) if obj.contains_key("group") || obj.contains_key("steps") => {
                serde_json::from_value(value).map(Step::Group)
            }
            _ => Ok(Step::Unknown(UnknownStep::new(value))),
        }
    }
}

impl Serialize for Step {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        match self {
            Step::Command(step) => step.serialize(serializer),
            Step::Group(step) => step.serialize(serializer),
            Step::Unknown(step) => step.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Step {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: Deserializer<'de>
    {
        let value = Value::deserialize(deserializer)?;
        Step::from_value(value).map_err(D::Error::custom)
    }
}
