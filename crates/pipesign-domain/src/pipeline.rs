//! Pipeline: lista ordenada de steps parseada desde su fuente JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::command::type_name;
use crate::{DomainError, Step};

/// Definición de pipeline. El orden de `steps` es el orden de la fuente y el
/// tree signer lo recorre tal cual.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Pipeline {
    /// Parsea una fuente JSON. La raíz puede ser el objeto `{steps: [...]}` o
    /// directamente la lista de steps.
    pub fn from_json(src: &str) -> Result<Self, DomainError> {
        let value: Value = serde_json::from_str(src)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, DomainError> {
        match value {
            Value::Array(_) => {
                let steps = serde_json::from_value(value)?;
                Ok(Self { steps })
            }
            Value::Object(mut obj) => {
                let steps = obj.remove("steps")
                               .ok_or_else(|| DomainError::Shape("pipeline object without steps".into()))?;
                if !steps.is_array() {
                    return Err(DomainError::Shape(format!("steps must be a list, got {}", type_name(&steps))));
                }
                let steps = serde_json::from_value(steps)?;
                Ok(Self { steps })
            }
            other => Err(DomainError::Shape(format!("expected object or list at pipeline root, got {}",
                                                    type_name(&other)))),
        }
    }

    pub fn to_json(&self) -> Result<String, DomainError> {
        Ok(serde_json::to_string(self)?)
    }
}
