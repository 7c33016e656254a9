//! Constantes del núcleo de firmado.
//!
//! El conjunto de campos firmables es cerrado y conocido en compilación.
//! Cambiarlo es un cambio de protocolo entre signer y verificador: un
//! verificador que pida un campo que esta versión no conoce recibe
//! `UnsupportedField`, y uno que omita alguno de estos recibe
//! `MissingRequiredFields`.

pub const FIELD_COMMAND: &str = "command";
pub const FIELD_ENV: &str = "env";
pub const FIELD_PLUGINS: &str = "plugins";
pub const FIELD_MATRIX: &str = "matrix";
pub const FIELD_REPOSITORY_URL: &str = "repository_url";

/// Campos firmables de un command step, todos obligatorios en una selección.
pub const SIGNED_FIELDS: [&str; 5] = [FIELD_COMMAND, FIELD_ENV, FIELD_PLUGINS, FIELD_MATRIX, FIELD_REPOSITORY_URL];

/// Prefijo de los nombres de campo que el entorno del signer externo resuelve
/// por fuera del step. Se aceptan en una selección pero aquí no se poblan.
pub const ENV_NAMESPACE_PREFIX: &str = "env::";
