//! Ground terms: integer, string and boolean literals

use serde::{Deserialize, Serialize};
use std::fmt;

/// A literal value usable as data or as a channel name
///
/// Serializes adjacently tagged, so `Ground::Int(23)` becomes `{"type":"int","value":23}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Ground {
    Int(i64),
    String(String),
    Bool(bool),
}

impl Ground {
    /// Name of the ground type as it appears in serialized trees
    pub fn type_name(&self) -> &'static str {
        match self {
            Ground::Int(_) => "int",
            Ground::String(_) => "string",
            Ground::Bool(_) => "bool",
        }
    }
}

impl fmt::Display for Ground {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ground::Int(value) => write!(f, "{}", value),
            Ground::String(value) => write!(f, "\"{}\"", value),
            Ground::Bool(value) => write!(f, "{}", value),
        }
    }
}
