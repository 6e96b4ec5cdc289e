//! JSON serialization of process trees
//!
//! The shape is fixed by the serde attributes on the AST types; this module only picks the
//! layout. Deserialization accepts the same shape, so trees can be handed between processes.

use super::FormatError;
use crate::rhoxy::ast::Proc;

/// Serialize a process as compact JSON
pub fn to_json(proc: &Proc) -> Result<String, FormatError> {
    serde_json::to_string(proc).map_err(|e| FormatError::SerializationError(e.to_string()))
}

/// Serialize a process as indented JSON
pub fn to_json_pretty(proc: &Proc) -> Result<String, FormatError> {
    serde_json::to_string_pretty(proc).map_err(|e| FormatError::SerializationError(e.to_string()))
}

/// Read a process back from its JSON shape
pub fn from_json(json: &str) -> Result<Proc, FormatError> {
    serde_json::from_str(json).map_err(|e| FormatError::SerializationError(e.to_string()))
}
