//! Identifiers at binding sites and in patterns
//!
//! The two kinds carry different tags so a consumer can tell a name introduced by `new`
//! from a name bound by a receive pattern.

use serde::{Deserialize, Serialize};

/// A binding-site identifier declared by `new` (or `lookup`)
///
/// `uri` is set when the name is bound to an external resource, as in
/// ``new stdout(`rho:io:stdout`) in { .. }``. It is omitted from serialized trees when absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "tag", rename = "variable", rename_all = "camelCase")]
pub struct Variable {
    pub given_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl Variable {
    pub fn new(given_name: impl Into<String>) -> Self {
        Self {
            given_name: given_name.into(),
            uri: None,
        }
    }

    pub fn with_uri(given_name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            given_name: given_name.into(),
            uri: Some(uri.into()),
        }
    }
}

/// A pattern identifier bound by a receive action
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "tag", rename = "variableP", rename_all = "camelCase")]
pub struct VariableP {
    pub given_name: String,
}

impl VariableP {
    pub fn new(given_name: impl Into<String>) -> Self {
        Self {
            given_name: given_name.into(),
        }
    }
}
