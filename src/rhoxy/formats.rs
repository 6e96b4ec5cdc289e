//! Output formats for process trees
//!
//! This module contains different format implementations for serializing a [Proc]:
//! - `json`: the tagged object shape consumed by evaluators (compact and pretty)
//! - `tag`: XML-like dump that mirrors the node structure
//! - `treeviz`: one line per node, drawn with box connectors
//! - `source`: canonical rho source text that parses back to the same tree
//!
//! [Format] is the registry: every format is one variant, addressable by name.

pub mod json;
pub mod source;
pub mod tag;
pub mod treeviz;

pub use json::{from_json, to_json, to_json_pretty};
pub use source::to_source;
pub use tag::serialize_proc as serialize_ast_tag;
pub use treeviz::to_treeviz_str;

use crate::rhoxy::ast::Proc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Format name not known to the registry
    FormatNotFound(String),
    /// Error during serialization or deserialization
    SerializationError(String),
    /// The tree has no surface syntax in rho source
    Unprintable(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            FormatError::Unprintable(msg) => write!(f, "Cannot print as source: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Every available output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    #[default]
    Json,
    JsonPretty,
    Tag,
    Treeviz,
    Source,
}

impl Format {
    const ALL: [Format; 5] = [
        Format::Json,
        Format::JsonPretty,
        Format::Tag,
        Format::Treeviz,
        Format::Source,
    ];

    /// All formats, in registry order
    pub fn available() -> &'static [Format] {
        &Self::ALL
    }

    pub fn name(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::JsonPretty => "json-pretty",
            Format::Tag => "tag",
            Format::Treeviz => "treeviz",
            Format::Source => "source",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Format::Json => "Tagged JSON tree on one line",
            Format::JsonPretty => "Tagged JSON tree, indented",
            Format::Tag => "XML-like tag dump of every node",
            Format::Treeviz => "Box-drawing tree, one node per line",
            Format::Source => "Canonical rho source text",
        }
    }

    /// Serialize a process in this format
    pub fn render(self, proc: &Proc) -> Result<String, FormatError> {
        match self {
            Format::Json => to_json(proc),
            Format::JsonPretty => to_json_pretty(proc),
            Format::Tag => Ok(serialize_ast_tag(proc)),
            Format::Treeviz => Ok(to_treeviz_str(proc)),
            Format::Source => to_source(proc),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name() == name)
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }
}
