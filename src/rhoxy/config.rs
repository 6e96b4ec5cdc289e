//! Configuration loader for the rhoxy parser.
//!
//! `defaults/rhoxy.default.toml` is embedded into the library so that docs and runtime
//! behavior stay in sync. Applications layer user-specific files on top of those defaults
//! via [`Loader`] before deserializing into [`RhoxyConfig`].

use crate::rhoxy::formats::Format;
use crate::rhoxy::parsing::ParseOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/rhoxy.default.toml");

/// Top-level configuration consumed by rhoxy applications.
#[derive(Debug, Clone, Deserialize)]
pub struct RhoxyConfig {
    pub syntax: SyntaxConfig,
    pub output: OutputConfig,
}

/// What the parser accepts.
#[derive(Debug, Clone, Deserialize)]
pub struct SyntaxConfig {
    pub terminal_line_comment_requires_newline: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: Format,
}

impl RhoxyConfig {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            terminal_line_comment_requires_newline: self
                .syntax
                .terminal_line_comment_requires_newline,
        }
    }

    pub fn output_format(&self) -> Format {
        self.output.format
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<RhoxyConfig, ConfigError> {
        let config: RhoxyConfig = self.builder.build()?.try_deserialize()?;
        tracing::debug!(
            format = %config.output.format,
            strict_line_comments = config.syntax.terminal_line_comment_requires_newline,
            "loaded rhoxy configuration"
        );
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<RhoxyConfig, ConfigError> {
    Loader::new().build()
}
