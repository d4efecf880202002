//! Shared configuration loader for the blueprint toolchain.
//!
//! `defaults/blueprint.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Applications layer user-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`BlueprintConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/blueprint.default.toml");

/// Top-level configuration consumed by blueprint applications.
#[derive(Debug, Clone, Deserialize)]
pub struct BlueprintConfig {
    pub inspect: InspectConfig,
    pub diagnostics: DiagnosticsConfig,
}

/// Controls AST-related inspect output.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub ast: InspectAstConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InspectAstConfig {
    pub show_line_numbers: bool,
    pub include_metadata: bool,
}

/// Controls how diagnostics are printed.
#[derive(Debug, Clone, Deserialize)]
pub struct DiagnosticsConfig {
    pub show_kind: bool,
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

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<BlueprintConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<BlueprintConfig, ConfigError> {
    Loader::new().build()
}
