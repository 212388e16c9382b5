//! Shared configuration loader for the codesim tools.
//!
//! `defaults/codesim.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`CodesimConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/codesim.default.toml");

/// Top-level configuration consumed by codesim applications.
#[derive(Debug, Clone, Deserialize)]
pub struct CodesimConfig {
    pub display: DisplayConfig,
    pub report: ReportConfig,
    pub logging: LoggingConfig,
}

/// Controls how the diff table is rendered.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    pub color: bool,
    pub label_width: usize,
    pub show_gaps: bool,
}

/// Thresholds used when classifying a comparison.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub near_duplicate_threshold: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
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

    /// Apply a single key/value override (used for CLI flags such as `--no-color`).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<CodesimConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<CodesimConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert!(config.display.color);
        assert_eq!(config.display.label_width, 40);
        assert!(config.display.show_gaps);
        assert!((config.report.near_duplicate_threshold - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("display.color", false)
            .expect("override to apply")
            .set_override("display.label_width", 24i64)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert!(!config.display.color);
        assert_eq!(config.display.label_width, 24);
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/codesim.toml")
            .build()
            .expect("optional file to be skipped");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn missing_required_file_fails() {
        let result = Loader::new()
            .with_file("/nonexistent/codesim.toml")
            .build();
        assert!(result.is_err());
    }
}
