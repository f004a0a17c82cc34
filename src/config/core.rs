//! Generator configuration and its builder.
//!
//! Defaults reproduce the fixed artifact names (`classifier.h`,
//! `classifier.cc`) in the current working directory.

use crate::core::constants::*;
use crate::core::error::{Result, StumpgenError};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings for one generator run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory both artifacts are written to
    pub output_dir: PathBuf,
    /// Interface artifact file name
    pub header_file: String,
    /// Implementation artifact file name
    pub source_file: String,
    /// Include guard macro of the interface artifact
    pub include_guard: String,
    /// Header declaring the feature descriptors
    pub features_header: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            output_dir: PathBuf::from("."),
            header_file: DEFAULT_HEADER_FILE.to_string(),
            source_file: DEFAULT_SOURCE_FILE.to_string(),
            include_guard: DEFAULT_INCLUDE_GUARD.to_string(),
            features_header: DEFAULT_FEATURES_HEADER.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the interface artifact.
    pub fn header_path(&self) -> PathBuf {
        self.output_dir.join(&self.header_file)
    }

    /// Path of the implementation artifact.
    pub fn source_path(&self) -> PathBuf {
        self.output_dir.join(&self.source_file)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        validate_file_name("header_file", &self.header_file)?;
        validate_file_name("source_file", &self.source_file)?;
        validate_file_name("features_header", &self.features_header)?;

        if self.header_file == self.source_file {
            return Err(StumpgenError::invalid_parameter(
                "source_file",
                self.source_file.clone(),
                "must differ from header_file",
            ));
        }

        if !is_c_identifier(&self.include_guard) {
            return Err(StumpgenError::invalid_parameter(
                "include_guard",
                self.include_guard.clone(),
                "must be a C identifier",
            ));
        }

        Ok(())
    }

    /// Load configuration from a file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| StumpgenError::config(format!("Failed to read config file: {}", e)))?;

        let config: GeneratorConfig = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| StumpgenError::config(format!("Failed to parse JSON config: {}", e)))?,
            Some("toml") => toml::from_str(&content)
                .map_err(|e| StumpgenError::config(format!("Failed to parse TOML config: {}", e)))?,
            _ => {
                return Err(StumpgenError::config(
                    "Unsupported config file format. Use .json or .toml",
                ))
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::to_string_pretty(self)
                .map_err(|e| StumpgenError::config(format!("Failed to serialize to JSON: {}", e)))?,
            Some("toml") => toml::to_string_pretty(self)
                .map_err(|e| StumpgenError::config(format!("Failed to serialize to TOML: {}", e)))?,
            _ => {
                return Err(StumpgenError::config(
                    "Unsupported config file format. Use .json or .toml",
                ))
            }
        };

        std::fs::write(path, content)
            .map_err(|e| StumpgenError::config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }
}

fn validate_file_name(parameter: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(StumpgenError::invalid_parameter(parameter, value, "must not be empty"));
    }
    if value.contains('/') || value.contains('\\') {
        return Err(StumpgenError::invalid_parameter(
            parameter,
            value,
            "must be a file name, not a path",
        ));
    }
    Ok(())
}

fn is_c_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

/// Builder for [`GeneratorConfig`]
#[derive(Debug, Default)]
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: GeneratorConfig) -> Self {
        GeneratorConfigBuilder { config }
    }

    /// Set the output directory
    pub fn output_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    /// Set the interface artifact name
    pub fn header_file<S: Into<String>>(mut self, name: S) -> Self {
        self.config.header_file = name.into();
        self
    }

    /// Set the implementation artifact name
    pub fn source_file<S: Into<String>>(mut self, name: S) -> Self {
        self.config.source_file = name.into();
        self
    }

    /// Set the include guard macro
    pub fn include_guard<S: Into<String>>(mut self, guard: S) -> Self {
        self.config.include_guard = guard.into();
        self
    }

    /// Set the feature descriptor header
    pub fn features_header<S: Into<String>>(mut self, name: S) -> Self {
        self.config.features_header = name.into();
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> Result<GeneratorConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
