//! Configuration management for stumpgen.
//!
//! Values are layered: built-in defaults, then an optional file named by
//! `STUMPGEN_CONFIG`, then individual `STUMPGEN_*` overrides.

pub mod core;

pub use self::core::{GeneratorConfig, GeneratorConfigBuilder};

use crate::core::constants::*;
use crate::core::error::Result;

/// Where a configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Built-in defaults
    Default,
    /// Configuration file
    File(String),
    /// Environment variables
    Environment,
}

/// Load configuration from the process environment.
pub fn load_from_environment() -> Result<(GeneratorConfig, ConfigSource)> {
    load_with(|key| std::env::var(key).ok())
}

/// Load configuration using `lookup` in place of the environment.
pub fn load_with<F>(lookup: F) -> Result<(GeneratorConfig, ConfigSource)>
where
    F: Fn(&str) -> Option<String>,
{
    let (mut config, mut source) = match lookup(ENV_CONFIG) {
        Some(path) => {
            log::debug!("loading configuration from {}", path);
            (GeneratorConfig::load_from_file(&path)?, ConfigSource::File(path))
        }
        None => (GeneratorConfig::default(), ConfigSource::Default),
    };

    let mut overridden = false;
    if let Some(dir) = lookup(ENV_OUTPUT_DIR) {
        config.output_dir = dir.into();
        overridden = true;
    }
    if let Some(name) = lookup(ENV_HEADER_FILE) {
        config.header_file = name;
        overridden = true;
    }
    if let Some(name) = lookup(ENV_SOURCE_FILE) {
        config.source_file = name;
        overridden = true;
    }
    if overridden && source == ConfigSource::Default {
        source = ConfigSource::Environment;
    }

    config.validate()?;
    Ok((config, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn lookup_in(vars: HashMap<&'static str, String>) -> impl Fn(&str) -> Option<String> {
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        let (config, source) = load_with(|_| None).unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(source, ConfigSource::Default);
    }

    #[test]
    fn test_overrides() {
        let vars = HashMap::from([
            (ENV_OUTPUT_DIR, "gen".to_string()),
            (ENV_SOURCE_FILE, "stump.cc".to_string()),
        ]);
        let (config, source) = load_with(lookup_in(vars)).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("gen"));
        assert_eq!(config.source_file, "stump.cc");
        assert_eq!(config.header_file, DEFAULT_HEADER_FILE);
        assert_eq!(source, ConfigSource::Environment);
    }

    #[test]
    fn test_file_then_override() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("stumpgen.toml");
        std::fs::write(&path, "header_file = \"stump.h\"\nsource_file = \"stump.cc\"\n").unwrap();

        let path_str = path.to_string_lossy().into_owned();
        let vars = HashMap::from([
            (ENV_CONFIG, path_str.clone()),
            (ENV_HEADER_FILE, "other.h".to_string()),
        ]);
        let (config, source) = load_with(lookup_in(vars)).unwrap();
        assert_eq!(config.header_file, "other.h");
        assert_eq!(config.source_file, "stump.cc");
        assert_eq!(source, ConfigSource::File(path_str));
    }

    #[test]
    fn test_invalid_override_rejected() {
        let vars = HashMap::from([(ENV_HEADER_FILE, "classifier.cc".to_string())]);
        assert!(load_with(lookup_in(vars)).is_err());
    }
}
