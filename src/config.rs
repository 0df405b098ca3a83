use crate::domain::{Version, VersionBump};
use crate::error::{Result, VcmError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for git-vcm.
///
/// Contains the versioning baseline and behavior options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub versioning: VersioningConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Returns the default version of the first stream in an untagged repository.
fn default_initial_version() -> String {
    "0.1.0".to_string()
}

/// Configuration for how new version streams are chosen.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VersioningConfig {
    #[serde(default = "default_initial_version")]
    pub initial_version: String,

    #[serde(default)]
    pub bump: VersionBump,
}

impl VersioningConfig {
    /// Parsed initial version
    pub fn initial_version(&self) -> Result<Version> {
        Version::parse(&self.initial_version).map_err(|e| {
            VcmError::config(format!(
                "versioning.initial_version '{}' is not a valid X.Y.Z version: {}",
                self.initial_version, e
            ))
        })
    }
}

impl Default for VersioningConfig {
    fn default() -> Self {
        VersioningConfig {
            initial_version: default_initial_version(),
            bump: VersionBump::default(),
        }
    }
}

fn default_annotate() -> bool {
    true
}

/// Configuration for behavior customization.
///
/// Controls how tags are written without affecting version computation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    /// Write annotated tags for new rc/patch streams and production releases
    #[serde(default = "default_annotate")]
    pub annotate: bool,

    /// Ask for confirmation before creating a tag
    #[serde(default)]
    pub confirm: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            annotate: default_annotate(),
            confirm: false,
        }
    }
}

/// Parses configuration from TOML text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config = toml::from_str(config_str)
        .map_err(|e| VcmError::config(format!("Invalid configuration: {}", e)))?;
    // Surface a bad baseline at load time rather than on first use
    config.versioning.initial_version()?;
    Ok(config)
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `vcm.toml` in current directory
/// 3. `.vcm.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./vcm.toml").exists() {
        fs::read_to_string("./vcm.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".vcm.toml");
        if config_path.exists() {
            log::debug!("Loading configuration from {}", config_path.display());
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.versioning.initial_version, "0.1.0");
        assert_eq!(config.versioning.bump, VersionBump::Minor);
        assert!(config.behavior.annotate);
        assert!(!config.behavior.confirm);
    }

    #[test]
    fn test_parse_partial_sections() {
        let config = parse_config("[versioning]\nbump = \"major\"\n").unwrap();
        assert_eq!(config.versioning.bump, VersionBump::Major);
        assert_eq!(config.versioning.initial_version, "0.1.0");
        assert_eq!(config.behavior, BehaviorConfig::default());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_rejects_bad_initial_version() {
        let err = parse_config("[versioning]\ninitial_version = \"v1\"\n").unwrap_err();
        assert!(matches!(err, VcmError::Config(_)));
    }

    #[test]
    fn test_parse_rejects_unknown_bump() {
        let err = parse_config("[versioning]\nbump = \"huge\"\n").unwrap_err();
        assert!(matches!(err, VcmError::Config(_)));
    }
}
