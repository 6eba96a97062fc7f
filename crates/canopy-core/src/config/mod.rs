//! Configuration management for Canopy.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `canopy.toml` file
//! 3. User config `~/.config/canopy/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tree behavior configuration.
    pub tree: TreeConfig,

    /// Icon theme handed to the rendering adapter.
    pub icons: IconTheme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tree: TreeConfig::default(),
            icons: IconTheme::default(),
        }
    }
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./canopy.toml` (project local)
    /// 2. `~/.config/canopy/config.toml` (user config)
    /// 3. Falls back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        // Try project-local config first
        if Path::new("canopy.toml").exists() {
            return Self::from_file("canopy.toml");
        }

        // Try user config
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("canopy").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        // Use defaults
        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        // Apply environment variable overrides
        config.apply_env_overrides();

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(label) = std::env::var("CANOPY_PLACEHOLDER_LABEL") {
            self.tree.placeholder_label = label;
        }
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Tree behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Label of the synthetic node surfaced while discovery runs.
    pub placeholder_label: String,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            placeholder_label: DEFAULT_PLACEHOLDER_LABEL.to_string(),
        }
    }
}

/// Icon file names handed to the rendering adapter.
///
/// The core never interprets these; the adapter resolves them against its
/// own resource directories.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IconTheme {
    /// Test that has not run yet.
    pub pending: String,

    /// Execution in flight.
    pub spinner: String,

    /// Passed test.
    pub passed: String,

    /// Failed test.
    pub failed: String,

    /// Test that errored before completing.
    pub errored: String,

    /// Suite grouping tests.
    pub suite: String,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self {
            pending: DEFAULT_ICON_PENDING.to_string(),
            spinner: DEFAULT_ICON_SPINNER.to_string(),
            passed: DEFAULT_ICON_PASSED.to_string(),
            failed: DEFAULT_ICON_FAILED.to_string(),
            errored: DEFAULT_ICON_ERRORED.to_string(),
            suite: DEFAULT_ICON_SUITE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.tree.placeholder_label, DEFAULT_PLACEHOLDER_LABEL);
        assert_eq!(config.icons.passed, DEFAULT_ICON_PASSED);
        assert_eq!(config.icons.spinner, DEFAULT_ICON_SPINNER);
    }

    #[test]
    fn test_config_to_toml() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[tree]"));
        assert!(toml_str.contains("[icons]"));
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
[tree]
placeholder_label = "Scanning tests..."

[icons]
passed = "check.svg"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.tree.placeholder_label, "Scanning tests...");
        assert_eq!(config.icons.passed, "check.svg");
        // Unspecified fields keep their defaults
        assert_eq!(config.icons.failed, DEFAULT_ICON_FAILED);
    }
}
