//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application
//! configuration in TOML format with platform-specific directory resolution.
//! Command-line flags always override configured values.

use crate::constants::{DEFAULT_PRECISION, DEFAULT_READING_WPM, DEFAULT_SPEAKING_WPM};
use crate::digest::Algorithm;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Output formatting preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Decimal places shown for conversion results (trailing zeros trimmed)
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

/// Text analysis preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextConfig {
    /// Silent-reading rate in words per minute
    #[serde(default = "default_reading_wpm")]
    pub reading_wpm: u32,
    /// Speaking rate in words per minute
    #[serde(default = "default_speaking_wpm")]
    pub speaking_wpm: u32,
}

fn default_reading_wpm() -> u32 {
    DEFAULT_READING_WPM
}

fn default_speaking_wpm() -> u32 {
    DEFAULT_SPEAKING_WPM
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            reading_wpm: default_reading_wpm(),
            speaking_wpm: default_speaking_wpm(),
        }
    }
}

/// Digest preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashConfig {
    /// Algorithm used when `--algorithm` is not given
    #[serde(default = "default_algorithm")]
    pub default_algorithm: Algorithm,
}

fn default_algorithm() -> Algorithm {
    Algorithm::Sha256
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            default_algorithm: default_algorithm(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/kitbox/config.toml`
/// - macOS: `~/Library/Application Support/kitbox/config.toml`
/// - Windows: `%APPDATA%\kitbox\config.toml`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Output formatting preferences
    #[serde(default)]
    pub output: OutputConfig,
    /// Text analysis preferences
    #[serde(default)]
    pub text: TextConfig,
    /// Digest preferences
    #[serde(default)]
    pub hash: HashConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("kitbox");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - reading and speaking rates are non-zero
    /// - precision stays within what `f64` can meaningfully display
    pub fn validate(&self) -> Result<()> {
        if self.text.reading_wpm == 0 {
            anyhow::bail!("text.reading_wpm must be greater than zero");
        }
        if self.text.speaking_wpm == 0 {
            anyhow::bail!("text.speaking_wpm must be greater than zero");
        }
        if self.output.precision > 17 {
            anyhow::bail!(
                "output.precision must be at most 17, got {}",
                self.output.precision
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.output.precision, DEFAULT_PRECISION);
        assert_eq!(config.text.reading_wpm, DEFAULT_READING_WPM);
        assert_eq!(config.text.speaking_wpm, DEFAULT_SPEAKING_WPM);
        assert_eq!(config.hash.default_algorithm, Algorithm::Sha256);
    }

    #[test]
    fn test_config_validate_defaults() {
        assert!(Config::new().validate().is_ok());
    }

    #[test]
    fn test_config_validate_zero_wpm() {
        let mut config = Config::new();
        config.text.reading_wpm = 0;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.text.speaking_wpm = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_excessive_precision() {
        let mut config = Config::new();
        config.output.precision = 40;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_roundtrip_through_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.output.precision = 3;
        config.hash.default_algorithm = Algorithm::Md5;

        let content = toml::to_string_pretty(&config).unwrap();
        fs::write(&config_file, content).unwrap();

        let content = fs::read_to_string(&config_file).unwrap();
        let loaded: Config = toml::from_str(&content).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_partial_file_fills_defaults() {
        let loaded: Config = toml::from_str("[output]\nprecision = 2\n").unwrap();
        assert_eq!(loaded.output.precision, 2);
        assert_eq!(loaded.text.reading_wpm, DEFAULT_READING_WPM);
        assert_eq!(loaded.hash.default_algorithm, Algorithm::Sha256);
    }
}
