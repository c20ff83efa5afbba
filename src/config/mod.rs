//! Configuration file support for retrocanvas.
//!
//! This module handles loading display settings from the configuration file
//! located at `~/.config/retrocanvas/config.toml`. The only setting today is
//! the display aspect ratio, which the canvas reads once at construction to
//! derive its widescreen flag.
//!
//! If no config file exists, sensible defaults are used automatically.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Display aspect ratio reported by the platform configuration.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum AspectRatio {
    /// Standard 4:3 output.
    #[default]
    #[serde(rename = "4-3")]
    Standard,
    /// Widescreen 16:9 output.
    #[serde(rename = "16-9")]
    Widescreen,
}

/// Display properties section.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default)]
pub struct DisplayConfig {
    /// Aspect ratio of the attached display.
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
}

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have defaults and will use those if not specified.
///
/// # Example TOML
/// ```toml
/// [display]
/// aspect_ratio = "16-9"
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default)]
pub struct Config {
    /// Display properties (aspect ratio)
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/retrocanvas/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("retrocanvas");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to file.
    ///
    /// Serializes the config to TOML format and writes it to
    /// `~/.config/retrocanvas/config.toml`, creating the parent directory if
    /// it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_is_standard_aspect() {
        let config = Config::default();
        assert_eq!(config.display.aspect_ratio, AspectRatio::Standard);
    }

    #[test]
    fn parses_widescreen_aspect() {
        let config: Config = toml::from_str("[display]\naspect_ratio = \"16-9\"").unwrap();
        assert_eq!(config.display.aspect_ratio, AspectRatio::Widescreen);
    }

    #[test]
    fn missing_display_section_falls_back_to_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.display.aspect_ratio, AspectRatio::Standard);
    }

    #[test]
    fn round_trips_through_toml() {
        let config = Config {
            display: DisplayConfig {
                aspect_ratio: AspectRatio::Widescreen,
            },
        };
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.display.aspect_ratio, AspectRatio::Widescreen);
    }

    #[test]
    fn load_from_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display]\naspect_ratio = \"16-9\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.display.aspect_ratio, AspectRatio::Widescreen);
    }

    #[test]
    fn load_from_rejects_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "display = not toml").unwrap();

        assert!(Config::load_from(file.path()).is_err());
    }
}
