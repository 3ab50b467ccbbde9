//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::APP_DATA_DIR;
use crate::workspace::template::WORKSPACE_DIR;

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Template root directory containing `workspace/` and `deploy/`
    pub template_root: Option<PathBuf>,
}

/// Archive output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory where generated archives are written
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./output"),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/brandforge/config.toml`
/// - macOS: `~/Library/Application Support/brandforge/config.toml`
/// - Windows: `%APPDATA%\brandforge\config.toml`
///
/// # Validation
///
/// - `template_root` (if set) must exist and contain a `workspace/` directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Archive output settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            paths: PathConfig::default(),
            output: OutputConfig::default(),
        }
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Checks if a template root has been configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.paths.template_root.is_some()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/brandforge/`
    /// - macOS: `~/Library/Application Support/brandforge/`
    /// - Windows: `%APPDATA%\brandforge\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

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

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        // Serialize to TOML
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `template_root` exists (if set) and contains a `workspace/` directory
    pub fn validate(&self) -> Result<()> {
        if let Some(template_root) = &self.paths.template_root {
            if !template_root.exists() {
                anyhow::bail!("Template root does not exist: {}", template_root.display());
            }

            let workspace_dir = template_root.join(WORKSPACE_DIR);
            if !workspace_dir.is_dir() {
                anyhow::bail!(
                    "Template root is invalid: {}/ directory not found at {}",
                    WORKSPACE_DIR,
                    workspace_dir.display()
                );
            }
        }

        Ok(())
    }

    /// Sets the template root path with validation.
    pub fn set_template_root(&mut self, path: PathBuf) -> Result<()> {
        self.paths.template_root = Some(path);
        self.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
