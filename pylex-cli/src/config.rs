//! Configuration module for the pylex CLI.
//!
//! Settings come from `pylex.toml`; command-line flags override them.

use dirs::{config_dir, home_dir};
use pylex_gen::{OutputFormat, DEFAULT_FUNCTION_NAME};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{PylexError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "pylex.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Generate-specific configuration.
    #[serde(default)]
    pub generate: GenerateConfig,
}

/// Options for `pylex generate` (and the table built by `pylex scan`).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GenerateConfig {
    /// Minimize the DFA before emitting it.
    #[serde(default = "default_true")]
    pub minimize: bool,

    /// Name of the generated C function.
    #[serde(default = "default_function_name")]
    pub function_name: String,

    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_true() -> bool {
    true
}

fn default_function_name() -> String {
    DEFAULT_FUNCTION_NAME.to_string()
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            minimize: true,
            function_name: default_function_name(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/pylex/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PylexError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            PylexError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("pylex").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("pylex").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
