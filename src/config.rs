use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ChangelogError, Result};
use crate::render::DEFAULT_TITLE;

/// Name of the configuration file looked up in the current directory
/// and in the user configuration directory.
pub const CONFIG_FILE_NAME: &str = ".changelog.toml";

/// Represents the complete configuration for the changelog tool.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub release: ReleaseConfig,

    #[serde(default)]
    pub html: HtmlConfig,
}

/// Clock used by `release date check`
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Timezone {
    /// Machine local time
    #[default]
    Local,
    /// Coordinated universal time
    Utc,
}

impl Timezone {
    /// Today's date as `YYYY-MM-DD`
    pub fn today(&self) -> String {
        match self {
            Timezone::Local => Local::now().format("%Y-%m-%d").to_string(),
            Timezone::Utc => Utc::now().format("%Y-%m-%d").to_string(),
        }
    }
}

/// Settings for release queries.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ReleaseConfig {
    #[serde(default)]
    pub timezone: Timezone,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

/// Settings for HTML rendering.
///
/// `stylesheets` apply only when `to html` is given no stylesheet argument.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct HtmlConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default)]
    pub stylesheets: Vec<String>,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        HtmlConfig {
            title: default_title(),
            stylesheets: Vec::new(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `.changelog.toml` in current directory
/// 3. `.changelog.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        Path::new(path).to_path_buf()
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        Path::new(CONFIG_FILE_NAME).to_path_buf()
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            config_path
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    tracing::debug!(path = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path).map_err(|e| {
        ChangelogError::config(format!("cannot read '{}': {}", path.display(), e))
    })?;
    parse_config(&config_str)
        .map_err(|e| ChangelogError::config(format!("'{}': {}", path.display(), e)))
}

/// Parses configuration text
pub fn parse_config(config_str: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(config_str)
}
