//! Configuration module for autolink-rs
//!
//! Handles loading and managing configuration from YAML files and environment variables.

use crate::entity::formatter::OutputFormat;
use crate::error::{AutolinkError, Result};
use crate::matcher::UrlOptions;
use crate::utils::path;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub linker: LinkerConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub global: GlobalConfig,
}

/// Which matchers run and how anchors are rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkerConfig {
    #[serde(default)]
    pub urls: UrlOptions,

    #[serde(default = "default_true")]
    pub email: bool,

    #[serde(default = "default_true")]
    pub phone: bool,

    /// Mention service name (twitter, instagram, soundcloud, tiktok)
    #[serde(default)]
    pub mention: Option<String>,

    /// Hashtag service name (twitter, facebook, instagram, tiktok)
    #[serde(default)]
    pub hashtag: Option<String>,

    /// Drop `scheme://` and `www.` from displayed URLs
    #[serde(default = "default_true")]
    pub strip_prefix: bool,

    #[serde(default = "default_true")]
    pub strip_trailing_slash: bool,

    /// Open links in a new window
    #[serde(default = "default_true")]
    pub new_window: bool,

    /// Base CSS class for generated anchors; empty for none
    #[serde(default)]
    pub class_name: String,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Enable colored output
    #[serde(default = "default_true")]
    pub enable_colors: bool,
}

/// Global configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Verbose logging
    #[serde(default)]
    pub verbose: bool,

    /// Custom config path
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

impl Default for LinkerConfig {
    fn default() -> Self {
        Self {
            urls: UrlOptions::default(),
            email: true,
            phone: true,
            mention: None,
            hashtag: None,
            strip_prefix: true,
            strip_trailing_slash: true,
            new_window: true,
            class_name: String::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Html,
            enable_colors: true,
        }
    }
}

impl LinkerConfig {
    /// Reject class names that cannot sit inside a `class="..."` attribute
    pub fn validate_class_name(&self) -> Result<()> {
        let bad = self
            .class_name
            .chars()
            .find(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>' | '&'));
        match bad {
            Some(c) => Err(AutolinkError::config(format!(
                "class name {:?} contains invalid character {:?}",
                self.class_name, c
            ))),
            None => Ok(()),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default config file and environment variables
    pub fn load() -> Result<Self> {
        let config_dir = path::config_dir()?;
        path::ensure_dir(&config_dir)?;
        Self::load_from(&config_dir.join("config.yaml"))
    }

    /// Load configuration from `config_file`, writing defaults if it does not exist
    pub fn load_from(config_file: &Path) -> Result<Self> {
        let mut config = if config_file.exists() {
            log::debug!("loading config from {}", config_file.display());
            let content = fs::read_to_string(config_file)
                .map_err(|e| AutolinkError::config(format!("Failed to read config file: {}", e)))?;

            serde_yaml::from_str(&content)
                .map_err(|e| AutolinkError::YamlError(format!("Failed to parse config file: {}", e)))?
        } else {
            log::info!("writing default config to {}", config_file.display());
            let config = Self::default();
            config.save(config_file)?;
            config
        };

        config.global.config_path = Some(config_file.to_path_buf());

        // Override with environment variables
        config.apply_env();

        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Apply overrides from a variable lookup
    ///
    /// An empty `AUTOLINK_MENTION` or `AUTOLINK_HASHTAG` turns that matcher off.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("AUTOLINK_MENTION") {
            self.linker.mention = Some(val).filter(|v| !v.is_empty());
        }
        if let Some(val) = lookup("AUTOLINK_HASHTAG") {
            self.linker.hashtag = Some(val).filter(|v| !v.is_empty());
        }
        if let Some(val) = lookup("AUTOLINK_CLASS_NAME") {
            self.linker.class_name = val;
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AutolinkError::YamlError(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, yaml)
            .map_err(|e| AutolinkError::config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }
}
