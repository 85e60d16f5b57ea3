use anyhow::{Context, Result, anyhow};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::analysis::{self, AnalysisConfig};

/// Application configuration module
/// This module handles the application configuration including discovery,
/// loading and validating configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// API key for the model provider
    #[serde(default)]
    pub api_key: String,

    /// Model name to use
    #[serde(default = "default_model")]
    pub model: String,

    /// Whether to include an extracted date in the title
    #[serde(default = "default_true")]
    pub include_date: bool,

    /// Date display format used in the prompt
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Word separator for the produced title
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_model() -> String {
    analysis::DEFAULT_MODEL.to_string()
}

fn default_date_format() -> String {
    analysis::DEFAULT_DATE_FORMAT.to_string()
}

fn default_separator() -> String {
    analysis::DEFAULT_SEPARATOR.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: String::new(),
            model: default_model(),
            include_date: default_true(),
            date_format: default_date_format(),
            separator: default_separator(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Discover and load the configuration.
    ///
    /// An explicit path is loaded directly and must exist. Otherwise the
    /// default locations are probed in order (`conf.json` in the working
    /// directory, then the per-user config directory); when none exists the
    /// built-in defaults are used without writing anything.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        for candidate in Self::default_locations() {
            if candidate.exists() {
                debug!("Loading config from {:?}", candidate);
                return Self::load(&candidate);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Default configuration file locations, probed in order
    pub fn default_locations() -> Vec<PathBuf> {
        let mut locations = vec![PathBuf::from("conf.json")];
        if let Some(config_dir) = dirs::config_dir() {
            locations.push(config_dir.join("entitle").join("conf.json"));
        }
        locations
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(anyhow!(
                "API key is required. Set via --api-key, env var ENTITLE_API_KEY, or config file."
            ));
        }

        if self.model.trim().is_empty() {
            return Err(anyhow!("Model name must not be empty"));
        }

        Ok(())
    }

    /// Build the analysis configuration for the pipeline
    pub fn to_analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig {
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            include_date: self.include_date,
            date_format: self.date_format.clone(),
            separator: self.separator.clone(),
        }
    }
}
