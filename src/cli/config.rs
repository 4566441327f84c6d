// ABOUTME: Configuration management for wfcheck
// ABOUTME: Handles loading configuration from YAML files and environment overrides

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::parser::DEFAULT_RELEASE_TAG;

pub const DEFAULT_WORKFLOW_FILE: &str = ".github/workflows/ref1nd-release.yml";
pub const DEFAULT_TEST_WORKFLOW_FILE: &str = ".github/workflows/ref1nd-test.yml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File checked by `check` when no path is given
    pub workflow_file: PathBuf,

    /// Files checked by `validate` when no paths are given
    pub workflow_files: Vec<PathBuf>,

    pub release_tag: String,

    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workflow_file: PathBuf::from(DEFAULT_WORKFLOW_FILE),
            workflow_files: vec![
                PathBuf::from(DEFAULT_WORKFLOW_FILE),
                PathBuf::from(DEFAULT_TEST_WORKFLOW_FILE),
            ],
            release_tag: DEFAULT_RELEASE_TAG.to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file path or default locations
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let mut config = Self::load_file(path)?;
        config.merge_env();
        Ok(config)
    }

    /// Load configuration without environment overrides
    pub fn load_file(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => Some(p),
            None => Self::find_config_file(),
        };

        match config_path {
            Some(config_path) if config_path.exists() => {
                let contents = std::fs::read_to_string(&config_path).with_context(|| {
                    format!("Failed to read config file {}", config_path.display())
                })?;
                Self::from_yaml(&contents)
                    .with_context(|| format!("Invalid config file {}", config_path.display()))
            }
            _ => Ok(Config::default()),
        }
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let possible_paths = [
            PathBuf::from("wfcheck.yaml"),
            PathBuf::from("wfcheck.yml"),
            PathBuf::from(".wfcheck.yaml"),
            PathBuf::from(".wfcheck.yml"),
        ];

        if let Some(path) = possible_paths.into_iter().find(|p| p.exists()) {
            return Some(path);
        }

        dirs::home_dir()
            .map(|home| home.join(".wfcheck").join("config.yaml"))
            .filter(|p| p.exists())
    }

    /// Merge environment variables into configuration
    fn merge_env(&mut self) {
        if let Ok(level) = std::env::var("WFCHECK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("WFCHECK_LOG_FORMAT") {
            self.logging.format = format;
        }
        if let Ok(tag) = std::env::var("WFCHECK_RELEASE_TAG") {
            self.release_tag = tag;
        }
    }
}
