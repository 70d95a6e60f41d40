//! Fill options and their TOML configuration files.

use crate::engine::scanner::{DEFAULT_END, DEFAULT_START};
use crate::error::Result;
use crate::types::SubstituteOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-project configuration file.
pub const PROJECT_CONFIG_FILE: &str = "jsonfill.toml";

/// Default data file name.
pub const DEFAULT_JSON_FILE: &str = "results.json";

/// Resolved options for a fill run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Data file name, looked up in the project directory.
    pub json_file: String,
    pub start_delimiter: String,
    pub end_delimiter: String,
    pub error_on_missing: bool,
    /// Emit debug logs to stderr.
    pub debug_log: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            json_file: DEFAULT_JSON_FILE.to_string(),
            start_delimiter: DEFAULT_START.to_string(),
            end_delimiter: DEFAULT_END.to_string(),
            error_on_missing: false,
            debug_log: false,
        }
    }
}

/// One configuration layer. Unset fields leave earlier layers untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConfigLayer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_delim: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_delim: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_on_missing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_log: Option<bool>,
}

impl ConfigLayer {
    /// Parse a layer from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read a layer from a file. A missing file is an empty layer.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        tracing::debug!(path = %path.display(), "reading config");
        Self::from_toml(&fs::read_to_string(path)?)
    }
}

impl Config {
    /// Path of the user-level config file, if the platform has a config dir.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("jsonfill").join("config.toml"))
    }

    /// Load defaults, then the user config, then `<project>/jsonfill.toml`.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let mut config = Self::default();
        if let Some(path) = Self::user_config_path() {
            config.apply(ConfigLayer::from_file(&path)?);
        }
        config.apply(ConfigLayer::from_file(&project_dir.join(PROJECT_CONFIG_FILE))?);
        Ok(config)
    }

    /// Overlay the set fields of `layer`.
    pub fn apply(&mut self, layer: ConfigLayer) {
        if let Some(v) = layer.json_file {
            self.json_file = v;
        }
        if let Some(v) = layer.start_delim {
            self.start_delimiter = v;
        }
        if let Some(v) = layer.end_delim {
            self.end_delimiter = v;
        }
        if let Some(v) = layer.error_on_missing {
            self.error_on_missing = v;
        }
        if let Some(v) = layer.debug_log {
            self.debug_log = v;
        }
    }

    pub fn substitute_options(&self) -> SubstituteOptions {
        SubstituteOptions {
            error_on_missing: self.error_on_missing,
        }
    }
}
