//! Configuration loaded from TOML.
//!
//! ```toml
//! [shell]
//! program = "/bin/bash"
//! flag = "-c"
//!
//! [styles.error]
//! fg = "lightRed"
//! formats = ["bold"]
//! ```
//!
//! Every field is optional; an empty file yields [`Config::default`].

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::process::Interactive;
use crate::style::Style;

/// Shell used to interpret commands for the process runner.
const DEFAULT_SHELL: &str = "/bin/sh";
const DEFAULT_SHELL_FLAG: &str = "-c";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// How commands are handed to the host shell: `<program> <flag> <command>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub program: PathBuf,
    pub flag: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_SHELL),
            flag: DEFAULT_SHELL_FLAG.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub shell: ShellConfig,
    /// User-named styles, e.g. `error` or `heading`.
    pub styles: BTreeMap<String, Style>,
}

impl Config {
    /// Parse configuration from a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            styles = config.styles.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// The style registered under `name`.
    ///
    /// Unknown names give the plain default style, mirroring how unknown
    /// colour names are treated.
    pub fn style(&self, name: &str) -> Style {
        self.styles.get(name).cloned().unwrap_or_default()
    }

    /// A runner for `command` using the configured shell.
    pub fn interactive(&self, command: impl Into<String>) -> Interactive {
        Interactive::new(command).shell(self.shell.clone())
    }
}
