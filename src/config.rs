//! Mooring configuration.
//!
//! Loaded from `~/.mooring/config.toml`, or the file named by `MOORING_CONFIG`.
//! Every key is optional and a missing file means defaults.
//!
//! ```toml
//! juju-binary = "/snap/bin/juju"
//! model = "dev"
//! dialect = "juju2"
//!
//! [wait]
//! delay-secs = 0.5
//! timeout-secs = 600
//! successes = 3
//! apps = ["mysql", "wordpress"]
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::decode::Dialect;
use crate::predicates::Apps;
use crate::wait::WaitOptions;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "MOORING_CONFIG";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid config at {}: {message}", path.display())]
    Invalid { path: PathBuf, message: String },
}

/// Mooring configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
    /// The `juju` executable. Looked up on `PATH` when unset.
    pub juju_binary: Option<String>,

    /// Model to operate on. The current model when unset.
    pub model: Option<String>,

    /// Force a status dialect instead of detecting it per document.
    pub dialect: Option<Dialect>,

    pub wait: WaitConfig,

    #[serde(skip)]
    source: Option<PathBuf>,
}

/// The `[wait]` table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct WaitConfig {
    pub delay_secs: Option<f64>,
    pub timeout_secs: Option<f64>,
    pub successes: Option<u32>,

    /// Applications `mooring wait` checks when no `--app` is given.
    pub apps: Apps,
}

impl Config {
    /// Load config from `$MOORING_CONFIG` or `~/.mooring/config.toml`.
    ///
    /// Returns defaults if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific file, falling back to defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let mut config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.source = Some(path.to_path_buf());

        // Surface bad timings at load time rather than at the first wait.
        config.wait_options()?;

        Ok(config)
    }

    /// The config file path: `$MOORING_CONFIG`, else `~/.mooring/config.toml`.
    pub fn path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|h| h.join(".mooring").join("config.toml"))
    }

    /// Wait timings, with defaults for anything the file leaves out.
    pub fn wait_options(&self) -> Result<WaitOptions, ConfigError> {
        let defaults = WaitOptions::default();
        Ok(WaitOptions {
            delay: self.seconds("wait.delay-secs", self.wait.delay_secs)?.unwrap_or(defaults.delay),
            timeout: self
                .seconds("wait.timeout-secs", self.wait.timeout_secs)?
                .unwrap_or(defaults.timeout),
            successes: self.wait.successes.unwrap_or(defaults.successes),
        })
    }

    fn seconds(&self, key: &str, secs: Option<f64>) -> Result<Option<Duration>, ConfigError> {
        secs.map(|secs| {
            Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::Invalid {
                path: self.source.clone().unwrap_or_default(),
                message: format!("{key} must be a non-negative number of seconds, got {secs}"),
            })
        })
        .transpose()
    }
}
