//! Run configuration via `seqcheck.toml`
//!
//! Every field is optional; command-line flags override file values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Conventional config file name
pub const CONFIG_FILE_NAME: &str = "seqcheck.toml";

/// Errors loading or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config file '{path}': {source}")]
    Read {
        /// File that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`SuiteConfig`]
    #[error("failed to parse config file '{path}': {message}")]
    Parse {
        /// File that was parsed
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// Unknown backend name
    #[error("invalid backend '{0}'. Expected \"vec\" or \"vec_deque\".")]
    InvalidBackend(String),
}

/// Standard container a run targets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// `Vec<i32>`
    #[default]
    Vec,
    /// `VecDeque<i32>`
    VecDeque,
}

impl Backend {
    /// Name as written in config files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Vec => "vec",
            Backend::VecDeque => "vec_deque",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vec" => Ok(Backend::Vec),
            "vec_deque" | "vec-deque" => Ok(Backend::VecDeque),
            other => Err(ConfigError::InvalidBackend(other.to_string())),
        }
    }
}

/// Suite configuration loaded from `seqcheck.toml`.
///
/// # Example
///
/// ```toml
/// seed = 42
/// filter = "reserve"
/// backend = "vec"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Process seed for filler values; derived from the clock when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Only run scenarios whose name contains this substring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Container to run against.
    #[serde(default)]
    pub backend: Backend,
}

/// On-disk form; `backend` is kept as a string so unknown names get a
/// precise error instead of a generic parse failure.
#[derive(Deserialize)]
struct RawConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    filter: Option<String>,
    #[serde(default)]
    backend: Option<String>,
}

impl SuiteConfig {
    /// True if the scenario `name` passes the filter
    pub fn selects(&self, name: &str) -> bool {
        match &self.filter {
            Some(pattern) => name.contains(pattern.as_str()),
            None => true,
        }
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# seqcheck configuration
#
# Seed for filler values. Omit to derive one from the clock;
# the seed in effect is printed with every run summary.
# seed = 42

# Only run scenarios whose name contains this substring.
# filter = "reserve"

# Container under test: "vec" (default) or "vec_deque"
backend = "vec"
"#
    }

    /// Parse config from TOML text.
    ///
    /// `origin` only labels error messages.
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;
        let backend = match raw.backend {
            Some(name) => name.parse()?,
            None => Backend::default(),
        };
        Ok(SuiteConfig {
            seed: raw.seed,
            filter: raw.filter,
            backend,
        })
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or names an
    /// unknown backend.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Load `CONFIG_FILE_NAME` from `dir` if present.
    ///
    /// Returns `Ok(None)` when the directory has no config file.
    ///
    /// # Errors
    ///
    /// Same as [`SuiteConfig::from_file`] when the file exists.
    pub fn discover(dir: &Path) -> Result<Option<Self>, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(None);
        }
        Self::from_file(&path).map(Some)
    }
}
