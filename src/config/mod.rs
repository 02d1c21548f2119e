//! Configuration
//!
//! Layered configuration built with the `config` crate: built-in defaults, the
//! global `config.toml`, an explicit `--config` file, then `IMGTREE_*`
//! environment variables. Command-line flags are applied on top by the CLI.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;

use crate::logging::LoggingConfig;
use crate::types::SHORT_ID_LEN;
use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImgtreeConfig {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub docker: DockerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_id_width() -> usize {
    SHORT_ID_LEN
}

/// Tree display defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Characters of untagged ids shown when truncating
    #[serde(default = "default_id_width")]
    pub id_width: usize,

    /// Never truncate ids
    #[serde(default)]
    pub no_trunc: bool,

    /// Use the indented forest view even for a single target
    #[serde(default)]
    pub always_indent: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            id_width: default_id_width(),
            no_trunc: false,
            always_indent: false,
        }
    }
}

fn default_docker_binary() -> String {
    "docker".to_string()
}

/// Docker CLI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DockerConfig {
    /// Docker executable name or path
    #[serde(default = "default_docker_binary")]
    pub binary: String,
}

impl Default for DockerConfig {
    fn default() -> Self {
        Self {
            binary: default_docker_binary(),
        }
    }
}
