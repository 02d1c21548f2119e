//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::paths::xdg_root;
use super::ImgtreeConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the global config (if present), `explicit` (if given) and environment.
    pub fn load(explicit: Option<&Path>) -> Result<ImgtreeConfig, ConfigError> {
        let global = xdg_root::global_config_path();
        MergeService::load(global.as_deref(), explicit)
    }
}
