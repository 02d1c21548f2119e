//! MergeService: orchestrates sources, applies merge policy, deserializes to ImgtreeConfig.

use crate::config::sources::{environment, global_file};
use crate::config::ImgtreeConfig;
use config::{ConfigError, File};
use std::path::Path;

use super::merge_policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Precedence: defaults (lowest) -> global file -> explicit file -> environment (highest).
    ///
    /// The global file is optional; an explicit file must exist.
    pub fn load(global: Option<&Path>, explicit: Option<&Path>) -> Result<ImgtreeConfig, ConfigError> {
        let mut builder = merge_policy::builder_with_defaults()?;
        if let Some(path) = global {
            builder = global_file::add_to_builder(builder, path)?;
        }
        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}
