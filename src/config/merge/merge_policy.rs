//! Built-in defaults every merge starts from.

use crate::types::SHORT_ID_LEN;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Builder seeded with the default display and docker settings.
pub(super) fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("display.id_width", SHORT_ID_LEN as i64)?
        .set_default("display.no_trunc", false)?
        .set_default("display.always_indent", false)?
        .set_default("docker.binary", "docker")
}
