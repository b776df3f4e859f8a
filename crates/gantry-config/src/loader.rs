//! Layered config loading: defaults, then file, then environment.

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use thiserror::Error;

use crate::schema::GantryConfig;

/// Errors from assembling the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),
}

/// Loads configuration from up to three layers, later layers winning:
/// struct defaults, a TOML file when `config_path` is given, and
/// `GANTRY_*` environment variables (`GANTRY_SERVICE_PORT` maps to
/// `service.port`). A missing file is tolerated; a malformed one is
/// not.
pub fn load_config(config_path: Option<&str>) -> Result<GantryConfig, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(GantryConfig::default()));
    if let Some(path) = config_path {
        figment = figment.merge(Toml::file(path));
    }
    figment = figment.merge(Env::prefixed("GANTRY_").split("_"));
    figment
        .extract()
        .map_err(|err| ConfigError::Load(err.to_string()))
}
