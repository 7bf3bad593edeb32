//! Errors raised while loading `menav.toml`.

use std::path::PathBuf;
use thiserror::Error;

/// Why the import configuration could not be used
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid config file")]
    Toml(#[from] toml::de::Error),

    #[error("invalid config value: {0}")]
    Validation(String),
}
