//! # Portico Core Errors
//!
//! [`Error`] wraps the typed error of each subsystem so the driver can
//! propagate any of them with `?` and report it verbatim.
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

use crate::config::ConfigError;
use crate::publishing::PublishingError;
use crate::registry::RegistryError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Publishing error: {0}")]
    Publishing(#[from] PublishingError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;
