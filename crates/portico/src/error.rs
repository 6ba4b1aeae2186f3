use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] portico_core::Error),

    #[error("No plugin descriptor registered with id '{0}'")]
    UnknownPlugin(String),

    #[error("Unsupported manifest format: {0}")]
    UnknownFormat(String),

    #[error("Failed to write manifest to '{path}': {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CliError>;
