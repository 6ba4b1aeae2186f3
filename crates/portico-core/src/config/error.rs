use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error during operation '{operation}' on path '{path}': {source}")]
    Io {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization to '{format}' failed: {source}")]
    Serialization {
        format: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("Deserialization from '{format}' failed: {source}")]
    Deserialization {
        format: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl ConfigError {
    pub fn io(source: std::io::Error, operation: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        ConfigError::Io {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }
}
