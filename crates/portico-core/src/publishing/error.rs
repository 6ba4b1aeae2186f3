use thiserror::Error;

#[derive(Debug, Error)]
pub enum PublishingError {
    #[error("Invalid project version '{value}': {source}")]
    InvalidVersion {
        value: String,
        #[source]
        source: semver::Error,
    },

    #[error("Publishing field '{field}' must not be empty")]
    EmptyField { field: String },

    #[error("Repository declared more than once: {name}")]
    DuplicateRepository { name: String },

    #[error("Malformed property '{0}', expected key=value")]
    MalformedProperty(String),
}
