//! # Registry Errors
//!
//! [`RegistryError`] covers the three ways a registration can be refused.
//! None of them is transient: each one is a configuration bug the caller has
//! to fix, so nothing here is retried.
use thiserror::Error;

use crate::descriptor::DescriptorField;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Invalid plugin descriptor field '{field}' (value {value:?}): {reason}")]
    Validation {
        field: DescriptorField,
        value: String,
        reason: String,
    },

    #[error("Plugin descriptor already registered: {id}")]
    DuplicateId { id: String },

    #[error("Registry is frozen; cannot register plugin descriptor '{id}'")]
    Frozen { id: String },
}

impl RegistryError {
    /// The field a validation error points at, if this is one
    pub fn field(&self) -> Option<DescriptorField> {
        match self {
            RegistryError::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}
