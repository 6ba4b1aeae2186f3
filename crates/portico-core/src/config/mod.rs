//! # Build Definitions
//!
//! Declarative input read by the driver: project coordinates, publishing
//! metadata, repositories and the plugin descriptors to register. Files can be
//! JSON, YAML (`yaml-config` feature) or TOML (`toml-config` feature), picked
//! by extension.
pub mod definition;
pub mod error;
pub mod format;

pub use definition::{BuildDefinition, ProjectSection};
pub use error::ConfigError;
pub use format::ConfigFormat;

#[cfg(test)]
mod tests;
