//! # Portico Core
//!
//! Collects, validates and exposes plugin publication descriptors for an
//! external publishing pipeline.
//!
//! Configuration code registers one [`PluginDescriptor`] per publishable
//! plugin into a [`DescriptorRegistry`], then freezes it. The frozen registry
//! is the authoritative, read-only source handed to whatever packages and
//! uploads the plugins; that part lives outside this crate.
pub mod config;
pub mod constants;
pub mod descriptor;
pub mod error;
pub mod publishing;
pub mod registry;

pub use config::{BuildDefinition, ConfigFormat};
pub use descriptor::{DescriptorBuilder, DescriptorField, PluginDescriptor};
pub use error::{Error, Result};
pub use publishing::{ProjectCoordinates, PublishProperties, RemoteRepository};
pub use registry::{DescriptorRegistry, RegistryError, RegistryState, SharedRegistry};
