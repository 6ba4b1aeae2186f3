//! # Descriptor Registry
//!
//! The registry is the single authority holding every plugin descriptor for
//! one configuration pass.
//!
//! - **[`descriptor_registry`]**: [`DescriptorRegistry`], the owned registry
//!   with its one-way `Open -> Frozen` lifecycle.
//! - **[`shared`]**: [`SharedRegistry`], a cloneable handle for configuration
//!   code running on several threads.
//! - **[`error`]**: [`RegistryError`], returned by every failed registration.
pub mod descriptor_registry;
pub mod error;
pub mod shared;

pub use descriptor_registry::{DescriptorRegistry, RegistryState};
pub use error::RegistryError;
pub use shared::SharedRegistry;
