//! # Publishing Metadata
//!
//! Project-wide publication settings that travel alongside the descriptor
//! registry: project coordinates and their snapshot/release state, the
//! plugin-portal bundle, POM metadata, and the remote repositories a
//! publication may be sent to.
//!
//! Nothing here uploads or signs anything; these types only decide *what*
//! the external publishing pipeline should do.
pub mod error;
pub mod metadata;
pub mod project;
pub mod repository;

pub use error::PublishingError;
pub use metadata::{
    CiManagement, Developer, IssueManagement, License, Organization, PluginBundle, PomMetadata,
    Scm,
};
pub use project::ProjectCoordinates;
pub use repository::{publish_targets, signing_required, PublishProperties, RemoteRepository};

#[cfg(test)]
mod tests;
