//! Publication manifest handed to the external publishing tooling.
use serde::Serialize;

use portico_core::publishing::{PluginBundle, PomMetadata};
use portico_core::{BuildDefinition, DescriptorRegistry, PluginDescriptor, ProjectCoordinates};

#[derive(Debug, Serialize)]
pub struct PublicationManifest<'a> {
    pub snapshot: bool,
    pub project: ProjectCoordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle: Option<PluginBundle>,
    pub pom: PomMetadata,
    pub plugins: &'a [PluginDescriptor],
}

impl<'a> PublicationManifest<'a> {
    /// Assemble the manifest from a definition and its frozen registry
    pub fn new(
        definition: &'a BuildDefinition,
        project: ProjectCoordinates,
        registry: &'a DescriptorRegistry,
    ) -> Self {
        let bundle = definition.bundle.clone().map(PluginBundle::normalized);
        let pom = definition
            .pom
            .clone()
            .unwrap_or_default()
            .resolved(&project, bundle.as_ref());
        Self {
            snapshot: project.is_snapshot(),
            project,
            bundle,
            pom,
            plugins: registry.all(),
        }
    }
}
