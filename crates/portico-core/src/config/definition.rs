use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::config::format::ConfigFormat;
use crate::descriptor::PluginDescriptor;
use crate::error::Result;
use crate::publishing::{PluginBundle, PomMetadata, ProjectCoordinates, PublishingError, RemoteRepository};
use crate::registry::DescriptorRegistry;

/// `[project]` section of a build definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSection {
    pub group: String,
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A declarative build definition: everything the driver needs to populate
/// a registry and describe the publication
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildDefinition {
    pub project: ProjectSection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle: Option<PluginBundle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pom: Option<PomMetadata>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub repositories: Vec<RemoteRepository>,
    #[serde(default)]
    pub plugins: Vec<PluginDescriptor>,
}

impl BuildDefinition {
    /// Read a definition from disk; the format follows the file extension
    pub fn load(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.display().to_string()))?;
        let data = fs::read_to_string(path).map_err(|e| ConfigError::io(e, "read", path))?;
        let definition = Self::parse(&data, format)?;
        debug!(
            "Loaded build definition {} with {} plugin(s)",
            path.display(),
            definition.plugins.len()
        );
        Ok(definition)
    }

    /// Parse a definition from text
    pub fn parse(data: &str, format: ConfigFormat) -> Result<Self> {
        Ok(format.parse::<Self>(data)?)
    }

    /// Project coordinates with the version parsed
    pub fn coordinates(&self) -> Result<ProjectCoordinates> {
        let project = &self.project;
        Ok(ProjectCoordinates::parse(
            &project.group,
            &project.name,
            &project.version,
            project.description.as_deref(),
        )?)
    }

    /// Repositories need a name and url; names must be unique
    pub fn check_repositories(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for repository in &self.repositories {
            for (field, value) in [("repositories.name", &repository.name), ("repositories.url", &repository.url)] {
                if value.trim().is_empty() {
                    return Err(PublishingError::EmptyField { field: field.to_string() }.into());
                }
            }
            if !seen.insert(repository.name.as_str()) {
                return Err(PublishingError::DuplicateRepository {
                    name: repository.name.clone(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Register every plugin into `registry` in file order.
    ///
    /// Stops at the first failure; descriptors registered before it stay in
    /// the registry, the failing one and those after it are not applied.
    pub fn configure(&self, registry: &mut DescriptorRegistry) -> Result<()> {
        self.check_repositories()?;
        for plugin in &self.plugins {
            registry.register(plugin.clone())?;
        }
        info!(
            "Configured {} plugin descriptor(s) for {}",
            self.plugins.len(),
            self.project.name
        );
        Ok(())
    }
}
