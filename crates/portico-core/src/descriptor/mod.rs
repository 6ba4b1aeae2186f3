//! # Plugin Descriptors
//!
//! A [`PluginDescriptor`] describes one publishable plugin unit: its
//! identity, the entry point it publishes, human-readable metadata and
//! portal tags. Descriptors are plain data; the [`validation`] submodule holds
//! the field rules enforced when a descriptor is registered.
pub mod validation;

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::registry::RegistryError;

/// Describes a single plugin to be published
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginDescriptor {
    /// Unique plugin identifier (`indra.checkstyle`)
    pub id: String,

    /// Fully-qualified entry point; opaque to the registry
    #[serde(alias = "implementation")]
    pub implementation_ref: String,

    /// Human-readable name
    pub display_name: String,

    /// Human-readable description
    pub description: String,

    /// Portal tags, duplicates removed in first-seen order
    #[serde(default)]
    pub tags: Vec<String>,
}

impl PluginDescriptor {
    /// Create a new descriptor. Tags are deduplicated, nothing else is checked.
    pub fn new<I, T>(
        id: &str,
        implementation_ref: &str,
        display_name: &str,
        description: &str,
        tags: I,
    ) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            id: id.to_string(),
            implementation_ref: implementation_ref.to_string(),
            display_name: display_name.to_string(),
            description: description.to_string(),
            tags: dedup_tags(tags.into_iter().map(Into::into)),
        }
    }

    /// Whether the descriptor carries `tag`
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Check every field, reporting the first one that is invalid
    pub fn validate(&self) -> Result<(), RegistryError> {
        validation::validate_descriptor(self)
    }
}

impl fmt::Display for PluginDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) -> {}", self.id, self.display_name, self.implementation_ref)
    }
}

/// Names a descriptor field, used to point validation errors at it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptorField {
    Id,
    ImplementationRef,
    DisplayName,
    Description,
    Tags,
}

impl DescriptorField {
    /// Field name as it appears in build definitions and manifests
    pub fn as_str(&self) -> &'static str {
        match self {
            DescriptorField::Id => "id",
            DescriptorField::ImplementationRef => "implementationRef",
            DescriptorField::DisplayName => "displayName",
            DescriptorField::Description => "description",
            DescriptorField::Tags => "tags",
        }
    }
}

impl fmt::Display for DescriptorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builder for creating a plugin descriptor
#[derive(Debug, Clone)]
pub struct DescriptorBuilder {
    descriptor: PluginDescriptor,
}

impl DescriptorBuilder {
    /// Start a descriptor for `id` published from `implementation_ref`
    pub fn new(id: &str, implementation_ref: &str) -> Self {
        Self {
            descriptor: PluginDescriptor {
                id: id.to_string(),
                implementation_ref: implementation_ref.to_string(),
                display_name: String::new(),
                description: String::new(),
                tags: Vec::new(),
            },
        }
    }

    /// Set the display name
    pub fn display_name(mut self, display_name: &str) -> Self {
        self.descriptor.display_name = display_name.to_string();
        self
    }

    /// Set the description
    pub fn description(mut self, description: &str) -> Self {
        self.descriptor.description = description.to_string();
        self
    }

    /// Add a tag, ignored if already present
    pub fn tag(mut self, tag: &str) -> Self {
        if !self.descriptor.has_tag(tag) {
            self.descriptor.tags.push(tag.to_string());
        }
        self
    }

    /// Add multiple tags
    pub fn tags(self, tags: &[&str]) -> Self {
        tags.iter().fold(self, |builder, tag| builder.tag(tag))
    }

    /// Build the descriptor
    pub fn build(self) -> PluginDescriptor {
        self.descriptor
    }
}

/// Remove duplicate tags, keeping the first occurrence of each
pub(crate) fn dedup_tags<I>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    tags.into_iter()
        .filter(|tag| seen.insert(tag.clone()))
        .collect()
}
