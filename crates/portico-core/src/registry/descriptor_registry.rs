use std::collections::HashMap;
use std::fmt;

use log::{debug, info, warn};

use crate::descriptor::{dedup_tags, PluginDescriptor};
use crate::registry::error::RegistryError;

/// Lifecycle of a registry. The only transition is `Open -> Frozen`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    /// Accepting registrations
    Open,
    /// Read-only; configuration is complete
    Frozen,
}

/// Registry of plugin descriptors for one configuration pass
#[derive(Clone, Default)]
pub struct DescriptorRegistry {
    /// Descriptors in registration order
    descriptors: Vec<PluginDescriptor>,
    /// Position of each id in `descriptors`
    index: HashMap<String, usize>,
    frozen: bool,
}

impl fmt::Debug for DescriptorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DescriptorRegistry")
            .field("state", &self.state())
            .field("descriptors", &self.ids())
            .finish()
    }
}

impl DescriptorRegistry {
    /// Create an empty, open registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor.
    ///
    /// The frozen state, every field and id uniqueness are all checked before
    /// anything is stored, so a failed call leaves the registry untouched.
    /// Tags are deduplicated on the stored copy.
    pub fn register(&mut self, descriptor: PluginDescriptor) -> Result<(), RegistryError> {
        if self.frozen {
            warn!("Rejected registration of '{}': registry is frozen", descriptor.id);
            return Err(RegistryError::Frozen { id: descriptor.id });
        }

        descriptor.validate()?;

        if self.index.contains_key(&descriptor.id) {
            return Err(RegistryError::DuplicateId { id: descriptor.id });
        }

        let mut descriptor = descriptor;
        descriptor.tags = dedup_tags(std::mem::take(&mut descriptor.tags));

        debug!("Registered plugin descriptor {}", descriptor);
        self.index.insert(descriptor.id.clone(), self.descriptors.len());
        self.descriptors.push(descriptor);
        Ok(())
    }

    /// Make the registry read-only. Calling this again has no effect.
    pub fn freeze(&mut self) {
        if !self.frozen {
            self.frozen = true;
            info!("Descriptor registry frozen with {} plugin(s)", self.descriptors.len());
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> RegistryState {
        if self.frozen {
            RegistryState::Frozen
        } else {
            RegistryState::Open
        }
    }

    /// Whether `freeze` has been called
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Look up a descriptor by id
    pub fn get(&self, id: &str) -> Option<&PluginDescriptor> {
        self.index.get(id).map(|&position| &self.descriptors[position])
    }

    /// Check if a descriptor is registered under `id`
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All descriptors in registration order
    pub fn all(&self) -> &[PluginDescriptor] {
        &self.descriptors
    }

    /// Descriptors carrying `tag`, in registration order
    pub fn by_tag(&self, tag: &str) -> Vec<&PluginDescriptor> {
        self.descriptors.iter().filter(|d| d.has_tag(tag)).collect()
    }

    /// Registered ids in registration order
    pub fn ids(&self) -> Vec<&str> {
        self.descriptors.iter().map(|d| d.id.as_str()).collect()
    }

    /// Distinct tags across all descriptors, in first-seen order
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for tag in self.descriptors.iter().flat_map(|d| d.tags.iter()) {
            if !tags.contains(&tag.as_str()) {
                tags.push(tag.as_str());
            }
        }
        tags
    }

    /// Number of registered descriptors
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
