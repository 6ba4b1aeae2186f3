//! Thread-safe handle over a [`DescriptorRegistry`].
//!
//! Registration and freezing serialize on one mutex. Freezing also publishes
//! an immutable snapshot; from then on reads go to the snapshot without
//! touching the lock.
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use crate::descriptor::PluginDescriptor;
use crate::registry::descriptor_registry::{DescriptorRegistry, RegistryState};
use crate::registry::error::RegistryError;

#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<Mutex<DescriptorRegistry>>,
    snapshot: Arc<OnceLock<Arc<DescriptorRegistry>>>,
}

impl SharedRegistry {
    /// Create an empty, open shared registry
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave a half-applied registration,
    // so a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, DescriptorRegistry> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read<R>(&self, f: impl FnOnce(&DescriptorRegistry) -> R) -> R {
        match self.snapshot.get() {
            Some(frozen) => f(frozen),
            None => f(&*self.lock()),
        }
    }

    /// Register a descriptor under the registry lock
    pub fn register(&self, descriptor: PluginDescriptor) -> Result<(), RegistryError> {
        self.lock().register(descriptor)
    }

    /// Freeze the registry and publish its read-only snapshot. Idempotent.
    pub fn freeze(&self) -> Arc<DescriptorRegistry> {
        let mut registry = self.lock();
        registry.freeze();
        Arc::clone(self.snapshot.get_or_init(|| Arc::new((*registry).clone())))
    }

    /// The frozen snapshot, if `freeze` has been called
    pub fn snapshot(&self) -> Option<Arc<DescriptorRegistry>> {
        self.snapshot.get().cloned()
    }

    pub fn state(&self) -> RegistryState {
        if self.snapshot.get().is_some() {
            RegistryState::Frozen
        } else {
            self.lock().state()
        }
    }

    pub fn get(&self, id: &str) -> Option<PluginDescriptor> {
        self.read(|registry| registry.get(id).cloned())
    }

    pub fn all(&self) -> Vec<PluginDescriptor> {
        self.read(|registry| registry.all().to_vec())
    }

    pub fn by_tag(&self, tag: &str) -> Vec<PluginDescriptor> {
        self.read(|registry| registry.by_tag(tag).into_iter().cloned().collect())
    }

    pub fn len(&self) -> usize {
        self.read(DescriptorRegistry::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
