use super::{
    app::{self, ModelId},
    EntityMeta, Resolver,
};
use crate::Result;

use indexmap::IndexMap;
use std::sync::{Arc, Mutex};

/// Process-wide table of resolved entity metadata.
///
/// Built once at initialization and read thereafter. Resolution of
/// independent entities may run in parallel; results are published under
/// the lock, first registration winning. Published metadata is immutable
/// and shared behind [`Arc`].
#[derive(Debug)]
pub struct Registry {
    resolver: Resolver,
    models: Mutex<IndexMap<ModelId, Arc<EntityMeta>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::with_resolver(Resolver::new())
    }

    /// A registry whose registrations use the given resolver configuration.
    pub fn with_resolver(resolver: Resolver) -> Self {
        Self {
            resolver,
            models: Mutex::new(IndexMap::new()),
        }
    }

    /// Resolves and publishes metadata for `entity`.
    ///
    /// Idempotent per model identity: registering an already-registered
    /// entity returns the stored metadata unchanged. On failure nothing is
    /// published, so a malformed entity is never visible to later lookups.
    pub fn register(
        &self,
        schema: &app::Schema,
        entity: impl Into<ModelId>,
    ) -> Result<Arc<EntityMeta>> {
        let id = entity.into();

        if let Some(meta) = self.lock().get(&id) {
            return Ok(meta.clone());
        }

        // Resolve outside the lock; independent entities may resolve
        // concurrently.
        let meta = Arc::new(self.resolver.resolve(schema, id)?);

        Ok(self.lock().entry(id).or_insert(meta).clone())
    }

    /// Returns the metadata registered for `entity`.
    pub fn get(&self, entity: impl Into<ModelId>) -> Result<Arc<EntityMeta>> {
        let id = entity.into();

        self.lock()
            .get(&id)
            .cloned()
            .ok_or_else(|| crate::Error::not_registered(id))
    }

    /// Removes all registered metadata.
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, IndexMap<ModelId, Arc<EntityMeta>>> {
        self.models.lock().expect("registry lock poisoned")
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
