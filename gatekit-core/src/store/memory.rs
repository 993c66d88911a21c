//! In-memory entity storage
//!
//! Thread-safe, insertion-ordered collection behind `RwLock<Vec<T>>`.
//! Entities are keyed by id via linear scan — collections here are admin
//! catalogues of tens of entries, not datasets. State is lost on restart.

use std::sync::{Arc, RwLock};

use super::{AddOutcome, DeleteOutcome, EntityStore, StoreError, StoreResult, UpdateOutcome};
use crate::model::StoredEntity;

/// In-memory store for one entity type.
///
/// Insertion order is an explicit guarantee: `fetch_all` returns entities
/// in the order they were added, and `update` replaces in place without
/// reordering. Name uniqueness is a secondary check performed inside `add`
/// through the entity's duplicate predicate, not a property of the backing
/// collection.
#[derive(Clone)]
pub struct MemoryStore<T: StoredEntity> {
    entities: Arc<RwLock<Vec<T>>>,
}

impl<T: StoredEntity> MemoryStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self { entities: Arc::new(RwLock::new(Vec::new())) }
    }

    /// Create a store pre-populated with the given entities.
    ///
    /// Seeds are inserted through the same duplicate predicate as `add`,
    /// so a bad fixture cannot smuggle in a name collision.
    pub fn with_entities(seed: impl IntoIterator<Item = T>) -> Self {
        let mut entities: Vec<T> = Vec::new();
        for entity in seed {
            if !entities.iter().any(|existing| entity.is_duplicate_of(existing)) {
                entities.push(entity);
            }
        }
        Self { entities: Arc::new(RwLock::new(entities)) }
    }

    /// Number of entities currently stored
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<T>> {
        // Lock poisoning cannot happen: no closure runs while the guard is
        // held that could panic mid-mutation.
        self.entities.read().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<T>> {
        self.entities.write().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<T: StoredEntity> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl<T: StoredEntity> EntityStore<T> for MemoryStore<T> {
    async fn fetch_all(&self) -> StoreResult<Vec<T>> {
        Ok(self.read().clone())
    }

    async fn add(&self, entity: T) -> StoreResult<AddOutcome> {
        let mut entities = self.write();
        if entities.iter().any(|existing| entity.is_duplicate_of(existing)) {
            log::debug!("{} add skipped: '{}' duplicates an existing entry", T::kind(), entity.name());
            return Ok(AddOutcome::DuplicateSkipped);
        }
        entities.push(entity);
        Ok(AddOutcome::Inserted)
    }

    async fn update(&self, entity: T) -> StoreResult<UpdateOutcome> {
        let mut entities = self.write();
        match entities.iter_mut().find(|existing| existing.id() == entity.id()) {
            Some(slot) => {
                *slot = entity;
                Ok(UpdateOutcome::Updated)
            }
            None => {
                log::debug!("{} update skipped: id '{}' not present", T::kind(), entity.id());
                Ok(UpdateOutcome::NotFound)
            }
        }
    }

    async fn delete(&self, id: &str) -> StoreResult<DeleteOutcome> {
        let mut entities = self.write();
        let before = entities.len();
        entities.retain(|existing| existing.id() != id);
        if entities.len() < before {
            Ok(DeleteOutcome::Deleted)
        } else {
            Ok(DeleteOutcome::NotFound)
        }
    }
}

// StoreError::NotFound / DuplicateConflict exist for callers that want to
// escalate an outcome into an error; the memory store itself stays lenient.
impl StoreError {
    /// Escalate an [`UpdateOutcome::NotFound`] into an error value.
    pub fn not_found<T: StoredEntity>(id: &str) -> Self {
        Self::NotFound { kind: T::kind(), id: id.to_string() }
    }

    /// Escalate an [`AddOutcome::DuplicateSkipped`] into an error value.
    pub fn duplicate<T: StoredEntity>(name: &str) -> Self {
        Self::DuplicateConflict { kind: T::kind(), name: name.to_string() }
    }
}
