//! Entity storage boundary
//!
//! The store owns the canonical Role and Permission collections for the
//! lifetime of the process. Two independent instances are constructed — one
//! per entity type — and handed to whatever layer needs them; there is no
//! module-level singleton, so tests get a fresh store each.
//!
//! Callers must treat the store as the source of truth: mutating calls
//! return an outcome, not a payload, and a caller holding a cached snapshot
//! re-fetches after every mutation.
//!
//! # Example
//!
//! ```rust,ignore
//! use gatekit_core::store::{EntityStore, MemoryStore};
//! use gatekit_core::model::Role;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let store = MemoryStore::new();
//! store.add(Role::new("1", "Admin")).await?;
//! let roles = store.fetch_all().await?;
//! # Ok(())
//! # }
//! ```

mod memory;
mod seed;

pub use memory::MemoryStore;
pub use seed::{seeded_permission_store, seeded_role_store, seed_permissions, seed_roles};

use crate::model::StoredEntity;

/// Store result type
pub type StoreResult<T> = Result<T, StoreError>;

/// Store error taxonomy.
///
/// The in-memory store only ever raises these through the outcome enums
/// below (missing targets and duplicates are reportable, not fatal);
/// `Transport` is reserved for a real backend behind the same trait and is
/// never produced by [`MemoryStore`].
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    #[error("{kind} name '{name}' conflicts with an existing entry")]
    DuplicateConflict { kind: &'static str, name: String },

    #[error("transport failure: {0}")]
    Transport(String),
}

/// Result of an `add` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Entity appended to the collection
    Inserted,
    /// Duplicate predicate matched an existing entity; store unchanged
    DuplicateSkipped,
}

/// Result of an `update` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Existing entity replaced wholesale
    Updated,
    /// No entity with that id; store unchanged (no insert-on-missing)
    NotFound,
}

/// Result of a `delete` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Entity removed
    Deleted,
    /// No entity with that id; delete is idempotent
    NotFound,
}

/// Async storage boundary for store-managed entities.
///
/// The mock implementation never suspends and never fails, but the boundary
/// stays async and fallible so a real backend can slot in behind it without
/// touching callers. The service layer's failure paths are exercised in
/// tests through a fault-injecting implementation of this trait.
#[async_trait::async_trait]
pub trait EntityStore<T: StoredEntity>: Send + Sync {
    /// Snapshot of every stored entity, in insertion order.
    async fn fetch_all(&self) -> StoreResult<Vec<T>>;

    /// Best-effort insert: a duplicate (per [`StoredEntity::is_duplicate_of`])
    /// is skipped and reported, never an error.
    async fn add(&self, entity: T) -> StoreResult<AddOutcome>;

    /// Full overwrite of the entity with the same id. Never a merge; callers
    /// pass a complete entity.
    async fn update(&self, entity: T) -> StoreResult<UpdateOutcome>;

    /// Remove the entity with the given id, if present.
    async fn delete(&self, id: &str) -> StoreResult<DeleteOutcome>;
}

// Implement EntityStore for Arc<S> to allow using Arc directly
#[async_trait::async_trait]
impl<T: StoredEntity, S: EntityStore<T>> EntityStore<T> for std::sync::Arc<S> {
    async fn fetch_all(&self) -> StoreResult<Vec<T>> {
        (**self).fetch_all().await
    }

    async fn add(&self, entity: T) -> StoreResult<AddOutcome> {
        (**self).add(entity).await
    }

    async fn update(&self, entity: T) -> StoreResult<UpdateOutcome> {
        (**self).update(entity).await
    }

    async fn delete(&self, id: &str) -> StoreResult<DeleteOutcome> {
        (**self).delete(id).await
    }
}
