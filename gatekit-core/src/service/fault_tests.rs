//! Fault injection at the store boundary
//!
//! The in-memory store never fails, but the service's error paths must
//! hold up for a real backend behind the same trait. These tests wire a
//! store that always reports a transport failure and check that every
//! operation resolves to an `Error` notification instead of panicking or
//! bubbling an unhandled error.

use std::sync::Arc;

use super::{NotificationKind, RoleService};
use crate::model::{Role, StoredEntity};
use crate::store::{AddOutcome, DeleteOutcome, EntityStore, StoreError, StoreResult, UpdateOutcome};

struct BrokenStore;

#[async_trait::async_trait]
impl<T: StoredEntity> EntityStore<T> for BrokenStore {
    async fn fetch_all(&self) -> StoreResult<Vec<T>> {
        Err(StoreError::Transport("backend unreachable".to_string()))
    }

    async fn add(&self, _entity: T) -> StoreResult<AddOutcome> {
        Err(StoreError::Transport("backend unreachable".to_string()))
    }

    async fn update(&self, _entity: T) -> StoreResult<UpdateOutcome> {
        Err(StoreError::Transport("backend unreachable".to_string()))
    }

    async fn delete(&self, _id: &str) -> StoreResult<DeleteOutcome> {
        Err(StoreError::Transport("backend unreachable".to_string()))
    }
}

#[tokio::test]
async fn test_every_mutation_surfaces_transport_failure_as_error_notification() {
    let service = RoleService::for_roles(Arc::new(BrokenStore));

    let add = service.add(Role::new("1", "Admin")).await;
    let update = service.update(Role::new("1", "Admin")).await;
    let delete = service.delete("1").await;

    for note in [add, update, delete] {
        assert_eq!(note.kind, NotificationKind::Error);
        assert!(!note.is_ok());
        assert!(note.message.contains("backend unreachable"));
    }

    // Nothing reached the audit trail.
    assert!(service.audit().is_empty());
}

#[tokio::test]
async fn test_list_propagates_transport_failure_as_result() {
    let service = RoleService::for_roles(Arc::new(BrokenStore));

    let err = service.list().await.unwrap_err();
    assert!(matches!(err, StoreError::Transport(_)));
}
