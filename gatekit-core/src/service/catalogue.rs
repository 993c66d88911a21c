//! Generic catalogue service over an entity store

use std::sync::Arc;

use super::Notification;
use crate::events::{AuditLog, ChangeEvent, EntityKind};
use crate::model::{Permission, Role, StoredEntity};
use crate::store::{AddOutcome, DeleteOutcome, EntityStore, StoreResult, UpdateOutcome};

/// Service for the role catalogue
pub type RoleService = CatalogueService<Role>;

/// Service for the permission catalogue
pub type PermissionService = CatalogueService<Permission>;

/// Wraps one entity store, producing notifications and audit events.
///
/// Holds the store as a trait object so a real backend can replace the
/// in-memory one without touching callers. Cloning shares the store and
/// the audit log.
#[derive(Clone)]
pub struct CatalogueService<T: StoredEntity> {
    store: Arc<dyn EntityStore<T>>,
    audit: AuditLog,
    audit_kind: EntityKind,
}

impl<T: StoredEntity> CatalogueService<T> {
    pub fn new(store: Arc<dyn EntityStore<T>>, audit: AuditLog, audit_kind: EntityKind) -> Self {
        Self { store, audit, audit_kind }
    }

    /// Re-fetch the catalogue from the store.
    ///
    /// Callers holding a previous snapshot call this after every mutation
    /// instead of patching their copy; the store is the source of truth.
    pub async fn list(&self) -> StoreResult<Vec<T>> {
        self.store.fetch_all().await
    }

    /// Add an entity, reporting the outcome as a notification.
    pub async fn add(&self, entity: T) -> Notification {
        let id = entity.id().to_string();
        let name = entity.name().to_string();
        match self.store.add(entity).await {
            Ok(AddOutcome::Inserted) => {
                log::info!("{} '{}' added", T::kind(), name);
                self.audit.record(ChangeEvent::added(self.audit_kind, id, name.clone()));
                Notification::success(format!("{} '{}' added", T::kind(), name))
            }
            Ok(AddOutcome::DuplicateSkipped) => {
                log::warn!("{} '{}' not added: duplicate", T::kind(), name);
                Notification::warning(format!(
                    "{} '{}' already exists; nothing was added",
                    T::kind(),
                    name
                ))
            }
            Err(err) => {
                log::error!("{} add failed: {}", T::kind(), err);
                Notification::error(format!("could not add {} '{}': {}", T::kind(), name, err))
            }
        }
    }

    /// Replace an entity wholesale, reporting the outcome.
    pub async fn update(&self, entity: T) -> Notification {
        let id = entity.id().to_string();
        let name = entity.name().to_string();
        match self.store.update(entity).await {
            Ok(UpdateOutcome::Updated) => {
                log::info!("{} '{}' updated", T::kind(), name);
                self.audit.record(ChangeEvent::updated(self.audit_kind, id, name.clone()));
                Notification::success(format!("{} '{}' updated", T::kind(), name))
            }
            Ok(UpdateOutcome::NotFound) => {
                log::warn!("{} update target {} missing", T::kind(), id);
                Notification::warning(format!(
                    "{} '{}' no longer exists; refresh and retry",
                    T::kind(),
                    name
                ))
            }
            Err(err) => {
                log::error!("{} update failed: {}", T::kind(), err);
                Notification::error(format!("could not update {} '{}': {}", T::kind(), name, err))
            }
        }
    }

    /// Delete by id, reporting the outcome. Deleting a missing id warns.
    pub async fn delete(&self, id: &str) -> Notification {
        match self.store.delete(id).await {
            Ok(DeleteOutcome::Deleted) => {
                log::info!("{} {} deleted", T::kind(), id);
                self.audit.record(ChangeEvent::deleted(self.audit_kind, id));
                Notification::success(format!("{} deleted", T::kind()))
            }
            Ok(DeleteOutcome::NotFound) => {
                log::warn!("{} delete target {} missing", T::kind(), id);
                Notification::warning(format!("{} was already deleted", T::kind()))
            }
            Err(err) => {
                log::error!("{} delete failed: {}", T::kind(), err);
                Notification::error(format!("could not delete {}: {}", T::kind(), err))
            }
        }
    }

    /// The audit trail shared by this service
    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }
}

impl RoleService {
    /// Role service over the given store, with a fresh audit log
    pub fn for_roles(store: Arc<dyn EntityStore<Role>>) -> Self {
        Self::new(store, AuditLog::new(), EntityKind::Role)
    }
}

impl PermissionService {
    /// Permission service over the given store, with a fresh audit log
    pub fn for_permissions(store: Arc<dyn EntityStore<Permission>>) -> Self {
        Self::new(store, AuditLog::new(), EntityKind::Permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::NotificationKind;
    use crate::store::seeded_role_store;

    #[tokio::test]
    async fn test_add_reports_success_and_audits() {
        let service = RoleService::for_roles(Arc::new(seeded_role_store()));

        let note = service.add(Role::new("4", "Auditor")).await;
        assert_eq!(note.kind, NotificationKind::Success);
        assert_eq!(service.audit().len(), 1);

        let roles = service.list().await.unwrap();
        assert!(roles.iter().any(|r| r.name == "Auditor"));
    }

    #[tokio::test]
    async fn test_duplicate_add_warns_without_auditing() {
        let service = RoleService::for_roles(Arc::new(seeded_role_store()));

        let note = service.add(Role::new("9", "admin")).await;
        assert_eq!(note.kind, NotificationKind::Warning);
        assert!(note.is_ok());
        assert!(service.audit().is_empty());
        assert_eq!(service.list().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_stale_update_and_delete_warn() {
        let service = RoleService::for_roles(Arc::new(seeded_role_store()));

        let note = service.update(Role::new("42", "Ghost")).await;
        assert_eq!(note.kind, NotificationKind::Warning);

        service.delete("1").await;
        let again = service.delete("1").await;
        assert_eq!(again.kind, NotificationKind::Warning);

        // One audited event: the successful delete.
        assert_eq!(service.audit().len(), 1);
    }
}
