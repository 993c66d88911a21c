//! Application handle
//!
//! [`AdminCore`] wires the whole data core together from a
//! [`GatekitConfig`]: one role store, one permission store, the user
//! directory and a shared audit log. It is constructed once at process
//! start and passed by handle to whatever layer needs it — there is no
//! implicit singleton, so every test gets an isolated instance.

use std::sync::Arc;

use crate::config::GatekitConfig;
use crate::directory::UserDirectory;
use crate::events::{AuditLog, EntityKind};
use crate::model::{Permission, Role};
use crate::service::{CatalogueService, PermissionService, RoleService};
use crate::store::{seed_permissions, seed_roles, MemoryStore};

/// The assembled RBAC administration core
#[derive(Clone)]
pub struct AdminCore {
    roles: RoleService,
    permissions: PermissionService,
    users: UserDirectory,
    audit: AuditLog,
}

impl AdminCore {
    /// Build the core from configuration
    pub fn from_config(config: &GatekitConfig) -> Self {
        let role_store = if config.seed.enabled {
            MemoryStore::with_entities(seed_roles())
        } else {
            MemoryStore::<Role>::new()
        };
        let permission_store = if config.seed.enabled {
            MemoryStore::with_entities(seed_permissions())
        } else {
            MemoryStore::<Permission>::new()
        };
        let users = if config.seed.sample_users {
            UserDirectory::with_sample_users()
        } else {
            UserDirectory::new()
        };

        // Both catalogues share one audit trail.
        let audit = AuditLog::new();
        Self {
            roles: CatalogueService::new(Arc::new(role_store), audit.clone(), EntityKind::Role),
            permissions: CatalogueService::new(
                Arc::new(permission_store),
                audit.clone(),
                EntityKind::Permission,
            ),
            users,
            audit,
        }
    }

    /// A fully seeded core with default configuration
    pub fn seeded() -> Self {
        Self::from_config(&GatekitConfig::default())
    }

    /// An empty core, useful for tests
    pub fn empty() -> Self {
        Self::from_config(&GatekitConfig::default().without_seed())
    }

    pub fn roles(&self) -> &RoleService {
        &self.roles
    }

    pub fn permissions(&self) -> &PermissionService {
        &self.permissions
    }

    pub fn users(&self) -> &UserDirectory {
        &self.users
    }

    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_core_has_default_catalogues() {
        let core = AdminCore::seeded();

        assert_eq!(core.roles().list().await.unwrap().len(), 3);
        assert_eq!(core.permissions().list().await.unwrap().len(), 3);
        assert_eq!(core.users().len(), 2);
    }

    #[tokio::test]
    async fn test_unseeded_core_starts_empty() {
        let core = AdminCore::empty();

        assert!(core.roles().list().await.unwrap().is_empty());
        assert!(core.permissions().list().await.unwrap().is_empty());
        assert!(core.users().is_empty());
    }

    #[tokio::test]
    async fn test_instances_are_isolated() {
        let a = AdminCore::seeded();
        let b = AdminCore::seeded();

        a.roles().delete("1").await;
        assert_eq!(a.roles().list().await.unwrap().len(), 2);
        assert_eq!(b.roles().list().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_catalogues_share_the_audit_trail() {
        let core = AdminCore::seeded();

        core.roles().delete("3").await;
        core.permissions().delete("3").await;

        assert_eq!(core.audit().len(), 2);
        assert_eq!(core.audit().for_kind(EntityKind::Role).len(), 1);
        assert_eq!(core.audit().for_kind(EntityKind::Permission).len(), 1);
    }
}
