//! Built-in seed fixtures
//!
//! Default catalogue matching the product's shipped mock data. The config
//! layer can disable seeding ([`SeedConfig`](crate::config::SeedConfig)),
//! in which case stores start empty.

use super::MemoryStore;
use crate::model::{Permission, Role};

/// Default role catalogue: Admin, Editor, Viewer.
pub fn seed_roles() -> Vec<Role> {
    vec![
        Role::new("1", "Admin")
            .with_permission("Read")
            .with_permission("Write")
            .with_permission("Delete"),
        Role::new("2", "Editor").with_permission("Read").with_permission("Write"),
        Role::new("3", "Viewer").with_permission("Read"),
    ]
}

/// Default permission catalogue, all in the "Users" module.
pub fn seed_permissions() -> Vec<Permission> {
    vec![
        Permission::new("1", "Read", "Can read data", "Users"),
        Permission::new("2", "Write", "Can write data", "Users"),
        Permission::new("3", "Delete", "Can delete data", "Users"),
    ]
}

/// A role store pre-populated with [`seed_roles`]
pub fn seeded_role_store() -> MemoryStore<Role> {
    MemoryStore::with_entities(seed_roles())
}

/// A permission store pre-populated with [`seed_permissions`]
pub fn seeded_permission_store() -> MemoryStore<Permission> {
    MemoryStore::with_entities(seed_permissions())
}
