//! Role entity

use serde::{Deserialize, Serialize};

use super::{names_match, StoredEntity};

/// A named bundle of permission grants.
///
/// `permissions` holds permission **names**, not ids. This denormalization
/// is deliberate: renaming a permission does not cascade into roles, and a
/// role may reference a name no permission currently has. Dangling names
/// are tolerated and surfaced at display time via
/// [`dangling_permissions`](crate::assoc::dangling_permissions), never
/// rejected by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Stable identity, assigned by the caller
    pub id: String,

    /// Display name, unique case-insensitively among roles
    pub name: String,

    /// Granted permission names, in grant order
    pub permissions: Vec<String>,
}

impl Role {
    /// Create a role with no permissions
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), permissions: Vec::new() }
    }

    /// Add a permission grant (builder style)
    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permissions.push(permission.into());
        self
    }

    /// Check if this role grants the named permission
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}

impl StoredEntity for Role {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    /// Roles collide on case-folded name OR on id.
    fn is_duplicate_of(&self, existing: &Self) -> bool {
        names_match(&self.name, &existing.name) || self.id == existing.id
    }

    fn kind() -> &'static str {
        "role"
    }
}
