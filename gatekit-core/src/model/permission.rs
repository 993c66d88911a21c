//! Permission entity

use serde::{Deserialize, Serialize};

use super::{names_match, StoredEntity};

/// An atomic capability, grouped by module for display.
///
/// `module` is a free-form label ("Users", "Roles", "Reports", ...) used
/// only by the display grouping in [`assoc`](crate::assoc); it carries no
/// access semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    /// Stable identity, assigned by the caller
    pub id: String,

    /// Display name, unique case-insensitively among permissions
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// Free-form grouping label
    pub module: String,
}

impl Permission {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        module: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            module: module.into(),
        }
    }
}

impl StoredEntity for Permission {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    /// Permissions collide on case-folded name only — unlike [`Role`](super::Role),
    /// which also treats an id collision as a duplicate.
    fn is_duplicate_of(&self, existing: &Self) -> bool {
        names_match(&self.name, &existing.name)
    }

    fn kind() -> &'static str {
        "permission"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_predicate_is_name_only() {
        let read = Permission::new("1", "Read", "Can read data", "Users");
        let same_id = Permission::new("1", "Write", "Can write data", "Users");
        let same_name = Permission::new("9", "read", "Lowercase clone", "Reports");

        // Same id, different name: NOT a duplicate for permissions.
        assert!(!same_id.is_duplicate_of(&read));
        assert!(same_name.is_duplicate_of(&read));
    }
}
