//! Role↔permission association logic
//!
//! Pure functions over already-fetched data; no I/O and no store access.
//! The presentation layer calls these when rendering a role's permission
//! matrix and when a grant checkbox is toggled.

use crate::model::{Permission, Role};

/// Flip the named permission's membership in a role's grant list.
///
/// Returns a new role: the permission name is removed if present, appended
/// at the end if absent. Applying the same toggle twice returns a role
/// equal to the original; a single application always flips state, so
/// repeated identical calls are NOT idempotent.
pub fn toggle_permission(role: &Role, permission_name: &str) -> Role {
    let mut toggled = role.clone();
    if let Some(pos) = toggled.permissions.iter().position(|p| p == permission_name) {
        toggled.permissions.remove(pos);
    } else {
        toggled.permissions.push(permission_name.to_string());
    }
    toggled
}

/// Group permissions by their `module` label for display.
///
/// Groups appear in first-seen module order; permissions keep their input
/// order within each group. An empty or unrecognized module label forms its
/// own group under that literal value — no "Uncategorized" fallback is
/// synthesized. Every input permission lands in exactly one group.
pub fn group_by_module(permissions: &[Permission]) -> Vec<(String, Vec<Permission>)> {
    let mut groups: Vec<(String, Vec<Permission>)> = Vec::new();
    for permission in permissions {
        match groups.iter_mut().find(|(module, _)| module == &permission.module) {
            Some((_, members)) => members.push(permission.clone()),
            None => groups.push((permission.module.clone(), vec![permission.clone()])),
        }
    }
    groups
}

/// Grant names on a role that no permission entity currently carries.
///
/// Dangling references are tolerated by the data model (grants are stored
/// by name, and renaming a permission does not cascade); this helper lets
/// the display layer mark them without the store ever rejecting them.
pub fn dangling_permissions(role: &Role, permissions: &[Permission]) -> Vec<String> {
    role.permissions
        .iter()
        .filter(|grant| !permissions.iter().any(|p| &p.name == *grant))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_role() -> Role {
        Role::new("1", "Admin").with_permission("Read").with_permission("Write")
    }

    #[test]
    fn test_toggle_removes_present_grant() {
        let toggled = toggle_permission(&sample_role(), "Read");
        assert_eq!(toggled.permissions, vec!["Write"]);
    }

    #[test]
    fn test_toggle_appends_absent_grant() {
        let toggled = toggle_permission(&sample_role(), "Delete");
        assert_eq!(toggled.permissions, vec!["Read", "Write", "Delete"]);
    }

    #[test]
    fn test_toggle_twice_is_involution() {
        let role = sample_role();
        let round_trip = toggle_permission(&toggle_permission(&role, "Delete"), "Delete");
        assert_eq!(round_trip, role);

        let round_trip = toggle_permission(&toggle_permission(&role, "Read"), "Read");
        // Removal then re-append moves the grant to the end; membership is
        // restored even though order may differ.
        assert!(round_trip.has_permission("Read"));
        assert_eq!(round_trip.permissions.len(), role.permissions.len());
    }

    #[test]
    fn test_repeated_toggle_keeps_flipping() {
        let once = toggle_permission(&sample_role(), "Delete");
        let twice = toggle_permission(&once, "Delete");
        let thrice = toggle_permission(&twice, "Delete");

        assert!(once.has_permission("Delete"));
        assert!(!twice.has_permission("Delete"));
        assert!(thrice.has_permission("Delete"));
    }

    #[test]
    fn test_group_by_module_orders_by_first_seen() {
        let perms = vec![
            Permission::new("1", "Read", "Can read data", "Users"),
            Permission::new("4", "Export", "Can export reports", "Reports"),
            Permission::new("2", "Write", "Can write data", "Users"),
        ];

        let groups = group_by_module(&perms);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Users");
        assert_eq!(groups[1].0, "Reports");

        let user_names: Vec<&str> = groups[0].1.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(user_names, vec!["Read", "Write"]);
    }

    #[test]
    fn test_group_by_module_keeps_empty_label_literal() {
        let perms = vec![
            Permission::new("1", "Read", "Can read data", "Users"),
            Permission::new("9", "Orphan", "No module", ""),
        ];

        let groups = group_by_module(&perms);
        assert_eq!(groups[1].0, "");
        assert_eq!(groups[1].1[0].name, "Orphan");
    }

    #[test]
    fn test_group_by_module_is_a_partition() {
        let perms = vec![
            Permission::new("1", "Read", "Can read data", "Users"),
            Permission::new("2", "Write", "Can write data", "Users"),
            Permission::new("3", "Manage", "Can manage roles", "Roles"),
            Permission::new("4", "Export", "Can export reports", "Reports"),
        ];

        let groups = group_by_module(&perms);
        let regrouped: Vec<Permission> =
            groups.into_iter().flat_map(|(_, members)| members).collect();

        assert_eq!(regrouped.len(), perms.len());
        for p in &perms {
            assert_eq!(regrouped.iter().filter(|r| r.id == p.id).count(), 1);
        }
    }

    #[test]
    fn test_dangling_permissions_reported_not_rejected() {
        let role = Role::new("1", "Admin").with_permission("Read").with_permission("Purge");
        let perms = vec![Permission::new("1", "Read", "Can read data", "Users")];

        assert_eq!(dangling_permissions(&role, &perms), vec!["Purge"]);
        assert!(dangling_permissions(&sample_role(), &[]).len() == 2);
    }
}
