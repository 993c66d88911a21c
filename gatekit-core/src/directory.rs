//! User directory
//!
//! Users deliberately live OUTSIDE the [`store`](crate::store) abstraction:
//! the product keeps them in local, non-persisted state with no dedup and
//! no async boundary. Whether they should be unified under the entity
//! store is an open product question; until the owner decides, this module
//! mirrors the observed lifecycle.

use std::sync::{Arc, RwLock};

use crate::model::{User, UserStatus};

/// Plain in-memory user roster.
///
/// No uniqueness checks, no outcome reporting beyond a bool on removal.
/// Ids are assigned by the directory as max existing id + 1.
#[derive(Clone)]
pub struct UserDirectory {
    users: Arc<RwLock<Vec<User>>>,
}

impl UserDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self { users: Arc::new(RwLock::new(Vec::new())) }
    }

    /// Create a directory seeded with the shipped sample users
    pub fn with_sample_users() -> Self {
        Self {
            users: Arc::new(RwLock::new(vec![
                User::new(1, "John Doe", "john@example.com", "Admin"),
                User::new(2, "Jane Doe", "jane@example.com", "Editor"),
            ])),
        }
    }

    /// Snapshot of the roster, in insertion order
    pub fn all(&self) -> Vec<User> {
        self.read().clone()
    }

    /// Add a user, assigning the next free id. Returns the stored user.
    pub fn add(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> User {
        let mut users = self.write();
        let next_id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let user = User::new(next_id, name, email, role);
        users.push(user.clone());
        user
    }

    /// Replace a user wholesale by id. Returns false if the id is unknown.
    pub fn update(&self, user: User) -> bool {
        let mut users = self.write();
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => {
                *slot = user;
                true
            }
            None => false,
        }
    }

    /// Flip a user between Active and Inactive. Returns the new status.
    pub fn toggle_status(&self, id: u32) -> Option<UserStatus> {
        let mut users = self.write();
        let user = users.iter_mut().find(|u| u.id == id)?;
        user.status = match user.status {
            UserStatus::Active => UserStatus::Inactive,
            UserStatus::Inactive => UserStatus::Active,
        };
        Some(user.status)
    }

    /// Remove a user by id. Removing an unknown id returns false.
    pub fn remove(&self, id: u32) -> bool {
        let mut users = self.write();
        let before = users.len();
        users.retain(|u| u.id != id);
        users.len() < before
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<User>> {
        self.users.read().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<User>> {
        self.users.write().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assigns_max_id_plus_one() {
        let directory = UserDirectory::with_sample_users();

        let user = directory.add("New Admin", "admin@example.com", "Admin");
        assert_eq!(user.id, 3);

        // Removing a middle id must not cause reuse of a live one.
        directory.remove(2);
        let next = directory.add("Another", "another@example.com", "Viewer");
        assert_eq!(next.id, 4);
    }

    #[test]
    fn test_add_into_empty_directory_starts_at_one() {
        let directory = UserDirectory::new();
        let user = directory.add("First", "first@example.com", "Admin");
        assert_eq!(user.id, 1);
    }

    #[test]
    fn test_toggle_status_flips_and_reports() {
        let directory = UserDirectory::with_sample_users();

        assert_eq!(directory.toggle_status(1), Some(UserStatus::Inactive));
        assert_eq!(directory.toggle_status(1), Some(UserStatus::Active));
        assert_eq!(directory.toggle_status(99), None);
    }

    #[test]
    fn test_update_and_remove_report_unknown_ids() {
        let directory = UserDirectory::with_sample_users();

        assert!(directory.update(User::new(1, "John D.", "john@example.com", "Viewer")));
        assert_eq!(directory.all()[0].role, "Viewer");

        assert!(!directory.update(User::new(42, "Ghost", "ghost@example.com", "Admin")));
        assert!(directory.remove(2));
        assert!(!directory.remove(2));
        assert_eq!(directory.len(), 1);
    }
}
