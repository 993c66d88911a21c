//! User entity

use serde::{Deserialize, Serialize};

/// Account activation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Inactive => write!(f, "Inactive"),
        }
    }
}

/// An administered user account.
///
/// `role` is a role **name** (the same denormalized convention as
/// `Role.permissions`). Users are owned by the
/// [`UserDirectory`](crate::directory::UserDirectory), not by a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Numeric identity, assigned by the directory as max existing id + 1
    pub id: u32,

    pub name: String,

    pub email: String,

    /// Assigned role name
    pub role: String,

    pub status: UserStatus,
}

impl User {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role: role.into(),
            status: UserStatus::Active,
        }
    }

    /// Set the status (builder style)
    pub fn with_status(mut self, status: UserStatus) -> Self {
        self.status = status;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_as_display_strings() {
        let user = User::new(1, "John Doe", "john@example.com", "Admin");
        let json = serde_json::to_string(&user).unwrap();

        assert!(json.contains("\"Active\""));

        let inactive = user.with_status(UserStatus::Inactive);
        let json = serde_json::to_string(&inactive).unwrap();
        assert!(json.contains("\"Inactive\""));
    }
}
