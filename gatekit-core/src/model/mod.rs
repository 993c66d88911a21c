//! Entity model for the RBAC administration core
//!
//! Defines the shapes of [`User`], [`Role`] and [`Permission`] plus the
//! [`StoredEntity`] trait that the store layer is parametrized by. The
//! entities carry no behavior beyond small display helpers; all mutation
//! goes through the store and service layers.

mod permission;
mod role;
mod user;

pub use permission::Permission;
pub use role::Role;
pub use user::{User, UserStatus};

/// Marker trait for entities managed by an [`EntityStore`](crate::store::EntityStore).
///
/// Implemented by [`Role`] and [`Permission`]. `User` deliberately does not
/// implement it — users live in the [`UserDirectory`](crate::directory::UserDirectory)
/// outside the store abstraction.
pub trait StoredEntity: Clone + Send + Sync + std::fmt::Debug + 'static {
    /// Stable identity of this entity within its store.
    fn id(&self) -> &str;

    /// Display name, unique case-insensitively among stored entities.
    fn name(&self) -> &str;

    /// Duplicate predicate evaluated by `add` against every stored entity.
    ///
    /// Role and Permission intentionally diverge here (Role also treats an
    /// id collision as a duplicate; Permission checks the name only). This
    /// asymmetry matches observed product behavior and is a policy choice:
    /// unify it by editing one impl, not by branching in the store.
    fn is_duplicate_of(&self, existing: &Self) -> bool;

    /// Entity kind label used in logs and audit events.
    fn kind() -> &'static str;
}

/// Case-insensitive name comparison used by the duplicate predicates.
pub(crate) fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
