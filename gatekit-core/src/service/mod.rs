//! Catalogue services
//!
//! The services wrap an [`EntityStore`](crate::store::EntityStore) and
//! translate its outcomes into the per-call notifications a presentation
//! layer surfaces to the operator. Every mutation is logged and audited;
//! no store failure ever escapes as a panic — the worst case is an
//! `Error` notification.

mod catalogue;
mod notification;

pub use catalogue::{CatalogueService, PermissionService, RoleService};
pub use notification::{Notification, NotificationKind};

#[cfg(test)]
mod fault_tests;
