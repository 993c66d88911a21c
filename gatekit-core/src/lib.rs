//! Gatekit - Core
//!
//! The data core of an RBAC administration console: entity shapes for
//! users, roles and permissions, an in-memory store with deduplicated
//! adds and idempotent deletes, and the role↔permission association
//! logic a permission matrix is rendered from.
//!
//! # Overview
//!
//! A presentation layer (screen, CLI, API handler) calls the service
//! layer, which mutates the stores and reports each call as a
//! [`Notification`](service::Notification). The store is the source of
//! truth: after every mutation the caller re-fetches instead of patching
//! a cached snapshot.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use gatekit_core::app::AdminCore;
//! use gatekit_core::model::Role;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let core = AdminCore::seeded();
//!
//!     let note = core.roles().add(Role::new("4", "Auditor")).await;
//!     println!("{}", note);
//!
//!     for role in core.roles().list().await? {
//!         println!("{} -> {:?}", role.name, role.permissions);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`model`] - entity shapes and the [`StoredEntity`](model::StoredEntity) trait
//! - [`store`] - async storage boundary and the in-memory implementation
//! - [`assoc`] - pure association logic (toggle, group-by-module)
//! - [`directory`] - user roster, deliberately outside the store
//! - [`service`] - outcome-to-notification translation and audit recording
//! - [`events`] - in-memory audit trail
//! - [`config`] / [`logging`] - TOML + env configuration, `log` facade setup
//! - [`app`] - one-stop assembly of the above

pub mod app;
pub mod assoc;
pub mod config;
pub mod directory;
pub mod events;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

// Re-exports of main types
pub use app::AdminCore;
pub use model::{Permission, Role, StoredEntity, User, UserStatus};
pub use service::{Notification, NotificationKind, PermissionService, RoleService};
pub use store::{AddOutcome, DeleteOutcome, EntityStore, MemoryStore, StoreError, UpdateOutcome};

/// Convenient glob import for downstream callers
pub mod prelude {
    pub use crate::app::AdminCore;
    pub use crate::assoc::{dangling_permissions, group_by_module, toggle_permission};
    pub use crate::config::GatekitConfig;
    pub use crate::model::{Permission, Role, StoredEntity, User, UserStatus};
    pub use crate::service::{Notification, NotificationKind};
    pub use crate::store::{EntityStore, MemoryStore, StoreResult};
}
