//! Audit trail for catalogue mutations
//!
//! Every successful mutation recorded by the service layer lands here as a
//! [`ChangeEvent`] with a UTC timestamp. The log is in-memory only and
//! resets with the process, like the stores it observes.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which catalogue an event touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Role,
    Permission,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Role => write!(f, "role"),
            Self::Permission => write!(f, "permission"),
        }
    }
}

/// A recorded catalogue mutation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ChangeEvent {
    Added { kind: EntityKind, id: String, name: String, timestamp: DateTime<Utc> },
    Updated { kind: EntityKind, id: String, name: String, timestamp: DateTime<Utc> },
    Deleted { kind: EntityKind, id: String, timestamp: DateTime<Utc> },
}

impl ChangeEvent {
    pub fn added(kind: EntityKind, id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Added { kind, id: id.into(), name: name.into(), timestamp: Utc::now() }
    }

    pub fn updated(kind: EntityKind, id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Updated { kind, id: id.into(), name: name.into(), timestamp: Utc::now() }
    }

    pub fn deleted(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::Deleted { kind, id: id.into(), timestamp: Utc::now() }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Added { kind, .. } | Self::Updated { kind, .. } | Self::Deleted { kind, .. } => {
                *kind
            }
        }
    }
}

/// In-memory, append-only audit log
#[derive(Clone, Default)]
pub struct AuditLog {
    events: Arc<RwLock<Vec<ChangeEvent>>>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event
    pub fn record(&self, event: ChangeEvent) {
        self.events.write().unwrap_or_else(std::sync::PoisonError::into_inner).push(event);
    }

    /// Every recorded event, oldest first
    pub fn all(&self) -> Vec<ChangeEvent> {
        self.events.read().unwrap_or_else(std::sync::PoisonError::into_inner).clone()
    }

    /// Events touching one catalogue, oldest first
    pub fn for_kind(&self, kind: EntityKind) -> Vec<ChangeEvent> {
        self.all().into_iter().filter(|e| e.kind() == kind).collect()
    }

    pub fn len(&self) -> usize {
        self.events.read().unwrap_or_else(std::sync::PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
