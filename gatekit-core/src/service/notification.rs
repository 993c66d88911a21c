//! Per-call operator notifications

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Mutation applied
    Success,
    /// Reportable but non-fatal: duplicate skipped, stale target missing
    Warning,
    /// Store boundary failed (transport-level); nothing was applied
    Error,
}

/// What a single store call came back with, phrased for the operator.
///
/// The presentation layer shows exactly one of these per mutating call —
/// a generic success/failure line, not a structured error (that contract
/// comes from the consuming UI).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Success, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Error, message: message.into() }
    }

    /// True unless the store boundary itself failed
    pub fn is_ok(&self) -> bool {
        self.kind != NotificationKind::Error
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self.kind {
            NotificationKind::Success => "ok",
            NotificationKind::Warning => "warn",
            NotificationKind::Error => "error",
        };
        write!(f, "[{}] {}", label, self.message)
    }
}
