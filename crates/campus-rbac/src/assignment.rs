//! Administrative assignment records.
//!
//! Assignments are created, updated, and revoked by an external
//! administrative workflow; this core only ever *reads* a list of them
//! per evaluation call. They feed exactly one path: the blanket override
//! in the scoped access decision. They never widen a principal's base
//! permission/resource/action sets.

use campus_types::{AssignmentId, InstituteId, PrincipalId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An externally-managed administrative role binding.
///
/// Optionally scoped to an institute and optionally time-bound. The
/// `role` id is opaque to this core — the administrative service owns
/// role definitions.
///
/// # Example
///
/// ```
/// use campus_rbac::AdminAssignment;
/// use campus_types::PrincipalId;
///
/// let assignment = AdminAssignment::new(PrincipalId::new(), "inst-admin", PrincipalId::new());
/// assert!(assignment.counts_as_override());
///
/// let revoked = assignment.revoked();
/// assert!(!revoked.counts_as_override());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminAssignment {
    /// Record id assigned by the administrative service.
    pub id: AssignmentId,
    /// The principal this assignment binds.
    pub principal: PrincipalId,
    /// Opaque role id owned by the administrative service.
    pub role: String,
    /// Optional institute the assignment is scoped to.
    #[serde(default)]
    pub scope: Option<InstituteId>,
    /// Who created the assignment.
    pub assigned_by: PrincipalId,
    /// When the assignment was created.
    pub assigned_at: DateTime<Utc>,
    /// Optional expiry timestamp.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    /// Whether the assignment is currently active.
    pub active: bool,
    /// Free-form notes from the administrative workflow.
    #[serde(default)]
    pub notes: Option<String>,
}

impl AdminAssignment {
    /// Creates an active, unscoped, non-expiring assignment.
    ///
    /// Intended for tests and fixtures; production records arrive fully
    /// formed from the administrative service.
    #[must_use]
    pub fn new(
        principal: PrincipalId,
        role: impl Into<String>,
        assigned_by: PrincipalId,
    ) -> Self {
        Self {
            id: AssignmentId::new(),
            principal,
            role: role.into(),
            scope: None,
            assigned_by,
            assigned_at: Utc::now(),
            expires_at: None,
            active: true,
            notes: None,
        }
    }

    /// Returns a copy scoped to an institute.
    #[must_use]
    pub fn with_scope(mut self, scope: InstituteId) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Returns a copy with an expiry timestamp.
    #[must_use]
    pub fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Returns a copy with notes attached.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Returns a revoked copy.
    #[must_use]
    pub fn revoked(mut self) -> Self {
        self.active = false;
        self
    }

    /// Whether this assignment counts as an administrative override.
    ///
    /// True iff the assignment is active **and** carries no expiry at
    /// all. An assignment with `expires_at` set in the future is NOT an
    /// override — only the presence of the field is checked, never the
    /// clock. This reproduces the upstream model literally; it looks
    /// like a latent defect there (a future-dated expiry presumably
    /// ought to count until it passes), but "fixing" it here would
    /// change observable authorization outcomes.
    #[must_use]
    pub fn counts_as_override(&self) -> bool {
        self.active && self.expires_at.is_none()
    }
}
