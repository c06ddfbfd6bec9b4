//! The denial taxonomy.
//!
//! A denial is a normal outcome, not a failure: the engine returns it
//! inside [`AccessDecision`](crate::AccessDecision) and never panics or
//! errors for business-level denial. [`DenialReason`] exists as a typed
//! error so callers who gate with `Result` (middleware, request
//! authoring) can use `?` on
//! [`AccessDecision::into_result`](crate::AccessDecision::into_result).

use crate::{Action, Resource};
use campus_types::InstituteId;
use thiserror::Error;

/// Why a scoped access decision denied.
///
/// Callers can match on the variant to determine which rule denied and
/// give appropriate user feedback.
///
/// # Example
///
/// ```
/// use campus_rbac::{Action, DenialReason, Resource};
///
/// let reason = DenialReason::MissingGrant {
///     resource: Resource::USERS,
///     action: Action::CREATE,
/// };
/// assert!(reason.to_string().contains("missing resource/action grant"));
/// assert_eq!(reason.rule(), "grant");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DenialReason {
    /// The resource or the action is outside the principal's sets.
    #[error("missing resource/action grant: {action} on {resource}")]
    MissingGrant {
        /// The resource the query named.
        resource: Resource,
        /// The action the query named.
        action: Action,
    },

    /// The query named an institute the principal is not a member of.
    #[error("institute scope denied: {institute}")]
    InstituteScope {
        /// The institute the query named.
        institute: InstituteId,
    },

    /// An ownership policy rejected a record-level query.
    #[error("not the owner of {resource} {resource_id}")]
    NotOwner {
        /// The resource the query named.
        resource: Resource,
        /// The specific record the query named.
        resource_id: String,
    },
}

impl DenialReason {
    /// Returns the decision rule that denied.
    #[must_use]
    pub fn rule(&self) -> &'static str {
        match self {
            Self::MissingGrant { .. } => "grant",
            Self::InstituteScope { .. } => "scope",
            Self::NotOwner { .. } => "ownership",
        }
    }
}
