//! Scoped access decision engine.
//!
//! [`evaluate`] runs the decision pipeline in a fixed order:
//!
//! 1. **Grant check.** The principal must hold the queried resource and
//!    the queried action. Failing this ends the evaluation with
//!    [`DenialReason::MissingGrant`].
//! 2. **Institute scope.** When the query names an institute and the
//!    principal lists institute memberships, the named institute must
//!    be among them. A principal with no institute memberships passes
//!    this step for any institute.
//! 3. **Assignment override.** Any active, non-expiring admin
//!    assignment grants blanket access past the remaining steps.
//! 4. **Ownership extension.** [`evaluate`] allows record-level queries
//!    by default; [`evaluate_with`] consults an [`OwnershipPolicy`]
//!    when the query carries a `resource_id`.
//!
//! Earlier steps always win. A principal denied at the grant step is
//! denied even when an assignment override exists.
//!
//! # Example
//!
//! ```
//! use campus_rbac::{catalog, evaluate, AccessQuery, Action, Resource};
//! use campus_types::{AdminLevel, PrincipalCategory, PrincipalId, ScopeMemberships};
//!
//! let teacher = campus_rbac::resolve_category(
//!     PrincipalId::new(),
//!     PrincipalCategory::Teacher,
//!     AdminLevel::None,
//!     Vec::new(),
//!     ScopeMemberships::new(),
//! );
//!
//! let create_exam = AccessQuery::new(Resource::EXAMS, Action::CREATE);
//! assert!(evaluate(&teacher, &create_exam).is_allowed());
//!
//! let create_user = AccessQuery::new(Resource::USERS, Action::CREATE);
//! assert!(evaluate(&teacher, &create_user).is_denied());
//! ```

use crate::{AccessDecision, AccessQuery, DenialReason, Principal, Resource};

/// Record-level ownership hook.
///
/// The engine decides category-level access; whether a principal owns a
/// specific record is knowledge only the hosting application has
/// (a teacher owns the exams they authored, a parent owns their own
/// children's records). Implementations live in the consumer.
///
/// # Example
///
/// ```
/// use campus_rbac::{OwnershipPolicy, Principal, Resource};
///
/// /// Grants ownership of nothing. Every record-level query falls
/// /// back to its category-level outcome.
/// struct NoOwnership;
///
/// impl OwnershipPolicy for NoOwnership {
///     fn owns(&self, _principal: &Principal, _resource: Resource, _resource_id: &str) -> bool {
///         false
///     }
/// }
/// ```
pub trait OwnershipPolicy {
    /// Returns `true` if the principal owns the identified record.
    fn owns(&self, principal: &Principal, resource: Resource, resource_id: &str) -> bool;
}

/// Evaluates a query against a principal.
///
/// Record-level queries (those carrying a `resource_id`) are allowed by
/// default; use [`evaluate_with`] to gate them on ownership.
#[must_use]
pub fn evaluate(principal: &Principal, query: &AccessQuery) -> AccessDecision {
    let decision = decide(principal, query, None);
    audit(principal, query, &decision);
    decision
}

/// Evaluates a query, consulting `ownership` for record-level queries.
///
/// The grant, scope, and override steps run exactly as in [`evaluate`].
/// When they neither deny nor short-circuit and the query carries a
/// `resource_id`, the decision is delegated to `ownership.owns(..)`:
/// owned records are allowed, unowned records are denied with
/// [`DenialReason::NotOwner`].
#[must_use]
pub fn evaluate_with(
    principal: &Principal,
    query: &AccessQuery,
    ownership: &dyn OwnershipPolicy,
) -> AccessDecision {
    let decision = decide(principal, query, Some(ownership));
    audit(principal, query, &decision);
    decision
}

fn decide(
    principal: &Principal,
    query: &AccessQuery,
    ownership: Option<&dyn OwnershipPolicy>,
) -> AccessDecision {
    if !principal.has_resource_permission(query.resource, query.action) {
        return AccessDecision::Denied(DenialReason::MissingGrant {
            resource: query.resource,
            action: query.action,
        });
    }

    // Raw membership test, deliberately not has_institute_access: the
    // derived predicate's super-admin bypass is not part of this step.
    if let Some(institute) = &query.institute {
        if !principal.institutes().is_empty() && !principal.memberships().in_institute(institute) {
            return AccessDecision::Denied(DenialReason::InstituteScope {
                institute: institute.clone(),
            });
        }
    }

    if principal.active_assignments().next().is_some() {
        return AccessDecision::Allowed;
    }

    if let (Some(resource_id), Some(policy)) = (&query.resource_id, ownership) {
        if !policy.owns(principal, query.resource, resource_id) {
            return AccessDecision::Denied(DenialReason::NotOwner {
                resource: query.resource,
                resource_id: resource_id.clone(),
            });
        }
    }

    AccessDecision::Allowed
}

fn audit(principal: &Principal, query: &AccessQuery, decision: &AccessDecision) {
    match decision {
        AccessDecision::Allowed => {
            tracing::debug!(
                "Access allowed: {} → {} on {}",
                principal,
                query.action,
                query.resource
            );
        }
        AccessDecision::Denied(reason) => {
            tracing::warn!(
                "Access denied: {} → {} on {} ({})",
                principal,
                query.action,
                query.resource,
                reason
            );
        }
    }
}
