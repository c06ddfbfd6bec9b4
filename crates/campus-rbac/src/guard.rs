//! Request-side guard adapter.
//!
//! [`Guard`] borrows a resolved [`Principal`] and exposes the decision
//! engine as short boolean and decision calls, the shape middleware and
//! request handlers want. It holds no state of its own and adds no
//! rules; every call delegates to [`evaluate`](crate::evaluate).

use crate::{evaluate, AccessDecision, AccessQuery, Action, Principal, Resource};

/// A borrowed view of a principal for gating requests.
///
/// # Example
///
/// ```
/// use campus_rbac::{Action, Guard, Resource};
/// use campus_types::{AdminLevel, PrincipalCategory, PrincipalId, ScopeMemberships};
///
/// let teacher = campus_rbac::resolve_category(
///     PrincipalId::new(),
///     PrincipalCategory::Teacher,
///     AdminLevel::None,
///     Vec::new(),
///     ScopeMemberships::new(),
/// );
///
/// let guard = Guard::new(&teacher);
/// assert!(guard.can(Resource::EXAMS, Action::CREATE));
/// assert!(!guard.can(Resource::USERS, Action::CREATE));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Guard<'a> {
    principal: &'a Principal,
}

impl<'a> Guard<'a> {
    /// Wraps a resolved principal.
    #[must_use]
    pub fn new(principal: &'a Principal) -> Self {
        Self { principal }
    }

    /// The guarded principal.
    #[must_use]
    pub fn principal(&self) -> &Principal {
        self.principal
    }

    /// Returns `true` if a bare resource/action query is allowed.
    #[must_use]
    pub fn can(&self, resource: Resource, action: Action) -> bool {
        self.check(&AccessQuery::new(resource, action))
    }

    /// Returns `true` if the full query is allowed.
    #[must_use]
    pub fn check(&self, query: &AccessQuery) -> bool {
        self.decision(query).is_allowed()
    }

    /// Runs the full decision pipeline for the query.
    #[must_use]
    pub fn decision(&self, query: &AccessQuery) -> AccessDecision {
        evaluate(self.principal, query)
    }
}
