//! Access query and decision types.

use crate::{Action, DenialReason, Resource};
use campus_types::{ClassId, DepartmentId, InstituteId, SubjectId};
use serde::{Deserialize, Serialize};

/// A structured access question.
///
/// Resource and action are required at the type level — a query without
/// them cannot be constructed, which eliminates the malformed-query
/// class of caller misuse instead of handling it at runtime. Everything
/// else is optional context.
///
/// # Example
///
/// ```
/// use campus_rbac::{AccessQuery, Action, Resource};
/// use campus_types::InstituteId;
///
/// let query = AccessQuery::new(Resource::EXAMS, Action::CREATE)
///     .with_institute(InstituteId::new("inst-01"));
///
/// assert_eq!(query.resource, Resource::EXAMS);
/// assert!(query.resource_id.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessQuery {
    /// The object category being accessed.
    pub resource: Resource,
    /// The operation being attempted.
    pub action: Action,
    /// Optional specific record id, for ownership extension points.
    #[serde(default)]
    pub resource_id: Option<String>,
    /// Optional institute scope.
    #[serde(default)]
    pub institute: Option<InstituteId>,
    /// Optional department scope.
    #[serde(default)]
    pub department: Option<DepartmentId>,
    /// Optional class scope.
    #[serde(default)]
    pub class: Option<ClassId>,
    /// Optional subject scope.
    #[serde(default)]
    pub subject: Option<SubjectId>,
}

impl AccessQuery {
    /// Creates a query with the required resource and action.
    #[must_use]
    pub fn new(resource: Resource, action: Action) -> Self {
        Self {
            resource,
            action,
            resource_id: None,
            institute: None,
            department: None,
            class: None,
            subject: None,
        }
    }

    /// Returns a copy targeting a specific record.
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    /// Returns a copy scoped to an institute.
    #[must_use]
    pub fn with_institute(mut self, institute: InstituteId) -> Self {
        self.institute = Some(institute);
        self
    }

    /// Returns a copy scoped to a department.
    #[must_use]
    pub fn with_department(mut self, department: DepartmentId) -> Self {
        self.department = Some(department);
        self
    }

    /// Returns a copy scoped to a class.
    #[must_use]
    pub fn with_class(mut self, class: ClassId) -> Self {
        self.class = Some(class);
        self
    }

    /// Returns a copy scoped to a subject.
    #[must_use]
    pub fn with_subject(mut self, subject: SubjectId) -> Self {
        self.subject = Some(subject);
        self
    }
}

/// The outcome of a scoped access decision.
///
/// Every outcome is a normal value; nothing here is retryable or fatal.
///
/// # Example
///
/// ```
/// use campus_rbac::{AccessDecision, Action, DenialReason, Resource};
///
/// let allowed = AccessDecision::Allowed;
/// assert!(allowed.is_allowed());
/// assert_eq!(allowed.reason(), None);
///
/// let denied = AccessDecision::Denied(DenialReason::MissingGrant {
///     resource: Resource::USERS,
///     action: Action::CREATE,
/// });
/// assert!(denied.is_denied());
/// assert!(denied.reason().is_some());
/// assert!(denied.into_result().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// The query is permitted.
    Allowed,
    /// The query is denied, with the rule that denied it.
    Denied(DenialReason),
}

impl AccessDecision {
    /// Returns `true` if the query is permitted.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Returns `true` if the query is denied.
    #[must_use]
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied(_))
    }

    /// The human-readable denial reason, if denied.
    #[must_use]
    pub fn reason(&self) -> Option<String> {
        match self {
            Self::Allowed => None,
            Self::Denied(reason) => Some(reason.to_string()),
        }
    }

    /// The status as a string, for logging.
    #[must_use]
    pub fn status_str(&self) -> &'static str {
        match self {
            Self::Allowed => "allowed",
            Self::Denied(_) => "denied",
        }
    }

    /// Converts into a `Result` for `?`-style gating.
    ///
    /// # Errors
    ///
    /// Returns the [`DenialReason`] when denied.
    pub fn into_result(self) -> Result<(), DenialReason> {
        match self {
            Self::Allowed => Ok(()),
            Self::Denied(reason) => Err(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_fill_optional_context() {
        let query = AccessQuery::new(Resource::GRADES, Action::READ)
            .with_resource_id("grade-123")
            .with_institute(InstituteId::new("inst-01"))
            .with_class(ClassId::new("grade-7b"));

        assert_eq!(query.resource_id.as_deref(), Some("grade-123"));
        assert_eq!(query.institute, Some(InstituteId::new("inst-01")));
        assert!(query.department.is_none());
        assert!(query.subject.is_none());
    }

    #[test]
    fn decision_helpers() {
        let denied = AccessDecision::Denied(DenialReason::InstituteScope {
            institute: InstituteId::new("inst-02"),
        });
        assert!(!denied.is_allowed());
        assert_eq!(denied.status_str(), "denied");
        let reason = denied.reason().expect("denied carries a reason");
        assert!(reason.contains("institute scope denied"));
    }

    #[test]
    fn into_result_maps_both_ways() {
        assert!(AccessDecision::Allowed.into_result().is_ok());

        let err = AccessDecision::Denied(DenialReason::MissingGrant {
            resource: Resource::USERS,
            action: Action::DELETE,
        })
        .into_result()
        .unwrap_err();
        assert_eq!(err.rule(), "grant");
    }

    #[test]
    fn query_serde_roundtrip() {
        let query = AccessQuery::new(Resource::EXAMS, Action::CREATE)
            .with_institute(InstituteId::new("inst-01"));
        let json = serde_json::to_string(&query).expect("serialize");
        let parsed: AccessQuery = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, query);
    }

    #[test]
    fn query_serde_defaults_optional_fields() {
        let parsed: AccessQuery =
            serde_json::from_str(r#"{"resource": "EXAMS", "action": "CREATE"}"#)
                .expect("deserialize");
        assert_eq!(parsed, AccessQuery::new(Resource::EXAMS, Action::CREATE));
    }
}
