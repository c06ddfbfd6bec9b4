//! Principal resolution.
//!
//! Turns raw identity attributes from the external identity store into
//! an effective [`Principal`] snapshot: look up the category's role
//! template, copy its default sets verbatim, attach assignments and
//! memberships unchanged. Pure, no I/O, idempotent — identical inputs
//! yield value-equal snapshots, so it is safe to call concurrently and
//! repeatedly (on login, on profile change, per request).

use crate::{catalog, AdminAssignment, Principal};
use campus_types::{AdminLevel, PrincipalCategory, PrincipalId, ScopeMemberships};

/// Resolves a principal from a raw category name.
///
/// The category arrives as a string from the identity store; anything
/// [`PrincipalCategory::parse`] does not recognize deterministically
/// falls back to the Student template (least privilege). A configuration
/// gap is recovered locally, never surfaced as an error.
///
/// # Example
///
/// ```
/// use campus_rbac::resolve;
/// use campus_types::{AdminLevel, PrincipalCategory, PrincipalId, ScopeMemberships};
///
/// let p = resolve(
///     PrincipalId::new(),
///     "unknown-category",
///     AdminLevel::None,
///     Vec::new(),
///     ScopeMemberships::new(),
/// );
/// assert_eq!(p.category(), PrincipalCategory::Student);
/// ```
#[must_use]
pub fn resolve(
    id: PrincipalId,
    category: &str,
    admin_level: AdminLevel,
    assignments: Vec<AdminAssignment>,
    memberships: ScopeMemberships,
) -> Principal {
    let parsed = PrincipalCategory::parse(category).unwrap_or(PrincipalCategory::Student);
    resolve_category(id, parsed, admin_level, assignments, memberships)
}

/// Resolves a principal from an already-parsed category.
#[must_use]
pub fn resolve_category(
    id: PrincipalId,
    category: PrincipalCategory,
    admin_level: AdminLevel,
    assignments: Vec<AdminAssignment>,
    memberships: ScopeMemberships,
) -> Principal {
    let template = catalog::lookup(category);
    Principal::from_parts(
        id,
        template.category,
        admin_level,
        template.permissions,
        template.resources,
        template.actions,
        assignments,
        memberships,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_types::InstituteId;

    #[test]
    fn resolve_copies_template_sets() {
        let p = resolve(
            PrincipalId::new(),
            "parent",
            AdminLevel::None,
            Vec::new(),
            ScopeMemberships::new(),
        );
        let template = catalog::lookup(PrincipalCategory::Parent);
        assert_eq!(p.permissions(), template.permissions);
        assert_eq!(p.accessible_resources(), template.resources);
        assert_eq!(p.allowed_actions(), template.actions);
    }

    #[test]
    fn unknown_category_falls_back_to_student_sets() {
        let p = resolve(
            PrincipalId::new(),
            "unknown-category",
            AdminLevel::None,
            Vec::new(),
            ScopeMemberships::new(),
        );
        let student = catalog::lookup(PrincipalCategory::Student);
        assert_eq!(p.category(), PrincipalCategory::Student);
        assert_eq!(p.permissions(), student.permissions);
        assert_eq!(p.accessible_resources(), student.resources);
        assert_eq!(p.allowed_actions(), student.actions);
    }

    #[test]
    fn resolve_is_idempotent_for_identical_inputs() {
        let id = PrincipalId::new();
        let memberships = ScopeMemberships::new().with_institute(InstituteId::new("inst-01"));

        let a = resolve(id, "teacher", AdminLevel::None, Vec::new(), memberships.clone());
        let b = resolve(id, "teacher", AdminLevel::None, Vec::new(), memberships);

        // Value-equal snapshots, not necessarily the same allocation.
        assert_eq!(a, b);
    }

    #[test]
    fn attachments_carried_unchanged() {
        let id = PrincipalId::new();
        let assignment = AdminAssignment::new(id, "inst-admin", PrincipalId::new());
        let memberships = ScopeMemberships::new().with_institute(InstituteId::new("inst-01"));

        let p = resolve_category(
            id,
            PrincipalCategory::InstituteAdmin,
            AdminLevel::InstituteAdmin,
            vec![assignment.clone()],
            memberships.clone(),
        );

        assert_eq!(p.assignments(), &[assignment]);
        assert_eq!(p.memberships(), &memberships);
        assert_eq!(p.admin_level(), AdminLevel::InstituteAdmin);
    }

    #[test]
    fn resolver_never_mutates_the_template() {
        // Resolving twice from the same template must observe identical
        // const data; the snapshot owns copies, not references.
        let before = catalog::lookup(PrincipalCategory::Teacher).permissions;
        let _ = resolve(
            PrincipalId::new(),
            "teacher",
            AdminLevel::None,
            Vec::new(),
            ScopeMemberships::new(),
        );
        assert_eq!(catalog::lookup(PrincipalCategory::Teacher).permissions, before);
    }
}
