//! The role catalog.
//!
//! One [`RoleTemplate`] per [`PrincipalCategory`], written as `const`
//! data. The catalog is process-wide constant state: populated at
//! compile time, never mutated, safe for unlimited concurrent readers
//! with no locking. [`lookup`] dispatches with an exhaustive match so a
//! new category cannot be added without a template; [`lookup_name`]
//! accepts raw category strings from the identity store and falls back
//! to the Student template (least privilege) for anything unrecognized
//! rather than failing.

use crate::{Action, Permission, Resource};
use campus_types::PrincipalCategory;
use serde::Serialize;

/// The static default grant bundle for one principal category.
///
/// Templates are immutable: resolving a principal copies these sets into
/// the snapshot, it never hands out anything mutable.
///
/// # Example
///
/// ```
/// use campus_rbac::{catalog, Action, Resource};
/// use campus_types::PrincipalCategory;
///
/// let teacher = catalog::lookup(PrincipalCategory::Teacher);
/// assert!(teacher.resources.contains(Resource::EXAMS));
/// assert!(!teacher.resources.contains(Resource::USERS));
/// assert!(teacher.actions.contains(Action::CREATE));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleTemplate {
    /// The category this template belongs to.
    pub category: PrincipalCategory,
    /// Short human-readable description.
    pub description: &'static str,
    /// Default permission set.
    pub permissions: Permission,
    /// Default resource set.
    pub resources: Resource,
    /// Default action set (global, not keyed per resource).
    pub actions: Action,
    /// System-defined template (as opposed to a future custom role).
    pub system: bool,
}

/// Platform-wide administrator: everything.
pub const SUPER_ADMIN: RoleTemplate = RoleTemplate {
    category: PrincipalCategory::SuperAdmin,
    description: "Platform-wide administrator with unrestricted access",
    permissions: Permission::all(),
    resources: Resource::all(),
    actions: Action::all(),
    system: true,
};

/// System administrator: everything except billing and security.
pub const ADMIN: RoleTemplate = RoleTemplate {
    category: PrincipalCategory::Admin,
    description: "System administrator below super admin",
    permissions: Permission::all()
        .difference(Permission::MANAGE_BILLING.union(Permission::MANAGE_SECURITY)),
    resources: Resource::all().difference(Resource::BILLING.union(Resource::SECURITY)),
    actions: Action::all(),
    system: true,
};

/// Institute administrator: runs one institute end to end.
pub const INSTITUTE_ADMIN: RoleTemplate = RoleTemplate {
    category: PrincipalCategory::InstituteAdmin,
    description: "Administrator of a single institute",
    permissions: Permission::ACADEMIC
        .union(Permission::FINANCE)
        .union(Permission::LIBRARY)
        .union(Permission::TRANSPORT)
        .union(Permission::HOSTEL)
        .union(Permission::HR)
        .union(Permission::INVENTORY)
        .union(Permission::COMMERCE)
        .union(Permission::ELEARNING)
        .union(Permission::EVENTS)
        .union(Permission::NOTICES)
        .union(Permission::ANALYTICS)
        .union(Permission::MANAGE_USERS)
        .union(Permission::MANAGE_DEPARTMENTS)
        .union(Permission::USE_AI_TOOLS),
    resources: Resource::ACADEMIC
        .union(Resource::OPERATIONS)
        .union(Resource::USERS)
        .union(Resource::DEPARTMENTS)
        .union(Resource::FINANCE)
        .union(Resource::HR)
        .union(Resource::COURSES)
        .union(Resource::EVENTS)
        .union(Resource::NOTICES)
        .union(Resource::REPORTS)
        .union(Resource::ANALYTICS)
        .union(Resource::AI_TOOLS),
    actions: Action::all().difference(Action::CONFIGURE),
    system: true,
};

/// Teaching staff: academic records plus e-learning authoring.
pub const TEACHER: RoleTemplate = RoleTemplate {
    category: PrincipalCategory::Teacher,
    description: "Teaching staff",
    permissions: Permission::MANAGE_ATTENDANCE
        .union(Permission::MANAGE_EXAMS)
        .union(Permission::MANAGE_GRADES)
        .union(Permission::VIEW_ACADEMIC_REPORTS)
        .union(Permission::ELEARNING)
        .union(Permission::SEND_NOTIFICATIONS)
        .union(Permission::USE_AI_TOOLS),
    resources: Resource::ACADEMIC
        .union(Resource::COURSES)
        .union(Resource::REPORTS)
        .union(Resource::NOTICES)
        .union(Resource::AI_TOOLS),
    actions: Action::CREATE
        .union(Action::READ)
        .union(Action::UPDATE)
        .union(Action::LIST)
        .union(Action::EXPORT)
        .union(Action::PUBLISH)
        .union(Action::GENERATE)
        .union(Action::SCHEDULE)
        .union(Action::ASSIGN),
    system: true,
};

/// Enrolled student: read access to their academic surface.
///
/// Also the deterministic fallback for unrecognized categories and for
/// anonymous resolution — everything here is least privilege.
pub const STUDENT: RoleTemplate = RoleTemplate {
    category: PrincipalCategory::Student,
    description: "Enrolled student",
    permissions: Permission::USE_AI_TOOLS,
    resources: Resource::ATTENDANCE
        .union(Resource::EXAMS)
        .union(Resource::GRADES)
        .union(Resource::TIMETABLE)
        .union(Resource::LIBRARY)
        .union(Resource::COURSES)
        .union(Resource::EVENTS)
        .union(Resource::NOTICES)
        .union(Resource::AI_TOOLS),
    actions: Action::READ.union(Action::LIST),
    system: true,
};

/// Parent or guardian: read access to their ward's records plus fees.
pub const PARENT: RoleTemplate = RoleTemplate {
    category: PrincipalCategory::Parent,
    description: "Parent or guardian",
    permissions: Permission::empty(),
    resources: Resource::ATTENDANCE
        .union(Resource::GRADES)
        .union(Resource::TIMETABLE)
        .union(Resource::FINANCE)
        .union(Resource::EVENTS)
        .union(Resource::NOTICES),
    actions: Action::READ.union(Action::LIST),
    system: true,
};

/// Non-teaching staff: campus operations.
pub const STAFF: RoleTemplate = RoleTemplate {
    category: PrincipalCategory::Staff,
    description: "Non-teaching operational staff",
    permissions: Permission::ISSUE_BOOKS
        .union(Permission::MANAGE_CATALOG)
        .union(Permission::TRACK_VEHICLES)
        .union(Permission::ALLOCATE_ROOMS)
        .union(Permission::MANAGE_INVENTORY)
        .union(Permission::SEND_NOTIFICATIONS),
    resources: Resource::OPERATIONS
        .union(Resource::EVENTS)
        .union(Resource::NOTICES),
    actions: Action::CREATE
        .union(Action::READ)
        .union(Action::UPDATE)
        .union(Action::LIST)
        .union(Action::ASSIGN)
        .union(Action::UNASSIGN),
    system: true,
};

/// Returns the template for a category.
///
/// Exhaustive over [`PrincipalCategory`]: adding a category without a
/// template is a compile error, so the catalog can never be partial.
#[must_use]
pub fn lookup(category: PrincipalCategory) -> &'static RoleTemplate {
    match category {
        PrincipalCategory::SuperAdmin => &SUPER_ADMIN,
        PrincipalCategory::Admin => &ADMIN,
        PrincipalCategory::InstituteAdmin => &INSTITUTE_ADMIN,
        PrincipalCategory::Teacher => &TEACHER,
        PrincipalCategory::Student => &STUDENT,
        PrincipalCategory::Parent => &PARENT,
        PrincipalCategory::Staff => &STAFF,
    }
}

/// Returns the template for a raw category name from the identity store.
///
/// Unrecognized names deterministically fall back to the Student
/// template (least privilege) rather than failing — a configuration gap
/// is recovered locally, never surfaced to the caller.
///
/// # Example
///
/// ```
/// use campus_rbac::catalog;
/// use campus_types::PrincipalCategory;
///
/// assert_eq!(catalog::lookup_name("teacher").category, PrincipalCategory::Teacher);
/// assert_eq!(catalog::lookup_name("wizard").category, PrincipalCategory::Student);
/// ```
#[must_use]
pub fn lookup_name(raw: &str) -> &'static RoleTemplate {
    match PrincipalCategory::parse(raw) {
        Some(category) => lookup(category),
        None => &STUDENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_its_template() {
        for category in PrincipalCategory::ALL {
            assert_eq!(lookup(category).category, category);
        }
    }

    #[test]
    fn super_admin_has_everything() {
        assert_eq!(SUPER_ADMIN.permissions, Permission::all());
        assert_eq!(SUPER_ADMIN.resources, Resource::all());
        assert_eq!(SUPER_ADMIN.actions, Action::all());
    }

    #[test]
    fn admin_excludes_billing_and_security() {
        assert!(!ADMIN.permissions.contains(Permission::MANAGE_BILLING));
        assert!(!ADMIN.permissions.contains(Permission::MANAGE_SECURITY));
        assert!(!ADMIN.resources.contains(Resource::BILLING));
        assert!(!ADMIN.resources.contains(Resource::SECURITY));
        assert!(ADMIN.permissions.contains(Permission::MANAGE_USERS));
    }

    #[test]
    fn teacher_fixture() {
        assert!(TEACHER.resources.contains(Resource::EXAMS));
        assert!(TEACHER.actions.contains(Action::CREATE));
        assert!(!TEACHER.resources.contains(Resource::USERS));
        assert!(!TEACHER.permissions.contains(Permission::MANAGE_USERS));
    }

    #[test]
    fn student_is_least_privilege() {
        assert_eq!(STUDENT.actions, Action::READ | Action::LIST);
        assert!(!STUDENT.resources.contains(Resource::USERS));
        assert!(!STUDENT.resources.contains(Resource::FINANCE));
        assert!(STUDENT.permissions.contains(Permission::USE_AI_TOOLS));
    }

    #[test]
    fn parent_is_read_only() {
        assert_eq!(PARENT.actions, Action::READ | Action::LIST);
        assert!(PARENT.resources.contains(Resource::FINANCE));
        assert!(PARENT.permissions.is_empty());
    }

    #[test]
    fn lookup_name_exact_and_case_insensitive() {
        assert_eq!(lookup_name("staff").category, PrincipalCategory::Staff);
        assert_eq!(
            lookup_name("SUPER_ADMIN").category,
            PrincipalCategory::SuperAdmin
        );
    }

    #[test]
    fn lookup_name_falls_back_to_student() {
        for raw in ["", "wizard", "admin ", "principal"] {
            let template = lookup_name(raw);
            assert_eq!(template.category, PrincipalCategory::Student);
            assert_eq!(template.permissions, STUDENT.permissions);
            assert_eq!(template.resources, STUDENT.resources);
            assert_eq!(template.actions, STUDENT.actions);
        }
    }

    #[test]
    fn all_templates_are_system() {
        for category in PrincipalCategory::ALL {
            assert!(lookup(category).system);
        }
    }
}
