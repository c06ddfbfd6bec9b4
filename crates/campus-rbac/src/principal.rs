//! The resolved principal snapshot.

use crate::{catalog, Action, AdminAssignment, Permission, Resource};
use campus_types::{
    AdminLevel, ClassId, DepartmentId, InstituteId, PrincipalCategory, PrincipalId,
    ScopeMemberships, SubjectId,
};
use serde::{Deserialize, Serialize};

/// The effective access-control identity every decision is made against.
///
/// A `Principal` combines:
///
/// - **Who**: id, [`PrincipalCategory`], [`AdminLevel`]
/// - **What**: the category template's permission/resource/action sets,
///   copied verbatim at resolve time
/// - **Where**: organizational scope memberships
/// - **Overrides**: the administrative assignments on record
///
/// # Immutability
///
/// Snapshots are immutable value types. [`with_assignments`] and
/// [`with_memberships`] return new snapshots rather than modifying the
/// existing one, so stale snapshots already handed to callers remain
/// internally consistent and concurrent holders never observe each
/// other's updates. The invariant that the permission/resource/action
/// sets equal the template defaults can therefore never be broken after
/// construction.
///
/// # Why no `Default`?
///
/// There is no sensible default identity, and an accidental
/// `Principal::default()` would silently grant the Student template.
/// Construct through [`resolve`](crate::resolve) or
/// [`Principal::anonymous`].
///
/// # Example
///
/// ```
/// use campus_rbac::{resolve, Action, Permission, Resource};
/// use campus_types::{AdminLevel, PrincipalId, ScopeMemberships};
///
/// let teacher = resolve(
///     PrincipalId::new(),
///     "teacher",
///     AdminLevel::None,
///     Vec::new(),
///     ScopeMemberships::new(),
/// );
///
/// assert!(teacher.has_permission(Permission::MANAGE_EXAMS));
/// assert!(teacher.has_resource_permission(Resource::EXAMS, Action::CREATE));
/// assert!(!teacher.has_resource_permission(Resource::USERS, Action::CREATE));
/// ```
///
/// [`with_assignments`]: Principal::with_assignments
/// [`with_memberships`]: Principal::with_memberships
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    id: PrincipalId,
    category: PrincipalCategory,
    admin_level: AdminLevel,
    permissions: Permission,
    resources: Resource,
    actions: Action,
    assignments: Vec<AdminAssignment>,
    memberships: ScopeMemberships,
}

impl Principal {
    pub(crate) fn from_parts(
        id: PrincipalId,
        category: PrincipalCategory,
        admin_level: AdminLevel,
        permissions: Permission,
        resources: Resource,
        actions: Action,
        assignments: Vec<AdminAssignment>,
        memberships: ScopeMemberships,
    ) -> Self {
        Self {
            id,
            category,
            admin_level,
            permissions,
            resources,
            actions,
            assignments,
            memberships,
        }
    }

    /// Resolves a principal for a caller with no identity at all.
    ///
    /// Anonymous callers get a least-privilege snapshot: the Student
    /// template with empty assignments and empty memberships — never
    /// "no permissions object".
    #[must_use]
    pub fn anonymous() -> Self {
        let template = &catalog::STUDENT;
        Self {
            id: PrincipalId::new(),
            category: template.category,
            admin_level: AdminLevel::None,
            permissions: template.permissions,
            resources: template.resources,
            actions: template.actions,
            assignments: Vec::new(),
            memberships: ScopeMemberships::new(),
        }
    }

    /// The principal id.
    #[must_use]
    pub fn id(&self) -> PrincipalId {
        self.id
    }

    /// The resolved category.
    #[must_use]
    pub fn category(&self) -> PrincipalCategory {
        self.category
    }

    /// The administrative level, orthogonal to the category.
    #[must_use]
    pub fn admin_level(&self) -> AdminLevel {
        self.admin_level
    }

    /// The permission set (exactly the category template's defaults).
    #[must_use]
    pub fn permissions(&self) -> Permission {
        self.permissions
    }

    /// The resource set the principal may touch.
    #[must_use]
    pub fn accessible_resources(&self) -> Resource {
        self.resources
    }

    /// The action set, global to the principal.
    #[must_use]
    pub fn allowed_actions(&self) -> Action {
        self.actions
    }

    /// The administrative assignments on record.
    #[must_use]
    pub fn assignments(&self) -> &[AdminAssignment] {
        &self.assignments
    }

    /// Assignments currently counting as administrative overrides.
    pub fn active_assignments(&self) -> impl Iterator<Item = &AdminAssignment> {
        self.assignments
            .iter()
            .filter(|assignment| assignment.counts_as_override())
    }

    /// The organizational scope memberships.
    #[must_use]
    pub fn memberships(&self) -> &ScopeMemberships {
        &self.memberships
    }

    /// Institute memberships.
    #[must_use]
    pub fn institutes(&self) -> &[InstituteId] {
        self.memberships.institutes()
    }

    /// Department memberships.
    #[must_use]
    pub fn departments(&self) -> &[DepartmentId] {
        self.memberships.departments()
    }

    /// Class memberships.
    #[must_use]
    pub fn classes(&self) -> &[ClassId] {
        self.memberships.classes()
    }

    /// Subject memberships.
    #[must_use]
    pub fn subjects(&self) -> &[SubjectId] {
        self.memberships.subjects()
    }

    // ------------------------------------------------------------------
    // Grant evaluation (pure, total)
    // ------------------------------------------------------------------

    /// Returns `true` iff the permission is in the principal's set.
    ///
    /// A multi-flag argument requires every flag to be held.
    #[must_use]
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(permission)
    }

    /// Returns `true` iff the resource is in the principal's resource
    /// set **and** the action is in its action set.
    ///
    /// The two checks are independent: the action set is global to the
    /// principal, not keyed per resource, so any generally-granted
    /// action is permitted on any generally-granted resource even if
    /// that specific pairing was never intentionally co-granted. This
    /// is the upstream model's coarse-graining, preserved as-is.
    #[must_use]
    pub fn has_resource_permission(&self, resource: Resource, action: Action) -> bool {
        self.resources.contains(resource) && self.actions.contains(action)
    }

    // ------------------------------------------------------------------
    // Derived predicates (category/level membership tests only)
    // ------------------------------------------------------------------

    /// Super admin by category or by administrative level.
    #[must_use]
    pub fn is_super_admin(&self) -> bool {
        self.category == PrincipalCategory::SuperAdmin
            || self.admin_level == AdminLevel::SuperAdmin
    }

    /// Any administrative identity: an admin category or any
    /// administrative level.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(
            self.category,
            PrincipalCategory::SuperAdmin
                | PrincipalCategory::Admin
                | PrincipalCategory::InstituteAdmin
        ) || self.admin_level.is_administrative()
    }

    /// Category test.
    #[must_use]
    pub fn is_teacher(&self) -> bool {
        self.category == PrincipalCategory::Teacher
    }

    /// Category test.
    #[must_use]
    pub fn is_student(&self) -> bool {
        self.category == PrincipalCategory::Student
    }

    /// Category test.
    #[must_use]
    pub fn is_parent(&self) -> bool {
        self.category == PrincipalCategory::Parent
    }

    /// Category test.
    #[must_use]
    pub fn is_staff(&self) -> bool {
        self.category == PrincipalCategory::Staff
    }

    /// Super admins always pass; otherwise an institute membership test.
    #[must_use]
    pub fn has_institute_access(&self, institute: &InstituteId) -> bool {
        self.is_super_admin() || self.memberships.in_institute(institute)
    }

    /// Super admins always pass; otherwise a department membership test.
    #[must_use]
    pub fn has_department_access(&self, department: &DepartmentId) -> bool {
        self.is_super_admin() || self.memberships.in_department(department)
    }

    /// Super admins always pass; otherwise a class membership test.
    #[must_use]
    pub fn has_class_access(&self, class: &ClassId) -> bool {
        self.is_super_admin() || self.memberships.in_class(class)
    }

    /// Super admins always pass; otherwise a subject membership test.
    #[must_use]
    pub fn has_subject_access(&self, subject: &SubjectId) -> bool {
        self.is_super_admin() || self.memberships.in_subject(subject)
    }

    // ------------------------------------------------------------------
    // Snapshot replacement
    // ------------------------------------------------------------------

    /// Returns a new snapshot carrying a replaced assignment list.
    #[must_use]
    pub fn with_assignments(&self, assignments: Vec<AdminAssignment>) -> Self {
        Self {
            assignments,
            ..self.clone()
        }
    }

    /// Returns a new snapshot carrying replaced scope memberships.
    #[must_use]
    pub fn with_memberships(&self, memberships: ScopeMemberships) -> Self {
        Self {
            memberships,
            ..self.clone()
        }
    }
}

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}/{}", self.id, self.category, self.admin_level)
    }
}
