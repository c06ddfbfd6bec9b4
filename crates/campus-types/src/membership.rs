//! Organizational scope memberships.

use crate::{ClassId, DepartmentId, InstituteId, SubjectId};
use serde::{Deserialize, Serialize};

/// The organizational partitions a principal belongs to.
///
/// Each list is an order-irrelevant set of opaque ids sourced from the
/// external identity store. The lists are facts about the principal, not
/// grants: scope checks consult them, the role catalog never does.
///
/// Memberships are immutable values; `with_*` methods return extended
/// copies rather than mutating in place, so snapshots already handed to
/// callers stay internally consistent.
///
/// # Example
///
/// ```
/// use campus_types::{InstituteId, ScopeMemberships};
///
/// let memberships = ScopeMemberships::new()
///     .with_institute(InstituteId::new("inst-01"));
///
/// assert!(memberships.in_institute(&InstituteId::new("inst-01")));
/// assert!(!memberships.in_institute(&InstituteId::new("inst-02")));
/// assert!(memberships.departments().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeMemberships {
    #[serde(default)]
    institutes: Vec<InstituteId>,
    #[serde(default)]
    departments: Vec<DepartmentId>,
    #[serde(default)]
    classes: Vec<ClassId>,
    #[serde(default)]
    subjects: Vec<SubjectId>,
}

impl ScopeMemberships {
    /// Creates empty memberships (no recorded scopes).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates memberships from explicit lists.
    #[must_use]
    pub fn from_lists(
        institutes: Vec<InstituteId>,
        departments: Vec<DepartmentId>,
        classes: Vec<ClassId>,
        subjects: Vec<SubjectId>,
    ) -> Self {
        Self {
            institutes,
            departments,
            classes,
            subjects,
        }
    }

    /// Returns a copy with an additional institute membership.
    #[must_use]
    pub fn with_institute(mut self, institute: InstituteId) -> Self {
        self.institutes.push(institute);
        self
    }

    /// Returns a copy with an additional department membership.
    #[must_use]
    pub fn with_department(mut self, department: DepartmentId) -> Self {
        self.departments.push(department);
        self
    }

    /// Returns a copy with an additional class membership.
    #[must_use]
    pub fn with_class(mut self, class: ClassId) -> Self {
        self.classes.push(class);
        self
    }

    /// Returns a copy with an additional subject membership.
    #[must_use]
    pub fn with_subject(mut self, subject: SubjectId) -> Self {
        self.subjects.push(subject);
        self
    }

    /// The institute memberships.
    #[must_use]
    pub fn institutes(&self) -> &[InstituteId] {
        &self.institutes
    }

    /// The department memberships.
    #[must_use]
    pub fn departments(&self) -> &[DepartmentId] {
        &self.departments
    }

    /// The class memberships.
    #[must_use]
    pub fn classes(&self) -> &[ClassId] {
        &self.classes
    }

    /// The subject memberships.
    #[must_use]
    pub fn subjects(&self) -> &[SubjectId] {
        &self.subjects
    }

    /// Membership test for an institute.
    #[must_use]
    pub fn in_institute(&self, institute: &InstituteId) -> bool {
        self.institutes.contains(institute)
    }

    /// Membership test for a department.
    #[must_use]
    pub fn in_department(&self, department: &DepartmentId) -> bool {
        self.departments.contains(department)
    }

    /// Membership test for a class.
    #[must_use]
    pub fn in_class(&self, class: &ClassId) -> bool {
        self.classes.contains(class)
    }

    /// Membership test for a subject.
    #[must_use]
    pub fn in_subject(&self, subject: &SubjectId) -> bool {
        self.subjects.contains(subject)
    }

    /// Returns `true` if no scope of any kind is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.institutes.is_empty()
            && self.departments.is_empty()
            && self.classes.is_empty()
            && self.subjects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_by_default() {
        let memberships = ScopeMemberships::new();
        assert!(memberships.is_empty());
        assert!(memberships.institutes().is_empty());
        assert!(!memberships.in_institute(&InstituteId::new("inst-01")));
    }

    #[test]
    fn with_methods_extend_a_copy() {
        let base = ScopeMemberships::new();
        let extended = base
            .clone()
            .with_institute(InstituteId::new("inst-01"))
            .with_class(ClassId::new("grade-7b"));

        assert!(base.is_empty());
        assert!(extended.in_institute(&InstituteId::new("inst-01")));
        assert!(extended.in_class(&ClassId::new("grade-7b")));
        assert!(!extended.in_subject(&SubjectId::new("math")));
    }

    #[test]
    fn from_lists_preserves_all() {
        let memberships = ScopeMemberships::from_lists(
            vec![InstituteId::new("inst-01")],
            vec![DepartmentId::new("science")],
            vec![ClassId::new("grade-7b")],
            vec![SubjectId::new("math"), SubjectId::new("physics")],
        );

        assert!(memberships.in_department(&DepartmentId::new("science")));
        assert_eq!(memberships.subjects().len(), 2);
        assert!(!memberships.is_empty());
    }

    #[test]
    fn serde_defaults_missing_lists() {
        let memberships: ScopeMemberships =
            serde_json::from_str(r#"{"institutes": ["inst-01"]}"#).expect("deserialize");
        assert!(memberships.in_institute(&InstituteId::new("inst-01")));
        assert!(memberships.departments().is_empty());
    }
}
