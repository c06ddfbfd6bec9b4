//! Principal category and administrative level.
//!
//! Both are closed enumerations so that the role catalog and any
//! dispatch over them stay exhaustive at compile time. The external
//! identity store transmits them as snake_case strings; [`parse`]
//! accepts those case-insensitively and returns `None` for anything
//! unknown — the caller decides the fallback (the resolver falls back to
//! [`PrincipalCategory::Student`], least privilege).
//!
//! [`parse`]: PrincipalCategory::parse

use serde::{Deserialize, Serialize};

/// The category a principal belongs to.
///
/// Exactly one role template exists per category. A principal carries a
/// category *and* an [`AdminLevel`]; the two are orthogonal (a Teacher
/// may also be a department admin).
///
/// # Example
///
/// ```
/// use campus_types::PrincipalCategory;
///
/// assert_eq!(PrincipalCategory::parse("teacher"), Some(PrincipalCategory::Teacher));
/// assert_eq!(PrincipalCategory::parse("TEACHER"), Some(PrincipalCategory::Teacher));
/// assert_eq!(PrincipalCategory::parse("wizard"), None);
/// assert_eq!(PrincipalCategory::Teacher.as_str(), "teacher");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrincipalCategory {
    /// Platform-wide administrator; passes every check.
    SuperAdmin,
    /// System-level administrator below super admin.
    Admin,
    /// Administrator of a single institute.
    InstituteAdmin,
    /// Teaching staff.
    Teacher,
    /// Enrolled student. Also the least-privilege fallback category.
    Student,
    /// Parent or guardian of a student.
    Parent,
    /// Non-teaching staff (library, transport, hostel, front office).
    Staff,
}

impl PrincipalCategory {
    /// All categories, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::SuperAdmin,
        Self::Admin,
        Self::InstituteAdmin,
        Self::Teacher,
        Self::Student,
        Self::Parent,
        Self::Staff,
    ];

    /// Returns the snake_case wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::Admin => "admin",
            Self::InstituteAdmin => "institute_admin",
            Self::Teacher => "teacher",
            Self::Student => "student",
            Self::Parent => "parent",
            Self::Staff => "staff",
        }
    }

    /// Parses a category name (case-insensitive).
    ///
    /// Returns `None` for unknown names; callers choose the fallback.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "super_admin" => Some(Self::SuperAdmin),
            "admin" => Some(Self::Admin),
            "institute_admin" => Some(Self::InstituteAdmin),
            "teacher" => Some(Self::Teacher),
            "student" => Some(Self::Student),
            "parent" => Some(Self::Parent),
            "staff" => Some(Self::Staff),
            _ => None,
        }
    }
}

impl std::fmt::Display for PrincipalCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The administrative level a principal holds, orthogonal to its
/// [`PrincipalCategory`].
///
/// Administrative levels are granted by an external administrative
/// workflow. [`AdminLevel::None`] is the default for principals without
/// any administrative role.
///
/// # Example
///
/// ```
/// use campus_types::AdminLevel;
///
/// assert!(AdminLevel::SuperAdmin.is_administrative());
/// assert!(!AdminLevel::None.is_administrative());
/// assert_eq!(AdminLevel::parse("department_admin"), Some(AdminLevel::DepartmentAdmin));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminLevel {
    /// Platform-wide administrator.
    SuperAdmin,
    /// Operates the platform itself (settings, billing, security).
    SystemAdmin,
    /// Administers one institute.
    InstituteAdmin,
    /// Administers one department within an institute.
    DepartmentAdmin,
    /// Administers a faculty group.
    FacultyAdmin,
    /// No administrative role.
    #[default]
    None,
}

impl AdminLevel {
    /// Returns the snake_case wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::SystemAdmin => "system_admin",
            Self::InstituteAdmin => "institute_admin",
            Self::DepartmentAdmin => "department_admin",
            Self::FacultyAdmin => "faculty_admin",
            Self::None => "none",
        }
    }

    /// Parses a level name (case-insensitive). `None` for unknown names.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "super_admin" => Some(Self::SuperAdmin),
            "system_admin" => Some(Self::SystemAdmin),
            "institute_admin" => Some(Self::InstituteAdmin),
            "department_admin" => Some(Self::DepartmentAdmin),
            "faculty_admin" => Some(Self::FacultyAdmin),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    /// Returns `true` for any level other than [`AdminLevel::None`].
    #[must_use]
    pub fn is_administrative(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl std::fmt::Display for AdminLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_string_roundtrip() {
        for category in PrincipalCategory::ALL {
            assert_eq!(PrincipalCategory::parse(category.as_str()), Some(category));
            assert_eq!(category.to_string(), category.as_str());
        }
    }

    #[test]
    fn category_parse_case_insensitive() {
        assert_eq!(
            PrincipalCategory::parse("Institute_Admin"),
            Some(PrincipalCategory::InstituteAdmin)
        );
        assert_eq!(
            PrincipalCategory::parse("STUDENT"),
            Some(PrincipalCategory::Student)
        );
    }

    #[test]
    fn category_parse_unknown() {
        assert_eq!(PrincipalCategory::parse("principal"), None);
        assert_eq!(PrincipalCategory::parse(""), None);
    }

    #[test]
    fn category_serde_snake_case() {
        let json = serde_json::to_string(&PrincipalCategory::SuperAdmin).expect("serialize");
        assert_eq!(json, "\"super_admin\"");
        let parsed: PrincipalCategory = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, PrincipalCategory::SuperAdmin);
    }

    #[test]
    fn admin_level_roundtrip() {
        for level in [
            AdminLevel::SuperAdmin,
            AdminLevel::SystemAdmin,
            AdminLevel::InstituteAdmin,
            AdminLevel::DepartmentAdmin,
            AdminLevel::FacultyAdmin,
            AdminLevel::None,
        ] {
            assert_eq!(AdminLevel::parse(level.as_str()), Some(level));
        }
    }

    #[test]
    fn admin_level_default_is_none() {
        assert_eq!(AdminLevel::default(), AdminLevel::None);
        assert!(!AdminLevel::default().is_administrative());
    }

    #[test]
    fn admin_level_is_administrative() {
        assert!(AdminLevel::FacultyAdmin.is_administrative());
        assert!(AdminLevel::SystemAdmin.is_administrative());
        assert!(!AdminLevel::None.is_administrative());
    }
}
