//! Identifier types for the campus platform.
//!
//! Principal and assignment ids are UUID-based; organizational scope ids
//! (institute, department, class, subject) are opaque strings because the
//! external identity store owns their format — we never parse or
//! interpret them, only compare for membership.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for a principal (the actor every access decision is about).
///
/// A principal id identifies *who* is acting, separate from *what they
/// are allowed to do*. Permission is determined by the resolved
/// `Principal` snapshot in `campus-rbac`, never by the id itself.
///
/// # Example
///
/// ```
/// use campus_types::PrincipalId;
///
/// let a = PrincipalId::new();
/// let b = PrincipalId::new();
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrincipalId(pub Uuid);

impl PrincipalId {
    /// Creates a new [`PrincipalId`] with a random UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for PrincipalId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "principal:{}", self.0)
    }
}

/// Identifier for an administrative assignment record.
///
/// Assignments are created by an external administrative workflow; this
/// id is only ever carried through, never generated by the decision core
/// outside of tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssignmentId(pub Uuid);

impl AssignmentId {
    /// Creates a new [`AssignmentId`] with a random UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for AssignmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AssignmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "assignment:{}", self.0)
    }
}

macro_rules! scope_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a raw identifier string from the identity store.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the raw identifier string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, ":{}"), self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

scope_id!(
    /// Opaque institute identifier.
    ///
    /// # Example
    ///
    /// ```
    /// use campus_types::InstituteId;
    ///
    /// let inst = InstituteId::new("inst-01");
    /// assert_eq!(inst.as_str(), "inst-01");
    /// assert_eq!(inst.to_string(), "institute:inst-01");
    /// ```
    InstituteId,
    "institute"
);

scope_id!(
    /// Opaque department identifier.
    DepartmentId,
    "department"
);

scope_id!(
    /// Opaque class identifier.
    ClassId,
    "class"
);

scope_id!(
    /// Opaque subject identifier.
    SubjectId,
    "subject"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn principal_id_uniqueness() {
        assert_ne!(PrincipalId::new(), PrincipalId::new());
    }

    #[test]
    fn principal_id_display() {
        let id = PrincipalId::new();
        let display = format!("{id}");
        assert!(display.starts_with("principal:"));
        assert!(display.contains(&id.uuid().to_string()));
    }

    #[test]
    fn assignment_id_display() {
        let id = AssignmentId::new();
        assert!(format!("{id}").starts_with("assignment:"));
    }

    #[test]
    fn scope_id_roundtrip() {
        let inst = InstituteId::new("inst-01");
        assert_eq!(inst.as_str(), "inst-01");
        assert_eq!(inst, InstituteId::from("inst-01"));

        let dept = DepartmentId::new("science");
        assert_eq!(dept.to_string(), "department:science");
    }

    #[test]
    fn scope_id_serde_transparent() {
        let class = ClassId::new("grade-7b");
        let json = serde_json::to_string(&class).expect("serialize");
        assert_eq!(json, "\"grade-7b\"");
        let parsed: ClassId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, class);
    }

    #[test]
    fn distinct_scope_types_do_not_mix() {
        // Compile-time property really, but keep the values honest.
        let subject = SubjectId::new("math");
        assert_eq!(subject.to_string(), "subject:math");
    }
}
