//! Action verbs.
//!
//! [`Action`] is a bitflags set: a single flag is the verb carried by an
//! [`AccessQuery`](crate::AccessQuery), a union of flags is the verb set
//! a role template grants. The action set is **global to the principal**,
//! not keyed per resource — `has_resource_permission` checks resource and
//! action independently. This coarse-graining is carried over from the
//! upstream model on purpose; keying actions per resource would change
//! observable authorization outcomes.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Operations a principal may perform.
    ///
    /// # Example
    ///
    /// ```
    /// use campus_rbac::Action;
    ///
    /// let granted = Action::CRUD | Action::EXPORT;
    /// assert!(granted.contains(Action::CREATE));
    /// assert!(!granted.contains(Action::APPROVE));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Action: u32 {
        /// Create a new record.
        const CREATE    = 1 << 0;
        /// Read a single record.
        const READ      = 1 << 1;
        /// Update an existing record.
        const UPDATE    = 1 << 2;
        /// Delete a record.
        const DELETE    = 1 << 3;
        /// List/browse records.
        const LIST      = 1 << 4;
        /// Export records to an external format.
        const EXPORT    = 1 << 5;
        /// Import records from an external format.
        const IMPORT    = 1 << 6;
        /// Approve a pending item.
        const APPROVE   = 1 << 7;
        /// Reject a pending item.
        const REJECT    = 1 << 8;
        /// Publish an item to its audience.
        const PUBLISH   = 1 << 9;
        /// Archive an item.
        const ARCHIVE   = 1 << 10;
        /// Restore an archived item.
        const RESTORE   = 1 << 11;
        /// Assign an item to a target.
        const ASSIGN    = 1 << 12;
        /// Remove an assignment.
        const UNASSIGN  = 1 << 13;
        /// Generate derived output (reports, certificates).
        const GENERATE  = 1 << 14;
        /// Schedule an item for a future time.
        const SCHEDULE  = 1 << 15;
        /// Execute a job or workflow.
        const EXECUTE   = 1 << 16;
        /// Monitor live state.
        const MONITOR   = 1 << 17;
        /// Change configuration.
        const CONFIGURE = 1 << 18;
    }
}

impl Action {
    /// The basic record lifecycle: CREATE | READ | UPDATE | DELETE | LIST.
    pub const CRUD: Self = Self::CREATE
        .union(Self::READ)
        .union(Self::UPDATE)
        .union(Self::DELETE)
        .union(Self::LIST);

    /// Non-mutating verbs: READ | LIST | EXPORT | MONITOR.
    pub const READ_ONLY: Self = Self::READ
        .union(Self::LIST)
        .union(Self::EXPORT)
        .union(Self::MONITOR);

    /// Returns a human-readable list of verb names.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        self.iter_names().map(|(name, _)| name).collect()
    }

    /// Parses a verb name (case-insensitive).
    ///
    /// # Example
    ///
    /// ```
    /// use campus_rbac::Action;
    ///
    /// assert_eq!(Action::parse("create"), Some(Action::CREATE));
    /// assert_eq!(Action::parse("UNASSIGN"), Some(Action::UNASSIGN));
    /// assert_eq!(Action::parse("teleport"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::from_name(name.to_uppercase().as_str())
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = self.names();
        if names.is_empty() {
            write!(f, "(none)")
        } else {
            write!(f, "{}", names.join(" | "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crud_members() {
        assert!(Action::CRUD.contains(Action::CREATE));
        assert!(Action::CRUD.contains(Action::LIST));
        assert!(!Action::CRUD.contains(Action::EXPORT));
        assert!(!Action::CRUD.contains(Action::APPROVE));
    }

    #[test]
    fn read_only_has_no_mutations() {
        assert!(!Action::READ_ONLY.contains(Action::CREATE));
        assert!(!Action::READ_ONLY.contains(Action::DELETE));
        assert!(Action::READ_ONLY.contains(Action::EXPORT));
    }

    #[test]
    fn all_covers_nineteen_verbs() {
        assert_eq!(Action::all().iter().count(), 19);
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!(Action::parse("configure"), Some(Action::CONFIGURE));
        assert_eq!(Action::parse("Schedule"), Some(Action::SCHEDULE));
        assert_eq!(Action::parse(""), None);
    }

    #[test]
    fn display_formatting() {
        assert_eq!(Action::READ.to_string(), "READ");
        assert_eq!((Action::READ | Action::LIST).to_string(), "READ | LIST");
        assert_eq!(Action::empty().to_string(), "(none)");
    }

    #[test]
    fn serde_roundtrip() {
        let verbs = Action::CREATE | Action::PUBLISH;
        let json = serde_json::to_string(&verbs).expect("serialize");
        let parsed: Action = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, verbs);
    }
}
