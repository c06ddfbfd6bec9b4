//! Named permissions, grouped by domain.
//!
//! A [`Permission`] flag is an opaque named capability; the union a role
//! template carries is the principal's whole permission set. Per-domain
//! group constants exist for catalog authoring — templates are written
//! as unions of groups and individual flags, never assembled at runtime.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Named capabilities a principal can hold.
    ///
    /// # Example
    ///
    /// ```
    /// use campus_rbac::Permission;
    ///
    /// let granted = Permission::ACADEMIC | Permission::USE_AI_TOOLS;
    /// assert!(granted.contains(Permission::MANAGE_ATTENDANCE));
    /// assert!(!granted.contains(Permission::MANAGE_USERS));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Permission: u64 {
        // Identity / platform administration
        /// Create, update, deactivate user accounts.
        const MANAGE_USERS           = 1 << 0;
        /// Manage role definitions and administrative assignments.
        const MANAGE_ROLES           = 1 << 1;
        /// Manage institutes.
        const MANAGE_INSTITUTES      = 1 << 2;
        /// Manage departments.
        const MANAGE_DEPARTMENTS     = 1 << 3;
        /// Change platform settings.
        const MANAGE_SETTINGS        = 1 << 4;
        /// Manage billing and subscription.
        const MANAGE_BILLING         = 1 << 5;
        /// Manage security configuration.
        const MANAGE_SECURITY        = 1 << 6;
        /// Read audit logs.
        const VIEW_AUDIT_LOGS        = 1 << 7;

        // Academic
        /// Manage classes and sections.
        const MANAGE_CLASSES         = 1 << 8;
        /// Manage subjects.
        const MANAGE_SUBJECTS        = 1 << 9;
        /// Record and correct attendance.
        const MANAGE_ATTENDANCE      = 1 << 10;
        /// Create and schedule exams.
        const MANAGE_EXAMS           = 1 << 11;
        /// Enter and publish grades.
        const MANAGE_GRADES          = 1 << 12;
        /// Build timetables.
        const MANAGE_TIMETABLE       = 1 << 13;
        /// Read academic reports.
        const VIEW_ACADEMIC_REPORTS  = 1 << 14;

        // Finance
        /// Define fee structures.
        const MANAGE_FEES            = 1 << 15;
        /// Record fee payments.
        const COLLECT_PAYMENTS       = 1 << 16;
        /// Record expenses.
        const MANAGE_EXPENSES        = 1 << 17;
        /// Read financial reports.
        const VIEW_FINANCIAL_REPORTS = 1 << 18;

        // Library
        /// Administer the library module.
        const MANAGE_LIBRARY         = 1 << 19;
        /// Issue and return books.
        const ISSUE_BOOKS            = 1 << 20;
        /// Maintain the book catalog.
        const MANAGE_CATALOG         = 1 << 21;

        // Transport
        /// Administer the transport module.
        const MANAGE_TRANSPORT       = 1 << 22;
        /// Define routes and stops.
        const MANAGE_ROUTES          = 1 << 23;
        /// Track vehicle positions.
        const TRACK_VEHICLES         = 1 << 24;

        // Hostel
        /// Administer the hostel module.
        const MANAGE_HOSTEL          = 1 << 25;
        /// Allocate rooms to residents.
        const ALLOCATE_ROOMS         = 1 << 26;
        /// Manage mess plans.
        const MANAGE_MESS            = 1 << 27;

        // HR
        /// Manage staff records.
        const MANAGE_STAFF           = 1 << 28;
        /// Approve and track leave.
        const MANAGE_LEAVE           = 1 << 29;
        /// Run payroll.
        const MANAGE_PAYROLL         = 1 << 30;
        /// Manage recruitment pipelines.
        const MANAGE_RECRUITMENT     = 1 << 31;

        // Inventory
        /// Manage stock levels.
        const MANAGE_INVENTORY       = 1 << 32;
        /// Track fixed assets.
        const MANAGE_ASSETS          = 1 << 33;
        /// Manage procurement.
        const MANAGE_PROCUREMENT     = 1 << 34;

        // Commerce
        /// Administer the campus store.
        const MANAGE_STORE           = 1 << 35;
        /// Process store orders.
        const MANAGE_ORDERS          = 1 << 36;

        // E-learning
        /// Manage online courses.
        const MANAGE_COURSES         = 1 << 37;
        /// Author course content.
        const CREATE_CONTENT         = 1 << 38;
        /// Grade submissions.
        const GRADE_SUBMISSIONS      = 1 << 39;

        // Events
        /// Plan events.
        const MANAGE_EVENTS          = 1 << 40;
        /// Publish events to their audience.
        const PUBLISH_EVENTS         = 1 << 41;

        // Notices / communication
        /// Draft notices.
        const MANAGE_NOTICES         = 1 << 42;
        /// Publish notices.
        const PUBLISH_NOTICES        = 1 << 43;
        /// Send direct notifications.
        const SEND_NOTIFICATIONS     = 1 << 44;

        // AI tools
        /// Use AI-assisted tooling.
        const USE_AI_TOOLS           = 1 << 45;
        /// Configure AI-assisted tooling.
        const MANAGE_AI_TOOLS        = 1 << 46;

        // Analytics
        /// View analytics dashboards.
        const VIEW_ANALYTICS         = 1 << 47;
        /// Export reports.
        const EXPORT_REPORTS         = 1 << 48;
    }
}

impl Permission {
    /// Identity and platform administration.
    pub const IDENTITY: Self = Self::MANAGE_USERS
        .union(Self::MANAGE_ROLES)
        .union(Self::MANAGE_INSTITUTES)
        .union(Self::MANAGE_DEPARTMENTS)
        .union(Self::MANAGE_SETTINGS)
        .union(Self::MANAGE_BILLING)
        .union(Self::MANAGE_SECURITY)
        .union(Self::VIEW_AUDIT_LOGS);

    /// Academic record keeping.
    pub const ACADEMIC: Self = Self::MANAGE_CLASSES
        .union(Self::MANAGE_SUBJECTS)
        .union(Self::MANAGE_ATTENDANCE)
        .union(Self::MANAGE_EXAMS)
        .union(Self::MANAGE_GRADES)
        .union(Self::MANAGE_TIMETABLE)
        .union(Self::VIEW_ACADEMIC_REPORTS);

    /// Finance.
    pub const FINANCE: Self = Self::MANAGE_FEES
        .union(Self::COLLECT_PAYMENTS)
        .union(Self::MANAGE_EXPENSES)
        .union(Self::VIEW_FINANCIAL_REPORTS);

    /// Library.
    pub const LIBRARY: Self = Self::MANAGE_LIBRARY
        .union(Self::ISSUE_BOOKS)
        .union(Self::MANAGE_CATALOG);

    /// Transport.
    pub const TRANSPORT: Self = Self::MANAGE_TRANSPORT
        .union(Self::MANAGE_ROUTES)
        .union(Self::TRACK_VEHICLES);

    /// Hostel.
    pub const HOSTEL: Self = Self::MANAGE_HOSTEL
        .union(Self::ALLOCATE_ROOMS)
        .union(Self::MANAGE_MESS);

    /// Human resources.
    pub const HR: Self = Self::MANAGE_STAFF
        .union(Self::MANAGE_LEAVE)
        .union(Self::MANAGE_PAYROLL)
        .union(Self::MANAGE_RECRUITMENT);

    /// Inventory.
    pub const INVENTORY: Self = Self::MANAGE_INVENTORY
        .union(Self::MANAGE_ASSETS)
        .union(Self::MANAGE_PROCUREMENT);

    /// Commerce.
    pub const COMMERCE: Self = Self::MANAGE_STORE.union(Self::MANAGE_ORDERS);

    /// E-learning.
    pub const ELEARNING: Self = Self::MANAGE_COURSES
        .union(Self::CREATE_CONTENT)
        .union(Self::GRADE_SUBMISSIONS);

    /// Events.
    pub const EVENTS: Self = Self::MANAGE_EVENTS.union(Self::PUBLISH_EVENTS);

    /// Notices and direct communication.
    pub const NOTICES: Self = Self::MANAGE_NOTICES
        .union(Self::PUBLISH_NOTICES)
        .union(Self::SEND_NOTIFICATIONS);

    /// AI tools.
    pub const AI: Self = Self::USE_AI_TOOLS.union(Self::MANAGE_AI_TOOLS);

    /// Analytics.
    pub const ANALYTICS: Self = Self::VIEW_ANALYTICS.union(Self::EXPORT_REPORTS);

    /// Returns a human-readable list of permission names.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        self.iter_names().map(|(name, _)| name).collect()
    }

    /// Parses a permission name (case-insensitive).
    ///
    /// # Example
    ///
    /// ```
    /// use campus_rbac::Permission;
    ///
    /// assert_eq!(Permission::parse("manage_users"), Some(Permission::MANAGE_USERS));
    /// assert_eq!(Permission::parse("fly"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::from_name(name.to_uppercase().as_str())
    }
}

impl std::fmt::Display for Permission {
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
    fn domain_groups_partition_all() {
        let union = Permission::IDENTITY
            | Permission::ACADEMIC
            | Permission::FINANCE
            | Permission::LIBRARY
            | Permission::TRANSPORT
            | Permission::HOSTEL
            | Permission::HR
            | Permission::INVENTORY
            | Permission::COMMERCE
            | Permission::ELEARNING
            | Permission::EVENTS
            | Permission::NOTICES
            | Permission::AI
            | Permission::ANALYTICS;
        assert_eq!(union, Permission::all());
    }

    #[test]
    fn groups_are_pairwise_disjoint() {
        let groups = [
            Permission::IDENTITY,
            Permission::ACADEMIC,
            Permission::FINANCE,
            Permission::LIBRARY,
            Permission::TRANSPORT,
            Permission::HOSTEL,
            Permission::HR,
            Permission::INVENTORY,
            Permission::COMMERCE,
            Permission::ELEARNING,
            Permission::EVENTS,
            Permission::NOTICES,
            Permission::AI,
            Permission::ANALYTICS,
        ];
        for (i, a) in groups.iter().enumerate() {
            for b in &groups[i + 1..] {
                assert!((*a & *b).is_empty(), "overlap between {a} and {b}");
            }
        }
    }

    #[test]
    fn member_count_matches_model() {
        assert_eq!(Permission::all().iter().count(), 49);
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!(
            Permission::parse("view_analytics"),
            Some(Permission::VIEW_ANALYTICS)
        );
        assert_eq!(
            Permission::parse("MANAGE_ATTENDANCE"),
            Some(Permission::MANAGE_ATTENDANCE)
        );
        assert_eq!(Permission::parse("unknown"), None);
    }

    #[test]
    fn display_lists_names() {
        let set = Permission::MANAGE_USERS | Permission::USE_AI_TOOLS;
        let display = set.to_string();
        assert!(display.contains("MANAGE_USERS"));
        assert!(display.contains("USE_AI_TOOLS"));
    }

    #[test]
    fn serde_roundtrip() {
        let set = Permission::ACADEMIC;
        let json = serde_json::to_string(&set).expect("serialize");
        let parsed: Permission = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, set);
    }
}
