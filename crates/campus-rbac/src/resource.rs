//! Resource types.
//!
//! One flag per permission domain plus the cross-cutting resources
//! (reports, analytics, settings, billing, security). A single flag is
//! the object category in an [`AccessQuery`](crate::AccessQuery); a
//! union is the resource set a role template grants.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Object categories access can be requested for.
    ///
    /// # Example
    ///
    /// ```
    /// use campus_rbac::Resource;
    ///
    /// let teacher_view = Resource::ACADEMIC | Resource::REPORTS;
    /// assert!(teacher_view.contains(Resource::EXAMS));
    /// assert!(!teacher_view.contains(Resource::USERS));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Resource: u32 {
        /// User accounts and profiles.
        const USERS       = 1 << 0;
        /// Role definitions and administrative assignments.
        const ROLES       = 1 << 1;
        /// Institutes.
        const INSTITUTES  = 1 << 2;
        /// Departments.
        const DEPARTMENTS = 1 << 3;
        /// Classes and sections.
        const CLASSES     = 1 << 4;
        /// Subjects.
        const SUBJECTS    = 1 << 5;
        /// Attendance records.
        const ATTENDANCE  = 1 << 6;
        /// Exams and assessments.
        const EXAMS       = 1 << 7;
        /// Grades and results.
        const GRADES      = 1 << 8;
        /// Timetables.
        const TIMETABLE   = 1 << 9;
        /// Fees, payments, expenses.
        const FINANCE     = 1 << 10;
        /// Library catalog and circulation.
        const LIBRARY     = 1 << 11;
        /// Transport fleet and routes.
        const TRANSPORT   = 1 << 12;
        /// Hostel blocks, rooms, mess.
        const HOSTEL      = 1 << 13;
        /// Staff records, leave, payroll, recruitment.
        const HR          = 1 << 14;
        /// Inventory, assets, procurement.
        const INVENTORY   = 1 << 15;
        /// Campus store and orders.
        const STORE       = 1 << 16;
        /// E-learning courses and content.
        const COURSES     = 1 << 17;
        /// Events.
        const EVENTS      = 1 << 18;
        /// Notices and announcements.
        const NOTICES     = 1 << 19;
        /// AI-assisted tooling.
        const AI_TOOLS    = 1 << 20;
        /// Generated reports.
        const REPORTS     = 1 << 21;
        /// Analytics dashboards.
        const ANALYTICS   = 1 << 22;
        /// Platform settings.
        const SETTINGS    = 1 << 23;
        /// Billing and subscription.
        const BILLING     = 1 << 24;
        /// Security configuration and audit.
        const SECURITY    = 1 << 25;
    }
}

impl Resource {
    /// Academic record keeping: classes through timetables.
    pub const ACADEMIC: Self = Self::CLASSES
        .union(Self::SUBJECTS)
        .union(Self::ATTENDANCE)
        .union(Self::EXAMS)
        .union(Self::GRADES)
        .union(Self::TIMETABLE);

    /// Campus operations: library, transport, hostel, inventory, store.
    pub const OPERATIONS: Self = Self::LIBRARY
        .union(Self::TRANSPORT)
        .union(Self::HOSTEL)
        .union(Self::INVENTORY)
        .union(Self::STORE);

    /// Platform administration: settings, billing, security, roles.
    pub const PLATFORM: Self = Self::SETTINGS
        .union(Self::BILLING)
        .union(Self::SECURITY)
        .union(Self::ROLES);

    /// Returns a human-readable list of resource names.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        self.iter_names().map(|(name, _)| name).collect()
    }

    /// Parses a resource name (case-insensitive).
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::from_name(name.to_uppercase().as_str())
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = self.names();
        if names.is_empty() {
            write!(f, "(none)")
        } else {
            write!(f, "{}", names.join(" | "))
        }
    }
}
