//! Identity attribute types for the campus platform.
//!
//! This crate holds the raw identity attributes an external
//! identity/profile store supplies about a principal: identifiers,
//! category, administrative level, and organizational scope memberships.
//! It deliberately contains **no permission logic** — resolving those
//! attributes into an effective permission snapshot is the job of
//! `campus-rbac`.
//!
//! # Crate Architecture
//!
//! ```text
//! external identity store ──► campus-types   (ids, categories, memberships)
//!                                  ↑
//!                             campus-rbac    (catalog, resolver, decisions)
//!                                  ↑
//!                        presentation / API callers
//! ```
//!
//! # Why a separate crate?
//!
//! - **Stable boundary**: callers that only transport identity records
//!   never pull in the decision engine.
//! - **No circular dependency**: the engine depends on identity types,
//!   not the other way around.
//! - **Pure data**: everything here is an immutable, serde-friendly
//!   value type safe to share across threads.
//!
//! # Example
//!
//! ```
//! use campus_types::{AdminLevel, InstituteId, PrincipalCategory, ScopeMemberships};
//!
//! let category = PrincipalCategory::parse("teacher").unwrap_or(PrincipalCategory::Student);
//! let memberships = ScopeMemberships::new().with_institute(InstituteId::new("inst-01"));
//!
//! assert_eq!(category, PrincipalCategory::Teacher);
//! assert_eq!(AdminLevel::default(), AdminLevel::None);
//! assert!(!memberships.is_empty());
//! ```

mod category;
mod id;
mod membership;

pub use category::{AdminLevel, PrincipalCategory};
pub use id::{AssignmentId, ClassId, DepartmentId, InstituteId, PrincipalId, SubjectId};
pub use membership::ScopeMemberships;
