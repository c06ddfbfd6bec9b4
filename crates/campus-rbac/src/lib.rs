//! Role and permission evaluation for the campus platform.
//!
//! This crate is the single source of truth for who may do what. It
//! owns the grant vocabulary, the role catalog, principal resolution,
//! and the scoped access decision pipeline.
//!
//! # Three-Question Decision Model
//!
//! ```text
//! Access = Grant(WHAT) ∩ Scope(WHERE) ∪ Override(ASSIGNMENT)
//! ```
//!
//! | Question | Type | Answers |
//! |----------|------|---------|
//! | WHAT | [`Permission`], [`Resource`], [`Action`] | Which grants the principal holds |
//! | WHERE | [`ScopeMemberships`] | Which institutes the principal belongs to |
//! | OVERRIDE | [`AdminAssignment`] | Whether an explicit assignment bypasses defaults |
//!
//! # Crate Architecture
//!
//! ```text
//! campus-types  (IDs, PrincipalCategory, AdminLevel, ScopeMemberships)
//!      ↑
//! campus-rbac   ◄── THIS CRATE
//! (catalog → resolver → Principal → engine → Guard)
//! ```
//!
//! # Design Principles
//!
//! - **Immutable principals** — a [`Principal`] is a snapshot; changed
//!   grants mean resolving a new one
//! - **Least privilege on doubt** — unknown role names fall back to the
//!   student template, never to elevated access
//! - **Trait definitions here, implementations in consumers** — record
//!   ownership is an [`OwnershipPolicy`] hook the hosting application
//!   implements
//!
//! # Example
//!
//! ```
//! use campus_rbac::{evaluate, AccessQuery, Action, Resource};
//! use campus_types::{AdminLevel, PrincipalId, ScopeMemberships};
//!
//! let principal = campus_rbac::resolve(
//!     PrincipalId::new(),
//!     "teacher",
//!     AdminLevel::None,
//!     Vec::new(),
//!     ScopeMemberships::new(),
//! );
//!
//! let query = AccessQuery::new(Resource::ATTENDANCE, Action::UPDATE);
//! assert!(evaluate(&principal, &query).is_allowed());
//! ```

pub mod action;
pub mod assignment;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod guard;
pub mod permission;
pub mod principal;
pub mod query;
pub mod resolver;
pub mod resource;

// Re-export core types
pub use action::Action;
pub use assignment::AdminAssignment;
pub use catalog::RoleTemplate;
pub use engine::{evaluate, evaluate_with, OwnershipPolicy};
pub use error::DenialReason;
pub use guard::Guard;
pub use permission::Permission;
pub use principal::Principal;
pub use query::{AccessDecision, AccessQuery};
pub use resolver::{resolve, resolve_category};
pub use resource::Resource;

// Re-export the identity vocabulary from campus_types for convenience
pub use campus_types::{AdminLevel, PrincipalCategory, PrincipalId, ScopeMemberships};
