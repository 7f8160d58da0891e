//! # Domain Models
//!
//! Shared types of the changelog platform: the role hierarchy, API-key scopes, the DTO
//! contracts exchanged with clients and the response envelopes wrapping them.
//! Keep it lean: no I/O, networking, or heavy logic, just data and simple helpers.
//!
//! ## Wire conventions
//! * Field names are `camelCase`; unknown fields are rejected.
//! * Timestamps are ISO-8601 strings.
//! * Nullable fields serialize as `null` and are never omitted. Partial updates are the
//!   exception: there an omitted field is left unchanged and `null` clears it.
//!
//! ```rust
//! use changelog_domain::role::Role;
//! use changelog_domain::scope::ApiKeyScope;
//!
//! assert!(Role::ProductAdmin.has_permission(Role::Editor));
//! assert!(ApiKeyScope::is_valid("changelogs:read"));
//! assert!(!ApiKeyScope::is_valid("changelogs:delete"));
//! ```

pub mod access;
pub mod auth;
pub mod changelog;
pub mod config;
pub mod constants;
mod error;
mod patch;
pub mod product;
pub mod response;
pub mod role;
pub mod rules;
pub mod scope;

pub use crate::error::{DomainError, DomainErrorExt};
