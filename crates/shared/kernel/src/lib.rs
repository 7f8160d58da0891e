//! Kernel utilities shared across the workspace.
//! Keep this crate lightweight: it turns the pure domain model into checks, records and
//! documented endpoints.
//!
//! ## Access checks
//! ```rust
//! use changelog_kernel::security::{RoleGuard, ScopeGuard};
//! use changelog_kernel::domain::role::Role;
//! use changelog_kernel::domain::scope::{ApiKeyScope, ScopeSet};
//!
//! assert!(RoleGuard::require(Role::ProductAdmin, Role::Editor).is_ok());
//! assert!(ScopeGuard::verify("changelogs:delete").is_err());
//! assert!(ScopeGuard::authorize(ScopeSet::READ_ONLY, ApiKeyScope::ProductsWrite).is_err());
//! ```
//!
//! ## ID generation
//! Use `safe_nanoid!` for URL-safe, unambiguous IDs:
//! ```rust
//! # use changelog_kernel::safe_nanoid;
//! let id = safe_nanoid!();
//! assert_eq!(id.len(), 12);
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(feature = "server")]
pub mod openapi;
pub mod prelude;
pub mod records;
pub mod security;
#[cfg(feature = "server")]
pub mod server;
pub mod slug;
pub mod validation;

// Alphabet excludes visually ambiguous characters (I, O, l, 0, 1).
pub const SAFE_ALPHABET: &[char; 55] = &[
    '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f',
    'g', 'h', 'j', 'k', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

pub use changelog_domain as domain;
pub use nanoid::nanoid;

/// Generates an unambiguous `NanoID` (no visually confusing characters).
#[macro_export]
macro_rules! safe_nanoid {
    () => {
        $crate::nanoid!(12, $crate::SAFE_ALPHABET)
    };
    ($size:expr) => {
        $crate::nanoid!($size, $crate::SAFE_ALPHABET)
    };
}
