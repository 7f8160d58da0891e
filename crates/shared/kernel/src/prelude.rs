//! Common imports for crates building on the kernel.

pub use crate::records::{new_changelog_entry, new_product};
pub use crate::safe_nanoid;
pub use crate::security::{AccessError, AccessErrorExt, RoleGuard, ScopeGuard};
#[cfg(feature = "server")]
pub use crate::server::{ApiError, ApiState};
pub use crate::slug::slugify;
pub use crate::validation::{SchemaValidationError, Validate, decode};
pub use changelog_domain::DomainError;
pub use changelog_domain::response::{ApiResponse, PageRequest, PaginatedResponse};
pub use changelog_domain::role::Role;
pub use changelog_domain::scope::{ApiKeyScope, ScopeSet};
