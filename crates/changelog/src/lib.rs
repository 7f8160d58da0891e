//! Facade crate of the changelog platform.
//! Re-exports the domain model and kernel, and bootstraps server-side state.
//! Keep this crate thin: it composes other crates and holds no business logic.
//!
//! ## Usage
//! - Add `changelog` with the `server` feature in binaries that serve HTTP.
//! - Call [`init`] once at process start, before building the router.

pub use changelog_domain as domain;
pub use changelog_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub use changelog_kernel::server::{ApiError, ApiState};

    pub mod router {
        pub use changelog_kernel::server::router::{access_router, build, system_router};
    }
}

/// Build-time feature registry for runtime introspection.
pub mod features {
    /// Enabled Cargo features.
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Builds the shared request state and the schema registry.
///
/// # Errors
/// Returns [`kernel::server::ApiStateError`] when `config` cannot back the API.
#[cfg(feature = "server")]
pub fn init(
    config: &domain::config::ApiConfig,
) -> Result<kernel::server::ApiState, kernel::server::ApiStateError> {
    let registry = kernel::openapi::init();
    tracing::info!(schemas = registry.len(), features = ?features::ENABLED, "Platform initialized");

    kernel::server::ApiState::builder().config(config.clone()).build()
}
