//! Authorization checks over the role hierarchy and API-key scopes.
//!
//! Guards never grant access silently: every denial is an [`AccessError`] and is logged
//! at `warn`.

use changelog_domain::DomainError;
use changelog_domain::auth::{AuthContext, User};
use changelog_domain::role::Role;
use changelog_domain::scope::{ApiKeyScope, ScopeSet};
use std::borrow::Cow;
use tracing::warn;

#[changelog_derive::app_error]
#[derive(Clone, PartialEq, Eq)]
pub enum AccessError {
    /// A presented scope string outside the scope registry.
    #[error("Invalid scope{}: '{scope}'", format_context(.context))]
    InvalidScope { scope: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The API key lacks the scope the operation requires.
    #[error("Missing scope{}: '{scope}'", format_context(.context))]
    MissingScope { scope: ApiKeyScope, context: Option<Cow<'static, str>> },

    #[error("Insufficient role{}: {actor} cannot act as {required}", format_context(.context))]
    InsufficientRole { actor: Role, required: Role, context: Option<Cow<'static, str>> },

    #[error("Authentication required{}", format_context(.context))]
    Unauthenticated { context: Option<Cow<'static, str>> },

    /// Authenticated principal without an internal user record.
    #[error("User not provisioned{}: {subject}", format_context(.context))]
    NotProvisioned { subject: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Rank-based role checks.
#[derive(Debug)]
pub struct RoleGuard;

impl RoleGuard {
    /// Succeeds when `actor` ranks at least as high as `required`.
    ///
    /// # Errors
    /// Returns [`AccessError::InsufficientRole`] otherwise.
    pub fn require(actor: Role, required: Role) -> Result<(), AccessError> {
        if actor.has_permission(required) {
            return Ok(());
        }
        warn!(%actor, %required, "Role check denied");
        Err(AccessError::InsufficientRole { actor, required, context: None })
    }

    /// Resolves the internal user of `ctx` and checks its role.
    ///
    /// # Errors
    /// * [`AccessError::Unauthenticated`] for anonymous contexts.
    /// * [`AccessError::NotProvisioned`] when no internal user is attached.
    /// * [`AccessError::InsufficientRole`] when the user ranks too low.
    pub fn require_context(ctx: &AuthContext, required: Role) -> Result<&User, AccessError> {
        let Some(principal) = ctx.user() else {
            warn!(%required, "Anonymous request denied");
            return Err(AccessError::Unauthenticated { context: None });
        };
        let Some(user) = ctx.db_user() else {
            warn!(subject = %principal.sub, %required, "Unprovisioned user denied");
            return Err(AccessError::NotProvisioned {
                subject: principal.sub.clone().into(),
                context: None,
            });
        };
        Self::require(user.role, required)?;
        Ok(user)
    }
}

/// Scope checks for API-key requests.
#[derive(Debug)]
pub struct ScopeGuard;

impl ScopeGuard {
    /// Parses a presented scope string.
    ///
    /// # Errors
    /// Returns [`AccessError::InvalidScope`] for strings outside the registry.
    pub fn verify(scope: &str) -> Result<ApiKeyScope, AccessError> {
        ApiKeyScope::parse(scope).map_err(|err| {
            warn!(%scope, "Unknown scope presented");
            AccessError::from_domain(err)
        })
    }

    /// Succeeds when `granted` contains `required`.
    ///
    /// # Errors
    /// Returns [`AccessError::MissingScope`] otherwise.
    pub fn authorize(granted: ScopeSet, required: ApiKeyScope) -> Result<(), AccessError> {
        if granted.grants(required) {
            return Ok(());
        }
        warn!(%required, ?granted, "Scope check denied");
        Err(AccessError::MissingScope { scope: required, context: None })
    }

    /// Validates every scope an API key presents, then checks `required` against them.
    ///
    /// # Errors
    /// Returns [`AccessError::InvalidScope`] if any presented string is unknown, even when
    /// `required` is among the valid ones, and [`AccessError::MissingScope`] when
    /// `required` is absent.
    pub fn authorize_presented<I, S>(presented: I, required: ApiKeyScope) -> Result<ScopeSet, AccessError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let granted = ScopeSet::parse(presented).map_err(|err| {
            warn!(%required, error = %err, "API key presented an unknown scope");
            AccessError::from_domain(err)
        })?;
        Self::authorize(granted, required)?;
        Ok(granted)
    }
}

impl AccessError {
    fn from_domain(err: DomainError) -> Self {
        match err {
            DomainError::InvalidScope { scope, context } => Self::InvalidScope { scope, context },
            other => Self::InvalidScope { scope: other.to_string().into(), context: None },
        }
    }
}
