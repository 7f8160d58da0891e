//! Users and the per-request auth context.

use crate::error::DomainError;
use crate::role::Role;
use changelog_derive::api_model;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Principal issued by the external identity provider.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct AuthUser {
    /// Subject identifier at the identity provider.
    pub sub: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub picture: Option<String>,
}

/// Internal user record.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    /// Identity-provider subject this record is bound to.
    pub auth_id: String,
    pub email: String,
    pub name: Option<String>,
    pub picture: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Who is making the current request.
///
/// An unauthenticated context never carries identities, and an authenticated one always
/// carries the identity-provider principal. Both rules hold for constructed and
/// deserialized values alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AuthContextWire", into = "AuthContextWire")]
pub struct AuthContext {
    authenticated: bool,
    user: Option<AuthUser>,
    db_user: Option<User>,
}

impl AuthContext {
    /// Context of a request without credentials.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { authenticated: false, user: None, db_user: None }
    }

    /// Context of a verified principal; `db_user` is `None` until the principal is
    /// provisioned internally.
    #[must_use]
    pub const fn authenticated(user: AuthUser, db_user: Option<User>) -> Self {
        Self { authenticated: true, user: Some(user), db_user }
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    #[must_use]
    pub const fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    #[must_use]
    pub const fn db_user(&self) -> Option<&User> {
        self.db_user.as_ref()
    }

    /// Role of the internal user, if one is attached.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.db_user.as_ref().map(|user| user.role)
    }

    /// `true` when the attached user ranks at least as high as `required`.
    #[must_use]
    pub fn has_role(&self, required: Role) -> bool {
        self.role().is_some_and(|role| role.has_permission(required))
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::anonymous()
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct AuthContextWire {
    authenticated: bool,
    user: Option<AuthUser>,
    db_user: Option<User>,
}

impl TryFrom<AuthContextWire> for AuthContext {
    type Error = DomainError;

    fn try_from(wire: AuthContextWire) -> Result<Self, Self::Error> {
        match (wire.authenticated, wire.user, wire.db_user) {
            (false, None, None) => Ok(Self::anonymous()),
            (false, ..) => Err(DomainError::AuthContext {
                message: "unauthenticated context must not carry user or dbUser".into(),
                context: None,
            }),
            (true, Some(user), db_user) => Ok(Self::authenticated(user, db_user)),
            (true, None, _) => Err(DomainError::AuthContext {
                message: "authenticated context requires a user".into(),
                context: None,
            }),
        }
    }
}

impl From<AuthContext> for AuthContextWire {
    fn from(ctx: AuthContext) -> Self {
        Self { authenticated: ctx.authenticated, user: ctx.user, db_user: ctx.db_user }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_carries_no_identity() {
        let ctx = AuthContext::default();
        assert!(!ctx.is_authenticated());
        assert!(ctx.user().is_none());
        assert!(ctx.db_user().is_none());
        assert!(!ctx.has_role(Role::Editor));
    }

    #[test]
    fn authenticated_without_db_user_has_no_role() {
        let user = AuthUser { sub: "idp|1".to_owned(), email: None, name: None, picture: None };
        let ctx = AuthContext::authenticated(user, None);
        assert!(ctx.is_authenticated());
        assert_eq!(ctx.role(), None);
    }
}
