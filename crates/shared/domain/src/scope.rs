//! API-key scopes.
//!
//! A scope is a `<resource>:<action>` string. The set is closed: anything not listed in
//! [`API_KEY_SCOPES`] is rejected with [`DomainError::InvalidScope`].

use crate::error::DomainError;
use bitflags::bitflags;
use changelog_derive::api_model;
use serde::de::Error as _;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, IntoStaticStr};

pub const CHANGELOGS_READ: &str = "changelogs:read";
pub const CHANGELOGS_WRITE: &str = "changelogs:write";
pub const PRODUCTS_READ: &str = "products:read";
pub const PRODUCTS_WRITE: &str = "products:write";

/// Every scope an API key may carry.
pub const API_KEY_SCOPES: [&str; 4] = [CHANGELOGS_READ, CHANGELOGS_WRITE, PRODUCTS_READ, PRODUCTS_WRITE];

/// A permission granted to an API key.
#[api_model]
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, IntoStaticStr)]
pub enum ApiKeyScope {
    #[serde(rename = "changelogs:read")]
    #[strum(serialize = "changelogs:read")]
    ChangelogsRead,
    #[serde(rename = "changelogs:write")]
    #[strum(serialize = "changelogs:write")]
    ChangelogsWrite,
    #[serde(rename = "products:read")]
    #[strum(serialize = "products:read")]
    ProductsRead,
    #[serde(rename = "products:write")]
    #[strum(serialize = "products:write")]
    ProductsWrite,
}

/// The resource half of a scope.
#[api_model(rename_all = "lowercase")]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ScopeResource {
    Changelogs,
    Products,
}

/// The action half of a scope.
#[api_model(rename_all = "lowercase")]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ScopeAction {
    Read,
    Write,
}

impl ApiKeyScope {
    /// Builds the scope for a resource/action pair.
    #[must_use]
    pub const fn new(resource: ScopeResource, action: ScopeAction) -> Self {
        match (resource, action) {
            (ScopeResource::Changelogs, ScopeAction::Read) => Self::ChangelogsRead,
            (ScopeResource::Changelogs, ScopeAction::Write) => Self::ChangelogsWrite,
            (ScopeResource::Products, ScopeAction::Read) => Self::ProductsRead,
            (ScopeResource::Products, ScopeAction::Write) => Self::ProductsWrite,
        }
    }

    #[must_use]
    pub const fn resource(self) -> ScopeResource {
        match self {
            Self::ChangelogsRead | Self::ChangelogsWrite => ScopeResource::Changelogs,
            Self::ProductsRead | Self::ProductsWrite => ScopeResource::Products,
        }
    }

    #[must_use]
    pub const fn action(self) -> ScopeAction {
        match self {
            Self::ChangelogsRead | Self::ProductsRead => ScopeAction::Read,
            Self::ChangelogsWrite | Self::ProductsWrite => ScopeAction::Write,
        }
    }

    /// The wire string, e.g. `changelogs:read`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Membership test against the closed scope set.
    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        Self::iter().any(|scope| scope.as_str() == value)
    }

    /// Parses a scope string.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidScope`] when `value` is not a listed scope.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        Self::iter()
            .find(|scope| scope.as_str() == value)
            .ok_or_else(|| DomainError::invalid_scope(value.to_owned()))
    }
}

impl FromStr for ApiKeyScope {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ApiKeyScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// The scopes granted to a single API key.
    ///
    /// Serialized as a JSON array of scope strings.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct ScopeSet: u8 {
        const CHANGELOGS_READ = 1 << 0;
        const CHANGELOGS_WRITE = 1 << 1;
        const PRODUCTS_READ = 1 << 2;
        const PRODUCTS_WRITE = 1 << 3;

        const CHANGELOGS = Self::CHANGELOGS_READ.bits() | Self::CHANGELOGS_WRITE.bits();
        const PRODUCTS = Self::PRODUCTS_READ.bits() | Self::PRODUCTS_WRITE.bits();
        const READ_ONLY = Self::CHANGELOGS_READ.bits() | Self::PRODUCTS_READ.bits();
    }
}

impl ScopeSet {
    /// Parses every presented scope string; one unknown string rejects the whole set.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidScope`] naming the first unknown scope.
    pub fn parse<I, S>(scopes: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        scopes.into_iter().try_fold(Self::empty(), |set, scope| {
            ApiKeyScope::parse(scope.as_ref()).map(|scope| set | Self::from(scope))
        })
    }

    #[must_use]
    pub fn grants(self, scope: ApiKeyScope) -> bool {
        self.contains(Self::from(scope))
    }

    /// Iterates the granted scopes in declaration order.
    pub fn scopes(self) -> impl Iterator<Item = ApiKeyScope> {
        ApiKeyScope::iter().filter(move |scope| self.grants(*scope))
    }
}

impl From<ApiKeyScope> for ScopeSet {
    fn from(scope: ApiKeyScope) -> Self {
        match scope {
            ApiKeyScope::ChangelogsRead => Self::CHANGELOGS_READ,
            ApiKeyScope::ChangelogsWrite => Self::CHANGELOGS_WRITE,
            ApiKeyScope::ProductsRead => Self::PRODUCTS_READ,
            ApiKeyScope::ProductsWrite => Self::PRODUCTS_WRITE,
        }
    }
}

impl FromIterator<ApiKeyScope> for ScopeSet {
    fn from_iter<T: IntoIterator<Item = ApiKeyScope>>(iter: T) -> Self {
        iter.into_iter().fold(Self::empty(), |set, scope| set | Self::from(scope))
    }
}

impl Serialize for ScopeSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(None)?;
        for scope in self.scopes() {
            seq.serialize_element(scope.as_str())?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for ScopeSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Vec::<String>::deserialize(deserializer)?;
        Self::parse(&raw).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_match_variants() {
        let listed: Vec<&str> = ApiKeyScope::iter().map(ApiKeyScope::as_str).collect();
        assert_eq!(listed, API_KEY_SCOPES);
    }

    #[test]
    fn resource_and_action_rebuild_the_scope() {
        for scope in ApiKeyScope::iter() {
            assert_eq!(ApiKeyScope::new(scope.resource(), scope.action()), scope);
            assert_eq!(scope.as_str(), format!("{}:{}", scope.resource(), scope.action()));
        }
    }

    #[test]
    fn unknown_scope_is_rejected() {
        let err = ApiKeyScope::parse("changelogs:delete").unwrap_err();
        assert_eq!(err, DomainError::invalid_scope("changelogs:delete"));
        assert!("products:write".parse::<ApiKeyScope>().is_ok());
    }

    #[test]
    fn scope_set_grants_exactly_what_was_parsed() {
        let set = ScopeSet::parse(["changelogs:read", "products:write"]).unwrap();
        assert!(set.grants(ApiKeyScope::ChangelogsRead));
        assert!(set.grants(ApiKeyScope::ProductsWrite));
        assert!(!set.grants(ApiKeyScope::ChangelogsWrite));
        assert_eq!(set.scopes().count(), 2);

        assert!(ScopeSet::parse(["changelogs:read", "admin:*"]).is_err());
        assert_eq!(ScopeSet::parse(Vec::<String>::new()), Ok(ScopeSet::empty()));
    }

    #[test]
    fn composite_flags_cover_their_resources() {
        assert_eq!(ScopeSet::CHANGELOGS.scopes().count(), 2);
        assert!(ScopeSet::READ_ONLY.scopes().all(|scope| scope.action() == ScopeAction::Read));
        assert_eq!(ScopeSet::all().scopes().count(), API_KEY_SCOPES.len());
    }
}
