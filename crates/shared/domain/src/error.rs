use std::borrow::Cow;

/// Errors raised when a value violates a domain rule.
#[changelog_derive::app_error]
#[derive(Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A scope string outside the closed set of API-key scopes.
    #[error("Invalid API key scope{}: '{scope}'", format_context(.context))]
    InvalidScope { scope: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A role name outside the role hierarchy.
    #[error("Unknown role{}: '{role}'", format_context(.context))]
    UnknownRole { role: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Page metadata that cannot describe the attached data.
    #[error("Invalid pagination{}: {message}", format_context(.context))]
    Pagination { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A changelog status change that is not allowed from the current status.
    #[error("Invalid changelog transition{}: {message}", format_context(.context))]
    Transition { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// An auth context whose flags contradict its identities.
    #[error("Invalid auth context{}: {message}", format_context(.context))]
    AuthContext { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl DomainError {
    pub(crate) fn invalid_scope(scope: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidScope { scope: scope.into(), context: None }
    }

    pub(crate) fn pagination(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Pagination { message: message.into(), context: None }
    }

    pub(crate) fn transition(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Transition { message: message.into(), context: None }
    }
}
