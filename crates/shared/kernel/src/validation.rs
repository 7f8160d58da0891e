//! Structural validation of DTOs at the service boundary.
//!
//! Deserialization enforces the JSON shape (field names, types, unknown fields). The
//! field rules are declared on the DTOs with `validator`; [`Validate`] runs them and adds
//! the cross-field invariants, and [`decode`] runs every step.

use changelog_domain::DomainError;
use changelog_domain::changelog::{
    ChangelogEntry, CreateChangelogEntryRequest, UpdateChangelogEntryRequest,
};
use changelog_domain::product::{CreateProductRequest, Product, UpdateProductRequest};
use changelog_domain::response::{PageRequest, PaginatedResponse};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use validator::{ValidationErrors, ValidationErrorsKind};

#[changelog_derive::app_error]
pub enum SchemaValidationError {
    /// The payload is not valid JSON for the target shape.
    #[error("Malformed payload{}: {source}", format_context(.context))]
    Malformed { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// The request could not be read at all, e.g. an unparsable query string.
    #[error("Malformed request{}: {message}", format_context(.context))]
    Request { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A single field violates a rule; `field` is the camelCase JSON path.
    #[error("Invalid field{} '{field}': {message}", format_context(.context))]
    Field {
        field: Cow<'static, str>,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    #[error("Invariant violated{}: {source}", format_context(.context))]
    Invariant { source: DomainError, context: Option<Cow<'static, str>> },
}

impl SchemaValidationError {
    pub fn field(field: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self::Field { field: field.into(), message: message.into(), context: None }
    }

    pub fn request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Request { message: message.into(), context: None }
    }

    /// JSON path of the offending field, when the error names one.
    #[must_use]
    pub fn field_path(&self) -> Option<&str> {
        match self {
            Self::Field { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Keeps one violation: the first failing field in name order, renamed to its JSON key.
impl From<ValidationErrors> for SchemaValidationError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> =
            errors.errors().iter().map(|(field, kind)| (field.to_string(), kind)).collect();
        fields.sort_by(|(a, _), (b, _)| a.cmp(b));

        fields
            .into_iter()
            .find_map(|(field, kind)| match kind {
                ValidationErrorsKind::Field(violations) => violations.first().map(|violation| {
                    let message = violation.message.clone().unwrap_or_else(|| violation.code.clone());
                    Self::field(json_field(&field), message)
                }),
                _ => None,
            })
            .unwrap_or_else(|| Self::field("body", errors.to_string()))
    }
}

/// `icon_url` -> `iconUrl`, matching the `camelCase` wire names.
fn json_field(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    let mut upper = false;
    for ch in name.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            key.push(ch.to_ascii_uppercase());
            upper = false;
        } else {
            key.push(ch);
        }
    }
    key
}

/// Rules a value must satisfy beyond its JSON shape.
pub trait Validate {
    /// # Errors
    /// Returns the first violated rule.
    fn validate(&self) -> Result<(), SchemaValidationError>;
}

/// Deserializes `json` and validates the result.
///
/// # Errors
/// [`SchemaValidationError::Malformed`] when `json` does not match `T`, otherwise the
/// first rule `T` violates.
///
/// ```rust
/// use changelog_kernel::domain::changelog::CreateChangelogEntryRequest;
/// use changelog_kernel::validation::decode;
///
/// let json = r#"{"productId":"p1","title":"","content":"Fixes","version":null}"#;
/// let err = decode::<CreateChangelogEntryRequest>(json).unwrap_err();
/// assert_eq!(err.field_path(), Some("title"));
/// ```
pub fn decode<T>(json: &str) -> Result<T, SchemaValidationError>
where
    T: DeserializeOwned + Validate,
{
    let value: T = serde_json::from_str(json)?;
    value.validate()?;
    Ok(value)
}

/// Same as [`decode`] for an already parsed JSON value.
///
/// # Errors
/// See [`decode`].
pub fn decode_value<T>(json: serde_json::Value) -> Result<T, SchemaValidationError>
where
    T: DeserializeOwned + Validate,
{
    let value: T = serde_json::from_value(json)?;
    value.validate()?;
    Ok(value)
}

fn field_rules<T: validator::Validate>(value: &T) -> Result<(), SchemaValidationError> {
    Ok(validator::Validate::validate(value)?)
}

fn non_empty_update(empty: bool) -> Result<(), SchemaValidationError> {
    if empty {
        return Err(SchemaValidationError::field("body", "at least one field must be present"));
    }
    Ok(())
}

impl Validate for CreateProductRequest {
    fn validate(&self) -> Result<(), SchemaValidationError> {
        field_rules(self)
    }
}

impl Validate for UpdateProductRequest {
    fn validate(&self) -> Result<(), SchemaValidationError> {
        non_empty_update(self.is_empty())?;
        field_rules(self)
    }
}

impl Validate for Product {
    fn validate(&self) -> Result<(), SchemaValidationError> {
        field_rules(self)?;

        if let Some(index) = self.repositories().iter().position(|repo| repo.product_id != self.id) {
            return Err(SchemaValidationError::field(
                format!("repositories[{index}].productId"),
                "must reference the owning product",
            ));
        }
        Ok(())
    }
}

impl Validate for CreateChangelogEntryRequest {
    fn validate(&self) -> Result<(), SchemaValidationError> {
        field_rules(self)
    }
}

impl Validate for UpdateChangelogEntryRequest {
    fn validate(&self) -> Result<(), SchemaValidationError> {
        non_empty_update(self.is_empty())?;
        field_rules(self)
    }
}

impl Validate for ChangelogEntry {
    fn validate(&self) -> Result<(), SchemaValidationError> {
        field_rules(self)?;
        if !self.is_consistent() {
            return Err(SchemaValidationError::field(
                "publishedAt",
                format!("must be set exactly when status is PUBLISHED (status is {})", self.status),
            ));
        }
        Ok(())
    }
}

impl Validate for PageRequest {
    fn validate(&self) -> Result<(), SchemaValidationError> {
        if self.page == 0 {
            return Err(SchemaValidationError::field("page", "starts at 1"));
        }
        if self.page_size == 0 {
            return Err(SchemaValidationError::field("pageSize", "must be positive"));
        }
        Ok(())
    }
}

impl<T> Validate for PaginatedResponse<T> {
    fn validate(&self) -> Result<(), SchemaValidationError> {
        Ok(self.check()?)
    }
}
