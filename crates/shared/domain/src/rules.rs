//! Field rules used by the `validator` derives on the DTOs.
//!
//! Each check has the signature `validator` expects from a `custom` rule and carries the
//! message clients see next to the offending field.

use std::borrow::Cow;
use validator::ValidationError;

pub const MAX_SLUG_LEN: usize = 64;

/// `true` for `[a-z0-9]+(-[a-z0-9]+)*` of at most [`MAX_SLUG_LEN`] bytes.
#[must_use]
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= MAX_SLUG_LEN
        && slug.split('-').all(|part| {
            !part.is_empty() && part.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        })
}

/// # Errors
/// Fails for empty or whitespace-only values.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(rule("blank", "must not be blank"));
    }
    Ok(())
}

/// # Errors
/// Fails unless [`is_valid_slug`] accepts the value.
pub fn slug(value: &str) -> Result<(), ValidationError> {
    if is_valid_slug(value) {
        return Ok(());
    }
    Err(rule("slug", "must be lowercase alphanumerics separated by single hyphens, at most 64 characters"))
}

/// Restricts an already parsed URL to the web schemes.
///
/// # Errors
/// Fails for any scheme other than `http` and `https`.
pub fn http_scheme(value: &str) -> Result<(), ValidationError> {
    if value.starts_with("https://") || value.starts_with("http://") {
        return Ok(());
    }
    Err(rule("http_scheme", "must be an http(s) URL"))
}

fn rule(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_shape() {
        assert!(is_valid_slug("release-notes-2"));
        assert!(!is_valid_slug("Release"));
        assert!(!is_valid_slug("-lead"));
        assert!(!is_valid_slug("double--hyphen"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug(&"a".repeat(MAX_SLUG_LEN + 1)));
    }

    #[test]
    fn rules_carry_messages() {
        let err = not_blank(" \t").unwrap_err();
        assert_eq!(err.code, "blank");
        assert_eq!(err.message.as_deref(), Some("must not be blank"));

        assert!(http_scheme("https://cdn.example.com/a.png").is_ok());
        assert_eq!(http_scheme("ftp://cdn.example.com/a.png").unwrap_err().code, "http_scheme");
    }
}
