//! URL slugs for products.

pub use changelog_domain::rules::{MAX_SLUG_LEN, is_valid_slug};

/// Derives a slug from a display name: lowercase ASCII alphanumerics joined by single
/// hyphens, truncated to [`MAX_SLUG_LEN`] without a trailing hyphen.
///
/// Returns an empty string when `name` has no ASCII alphanumerics.
///
/// ```rust
/// use changelog_kernel::slug::slugify;
///
/// assert_eq!(slugify("  Acme Cloud: Release Notes! "), "acme-cloud-release-notes");
/// ```
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len().min(MAX_SLUG_LEN));
    let mut pending_hyphen = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                if slug.len() + 1 >= MAX_SLUG_LEN {
                    break;
                }
                slug.push('-');
            }
            if slug.len() >= MAX_SLUG_LEN {
                break;
            }
            slug.push(ch.to_ascii_lowercase());
            pending_hyphen = false;
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_separators() {
        assert_eq!(slugify("API -- v2"), "api-v2");
        assert_eq!(slugify("Ünïcode"), "n-code");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn truncates_without_trailing_hyphen() {
        let name = format!("{} tail", "a".repeat(63));
        let slug = slugify(&name);
        assert_eq!(slug.len(), 63);
        assert!(is_valid_slug(&slug));
    }
}
