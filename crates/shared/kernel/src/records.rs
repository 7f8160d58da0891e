//! Construction of new records from validated requests.

use crate::safe_nanoid;
use crate::slug::slugify;
use crate::validation::{SchemaValidationError, Validate};
use changelog_domain::auth::User;
use changelog_domain::changelog::{ChangelogEntry, CreateChangelogEntryRequest};
use changelog_domain::product::{CreateProductRequest, Product};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Builds a product with a fresh id. The slug is derived from the name when the request
/// carries none.
///
/// # Errors
/// Returns [`SchemaValidationError`] when the request is invalid or no slug can be
/// derived from the name.
pub fn new_product(request: CreateProductRequest, now: DateTime<Utc>) -> Result<Product, SchemaValidationError> {
    request.validate()?;

    let slug = match request.slug {
        Some(slug) => slug,
        None => {
            let derived = slugify(&request.name);
            if derived.is_empty() {
                return Err(SchemaValidationError::field("slug", "cannot be derived from name"));
            }
            derived
        },
    };

    let product = Product {
        id: safe_nanoid!(),
        slug,
        name: request.name,
        description: request.description,
        icon_url: request.icon_url,
        fa_icon: request.fa_icon,
        github_installation_id: request.github_installation_id,
        created_at: now,
        updated_at: now,
        repositories: None,
    };
    debug!(id = %product.id, slug = %product.slug, "Product record created");
    Ok(product)
}

/// Builds a changelog entry authored by `author`.
///
/// # Errors
/// Returns [`SchemaValidationError`] when the request is invalid.
pub fn new_changelog_entry(
    request: CreateChangelogEntryRequest,
    author: &User,
    now: DateTime<Utc>,
) -> Result<ChangelogEntry, SchemaValidationError> {
    request.validate()?;

    let entry = request.into_entry(safe_nanoid!(), author.id.clone(), now);
    debug!(id = %entry.id, product_id = %entry.product_id, status = %entry.status, "Changelog entry created");
    Ok(entry)
}
