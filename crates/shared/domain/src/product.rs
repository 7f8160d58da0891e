//! Product DTOs.

use changelog_derive::api_model;
use chrono::{DateTime, Utc};
use validator::Validate;

/// A product that publishes changelog entries.
#[api_model]
#[derive(Clone, PartialEq, Eq, Validate)]
pub struct Product {
    #[validate(custom(function = "crate::rules::not_blank"))]
    pub id: String,
    #[validate(custom(function = "crate::rules::slug"))]
    pub slug: String,
    #[validate(custom(function = "crate::rules::not_blank"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(url(message = "must be an http(s) URL"), custom(function = "crate::rules::http_scheme"))]
    pub icon_url: Option<String>,
    /// Font Awesome icon name used when no icon URL is set.
    pub fa_icon: Option<String>,
    /// Source-control installation the product is linked to, if any.
    #[validate(range(min = 1, message = "must be positive"))]
    pub github_installation_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repositories: Option<Vec<ProductRepository>>,
}

impl Product {
    /// Associated repositories in their stored order; empty when not loaded.
    #[must_use]
    pub fn repositories(&self) -> &[ProductRepository] {
        self.repositories.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub const fn is_source_linked(&self) -> bool {
        self.github_installation_id.is_some()
    }
}

/// A source repository attached to a product.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct ProductRepository {
    pub id: String,
    pub product_id: String,
    /// `owner/name` on the source-control host.
    pub full_name: String,
    pub github_repo_id: i64,
    pub created_at: DateTime<Utc>,
}

#[api_model]
#[derive(Clone, PartialEq, Eq, Validate)]
pub struct CreateProductRequest {
    #[validate(custom(function = "crate::rules::not_blank"))]
    pub name: String,
    /// Derived from `name` when absent.
    #[validate(custom(function = "crate::rules::slug"))]
    pub slug: Option<String>,
    pub description: Option<String>,
    #[validate(url(message = "must be an http(s) URL"), custom(function = "crate::rules::http_scheme"))]
    pub icon_url: Option<String>,
    pub fa_icon: Option<String>,
    #[validate(range(min = 1, message = "must be positive"))]
    pub github_installation_id: Option<i64>,
}

/// Partial update. Absent fields are left unchanged; `null` clears a nullable field.
#[api_model]
#[derive(Clone, PartialEq, Eq, Default, Validate)]
#[allow(clippy::option_option)]
pub struct UpdateProductRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "crate::rules::not_blank"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "crate::rules::slug"))]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "crate::patch::nullable")]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "crate::patch::nullable")]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    #[validate(url(message = "must be an http(s) URL"), custom(function = "crate::rules::http_scheme"))]
    pub icon_url: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "crate::patch::nullable")]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub fa_icon: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "crate::patch::nullable")]
    #[cfg_attr(feature = "server", schema(value_type = Option<i64>))]
    #[validate(range(min = 1, message = "must be positive"))]
    pub github_installation_id: Option<Option<i64>>,
}

impl UpdateProductRequest {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.slug.is_none()
            && self.description.is_none()
            && self.icon_url.is_none()
            && self.fa_icon.is_none()
            && self.github_installation_id.is_none()
    }

    /// Applies the present fields to `product` and bumps `updated_at`.
    pub fn apply(self, product: &mut Product, at: DateTime<Utc>) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(slug) = self.slug {
            product.slug = slug;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(icon_url) = self.icon_url {
            product.icon_url = icon_url;
        }
        if let Some(fa_icon) = self.fa_icon {
            product.fa_icon = fa_icon;
        }
        if let Some(id) = self.github_installation_id {
            product.github_installation_id = id;
        }
        product.updated_at = at;
    }
}
