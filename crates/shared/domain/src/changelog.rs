//! Changelog entry DTOs and status transitions.
//!
//! `published_at` is set if and only if the entry is [`ChangelogStatus::Published`].
//! The transition methods keep that invariant; [`ChangelogEntry::is_consistent`] checks
//! values built elsewhere.

use crate::error::DomainError;
use changelog_derive::api_model;
use chrono::{DateTime, Utc};
use strum_macros::{Display, EnumIter};
use validator::Validate;

/// Lifecycle status of a changelog entry.
#[api_model(rename_all = "SCREAMING_SNAKE_CASE")]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangelogStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

/// A changelog entry owned by a product.
#[api_model]
#[derive(Clone, PartialEq, Eq, Validate)]
pub struct ChangelogEntry {
    #[validate(custom(function = "crate::rules::not_blank"))]
    pub id: String,
    #[validate(custom(function = "crate::rules::not_blank"))]
    pub product_id: String,
    #[validate(custom(function = "crate::rules::not_blank"))]
    pub title: String,
    /// Markdown body.
    pub content: String,
    pub version: Option<String>,
    pub status: ChangelogStatus,
    pub published_at: Option<DateTime<Utc>>,
    /// Internal user id of the author.
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ChangelogEntry {
    #[must_use]
    pub const fn is_published(&self) -> bool {
        matches!(self.status, ChangelogStatus::Published)
    }

    /// `true` when `published_at` agrees with `status`.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.is_published() == self.published_at.is_some()
    }

    /// Moves a draft to `Published` at `at`.
    ///
    /// # Errors
    /// Returns [`DomainError::Transition`] unless the entry is a draft.
    pub fn publish(&mut self, at: DateTime<Utc>) -> Result<(), DomainError> {
        if self.status != ChangelogStatus::Draft {
            return Err(DomainError::transition(format!("cannot publish a {} entry", self.status)));
        }
        self.status = ChangelogStatus::Published;
        self.published_at = Some(at);
        self.updated_at = at;
        Ok(())
    }

    /// Moves a published entry back to `Draft`.
    ///
    /// # Errors
    /// Returns [`DomainError::Transition`] unless the entry is published.
    pub fn unpublish(&mut self, at: DateTime<Utc>) -> Result<(), DomainError> {
        if !self.is_published() {
            return Err(DomainError::transition(format!("cannot unpublish a {} entry", self.status)));
        }
        self.status = ChangelogStatus::Draft;
        self.published_at = None;
        self.updated_at = at;
        Ok(())
    }

    /// Archives the entry from any status. Archiving twice is a no-op.
    pub fn archive(&mut self, at: DateTime<Utc>) {
        if self.status == ChangelogStatus::Archived {
            return;
        }
        self.status = ChangelogStatus::Archived;
        self.published_at = None;
        self.updated_at = at;
    }
}

#[api_model]
#[derive(Clone, PartialEq, Eq, Validate)]
pub struct CreateChangelogEntryRequest {
    #[validate(custom(function = "crate::rules::not_blank"))]
    pub product_id: String,
    #[validate(custom(function = "crate::rules::not_blank"))]
    pub title: String,
    #[validate(custom(function = "crate::rules::not_blank"))]
    pub content: String,
    #[validate(custom(function = "crate::rules::not_blank"))]
    pub version: Option<String>,
    /// Publish immediately instead of saving a draft.
    #[serde(default)]
    pub publish: bool,
}

impl CreateChangelogEntryRequest {
    /// Builds the entry this request describes.
    #[must_use]
    pub fn into_entry(self, id: String, created_by: String, at: DateTime<Utc>) -> ChangelogEntry {
        let (status, published_at) =
            if self.publish { (ChangelogStatus::Published, Some(at)) } else { (ChangelogStatus::Draft, None) };

        ChangelogEntry {
            id,
            product_id: self.product_id,
            title: self.title,
            content: self.content,
            version: self.version,
            status,
            published_at,
            created_by,
            created_at: at,
            updated_at: at,
        }
    }
}

/// Partial update. Absent fields are left unchanged and `"version": null` clears the
/// version. Status changes go through the transition methods of [`ChangelogEntry`].
#[api_model]
#[derive(Clone, PartialEq, Eq, Default, Validate)]
#[allow(clippy::option_option)]
pub struct UpdateChangelogEntryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "crate::rules::not_blank"))]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "crate::rules::not_blank"))]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "crate::patch::nullable")]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    #[validate(custom(function = "crate::rules::not_blank"))]
    pub version: Option<Option<String>>,
}

impl UpdateChangelogEntryRequest {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.version.is_none()
    }

    pub fn apply(self, entry: &mut ChangelogEntry, at: DateTime<Utc>) {
        if let Some(title) = self.title {
            entry.title = title;
        }
        if let Some(content) = self.content {
            entry.content = content;
        }
        if let Some(version) = self.version {
            entry.version = version;
        }
        entry.updated_at = at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn draft() -> ChangelogEntry {
        let at = Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap();
        CreateChangelogEntryRequest {
            product_id: "prod1".to_owned(),
            title: "Dark mode".to_owned(),
            content: "Added a dark theme.".to_owned(),
            version: Some("1.4.0".to_owned()),
            publish: false,
        }
        .into_entry("entry1".to_owned(), "user1".to_owned(), at)
    }

    #[test]
    fn draft_has_no_publish_date() {
        let entry = draft();
        assert_eq!(entry.status, ChangelogStatus::Draft);
        assert!(entry.published_at.is_none());
        assert!(entry.is_consistent());
    }

    #[test]
    fn publish_then_unpublish_keeps_invariant() {
        let mut entry = draft();
        let at = Utc.with_ymd_and_hms(2026, 1, 6, 12, 30, 0).unwrap();

        entry.publish(at).unwrap();
        assert_eq!(entry.published_at, Some(at));
        assert_eq!(entry.updated_at, at);
        assert!(entry.is_consistent());
        assert!(matches!(entry.publish(at), Err(DomainError::Transition { .. })));

        entry.unpublish(at).unwrap();
        assert_eq!(entry.status, ChangelogStatus::Draft);
        assert!(entry.published_at.is_none());
        assert!(entry.unpublish(at).is_err());
    }

    #[test]
    fn archive_clears_publish_date() {
        let mut entry = draft();
        let at = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();
        entry.publish(at).unwrap();
        entry.archive(at);
        assert_eq!(entry.status, ChangelogStatus::Archived);
        assert!(entry.published_at.is_none());
        assert!(entry.is_consistent());
        assert!(entry.publish(at).is_err());
    }

    #[test]
    fn inconsistent_values_are_detected() {
        let mut entry = draft();
        entry.status = ChangelogStatus::Published;
        assert!(!entry.is_consistent());
    }

    #[test]
    fn null_version_clears_it() {
        let mut entry = draft();
        let at = Utc.with_ymd_and_hms(2026, 1, 7, 8, 0, 0).unwrap();

        let keep: UpdateChangelogEntryRequest = serde_json::from_str(r#"{"title":"Dark theme"}"#).unwrap();
        keep.apply(&mut entry, at);
        assert_eq!(entry.title, "Dark theme");
        assert_eq!(entry.version.as_deref(), Some("1.4.0"));

        let clear: UpdateChangelogEntryRequest = serde_json::from_str(r#"{"version":null}"#).unwrap();
        assert!(!clear.is_empty());
        clear.apply(&mut entry, at);
        assert_eq!(entry.version, None);
    }

    #[test]
    fn status_uses_upper_snake_names() {
        assert_eq!(ChangelogStatus::Published.to_string(), "PUBLISHED");
    }
}
