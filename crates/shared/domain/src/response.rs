//! Response envelopes.
//!
//! [`ApiResponse`] wraps a single payload and [`PaginatedResponse`] wraps one page of
//! items with its paging metadata. Read the payload through [`ApiResponse::into_data`]:
//! the content of `data` is unspecified when `success` is `false`.

use crate::error::DomainError;
use changelog_derive::api_model;
use serde::Deserialize;

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Envelope around a single payload.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    #[must_use]
    pub const fn ok(data: T) -> Self {
        Self { success: true, data, message: None }
    }

    #[must_use]
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self { success: true, data, message: Some(message.into()) }
    }

    #[must_use]
    pub fn failure(data: T, message: impl Into<String>) -> Self {
        Self { success: false, data, message: Some(message.into()) }
    }

    /// The payload of a successful response.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        self.success.then_some(self.data)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse { success: self.success, data: f(self.data), message: self.message }
    }
}

/// Envelope around one page of items.
///
/// `total_pages == ceil(total / page_size)` and `data.len() <= page_size` hold for every
/// value built through [`PaginatedResponse::new`].
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct PaginatedResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
    /// One-based page number.
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub total_pages: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> PaginatedResponse<T> {
    /// Builds a page and derives `total_pages`.
    ///
    /// # Errors
    /// Returns [`DomainError::Pagination`] when the metadata cannot describe `data`:
    /// zero page or page size, more items than `page_size`, more items than `total`
    /// allows, or a short page that is not the last one.
    pub fn new(data: Vec<T>, page: u32, page_size: u32, total: u64) -> Result<Self, DomainError> {
        let response = Self {
            success: true,
            total_pages: total_pages(total, page_size),
            data,
            page,
            page_size,
            total,
            message: None,
        };
        response.check()?;
        Ok(response)
    }

    /// Builds the last page: `total` is derived from the items before this page plus
    /// the items on it.
    ///
    /// # Errors
    /// Returns [`DomainError::Pagination`] on a zero page or page size, or when `data`
    /// exceeds `page_size`.
    pub fn last_page(data: Vec<T>, page: u32, page_size: u32) -> Result<Self, DomainError> {
        let offset = u64::from(page.saturating_sub(1)) * u64::from(page_size);
        let total = offset + data.len() as u64;
        Self::new(data, page, page_size, total)
    }

    /// Builds a page for `request` out of `total` matching items.
    ///
    /// # Errors
    /// See [`PaginatedResponse::new`].
    pub fn for_request(data: Vec<T>, request: PageRequest, total: u64) -> Result<Self, DomainError> {
        Self::new(data, request.page, request.page_size, total)
    }

    #[must_use]
    pub const fn is_last_page(&self) -> bool {
        self.page as u64 >= self.total_pages
    }

    /// Checks the paging invariants of an already built value.
    ///
    /// # Errors
    /// Returns [`DomainError::Pagination`] describing the first violated invariant.
    pub fn check(&self) -> Result<(), DomainError> {
        if self.page == 0 {
            return Err(DomainError::pagination("page starts at 1"));
        }
        if self.page_size == 0 {
            return Err(DomainError::pagination("pageSize must be positive"));
        }
        let len = self.data.len() as u64;
        if len > u64::from(self.page_size) {
            return Err(DomainError::pagination(format!(
                "{len} items exceed pageSize {}",
                self.page_size
            )));
        }
        if self.total_pages != total_pages(self.total, self.page_size) {
            return Err(DomainError::pagination(format!(
                "totalPages {} does not match total {} and pageSize {}",
                self.total_pages, self.total, self.page_size
            )));
        }

        let offset = u64::from(self.page - 1) * u64::from(self.page_size);
        if len == 0 {
            // Only pages at or past the end may be empty.
            if offset < self.total {
                return Err(DomainError::pagination(format!(
                    "empty page {} lies before the end of total {}",
                    self.page, self.total
                )));
            }
            return Ok(());
        }
        if offset + len > self.total {
            return Err(DomainError::pagination(format!(
                "page {} holds items beyond total {}",
                self.page, self.total
            )));
        }
        if len < u64::from(self.page_size) && offset + len != self.total {
            return Err(DomainError::pagination(format!(
                "short page {} is not the last page",
                self.page
            )));
        }
        Ok(())
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResponse<U> {
        PaginatedResponse {
            success: self.success,
            data: self.data.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total: self.total,
            total_pages: self.total_pages,
            message: self.message,
        }
    }
}

/// `ceil(total / page_size)`; zero when `page_size` is zero.
#[must_use]
pub const fn total_pages(total: u64, page_size: u32) -> u64 {
    if page_size == 0 { 0 } else { total.div_ceil(page_size as u64) }
}

/// Paging parameters of a list request.
#[api_model]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl PageRequest {
    #[must_use]
    pub const fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Forces `page >= 1` and `1 <= page_size <= max_page_size`.
    #[must_use]
    pub fn clamp(self, max_page_size: u32) -> Self {
        Self { page: self.page.max(1), page_size: self.page_size.clamp(1, max_page_size.max(1)) }
    }

    /// Number of items before this page.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        (self.page.saturating_sub(1) as u64) * (self.page_size as u64)
    }

    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.page_size
    }

    /// The items of `all` that fall on this page.
    #[must_use]
    pub fn slice<'a, T>(&self, all: &'a [T]) -> &'a [T] {
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX).min(all.len());
        let end = start.saturating_add(self.page_size as usize).min(all.len());
        &all[start..end]
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: default_page(), page_size: default_page_size() }
    }
}

/// Raw paging query string; absent values fall back to the configured defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    /// One-based page number, 1 when absent.
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PageQuery {
    /// Resolves the query against the configured defaults and clamps it.
    #[must_use]
    pub fn into_request(self, default_page_size: u32, max_page_size: u32) -> PageRequest {
        PageRequest {
            page: self.page.unwrap_or_else(default_page),
            page_size: self.page_size.unwrap_or(default_page_size),
        }
        .clamp(max_page_size)
    }
}

const fn default_page() -> u32 {
    1
}

const fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}
