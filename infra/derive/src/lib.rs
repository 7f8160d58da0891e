#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by every crate of the workspace.
//!
//! * [`macro@app_error`] turns an enum into a `thiserror` error with `.context()` support.
//! * [`macro@api_model`] applies the wire conventions of API data models.
//! * [`macro@api_handler`] attaches `utoipa` path metadata to Axum handlers.
//!
//! Examples are `ignore`d because a proc-macro crate cannot use its own macros in doctests;
//! see `tests/ui` for compiled usages.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, Item, ItemFn, parse_macro_input};

/// Attribute macro to define a standard API data model.
///
/// Works on structs and enums and keeps every DTO on the same wire conventions.
///
/// # Injected Behaviors
///
/// * **Derives**: adds `Debug`, `Serialize` and `Deserialize` if missing.
/// * **`OpenAPI`**: adds `utoipa::ToSchema` when the consuming crate's `server` feature is on.
/// * **Serde Policy**:
///     * `rename_all = "camelCase"` by default (can be overridden).
///     * `deny_unknown_fields` by default on structs (can be disabled).
///
/// # Example
///
/// ```rust,ignore
/// use changelog_derive::api_model;
///
/// #[api_model]
/// pub struct Product {
///     pub id: String,
///     pub icon_url: Option<String>, // serialized as `iconUrl`
/// }
///
/// #[api_model(rename_all = "SCREAMING_SNAKE_CASE")]
/// pub enum ChangelogStatus {
///     Draft,
///     Published,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as Item);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Attribute macro to bridge Axum handlers with `OpenAPI` documentation.
///
/// Accepts standard `utoipa::path` arguments such as `get`, `post`, `path = "..."`,
/// `params(...)`, `responses(...)` and `tag = "..."`. The `utoipa::path` attribute is only
/// emitted when the `server` feature of the consuming crate is enabled.
///
/// # Example
///
/// ```rust,ignore
/// use changelog_derive::api_handler;
///
/// #[api_handler(get, path = "/health", responses((status = OK, body = HealthResponse)), tag = "System")]
/// pub async fn health_handler() -> Json<HealthResponse> {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Attribute macro for defining crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: injects `#[derive(Debug, thiserror::Error)]`.
/// * **Context Support**: generates a companion `<Name>Ext` trait that adds `.context()`
///   to `Result<T, Name>` and to `Result<T, Source>` for every variant with a source.
/// * **Standard Conversions**: implements `From<Source>` for variants with a `source`
///   field (or a field marked `#[source]`/`#[from]`), enabling `?`.
/// * **Internal Fallback**: implements `From<&'static str>` and `From<String>` when an
///   `Internal` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants.
/// 2. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 3. Variants wrapping a source error must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[changelog_derive::app_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// let cfg = builder.build().context("Failed to build config")?;
/// ```
#[proc_macro_attribute]
pub fn app_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
