use axum::extract::FromRef;
use changelog_domain::config::ApiConfig;
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;

#[changelog_derive::app_error]
pub enum ApiStateError {
    #[error("State validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[derive(Debug)]
pub struct ApiStateInner {
    pub config: ApiConfig,
}

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    #[must_use]
    pub fn builder() -> ApiStateBuilder {
        ApiStateBuilder::default()
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromRef<ApiState> for ApiConfig {
    fn from_ref(state: &ApiState) -> Self {
        state.inner.config.clone()
    }
}

#[derive(Debug, Default)]
pub struct ApiStateBuilder {
    config: Option<ApiConfig>,
}

impl ApiStateBuilder {
    #[must_use]
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// # Errors
    /// Returns [`ApiStateError::Validation`] when no config was provided or its page
    /// limits are unusable.
    pub fn build(self) -> Result<ApiState, ApiStateError> {
        let config = self.config.ok_or_else(|| ApiStateError::Validation {
            message: "ApiConfig not provided".into(),
            context: None,
        })?;

        let api = &config.api;
        if api.max_page_size == 0 || api.default_page_size == 0 || api.default_page_size > api.max_page_size {
            return Err(ApiStateError::Validation {
                message: format!(
                    "page sizes must satisfy 1 <= default_page_size ({}) <= max_page_size ({})",
                    api.default_page_size, api.max_page_size
                )
                .into(),
                context: None,
            });
        }

        Ok(ApiState { inner: Arc::new(ApiStateInner { config }) })
    }
}
