use crate::security::AccessError;
use crate::validation::SchemaValidationError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use changelog_domain::DomainError;
use changelog_domain::response::ApiResponse;
use std::borrow::Cow;
use tracing::{error, warn};

/// Handler failure, rendered as an `ApiResponse` with `success: false`.
#[changelog_derive::app_error]
pub enum ApiError {
    #[error("{source}{}", format_context(.context))]
    Access { source: AccessError, context: Option<Cow<'static, str>> },

    #[error("{source}{}", format_context(.context))]
    Validation { source: SchemaValidationError, context: Option<Cow<'static, str>> },

    #[error("{source}{}", format_context(.context))]
    Domain { source: DomainError, context: Option<Cow<'static, str>> },
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Access { source, .. } => match source {
                AccessError::InvalidScope { .. } => StatusCode::BAD_REQUEST,
                AccessError::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
                AccessError::MissingScope { .. }
                | AccessError::InsufficientRole { .. }
                | AccessError::NotProvisioned { .. } => StatusCode::FORBIDDEN,
            },
            Self::Validation {
                source: SchemaValidationError::Malformed { .. } | SchemaValidationError::Request { .. },
                ..
            }
            | Self::Domain { source: DomainError::InvalidScope { .. }, .. } => StatusCode::BAD_REQUEST,
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Domain { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            error!(error = %self, "Request failed");
            "Internal server error".to_owned()
        } else {
            warn!(%status, error = %self, "Request rejected");
            self.to_string()
        };

        (status, Json(ApiResponse::failure((), message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_errors_map_to_client_statuses() {
        let invalid: ApiError = AccessError::InvalidScope { scope: "x:y".into(), context: None }.into();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let anonymous: ApiError = AccessError::Unauthenticated { context: None }.into();
        assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn unreadable_requests_are_bad_requests() {
        let err: ApiError = SchemaValidationError::request("Failed to deserialize query string").into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn field_errors_are_unprocessable() {
        let err: ApiError = SchemaValidationError::field("title", "must not be blank").into();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
