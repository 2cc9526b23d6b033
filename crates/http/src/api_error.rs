//! Typed API error for HTTP handlers.
//!
//! Converts domain errors into proper HTTP responses with JSON body and
//! status codes. Handlers return `Result<Json<T>, ApiError>` instead of
//! losing error context with bare `StatusCode`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use skywatch_provider::ProviderError;
use skywatch_service::ServiceError;
use skywatch_storage::StorageError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON response: `{"error": "message"}`.
///
/// `Internal` logs the real error server-side and returns a static message
/// to the client — no error detail leakage.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request — invalid input from caller.
    BadRequest(String),
    /// 404 Not Found — requested location or city doesn't exist.
    NotFound(String),
    /// 409 Conflict — a near-identical location already exists.
    Conflict(String),
    /// 500 Internal Server Error — unexpected failure. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(_) => Self::BadRequest(err.to_string()),
            ServiceError::Conflict { .. } => Self::Conflict(err.to_string()),
            ServiceError::Storage(StorageError::NotFound { entity, id }) => {
                Self::NotFound(format!("{entity} '{id}' not found"))
            },
            ServiceError::Provider(ProviderError::NotFound(msg)) => Self::NotFound(msg),
            // InvalidCredentials and upstream provider failures surface as
            // 500; the detail is logged, never sent to the caller.
            _ => Self::Internal(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn service_errors_map_to_contract_statuses() {
        let validation = ServiceError::Validation(vec![]);
        assert_eq!(status_of(validation.into()), StatusCode::BAD_REQUEST);

        let conflict = ServiceError::Conflict { id: 3, name: "Paris".to_owned() };
        assert_eq!(status_of(conflict.into()), StatusCode::CONFLICT);

        let missing = ServiceError::Storage(StorageError::NotFound {
            entity: "location",
            id: "7".to_owned(),
        });
        assert_eq!(status_of(missing.into()), StatusCode::NOT_FOUND);

        let no_city = ServiceError::Provider(ProviderError::NotFound("no match".to_owned()));
        assert_eq!(status_of(no_city.into()), StatusCode::NOT_FOUND);
    }

    #[test]
    fn credential_and_upstream_failures_are_opaque_500s() {
        let bad_key = ServiceError::Provider(ProviderError::InvalidCredentials);
        assert_eq!(status_of(bad_key.into()), StatusCode::INTERNAL_SERVER_ERROR);

        let upstream = ServiceError::Provider(ProviderError::Status {
            code: 502,
            text: "Bad Gateway".to_owned(),
        });
        assert_eq!(status_of(upstream.into()), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
