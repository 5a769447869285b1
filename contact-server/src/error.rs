//! Unified server error type.
//!
//! Every handler returns `Result<T, ServerError>`, which implements
//! [`axum::response::IntoResponse`] so errors are converted to a JSON-body
//! HTTP response with the matching status code.
//!
//! Store errors are logged with full detail, but the client only ever sees
//! the generic `"Database error"` message.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error};

pub const MISSING_FIELDS: &str = "Missing fields";
pub const DATABASE_ERROR: &str = "Database error";

/// All errors that can occur while handling a contact submission.
#[derive(Debug, Error)]
pub enum ServerError {
    /// `name`, `email` or `message` was absent, empty or falsy.
    #[error("missing required fields")]
    MissingFields,

    /// Propagated from the persistence gateway.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, client_message) = match &self {
            ServerError::MissingFields => (StatusCode::BAD_REQUEST, MISSING_FIELDS),
            ServerError::Database(e) => {
                error!(error = %e, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, DATABASE_ERROR)
            }
        };
        (status, Json(json!({ "error": client_message }))).into_response()
    }
}

impl From<validator::ValidationErrors> for ServerError {
    fn from(e: validator::ValidationErrors) -> Self {
        debug!(fields = ?e.field_errors().keys().collect::<Vec<_>>(), "contact validation failed");
        ServerError::MissingFields
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(resp: Response) -> serde_json::Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn missing_fields_maps_to_400() {
        let resp = ServerError::MissingFields.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await, json!({ "error": "Missing fields" }));
    }

    #[tokio::test]
    async fn database_error_hides_detail() {
        let resp = ServerError::Database(sqlx::Error::Protocol("secret table name".into()))
            .into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(resp).await, json!({ "error": "Database error" }));
    }
}
