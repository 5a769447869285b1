//! Contact form submission endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use tracing::{debug, info};
use utoipa::OpenApi;

use crate::entities::ContactStore;
use crate::error::ServerError;
use crate::schemas::contact::{ContactRequest, ContactResponse, ErrorResponse};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(submit_contact),
    components(schemas(ContactRequest, ContactResponse, ErrorResponse))
)]
pub struct ContactApi;

/// Register contact routes (nested under `/api`).
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/contact", post(submit_contact))
}

/// Persist one contact form submission.
///
/// A missing, unreadable or non-object JSON body is treated as an empty form
/// and answered with `400 Missing fields`.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message saved", body = ContactResponse),
        (status = 400, description = "Missing fields", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    )
)]
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ContactResponse>, ServerError> {
    let req = match body {
        Ok(Json(value)) => ContactRequest::from_body(value),
        Err(rejection) => {
            debug!(error = %rejection, "unreadable contact body; treating as empty");
            ContactRequest::default()
        }
    };

    let message = req.into_new_message()?;
    let id = state.store.insert_contact(message).await?;
    info!(id, "contact message saved");

    Ok(Json(ContactResponse::saved()))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
