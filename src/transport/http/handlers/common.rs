use crate::app::player_service::is_client_error;
use crate::storage::StoreError;
use crate::transport::http::types::{ErrorBody, MSG_NOT_FOUND};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

pub fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorBody::new(message))).into_response()
}

/// Maps a store outcome to an HTTP error.
///
/// `failure_message` is the static body for validation (400) and backend
/// (500) failures of this operation; unknown identifiers always get 404.
pub fn store_error_response(err: StoreError, operation: &str, failure_message: &str) -> Response {
    if is_client_error(&err) {
        tracing::warn!(operation, error = %err, "request rejected");
    } else {
        tracing::error!(operation, error = %err, "store failure");
    }

    match err {
        StoreError::Validation(_) => error_response(StatusCode::BAD_REQUEST, failure_message),
        StoreError::NotFound => error_response(StatusCode::NOT_FOUND, MSG_NOT_FOUND),
        StoreError::Backend(_) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, failure_message)
        }
    }
}
