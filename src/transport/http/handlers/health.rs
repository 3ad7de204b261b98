use crate::transport::http::types::{
    AppState, HealthBody, MessageBody, MSG_ALIVE, MSG_STORE_UNAVAILABLE,
};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/test",
    responses(
        (status = 200, description = "The API process is up", body = MessageBody)
    )
)]
pub async fn liveness_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(MessageBody::new(MSG_ALIVE)))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy (store reachable)", body = HealthBody),
        (status = 503, description = "Service is unhealthy (store unreachable)", body = HealthBody)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.players.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthBody {
                status: "ok".to_string(),
                error: None,
            }),
        ),
        Err(e) => {
            tracing::error!(error = %e, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthBody {
                    status: "unhealthy".to_string(),
                    error: Some(MSG_STORE_UNAVAILABLE.to_string()),
                }),
            )
        }
    }
}
