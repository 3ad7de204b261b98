use crate::domain::{Player, PlayerDraft};
use crate::transport::http::handlers::common::{error_response, store_error_response};
use crate::transport::http::types::{
    AppState, ErrorBody, MessageBody, MSG_DELETED, MSG_DELETE_FAILED, MSG_FETCH_FAILED,
    MSG_LIST_FAILED, MSG_SAVE_FAILED, MSG_UPDATE_FAILED,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value as JsonValue;

#[utoipa::path(
    post,
    path = "/api/items",
    request_body = PlayerDraft,
    responses(
        (status = 201, description = "Player created", body = Player),
        (status = 400, description = "Missing required field or unparsable body", body = ErrorBody),
        (status = 500, description = "Store unavailable", body = ErrorBody)
    )
)]
pub async fn create_player_handler(
    State(state): State<AppState>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match body {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "create: invalid JSON body");
            return error_response(StatusCode::BAD_REQUEST, MSG_SAVE_FAILED);
        }
    };

    match state.players.insert(&payload).await {
        Ok(player) => (StatusCode::CREATED, Json(player)).into_response(),
        Err(e) => store_error_response(e, "create", MSG_SAVE_FAILED),
    }
}

#[utoipa::path(
    get,
    path = "/api/items",
    responses(
        (status = 200, description = "Every stored player", body = [Player]),
        (status = 500, description = "Store unavailable", body = ErrorBody)
    )
)]
pub async fn list_players_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.players.find_all().await {
        Ok(players) => (StatusCode::OK, Json(players)).into_response(),
        Err(e) => store_error_response(e, "list", MSG_LIST_FAILED),
    }
}

#[utoipa::path(
    get,
    path = "/api/items/{id}",
    params(
        ("id" = String, Path, description = "Player identifier")
    ),
    responses(
        (status = 200, description = "Player found", body = Player),
        (status = 404, description = "Unknown identifier", body = ErrorBody),
        (status = 500, description = "Store unavailable", body = ErrorBody)
    )
)]
pub async fn get_player_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.players.find_by_id(&id).await {
        Ok(player) => (StatusCode::OK, Json(player)).into_response(),
        Err(e) => store_error_response(e, "get", MSG_FETCH_FAILED),
    }
}

#[utoipa::path(
    put,
    path = "/api/items/{id}",
    params(
        ("id" = String, Path, description = "Player identifier")
    ),
    request_body = PlayerDraft,
    responses(
        (status = 200, description = "Player replaced", body = Player),
        (status = 400, description = "Missing required field or unparsable body", body = ErrorBody),
        (status = 404, description = "Unknown identifier", body = ErrorBody),
        (status = 500, description = "Store unavailable", body = ErrorBody)
    )
)]
pub async fn update_player_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match body {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(id = %id, error = %e, "update: invalid JSON body");
            return error_response(StatusCode::BAD_REQUEST, MSG_UPDATE_FAILED);
        }
    };

    match state.players.replace(&id, &payload).await {
        Ok(player) => (StatusCode::OK, Json(player)).into_response(),
        Err(e) => store_error_response(e, "update", MSG_UPDATE_FAILED),
    }
}

#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    params(
        ("id" = String, Path, description = "Player identifier")
    ),
    responses(
        (status = 200, description = "Player deleted", body = MessageBody),
        (status = 404, description = "Unknown identifier", body = ErrorBody),
        (status = 500, description = "Store unavailable", body = ErrorBody)
    )
)]
pub async fn delete_player_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.players.remove(&id).await {
        Ok(_) => (StatusCode::OK, Json(MessageBody::new(MSG_DELETED))).into_response(),
        Err(e) => store_error_response(e, "delete", MSG_DELETE_FAILED),
    }
}
