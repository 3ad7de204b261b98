use crate::domain::{Player, PlayerDraft};
use crate::transport::http::handlers::{health, players};
use crate::transport::http::types::{AppState, ErrorBody, HealthBody, MessageBody};
use axum::http::header::{HeaderValue, InvalidHeaderValue, CONTENT_TYPE};
use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::liveness_handler,
        health::healthcheck_handler,
        players::create_player_handler,
        players::list_players_handler,
        players::get_player_handler,
        players::update_player_handler,
        players::delete_player_handler
    ),
    components(schemas(Player, PlayerDraft, ErrorBody, MessageBody, HealthBody))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/test", get(health::liveness_handler))
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/api/items",
            get(players::list_players_handler).post(players::create_player_handler),
        )
        .route(
            "/api/items/:id",
            get(players::get_player_handler)
                .put(players::update_player_handler)
                .delete(players::delete_player_handler),
        )
        .with_state(app_state)
}

/// Only the configured browser origin may call the API.
pub fn cors_layer(client_origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    let origin = HeaderValue::from_str(client_origin)?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE]))
}

/// The full application: routes, Swagger UI and CORS.
pub fn build_app(app_state: AppState, client_origin: &str) -> Result<Router, InvalidHeaderValue> {
    Ok(create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer(client_origin)?))
}
