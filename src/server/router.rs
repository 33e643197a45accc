use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::features::mentees::{handle_list_houses, handle_list_mentees, handle_mentee_responses};
use crate::features::status::{handle_healthcheck, handle_index};
use crate::server::AppState;

pub fn build_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/health", get(handle_healthcheck))
        .route("/api/houses", get(handle_list_houses))
        .route("/api/mentees", get(handle_list_mentees))
        .route(
            "/api/mentees/:discord_id/responses",
            get(handle_mentee_responses),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
