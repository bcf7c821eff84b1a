//! API route definitions

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::state::ServerState;

pub fn create_router(state: ServerState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/flashcards", post(handlers::extract_flashcards))
        .route("/api/notes", get(handlers::list_notes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
