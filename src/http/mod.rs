//! HTTP API surface (feature `api`).
//!
//! Thin axum layer over the async service: routes translate query/body
//! payloads into core calls and map the error taxonomy onto status codes.
//! Identity comes from a bearer token resolved through [`auth::SessionResolver`];
//! every `/api/decks*` route requires an account identity.

pub mod auth;
pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use state::AppState;

/// Build the API router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(routes::health::health))
        .route("/api/cards", get(routes::cards::search_cards))
        .route("/api/cards/random", get(routes::cards::random_cards))
        .route("/api/cards/{id}", get(routes::cards::get_card))
        .route(
            "/api/decks",
            get(routes::decks::list_decks).post(routes::decks::create_deck),
        )
        .route(
            "/api/decks/{id}",
            get(routes::decks::get_deck)
                .put(routes::decks::update_deck)
                .delete(routes::decks::delete_deck),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
