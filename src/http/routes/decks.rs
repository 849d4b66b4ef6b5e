use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::http::auth::require_account;
use crate::http::error::AppError;
use crate::http::state::AppState;
use crate::models::{DeckDraft, DeckEntry, DeckPatch};

#[derive(Deserialize)]
pub struct CreateDeckBody {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cards: Option<Vec<DeckEntry>>,
}

#[derive(Deserialize)]
pub struct UpdateDeckBody {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cards: Option<Vec<DeckEntry>>,
}

/// GET /api/decks
///
/// All decks owned by the authenticated account, newest-updated first.
pub async fn list_decks(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    let identity = require_account(&state, &headers)?;

    let decks = state
        .service
        .run(move |s| s.decks().list(&identity))
        .await?;

    Ok(Json(json!({ "decks": decks })))
}

/// POST /api/decks
pub async fn create_deck(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<CreateDeckBody>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let identity = require_account(&state, &headers)?;

    let (name, cards) = match (body.name, body.cards) {
        (Some(name), Some(cards)) => (name, cards),
        _ => return Err(AppError::bad_request("Name and cards are required")),
    };
    let draft = DeckDraft {
        name,
        description: body.description,
        cards,
    };

    let deck = state
        .service
        .run(move |s| s.decks().create(&identity, &draft))
        .await?;

    Ok((StatusCode::CREATED, Json(json!({ "deck": deck }))))
}

/// GET /api/decks/:id
pub async fn get_deck(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let identity = require_account(&state, &headers)?;

    let deck = state
        .service
        .run(move |s| s.decks().get(&identity, &id))
        .await?;

    Ok(Json(json!({ "deck": deck })))
}

/// PUT /api/decks/:id
///
/// Partial update: omitted fields keep their stored values. Ownership is
/// re-verified at write time; a deck owned by someone else is a plain 404.
pub async fn update_deck(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<UpdateDeckBody>,
) -> Result<Json<Value>, AppError> {
    let identity = require_account(&state, &headers)?;

    let patch = DeckPatch {
        name: body.name,
        description: body.description,
        cards: body.cards,
    };

    let deck = state
        .service
        .run(move |s| s.decks().update(&identity, &id, &patch))
        .await?;

    Ok(Json(json!({ "deck": deck })))
}

/// DELETE /api/decks/:id
pub async fn delete_deck(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let identity = require_account(&state, &headers)?;

    state
        .service
        .run(move |s| s.decks().delete(&identity, &id))
        .await?;

    Ok(Json(json!({ "message": "Deck deleted successfully" })))
}
