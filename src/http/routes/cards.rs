use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::http::error::AppError;
use crate::http::state::AppState;
use crate::search::SearchCardsParams;

#[derive(Deserialize)]
pub struct CardSearchQuery {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub card_type: Option<String>,
    pub race: Option<String>,
    pub attribute: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct RandomCardsQuery {
    pub count: Option<usize>,
}

/// GET /api/cards?name=dark&type=Spell+Card&race=&attribute=&limit=50
///
/// Filtered catalog search. An unavailable catalog degrades to an empty
/// result set rather than an error.
pub async fn search_cards(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CardSearchQuery>,
) -> Result<Json<Value>, AppError> {
    let params = SearchCardsParams {
        name: query.name,
        card_type: query.card_type,
        race: query.race,
        attribute: query.attribute,
        limit: query.limit,
    };

    let cards = state
        .service
        .run(move |s| Ok(s.cards().search(&params)))
        .await
        .map_err(|e| AppError::internal_with("Failed to fetch card data", &e))?;

    Ok(Json(json!({ "data": cards })))
}

/// GET /api/cards/random?count=8
///
/// Randomly sampled cards for a featured shelf.
pub async fn random_cards(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RandomCardsQuery>,
) -> Result<Json<Value>, AppError> {
    let count = query.count.unwrap_or(8);
    let cards = state
        .service
        .run(move |s| Ok(s.cards().random(count)))
        .await
        .map_err(|e| AppError::internal_with("Failed to fetch card data", &e))?;

    Ok(Json(json!({ "data": cards })))
}

/// GET /api/cards/:id
pub async fn get_card(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let card = state
        .service
        .run(move |s| Ok(s.cards().get_by_id(id)))
        .await
        .map_err(|e| AppError::internal_with("Failed to fetch card data", &e))?;

    match card {
        Some(card) => Ok(Json(json!(card))),
        None => Err(AppError::not_found("Card not found")),
    }
}
