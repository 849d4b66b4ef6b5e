use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

use crate::http::error::AppError;
use crate::http::state::AppState;

/// GET /api/health
///
/// Catalog size plus source-read counters. A growing `failedReads` means
/// the catalog file is missing or corrupt and the ingestion script needs
/// to be run.
pub async fn health(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let (cards, stats) = state
        .service
        .run(|s| Ok((s.catalog().load().len(), s.catalog().stats())))
        .await?;

    Ok(Json(json!({
        "status": "ok",
        "cards": cards,
        "catalog": stats,
    })))
}
