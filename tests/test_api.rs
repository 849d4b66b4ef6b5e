//! HTTP surface tests: status codes, payload shapes, auth gating.
#![cfg(feature = "api")]

mod common;

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use ygodeck::http::auth::SessionResolver;
use ygodeck::http::state::AppState;
use ygodeck::{http, AsyncYgodeck};

struct StaticSessions(HashMap<String, String>);

impl SessionResolver for StaticSessions {
    fn resolve(&self, token: &str) -> Option<String> {
        self.0.get(token).cloned()
    }
}

async fn test_router() -> (Router, tempfile::TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    common::write_catalog(tmp.path(), &common::sample_catalog());

    let service = AsyncYgodeck::builder()
        .data_dir(tmp.path())
        .build()
        .await
        .unwrap();
    let sessions = StaticSessions(HashMap::from([
        ("alice-token".to_string(), "alice".to_string()),
        ("bob-token".to_string(), "bob".to_string()),
    ]));
    let state = Arc::new(AppState {
        service,
        sessions: Box::new(sessions),
    });
    (http::router(state), tmp)
}

async fn send(router: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn authed(method: &str, uri: &str, token: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json");
    match body {
        Some(v) => builder.body(Body::from(v.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

fn sample_deck_body() -> Value {
    json!({
        "name": "Spellcasters",
        "cards": [
            { "card": { "id": 46986414, "name": "Dark Magician", "type": "Normal Monster", "desc": "t" }, "count": 3 },
            { "card": { "id": 53129443, "name": "Dark Hole", "type": "Spell Card", "desc": "t" }, "count": 1 }
        ]
    })
}

// ---------------------------------------------------------------------------
// Cards
// ---------------------------------------------------------------------------

#[tokio::test]
async fn card_search_returns_data_envelope() {
    let (router, _tmp) = test_router().await;

    let (status, body) = send(&router, get("/api/cards?name=dark&limit=10")).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Dark Magician", "Dark Hole"]);
}

#[tokio::test]
async fn card_detail_found_and_missing() {
    let (router, _tmp) = test_router().await;

    let (status, body) = send(&router, get("/api/cards/44095762")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Mirror Force");
    assert_eq!(body["type"], "Trap Card");

    let (status, body) = send(&router, get("/api/cards/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Card not found");
}

#[tokio::test]
async fn random_cards_respects_count() {
    let (router, _tmp) = test_router().await;

    let (status, body) = send(&router, get("/api/cards/random?count=3")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

// ---------------------------------------------------------------------------
// Decks: auth gating
// ---------------------------------------------------------------------------

#[tokio::test]
async fn deck_routes_require_authentication() {
    let (router, _tmp) = test_router().await;

    let (status, body) = send(&router, get("/api/decks")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");

    let req = Request::builder()
        .method("POST")
        .uri("/api/decks")
        .header(header::AUTHORIZATION, "Bearer bogus")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(sample_deck_body().to_string()))
        .unwrap();
    let (status, _) = send(&router, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Decks: CRUD
// ---------------------------------------------------------------------------

#[tokio::test]
async fn deck_crud_roundtrip() {
    let (router, _tmp) = test_router().await;

    let (status, body) = send(
        &router,
        authed("POST", "/api/decks", "alice-token", Some(sample_deck_body())),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["deck"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["deck"]["cards"].as_array().unwrap().len(), 2);

    let (status, body) = send(&router, authed("GET", "/api/decks", "alice-token", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["decks"].as_array().unwrap().len(), 1);
    assert_eq!(body["decks"][0]["name"], "Spellcasters");

    let (status, body) = send(
        &router,
        authed(
            "PUT",
            &format!("/api/decks/{id}"),
            "alice-token",
            Some(json!({ "description": "Classic control" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deck"]["name"], "Spellcasters");
    assert_eq!(body["deck"]["description"], "Classic control");

    let (status, body) = send(
        &router,
        authed("DELETE", &format!("/api/decks/{id}"), "alice-token", None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Deck deleted successfully");

    let (status, body) = send(&router, authed("GET", "/api/decks", "alice-token", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["decks"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn deck_create_validates_required_fields() {
    let (router, _tmp) = test_router().await;

    let (status, body) = send(
        &router,
        authed(
            "POST",
            "/api/decks",
            "alice-token",
            Some(json!({ "name": "No cards" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Name and cards are required");
}

#[tokio::test]
async fn deck_access_is_owner_scoped() {
    let (router, _tmp) = test_router().await;

    let (_, body) = send(
        &router,
        authed("POST", "/api/decks", "alice-token", Some(sample_deck_body())),
    )
    .await;
    let id = body["deck"]["id"].as_str().unwrap().to_string();

    // Bob sees a plain 404 for Alice's deck, on every verb.
    let (status, body) = send(
        &router,
        authed("GET", &format!("/api/decks/{id}"), "bob-token", None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Deck not found");

    let (status, _) = send(
        &router,
        authed("DELETE", &format!("/api/decks/{id}"), "bob-token", None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Alice still owns it.
    let (status, body) = send(&router, authed("GET", "/api/decks", "alice-token", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["decks"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_reports_catalog_counters() {
    let (router, _tmp) = test_router().await;

    let (status, body) = send(&router, get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["cards"], 10);
    assert_eq!(body["catalog"]["sourceReads"], 1);
    assert_eq!(body["catalog"]["failedReads"], 0);
}
