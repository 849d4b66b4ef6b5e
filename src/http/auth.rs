//! Session consumption.
//!
//! Authentication itself (login, session issuance, expiry) is an external
//! collaborator; this module only resolves an incoming bearer token to an
//! opaque account id. No token, or a token the resolver does not know,
//! means the request runs as a guest.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;

use crate::http::error::AppError;
use crate::http::state::AppState;
use crate::store::Identity;

/// Resolves a bearer token to an account id.
pub trait SessionResolver: Send + Sync {
    fn resolve(&self, token: &str) -> Option<String>;
}

/// Token map loaded from a JSON file (`{ "token": "account-id", ... }`)
/// maintained by the authentication collaborator. A missing or unreadable
/// file yields an empty map: every request is then a guest.
pub struct FileSessions {
    map: HashMap<String, String>,
}

impl FileSessions {
    pub fn load(path: &Path) -> Self {
        let map = fs::read_to_string(path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_else(|| {
                tracing::warn!(sessions = %path.display(), "no session file; all requests run as guest");
                HashMap::new()
            });
        Self { map }
    }
}

impl SessionResolver for FileSessions {
    fn resolve(&self, token: &str) -> Option<String> {
        self.map.get(token).cloned()
    }
}

/// The identity of the current request.
pub fn identify(state: &AppState, headers: &HeaderMap) -> Identity {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .and_then(|token| state.sessions.resolve(token))
        .map(Identity::Account)
        .unwrap_or(Identity::Guest)
}

/// Like [`identify`], but guests are rejected with 401.
pub fn require_account(state: &AppState, headers: &HeaderMap) -> Result<Identity, AppError> {
    match identify(state, headers) {
        Identity::Guest => Err(AppError::unauthorized()),
        account => Ok(account),
    }
}
