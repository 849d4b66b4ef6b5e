use crate::async_client::AsyncYgodeck;
use crate::http::auth::SessionResolver;

/// Shared application state available to all route handlers via axum's
/// `State` extractor.
pub struct AppState {
    /// The async service handle. Dispatches blocking catalog/deck work to a
    /// thread pool internally.
    pub service: AsyncYgodeck,

    /// Maps bearer tokens to account ids. Supplied by the embedding
    /// process; session issuance itself lives outside this crate.
    pub sessions: Box<dyn SessionResolver>,
}
