#[derive(Debug, thiserror::Error)]
pub enum YgodeckError {
    #[error("Catalog source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("{0}")]
    Validation(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    NotFound(String),

    #[error("Deck store failure: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<duckdb::Error> for YgodeckError {
    fn from(e: duckdb::Error) -> Self {
        YgodeckError::Store(e.to_string())
    }
}

impl From<chrono::ParseError> for YgodeckError {
    fn from(e: chrono::ParseError) -> Self {
        YgodeckError::Store(format!("bad stored timestamp: {e}"))
    }
}

pub type Result<T> = std::result::Result<T, YgodeckError>;
