use std::path::PathBuf;
use std::time::Duration;

/// Static catalog file, shaped as `{ "data": [Card, ...] }`. Produced by an
/// out-of-band ingestion script; its absence is an operational condition,
/// not a crash.
pub const CARDS_FILE: &str = "cards.json";

/// Embedded database file holding per-account decks.
pub const DECK_DB_FILE: &str = "decks.duckdb";

/// Single guest deck slot. Written while the guest deck is non-empty,
/// removed when it empties.
pub const GUEST_SLOT_FILE: &str = "ygosite_deck.json";

/// Bearer-token -> account-id map consumed by the API binary. Maintained by
/// the external authentication collaborator.
#[cfg(feature = "api")]
pub const SESSIONS_FILE: &str = "sessions.json";

/// Maximum age of the in-memory catalog snapshot before the source file is
/// re-read.
pub const CATALOG_TTL: Duration = Duration::from_secs(3600);

pub fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
