//! In-memory card catalog with time-based refresh.
//!
//! The full catalog is read once from the static `cards.json` file and kept
//! as an immutable snapshot. A load only touches the source again when the
//! snapshot is older than the TTL; a successful refresh swaps the whole
//! snapshot atomically, so concurrent readers see either the old or the new
//! catalog, never a partial one.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::clock::Clock;
use crate::error::{Result, YgodeckError};
use crate::models::Card;

// ---------------------------------------------------------------------------
// CatalogStore
// ---------------------------------------------------------------------------

/// Operational counters for the catalog source. Surfaced by the health
/// endpoint so an operator notices a missing or corrupt catalog file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub source_reads: u64,
    pub failed_reads: u64,
}

struct Snapshot {
    cards: Arc<Vec<Card>>,
    by_id: Arc<HashMap<i64, usize>>,
    loaded_at: Option<DateTime<Utc>>,
}

/// Process-wide card catalog cache.
pub struct CatalogStore {
    source: PathBuf,
    ttl: chrono::Duration,
    clock: Arc<dyn Clock>,
    state: RwLock<Snapshot>,
    source_reads: AtomicU64,
    failed_reads: AtomicU64,
}

impl CatalogStore {
    pub fn new(source: PathBuf, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        let ttl = chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX);
        Self {
            source,
            ttl,
            clock,
            state: RwLock::new(Snapshot {
                cards: Arc::new(Vec::new()),
                by_id: Arc::new(HashMap::new()),
                loaded_at: None,
            }),
            source_reads: AtomicU64::new(0),
            failed_reads: AtomicU64::new(0),
        }
    }

    /// The full current catalog.
    ///
    /// Served from memory while the snapshot is fresh. When the snapshot is
    /// absent or older than the TTL the source is re-read; if that read
    /// fails the call returns an empty catalog and leaves the load timestamp
    /// untouched, so the next call retries. The failure is logged, not
    /// propagated: a missing catalog degrades search results, it must not
    /// take the request path down.
    pub fn load(&self) -> Arc<Vec<Card>> {
        self.snapshot().0
    }

    /// Look up a single card by exact id.
    pub fn get_by_id(&self, id: i64) -> Option<Card> {
        let (cards, by_id) = self.snapshot();
        by_id.get(&id).and_then(|&idx| cards.get(idx)).cloned()
    }

    /// The (cards, id-index) pair actually being served right now.
    ///
    /// Both halves come from the same snapshot, including the empty one
    /// handed out while the source is unavailable.
    fn snapshot(&self) -> (Arc<Vec<Card>>, Arc<HashMap<i64, usize>>) {
        let now = self.clock.now();

        {
            let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
            if self.is_fresh(&state, now) {
                return (state.cards.clone(), state.by_id.clone());
            }
        }

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have refreshed while we waited for the lock.
        if self.is_fresh(&state, now) {
            return (state.cards.clone(), state.by_id.clone());
        }

        self.source_reads.fetch_add(1, Ordering::Relaxed);
        match self.read_source() {
            Ok(cards) => {
                let by_id = cards
                    .iter()
                    .enumerate()
                    .map(|(idx, card)| (card.id, idx))
                    .collect();
                *state = Snapshot {
                    cards: Arc::new(cards),
                    by_id: Arc::new(by_id),
                    loaded_at: Some(now),
                };
                (state.cards.clone(), state.by_id.clone())
            }
            Err(e) => {
                self.failed_reads.fetch_add(1, Ordering::Relaxed);
                tracing::warn!(source = %self.source.display(), error = %e, "catalog load failed; serving empty catalog");
                (Arc::new(Vec::new()), Arc::new(HashMap::new()))
            }
        }
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            source_reads: self.source_reads.load(Ordering::Relaxed),
            failed_reads: self.failed_reads.load(Ordering::Relaxed),
        }
    }

    fn is_fresh(&self, state: &Snapshot, now: DateTime<Utc>) -> bool {
        state
            .loaded_at
            .map(|at| now.signed_duration_since(at) < self.ttl)
            .unwrap_or(false)
    }

    fn read_source(&self) -> Result<Vec<Card>> {
        if !self.source.exists() {
            return Err(YgodeckError::SourceUnavailable(format!(
                "cards file not found at {}; run the catalog ingestion script",
                self.source.display()
            )));
        }

        let contents = fs::read_to_string(&self.source)
            .map_err(|e| YgodeckError::SourceUnavailable(e.to_string()))?;
        let payload: serde_json::Value = serde_json::from_str(&contents)
            .map_err(|e| YgodeckError::SourceUnavailable(e.to_string()))?;

        match payload.get("data") {
            Some(data @ serde_json::Value::Array(_)) => {
                serde_json::from_value::<Vec<Card>>(data.clone())
                    .map_err(|e| YgodeckError::SourceUnavailable(e.to_string()))
            }
            _ => Err(YgodeckError::SourceUnavailable(
                "invalid card data format: expected an array under \"data\"".into(),
            )),
        }
    }
}
