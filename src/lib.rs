//! Card catalog search and deck persistence for a Yu-Gi-Oh! deck builder.
//!
//! The crate loads a static card catalog (`data/cards.json`) into an
//! in-memory snapshot refreshed on a one-hour TTL, exposes filtered search
//! over it, and persists named decks per account in an embedded DuckDB
//! store. Unauthenticated (guest) sessions get a single local deck slot
//! instead of the durable store.
//!
//! # Quick start
//!
//! ```no_run
//! use ygodeck::search::SearchCardsParams;
//! use ygodeck::Ygodeck;
//!
//! let svc = Ygodeck::builder().build().unwrap();
//!
//! // Search the catalog
//! let spells = svc.cards().search(&SearchCardsParams {
//!     card_type: Some("Spell Card".into()),
//!     ..Default::default()
//! });
//!
//! // List an account's decks
//! let identity = ygodeck::Identity::account("user-1");
//! let decks = svc.decks().list(&identity).unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod error;
#[cfg(feature = "api")]
pub mod http;
pub mod models;
pub mod search;
pub mod store;

#[cfg(feature = "async")]
pub use async_client::AsyncYgodeck;
pub use catalog::CatalogStore;
pub use clock::{Clock, SystemClock};
pub use error::{Result, YgodeckError};
pub use models::{Card, Deck, DeckDraft, DeckEntry, DeckPatch, DeckRules};
pub use store::{DeckGateway, Identity};

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use store::DeckDb;

// ---------------------------------------------------------------------------
// YgodeckBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`Ygodeck`] service.
pub struct YgodeckBuilder {
    data_dir: PathBuf,
    catalog_ttl: Duration,
    clock: Option<Arc<dyn Clock>>,
    rules: DeckRules,
}

impl Default for YgodeckBuilder {
    fn default() -> Self {
        Self {
            data_dir: config::default_data_dir(),
            catalog_ttl: config::CATALOG_TTL,
            clock: None,
            rules: DeckRules::default(),
        }
    }
}

impl YgodeckBuilder {
    /// Directory holding the catalog file, the deck database and the guest
    /// slot. Defaults to `./data`.
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = path.as_ref().to_path_buf();
        self
    }

    /// Maximum catalog snapshot age before the source file is re-read.
    /// Defaults to one hour.
    pub fn catalog_ttl(mut self, ttl: Duration) -> Self {
        self.catalog_ttl = ttl;
        self
    }

    /// Override the time source. Tests inject a manual clock here to drive
    /// catalog staleness and deck timestamps deterministically.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Deck-building conventions (per-card cap, 40/60 sizes).
    pub fn rules(mut self, rules: DeckRules) -> Self {
        self.rules = rules;
        self
    }

    /// Build the service, creating the data directory and the deck database
    /// schema if needed. The catalog itself is loaded lazily on first query.
    pub fn build(self) -> Result<Ygodeck> {
        fs::create_dir_all(&self.data_dir)?;
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));

        let catalog = CatalogStore::new(
            self.data_dir.join(config::CARDS_FILE),
            self.catalog_ttl,
            clock.clone(),
        );
        let db = DeckDb::open(&self.data_dir.join(config::DECK_DB_FILE))?;
        let decks = DeckGateway::new(db, self.data_dir.join(config::GUEST_SLOT_FILE), clock);

        Ok(Ygodeck {
            data_dir: self.data_dir,
            catalog,
            decks,
            rules: self.rules,
        })
    }
}

// ---------------------------------------------------------------------------
// Ygodeck
// ---------------------------------------------------------------------------

/// The main entry point: catalog search plus deck persistence behind one
/// handle. Created via [`Ygodeck::builder()`].
pub struct Ygodeck {
    data_dir: PathBuf,
    catalog: CatalogStore,
    decks: DeckGateway,
    rules: DeckRules,
}

impl Ygodeck {
    pub fn builder() -> YgodeckBuilder {
        YgodeckBuilder::default()
    }

    /// Card search interface over the cached catalog.
    pub fn cards(&self) -> search::CardQuery<'_> {
        search::CardQuery::new(&self.catalog)
    }

    /// The catalog cache itself (stats, direct loads).
    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// The deck persistence gateway.
    pub fn decks(&self) -> &DeckGateway {
        &self.decks
    }

    /// The advisory deck-building rules this service was configured with.
    pub fn rules(&self) -> &DeckRules {
        &self.rules
    }
}

impl fmt::Display for Ygodeck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.catalog.stats();
        write!(
            f,
            "Ygodeck(data_dir={}, source_reads={}, failed_reads={})",
            self.data_dir.display(),
            stats.source_reads,
            stats.failed_reads
        )
    }
}
