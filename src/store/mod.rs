//! Deck persistence gateway.
//!
//! The same deck model persists to one of two backends depending on who is
//! asking: authenticated accounts get the durable DuckDB store, guests get
//! a single local file slot. [`DeckGateway`] picks the backend; both
//! implement the [`DeckStore`] capability set so call sites never branch on
//! identity themselves.

pub mod account;
pub mod db;
pub mod guest;

use std::path::PathBuf;
use std::sync::Arc;

use crate::clock::Clock;
use crate::error::Result;
use crate::models::{Deck, DeckDraft, DeckPatch};

pub use db::DeckDb;

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Who a deck operation is running as.
///
/// The account id is an opaque reference minted by the external
/// authentication collaborator; this crate only uses it to scope ownership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Guest,
    Account(String),
}

impl Identity {
    pub fn account(id: impl Into<String>) -> Self {
        Identity::Account(id.into())
    }

    pub fn is_account(&self) -> bool {
        matches!(self, Identity::Account(_))
    }
}

// ---------------------------------------------------------------------------
// DeckStore
// ---------------------------------------------------------------------------

/// The capability set a deck backend must provide.
pub trait DeckStore {
    /// All decks visible to this identity, newest-updated first.
    fn list(&self) -> Result<Vec<Deck>>;

    /// A single deck. `NotFound` covers both "absent" and "owned by someone
    /// else" so existence never leaks to non-owners.
    fn get(&self, id: &str) -> Result<Deck>;

    /// Persist a new deck and return it with id and timestamps assigned.
    fn create(&self, draft: &DeckDraft) -> Result<Deck>;

    /// Apply a partial update after verifying ownership.
    fn update(&self, id: &str, patch: &DeckPatch) -> Result<Deck>;

    /// Remove a deck after verifying ownership.
    fn delete(&self, id: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// DeckGateway
// ---------------------------------------------------------------------------

/// Entry point for deck persistence, owning both backends.
pub struct DeckGateway {
    db: DeckDb,
    slot_path: PathBuf,
    clock: Arc<dyn Clock>,
}

impl DeckGateway {
    pub fn new(db: DeckDb, slot_path: PathBuf, clock: Arc<dyn Clock>) -> Self {
        Self {
            db,
            slot_path,
            clock,
        }
    }

    /// The backend serving this identity.
    pub fn store<'a>(&'a self, identity: &'a Identity) -> Box<dyn DeckStore + 'a> {
        match identity {
            Identity::Account(owner) => Box::new(account::AccountDecks::new(
                &self.db,
                owner,
                self.clock.as_ref(),
            )),
            Identity::Guest => {
                Box::new(guest::GuestSlot::new(&self.slot_path, self.clock.as_ref()))
            }
        }
    }

    pub fn list(&self, identity: &Identity) -> Result<Vec<Deck>> {
        self.store(identity).list()
    }

    pub fn get(&self, identity: &Identity, id: &str) -> Result<Deck> {
        self.store(identity).get(id)
    }

    pub fn create(&self, identity: &Identity, draft: &DeckDraft) -> Result<Deck> {
        self.store(identity).create(draft)
    }

    pub fn update(&self, identity: &Identity, id: &str, patch: &DeckPatch) -> Result<Deck> {
        self.store(identity).update(id, patch)
    }

    pub fn delete(&self, identity: &Identity, id: &str) -> Result<()> {
        self.store(identity).delete(id)
    }

    /// Create-or-overwrite convenience: a draft without an id creates a new
    /// record, one with an id overwrites the existing record (ownership
    /// verified by the backend).
    pub fn save(&self, identity: &Identity, id: Option<&str>, draft: DeckDraft) -> Result<Deck> {
        let store = self.store(identity);
        match id {
            None => store.create(&draft),
            Some(id) => store.update(id, &DeckPatch::from(draft)),
        }
    }
}
