//! Single-slot local store for unauthenticated sessions.
//!
//! A guest has one working deck, not a named collection: the slot file
//! holds the serialized entry list, nothing else. The slot is written
//! whenever the deck is non-empty and removed when it empties. Slot I/O
//! failures are logged and swallowed -- local persistence must never block
//! the in-memory editing flow.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::clock::Clock;
use crate::error::{Result, YgodeckError};
use crate::models::{Deck, DeckDraft, DeckEntry, DeckPatch};
use crate::store::DeckStore;

pub struct GuestSlot<'a> {
    path: &'a Path,
    clock: &'a dyn Clock,
}

impl<'a> GuestSlot<'a> {
    pub fn new(path: &'a Path, clock: &'a dyn Clock) -> Self {
        Self { path, clock }
    }

    /// The slot contents, or `None` when the slot is empty or unreadable.
    fn read_slot(&self) -> Option<Deck> {
        if !self.path.exists() {
            return None;
        }
        let contents = match fs::read_to_string(self.path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(slot = %self.path.display(), error = %e, "failed to read guest deck slot");
                return None;
            }
        };
        let cards: Vec<DeckEntry> = match serde_json::from_str(&contents) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(slot = %self.path.display(), error = %e, "corrupt guest deck slot ignored");
                return None;
            }
        };

        let modified = slot_mtime(self.path).unwrap_or_else(|| self.clock.now());
        Some(Deck {
            id: None,
            name: String::new(),
            description: None,
            cards,
            created_at: modified,
            updated_at: modified,
        })
    }

    /// Write the entries, or clear the slot when they are empty.
    fn write_slot(&self, cards: &[DeckEntry]) {
        if cards.is_empty() {
            if self.path.exists() {
                if let Err(e) = fs::remove_file(self.path) {
                    tracing::warn!(slot = %self.path.display(), error = %e, "failed to clear guest deck slot");
                }
            }
            return;
        }
        let payload = match serde_json::to_string(cards) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(error = %e, "failed to encode guest deck slot");
                return;
            }
        };
        if let Err(e) = fs::write(self.path, payload) {
            tracing::warn!(slot = %self.path.display(), error = %e, "failed to write guest deck slot");
        }
    }
}

impl DeckStore for GuestSlot<'_> {
    fn list(&self) -> Result<Vec<Deck>> {
        Ok(self.read_slot().into_iter().collect())
    }

    fn get(&self, _id: &str) -> Result<Deck> {
        self.read_slot()
            .ok_or_else(|| YgodeckError::NotFound("Deck not found".into()))
    }

    fn create(&self, draft: &DeckDraft) -> Result<Deck> {
        self.write_slot(&draft.cards);
        let now = self.clock.now();
        Ok(Deck {
            id: None,
            name: draft.name.clone(),
            description: draft.description.clone(),
            cards: draft.cards.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    fn update(&self, id: &str, patch: &DeckPatch) -> Result<Deck> {
        let mut deck = self.get(id)?;
        if let Some(cards) = &patch.cards {
            deck.cards = cards.clone();
        }
        if let Some(name) = &patch.name {
            deck.name = name.clone();
        }
        self.write_slot(&deck.cards);
        deck.updated_at = self.clock.now();
        Ok(deck)
    }

    fn delete(&self, _id: &str) -> Result<()> {
        self.write_slot(&[]);
        Ok(())
    }
}

fn slot_mtime(path: &Path) -> Option<DateTime<Utc>> {
    fs::metadata(path).and_then(|m| m.modified()).ok().map(DateTime::from)
}
