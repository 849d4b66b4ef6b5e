//! Durable per-account deck store backed by the embedded database.
//!
//! Card entries are serialized to a JSON string for the `cards` column and
//! decoded back on every read. Every statement that touches an existing
//! record filters by owner as well as id, so a mismatch is indistinguishable
//! from a missing record.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Deserialize;

use crate::clock::Clock;
use crate::error::{Result, YgodeckError};
use crate::models::{Deck, DeckDraft, DeckEntry, DeckPatch};
use crate::store::{db::DeckDb, DeckStore};

pub struct AccountDecks<'a> {
    db: &'a DeckDb,
    owner: &'a str,
    clock: &'a dyn Clock,
}

impl<'a> AccountDecks<'a> {
    pub fn new(db: &'a DeckDb, owner: &'a str, clock: &'a dyn Clock) -> Self {
        Self { db, owner, clock }
    }

    fn not_found() -> YgodeckError {
        YgodeckError::NotFound("Deck not found".into())
    }
}

impl DeckStore for AccountDecks<'_> {
    fn list(&self) -> Result<Vec<Deck>> {
        let rows: Vec<DeckRow> = self.db.query_into(
            "SELECT * FROM decks WHERE owner = ? ORDER BY updatedAt DESC, id",
            &[&self.owner],
        )?;
        rows.into_iter().map(DeckRow::into_deck).collect()
    }

    fn get(&self, id: &str) -> Result<Deck> {
        let mut rows: Vec<DeckRow> = self.db.query_into(
            "SELECT * FROM decks WHERE owner = ? AND id = ?",
            &[&self.owner, &id],
        )?;
        rows.pop().ok_or_else(Self::not_found)?.into_deck()
    }

    fn create(&self, draft: &DeckDraft) -> Result<Deck> {
        if draft.name.trim().is_empty() {
            return Err(YgodeckError::Validation("Deck name is required".into()));
        }

        let id = new_deck_id();
        let now = self.clock.now().to_rfc3339();
        let cards = serde_json::to_string(&draft.cards)?;
        self.db.exec(
            "INSERT INTO decks (id, owner, name, description, cards, createdAt, updatedAt)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            &[
                &id,
                &self.owner,
                &draft.name,
                &draft.description,
                &cards,
                &now,
                &now,
            ],
        )?;
        self.get(&id)
    }

    fn update(&self, id: &str, patch: &DeckPatch) -> Result<Deck> {
        // Ownership check first; a foreign id must come back NotFound before
        // anything is written.
        let existing = self.get(id)?;

        let name = match patch.name.as_deref() {
            Some(n) if !n.trim().is_empty() => n.to_string(),
            _ => existing.name,
        };
        let description = patch.description.clone().or(existing.description);
        let cards = patch.cards.as_ref().unwrap_or(&existing.cards);
        let cards = serde_json::to_string(cards)?;
        let now = self.clock.now().to_rfc3339();

        self.db.exec(
            "UPDATE decks SET name = ?, description = ?, cards = ?, updatedAt = ?
             WHERE owner = ? AND id = ?",
            &[&name, &description, &cards, &now, &self.owner, &id],
        )?;
        self.get(id)
    }

    fn delete(&self, id: &str) -> Result<()> {
        let affected = self.db.exec(
            "DELETE FROM decks WHERE owner = ? AND id = ?",
            &[&self.owner, &id],
        )?;
        if affected == 0 {
            return Err(Self::not_found());
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Row mapping
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeckRow {
    id: String,
    name: String,
    description: Option<String>,
    cards: String,
    created_at: String,
    updated_at: String,
}

impl DeckRow {
    fn into_deck(self) -> Result<Deck> {
        let cards: Vec<DeckEntry> = serde_json::from_str(&self.cards)?;
        Ok(Deck {
            id: Some(self.id),
            name: self.name,
            description: self.description,
            cards,
            created_at: parse_ts(&self.created_at)?,
            updated_at: parse_ts(&self.updated_at)?,
        })
    }
}

fn parse_ts(s: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(s)?.with_timezone(&Utc))
}

fn new_deck_id() -> String {
    format!("{:032x}", rand::thread_rng().gen::<u128>())
}
