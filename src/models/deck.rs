//! Deck model and its invariants.
//!
//! A deck is an ordered list of (card, count) entries with at most one entry
//! per card id and counts clamped to a configurable per-card cap. All
//! operations here are pure in-memory mutations; persistence lives in
//! [`crate::store`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Card;

// ---------------------------------------------------------------------------
// DeckEntry / Deck
// ---------------------------------------------------------------------------

/// One card in a deck together with how many copies it holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckEntry {
    pub card: Card,
    pub count: i64,
}

/// A named collection of card entries owned by an account or held by a
/// guest session.
///
/// `id` is present only once the deck has been persisted. The owning
/// account is a storage-side concern and never serialized out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub cards: Vec<DeckEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Deck {
    /// A fresh, unsaved deck.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            name: String::new(),
            description: None,
            cards: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Add one copy of `card`.
    ///
    /// If the card is already present its count is incremented up to
    /// `rules.max_copies`; incrementing at the cap is a no-op. A card not
    /// yet in the deck is appended with count 1, preserving insertion order.
    pub fn add_card(&mut self, card: Card, rules: &DeckRules) {
        match self.cards.iter_mut().find(|e| e.card.id == card.id) {
            Some(entry) => {
                if entry.count < rules.max_copies {
                    entry.count += 1;
                }
            }
            None => self.cards.push(DeckEntry { card, count: 1 }),
        }
    }

    /// Remove one copy of the card with `card_id`.
    ///
    /// Decrements the count; an entry at count 1 is removed entirely.
    /// Removing a card that is not in the deck is a no-op.
    pub fn remove_card(&mut self, card_id: i64) {
        if let Some(idx) = self.cards.iter().position(|e| e.card.id == card_id) {
            if self.cards[idx].count > 1 {
                self.cards[idx].count -= 1;
            } else {
                self.cards.remove(idx);
            }
        }
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Aggregate counts over the current entries.
    pub fn totals(&self) -> DeckTotals {
        let mut totals = DeckTotals {
            unique: self.cards.len(),
            ..DeckTotals::default()
        };
        for entry in &self.cards {
            totals.total += entry.count;
            if entry.card.is_monster() {
                totals.monsters += entry.count;
            } else if entry.card.is_spell() {
                totals.spells += entry.count;
            } else if entry.card.is_trap() {
                totals.traps += entry.count;
            }
        }
        totals
    }
}

// ---------------------------------------------------------------------------
// Drafts and patches
// ---------------------------------------------------------------------------

/// Payload for creating a deck (or overwriting one wholesale).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckDraft {
    pub name: String,
    pub description: Option<String>,
    pub cards: Vec<DeckEntry>,
}

/// Partial update: fields left as `None` keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeckPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cards: Option<Vec<DeckEntry>>,
}

impl From<DeckDraft> for DeckPatch {
    fn from(draft: DeckDraft) -> Self {
        Self {
            name: Some(draft.name),
            description: draft.description,
            cards: Some(draft.cards),
        }
    }
}

// ---------------------------------------------------------------------------
// Totals and advisory build rules
// ---------------------------------------------------------------------------

/// Aggregates derived from a deck's entries. Category counts partition by
/// card type; types that are neither monster, spell nor trap are counted in
/// `total` only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DeckTotals {
    pub total: i64,
    pub unique: usize,
    pub monsters: i64,
    pub spells: i64,
    pub traps: i64,
}

/// Deck-building conventions. Advisory only: nothing at the persistence
/// boundary enforces these, so alternate game variants can swap in
/// different numbers without touching storage code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckRules {
    /// Per-card copy cap applied by [`Deck::add_card`].
    pub max_copies: i64,
    pub min_size: i64,
    pub max_size: i64,
}

impl Default for DeckRules {
    fn default() -> Self {
        Self {
            max_copies: 3,
            min_size: 40,
            max_size: 60,
        }
    }
}

/// Where a deck of a given size stands relative to the 40/60 conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckStatus {
    Empty,
    /// Still short of the minimum legal size.
    ShortOfMinimum { needed: i64 },
    AtMinimum,
    /// Legal already, with room left before the maximum.
    RoomToMaximum { room: i64 },
    AtMaximum,
    OverLimit { excess: i64 },
}

impl DeckRules {
    pub fn status(&self, total: i64) -> DeckStatus {
        if total <= 0 {
            DeckStatus::Empty
        } else if total < self.min_size {
            DeckStatus::ShortOfMinimum {
                needed: self.min_size - total,
            }
        } else if total == self.min_size {
            DeckStatus::AtMinimum
        } else if total < self.max_size {
            DeckStatus::RoomToMaximum {
                room: self.max_size - total,
            }
        } else if total == self.max_size {
            DeckStatus::AtMaximum
        } else {
            DeckStatus::OverLimit {
                excess: total - self.max_size,
            }
        }
    }
}
