//! Data models for the card catalog and deck store.

pub mod card;
pub mod deck;

pub use card::{BanlistInfo, Card, CardImage, CardPrice, CardSetListing};
pub use deck::{Deck, DeckDraft, DeckEntry, DeckPatch, DeckRules, DeckStatus, DeckTotals};
