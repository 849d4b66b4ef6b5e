//! Filtered search over the in-memory catalog.

use rand::seq::SliceRandom;

use crate::catalog::CatalogStore;
use crate::models::Card;

/// When no result cap is given, searches return at most this many cards.
pub const DEFAULT_SEARCH_LIMIT: usize = 100;

// ---------------------------------------------------------------------------
// SearchCardsParams
// ---------------------------------------------------------------------------

/// Search criteria. Every field is optional; `None` (or an empty string)
/// skips that filter. Filters are conjunctive.
#[derive(Debug, Clone, Default)]
pub struct SearchCardsParams {
    /// Case-insensitive substring match against the card name.
    pub name: Option<String>,
    /// Exact match against the card type (e.g. "Spell Card").
    pub card_type: Option<String>,
    /// Exact match against the monster race (e.g. "Dragon").
    pub race: Option<String>,
    /// Exact match against the attribute (e.g. "DARK").
    pub attribute: Option<String>,
    /// Result cap, applied after filtering. Defaults to
    /// [`DEFAULT_SEARCH_LIMIT`].
    pub limit: Option<usize>,
}

// ---------------------------------------------------------------------------
// CardQuery
// ---------------------------------------------------------------------------

/// Query interface over the catalog snapshot.
///
/// Reads are pure with respect to the snapshot: the query never mutates the
/// catalog and never holds a snapshot across refreshes.
pub struct CardQuery<'a> {
    catalog: &'a CatalogStore,
}

impl<'a> CardQuery<'a> {
    pub fn new(catalog: &'a CatalogStore) -> Self {
        Self { catalog }
    }

    /// Retrieve a single card by exact id.
    pub fn get_by_id(&self, id: i64) -> Option<Card> {
        self.catalog.get_by_id(id)
    }

    /// Search the catalog with the given filters.
    ///
    /// Matches are returned in catalog order, truncated at the limit. A
    /// search never fails: an unavailable catalog or an unmatched filter
    /// set both yield an empty vec. Exact-equality filters run before the
    /// substring scan since they are the cheapest way to reject a card.
    pub fn search(&self, params: &SearchCardsParams) -> Vec<Card> {
        let snapshot = self.catalog.load();

        let want_type = nonempty(params.card_type.as_deref());
        let want_race = nonempty(params.race.as_deref());
        let want_attr = nonempty(params.attribute.as_deref());
        let needle = nonempty(params.name.as_deref()).map(str::to_lowercase);
        let limit = params
            .limit
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_SEARCH_LIMIT);

        snapshot
            .iter()
            .filter(|c| want_type.map_or(true, |t| c.type_field == t))
            .filter(|c| want_race.map_or(true, |r| c.race.as_deref() == Some(r)))
            .filter(|c| want_attr.map_or(true, |a| c.attribute.as_deref() == Some(a)))
            .filter(|c| {
                needle
                    .as_deref()
                    .map_or(true, |n| c.name.to_lowercase().contains(n))
            })
            .take(limit)
            .cloned()
            .collect()
    }

    /// Return up to `count` randomly sampled cards, for "featured" shelves.
    pub fn random(&self, count: usize) -> Vec<Card> {
        let snapshot = self.catalog.load();
        let mut rng = rand::thread_rng();
        snapshot
            .choose_multiple(&mut rng, count)
            .cloned()
            .collect()
    }
}

fn nonempty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
