//! Deck model invariants: copy caps, entry uniqueness, totals, advisory
//! status.

mod common;

use chrono::{TimeZone, Utc};
use ygodeck::models::{Deck, DeckRules, DeckStatus};

fn empty_deck() -> Deck {
    Deck::new(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap())
}

// ---------------------------------------------------------------------------
// add_card
// ---------------------------------------------------------------------------

#[test]
fn adding_new_card_appends_entry_at_one() {
    let rules = DeckRules::default();
    let mut deck = empty_deck();

    deck.add_card(common::card(1, "Dark Magician", "Normal Monster"), &rules);

    assert_eq!(deck.cards.len(), 1);
    assert_eq!(deck.cards[0].count, 1);
}

#[test]
fn adding_existing_card_increments_up_to_cap() {
    let rules = DeckRules::default();
    let mut deck = empty_deck();
    let card = common::card(1, "Dark Magician", "Normal Monster");

    for _ in 0..5 {
        deck.add_card(card.clone(), &rules);
    }

    // Capped at three, still one entry.
    assert_eq!(deck.cards.len(), 1);
    assert_eq!(deck.cards[0].count, 3);
}

#[test]
fn add_preserves_insertion_order() {
    let rules = DeckRules::default();
    let mut deck = empty_deck();
    deck.add_card(common::card(2, "Mirror Force", "Trap Card"), &rules);
    deck.add_card(common::card(1, "Dark Magician", "Normal Monster"), &rules);
    deck.add_card(common::card(2, "Mirror Force", "Trap Card"), &rules);

    let ids: Vec<i64> = deck.cards.iter().map(|e| e.card.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn copy_cap_is_configurable() {
    let rules = DeckRules {
        max_copies: 1,
        ..DeckRules::default()
    };
    let mut deck = empty_deck();
    let card = common::card(1, "Dark Magician", "Normal Monster");

    deck.add_card(card.clone(), &rules);
    deck.add_card(card, &rules);

    assert_eq!(deck.cards[0].count, 1);
}

// ---------------------------------------------------------------------------
// remove_card
// ---------------------------------------------------------------------------

#[test]
fn removing_decrements_then_drops_entry() {
    let rules = DeckRules::default();
    let mut deck = empty_deck();
    let card = common::card(1, "Dark Magician", "Normal Monster");
    deck.add_card(card.clone(), &rules);
    deck.add_card(card, &rules);

    deck.remove_card(1);
    assert_eq!(deck.cards[0].count, 1);

    deck.remove_card(1);
    assert!(deck.cards.is_empty());
}

#[test]
fn removing_absent_card_is_noop() {
    let rules = DeckRules::default();
    let mut deck = empty_deck();
    deck.add_card(common::card(1, "Dark Magician", "Normal Monster"), &rules);

    deck.remove_card(99);

    assert_eq!(deck.cards.len(), 1);
    assert_eq!(deck.cards[0].count, 1);
}

#[test]
fn clear_empties_the_deck() {
    let rules = DeckRules::default();
    let mut deck = empty_deck();
    deck.add_card(common::card(1, "Dark Magician", "Normal Monster"), &rules);
    deck.add_card(common::card(2, "Dark Hole", "Spell Card"), &rules);

    deck.clear();
    assert!(deck.cards.is_empty());
    assert_eq!(deck.totals().total, 0);
}

// ---------------------------------------------------------------------------
// totals
// ---------------------------------------------------------------------------

#[test]
fn totals_partition_by_card_type() {
    let rules = DeckRules::default();
    let mut deck = empty_deck();
    let magician = common::card(1, "Dark Magician", "Normal Monster");
    let fusion = common::card(2, "Dark Paladin", "Fusion Monster");
    let spell = common::card(3, "Dark Hole", "Spell Card");
    let trap = common::card(4, "Mirror Force", "Trap Card");
    let token = common::card(5, "Scapegoat Token", "Token");

    deck.add_card(magician.clone(), &rules);
    deck.add_card(magician, &rules);
    deck.add_card(fusion, &rules);
    deck.add_card(spell, &rules);
    deck.add_card(trap.clone(), &rules);
    deck.add_card(trap, &rules);
    deck.add_card(token, &rules);

    let totals = deck.totals();
    assert_eq!(totals.total, 7);
    assert_eq!(totals.unique, 5);
    // Any "...Monster" type counts as a monster.
    assert_eq!(totals.monsters, 3);
    assert_eq!(totals.spells, 1);
    assert_eq!(totals.traps, 2);
    // Category counts never exceed the total; uncategorized types are only
    // in `total`.
    assert!(totals.monsters + totals.spells + totals.traps <= totals.total);
}

// ---------------------------------------------------------------------------
// Advisory status
// ---------------------------------------------------------------------------

#[test]
fn status_tracks_forty_sixty_conventions() {
    let rules = DeckRules::default();

    assert_eq!(rules.status(0), DeckStatus::Empty);
    assert_eq!(rules.status(25), DeckStatus::ShortOfMinimum { needed: 15 });
    assert_eq!(rules.status(40), DeckStatus::AtMinimum);
    assert_eq!(rules.status(50), DeckStatus::RoomToMaximum { room: 10 });
    assert_eq!(rules.status(60), DeckStatus::AtMaximum);
    assert_eq!(rules.status(63), DeckStatus::OverLimit { excess: 3 });
}
