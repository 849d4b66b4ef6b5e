//! Shared test fixtures.
//!
//! Provides a small sample catalog written as `cards.json`, a manually
//! advanced clock for driving catalog staleness and deck timestamps, and
//! builders for the service and gateway under test.
#![allow(dead_code)]

use std::path::Path;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;

use ygodeck::clock::Clock;
use ygodeck::models::{Card, DeckEntry};
use ygodeck::store::{DeckDb, DeckGateway};
use ygodeck::Ygodeck;

// ---------------------------------------------------------------------------
// ManualClock
// ---------------------------------------------------------------------------

/// Clock that only moves when a test advances it.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn starting_at(now: DateTime<Utc>) -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(now),
        })
    }

    pub fn new() -> Arc<Self> {
        Self::starting_at(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap())
    }

    pub fn advance(&self, delta: chrono::Duration) {
        let mut now = self.now.lock().unwrap();
        *now += delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

// ---------------------------------------------------------------------------
// Sample catalog
// ---------------------------------------------------------------------------

/// Ten cards: three monsters, five spells, two traps, in a fixed order so
/// order-preservation assertions are meaningful.
pub fn sample_catalog() -> Vec<serde_json::Value> {
    vec![
        monster(46986414, "Dark Magician", "Spellcaster", "DARK", 2500, 2100, 7),
        monster(89631139, "Blue-Eyes White Dragon", "Dragon", "LIGHT", 3000, 2500, 8),
        monster(70781052, "Summoned Skull", "Fiend", "DARK", 2500, 1200, 6),
        spell(53129443, "Dark Hole"),
        spell(83764718, "Monster Reborn"),
        spell(55144522, "Pot of Greed"),
        spell(12580477, "Raigeki"),
        spell(72302403, "Swords of Revealing Light"),
        trap(44095762, "Mirror Force"),
        trap(4206964, "Trap Hole"),
    ]
}

pub fn monster(
    id: i64,
    name: &str,
    race: &str,
    attribute: &str,
    atk: i64,
    def: i64,
    level: i64,
) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "type": "Normal Monster",
        "desc": format!("{name} test text."),
        "atk": atk,
        "def": def,
        "level": level,
        "race": race,
        "attribute": attribute,
        "card_images": [{
            "id": id,
            "image_url": format!("https://images.example/{id}.jpg"),
            "image_url_small": format!("https://images.example/small/{id}.jpg"),
            "image_url_cropped": format!("https://images.example/cropped/{id}.jpg"),
        }],
    })
}

pub fn spell(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "type": "Spell Card",
        "desc": format!("{name} test text."),
        "race": "Normal",
    })
}

pub fn trap(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "type": "Trap Card",
        "desc": format!("{name} test text."),
        "race": "Normal",
    })
}

/// Write `cards` as the catalog file in `dir`.
pub fn write_catalog(dir: &Path, cards: &[serde_json::Value]) {
    let payload = json!({ "data": cards });
    std::fs::write(dir.join("cards.json"), payload.to_string()).unwrap();
}

/// A typed card for deck-model tests, without going through the catalog.
pub fn card(id: i64, name: &str, type_field: &str) -> Card {
    serde_json::from_value(json!({
        "id": id,
        "name": name,
        "type": type_field,
        "desc": "test text",
    }))
    .unwrap()
}

pub fn entry(card: Card, count: i64) -> DeckEntry {
    DeckEntry { card, count }
}

// ---------------------------------------------------------------------------
// Service / gateway builders
// ---------------------------------------------------------------------------

/// Full service over a temp data dir, with the sample catalog written and a
/// manual clock installed.
pub fn sample_service() -> (Ygodeck, Arc<ManualClock>, tempfile::TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    write_catalog(tmp.path(), &sample_catalog());
    let clock = ManualClock::new();
    let svc = Ygodeck::builder()
        .data_dir(tmp.path())
        .clock(clock.clone())
        .build()
        .unwrap();
    (svc, clock, tmp)
}

/// Gateway over an in-memory deck database and a temp guest slot.
pub fn sample_gateway() -> (DeckGateway, Arc<ManualClock>, tempfile::TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let clock = ManualClock::new();
    let gateway = DeckGateway::new(
        DeckDb::in_memory().unwrap(),
        tmp.path().join("ygosite_deck.json"),
        clock.clone(),
    );
    (gateway, clock, tmp)
}
