use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Card — one entry of the static catalog
// ---------------------------------------------------------------------------

/// A single Yu-Gi-Oh! card as published by the upstream catalog.
///
/// Cards are read-only inside this system: they are bulk-loaded from the
/// catalog file and never created, mutated or deleted by application logic.
/// Field names stay snake_case on the wire because that is the upstream
/// catalog format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub type_field: String,
    pub desc: String,
    pub atk: Option<i64>,
    pub def: Option<i64>,
    pub level: Option<i64>,
    pub race: Option<String>,
    pub attribute: Option<String>,
    pub archetype: Option<String>,
    pub scale: Option<i64>,
    pub linkval: Option<i64>,
    pub linkmarkers: Option<Vec<String>>,
    #[serde(default)]
    pub card_sets: Vec<CardSetListing>,
    #[serde(default)]
    pub card_images: Vec<CardImage>,
    #[serde(default)]
    pub card_prices: Vec<CardPrice>,
    pub misc_info: Option<serde_json::Value>,
    pub ygoprodeck_url: Option<String>,
    pub banlist_info: Option<BanlistInfo>,
}

impl Card {
    /// Any monster variant ("Normal Monster", "XYZ Monster", ...).
    pub fn is_monster(&self) -> bool {
        self.type_field.contains("Monster")
    }

    pub fn is_spell(&self) -> bool {
        self.type_field == "Spell Card"
    }

    pub fn is_trap(&self) -> bool {
        self.type_field == "Trap Card"
    }
}

// ---------------------------------------------------------------------------
// Nested value objects
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardImage {
    pub id: i64,
    pub image_url: String,
    pub image_url_small: String,
    pub image_url_cropped: String,
}

/// One printing of a card in a product set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSetListing {
    pub set_name: String,
    pub set_code: String,
    pub set_rarity: String,
    pub set_rarity_code: String,
    pub set_price: String,
}

/// Vendor price snapshot. Prices arrive as decimal strings from upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardPrice {
    pub cardmarket_price: String,
    pub tcgplayer_price: String,
    pub ebay_price: String,
    pub amazon_price: String,
    pub coolstuffinc_price: String,
}

/// Banlist statuses per format. Display only; nothing in this crate
/// enforces legality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BanlistInfo {
    pub ban_tcg: Option<String>,
    pub ban_ocg: Option<String>,
    pub ban_goat: Option<String>,
}
