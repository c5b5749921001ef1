use crate::types::de;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;

/// Response of the classifieds search endpoint: one page of listings.
#[derive(Clone, Debug, Deserialize)]
pub struct ClassifiedsSearch {
    /// Reason for failure when upstream rejects the query.
    pub message: Option<String>,
    /// Listings matched by the query across all pages.
    pub total: u64,
    /// Listings skipped to reach this page.
    pub skip: u64,
    pub page_size: u64,
    /// Buy-order bucket; absent when the intent excluded it or the shape
    /// did not parse.
    #[serde(default, deserialize_with = "intent_bucket")]
    pub buy: Option<IntentListings>,
    /// Sell-order bucket, same rules as `buy`.
    #[serde(default, deserialize_with = "intent_bucket")]
    pub sell: Option<IntentListings>,
}

/// Listings of one intent (buy or sell).
#[derive(Clone, Debug, Deserialize)]
pub struct IntentListings {
    /// Matches for this intent across all pages.
    pub total: u64,
    #[serde(default = "Vec::new")]
    pub listings: Vec<Listing>,
}

/// One classifieds listing.
#[derive(Clone, Debug, Deserialize)]
pub struct Listing {
    pub id: String,
    /// SteamID64 of the user who created the listing.
    pub steamid: u64,
    pub item: ListingItem,
    pub appid: u32,
    /// Asking/offering price, keyed by internal currency name.
    #[serde(default = "HashMap::new")]
    pub currencies: HashMap<String, f64>,
    /// Whether the user accepts trade offers (rather than friend adds only).
    #[serde(default, deserialize_with = "de::flag")]
    pub offers: bool,
    /// Whether the user only wants the buyout price (no negotiation).
    #[serde(default, deserialize_with = "de::flag")]
    pub buyout: bool,
    /// User-set comment. Not HTML escaped.
    pub details: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,
    /// Last bump time; equals `created` for never-bumped listings.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub bump: DateTime<Utc>,
    /// 0 for buy, 1 for sell.
    pub intent: u8,
    /// With folding enabled, the number of same-priced listings stacked
    /// under this one.
    pub count: Option<u32>,
    /// Set on backpack.tf Premium promoted listings.
    #[serde(default, deserialize_with = "de::optional_flag")]
    pub promoted: Option<bool>,
}

/// WebAPI-style item object attached to a listing.
#[derive(Clone, Debug, Deserialize)]
pub struct ListingItem {
    pub id: Option<u64>,
    pub original_id: Option<u64>,
    pub defindex: Option<i64>,
    pub level: Option<u32>,
    pub inventory: Option<u64>,
    pub quantity: Option<u32>,
    pub origin: Option<u32>,
    pub style: Option<u32>,
    #[serde(default = "Vec::new")]
    pub attributes: Vec<ItemAttribute>,
    /// In-game name, present when the search asked for item names.
    pub name: Option<String>,
    /// Price on marketplace.tf for cross-listings.
    pub marketplace_price: Option<f64>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ItemAttribute {
    pub defindex: u32,
    /// Attribute value; upstream mixes strings and numbers here.
    pub value: Option<Value>,
    pub float_value: Option<f64>,
}

// Historically this field has been seen both as the bucket object and
// wrapped in a one-element array. Parse failures read as an absent bucket
// rather than failing the whole page.
fn intent_bucket<'de, D>(deserializer: D) -> Result<Option<IntentListings>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::Object(_) => serde_json::from_value(value).ok(),
        Value::Array(entries) => entries
            .into_iter()
            .next()
            .and_then(|entry| serde_json::from_value(entry).ok()),
        _ => None,
    }))
}
