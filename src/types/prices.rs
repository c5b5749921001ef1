use crate::types::de;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;

/// Response of the IGetPrices endpoint: the full community pricing snapshot.
#[derive(Clone, Debug, Deserialize)]
pub struct CommunityPrices {
    #[serde(deserialize_with = "de::flag")]
    pub success: bool,
    /// Reason for failure when `success` is false.
    pub message: Option<String>,
    /// When the snapshot was taken.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub current_time: Option<DateTime<Utc>>,
    /// USD value of the lowest currency unit.
    pub raw_usd_value: Option<f64>,
    pub usd_currency: Option<String>,
    pub usd_currency_index: Option<i64>,
    /// Priced items, keyed by item name.
    #[serde(default = "HashMap::new")]
    pub items: HashMap<String, Item>,
}

/// One priced item with all of its quality sub-categories.
#[derive(Clone, Debug, Deserialize)]
pub struct Item {
    /// The item's possible definition indexes; some items have several.
    #[serde(default = "Vec::new")]
    pub defindex: Vec<i64>,
    /// Prices per quality, keyed by quality id (eg. "6" is Unique).
    #[serde(default = "HashMap::new")]
    pub prices: HashMap<String, Quality>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Quality {
    /// Always the "Tradable" branch; non-tradable items carry no prices.
    #[serde(rename = "Tradable")]
    pub tradable: Option<Tradability>,
}

/// Craftable/non-craftable price variants of one item quality.
///
/// Upstream sends each variant either as a priceindex-keyed object or, for
/// items with a single variant, as a bare one-element array. Both shapes
/// come out as the keyed map here, with `"0"` standing in for the missing
/// priceindex; anything unparseable reads as absent.
#[derive(Clone, Debug, Deserialize)]
pub struct Tradability {
    #[serde(
        rename = "Craftable",
        default,
        deserialize_with = "price_index_map"
    )]
    pub craftable: Option<HashMap<String, ItemPrice>>,
    #[serde(
        rename = "Non-Craftable",
        default,
        deserialize_with = "price_index_map"
    )]
    pub non_craftable: Option<HashMap<String, ItemPrice>>,
}

/// Community price of one item variant.
#[derive(Clone, Debug, Deserialize)]
pub struct ItemPrice {
    /// Internal name of the currency this price is stated in.
    pub currency: String,
    pub value: f64,
    /// Upper bound when the price is a range.
    pub value_high: Option<f64>,
    /// Raw value; set when the snapshot was requested with a `RawMode`.
    /// Average of low and high for `Average`, the low value for `LowHigh`.
    pub value_raw: Option<f64>,
    /// High raw value, set under `RawMode::LowHigh`.
    pub value_raw_high: Option<f64>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub last_update: Option<DateTime<Utc>>,
    /// Difference to the previous price, in the lowest currency. Equal to
    /// `value` for newly priced items, 0 for a plain refresh.
    pub difference: Option<f64>,
    /// Set on weapon prices that refer to the australium variant.
    #[serde(default, deserialize_with = "de::optional_flag")]
    pub australium: Option<bool>,
}

fn price_index_map<'de, D>(
    deserializer: D,
) -> Result<Option<HashMap<String, ItemPrice>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(normalize_price_index_map))
}

fn normalize_price_index_map(value: Value) -> Option<HashMap<String, ItemPrice>> {
    match value {
        Value::Object(_) => serde_json::from_value(value).ok(),
        Value::Array(entries) => entries.into_iter().next().and_then(|entry| {
            let price = serde_json::from_value::<ItemPrice>(entry).ok()?;
            Some(HashMap::from([("0".to_owned(), price)]))
        }),
        _ => None,
    }
}
