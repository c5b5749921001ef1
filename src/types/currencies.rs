use crate::types::de;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

/// Response of the IGetCurrencies endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct Currencies {
    #[serde(deserialize_with = "de::flag")]
    pub success: bool,
    /// Reason for failure when `success` is false.
    pub message: Option<String>,
    /// Exchange-rate table, keyed by internal currency name.
    #[serde(default = "HashMap::new")]
    pub currencies: HashMap<String, Currency>,
    /// Game name the table belongs to.
    pub name: Option<String>,
    pub url: Option<String>,
}

/// One currency and its current price.
#[derive(Clone, Debug, Deserialize)]
pub struct Currency {
    pub name: String,
    /// In-game quality id of the currency item.
    pub quality: i64,
    pub priceindex: String,
    /// Singular display name, eg. "ref".
    pub single: String,
    /// Plural display name, eg. "keys".
    pub plural: String,
    /// Decimal places the currency is rounded to.
    pub round: Option<u32>,
    pub blanket: Option<i64>,
    /// Either "Craftable" or "Non-Craftable".
    pub craftable: String,
    pub tradable: String,
    pub defindex: i64,
    pub price: CurrencyPrice,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CurrencyPrice {
    pub value: f64,
    /// Internal name of the currency this price is stated in.
    pub currency: String,
    /// Difference to the previous price, in the lowest currency.
    pub difference: Option<f64>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub last_update: Option<DateTime<Utc>>,
    pub value_high: Option<f64>,
    /// Raw value, set when the table was requested with a `RawMode`.
    pub value_raw: Option<f64>,
    pub value_high_raw: Option<f64>,
}
