use crate::types::de;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Response of the IGetPriceHistory endpoint for one item variant.
#[derive(Clone, Debug, Deserialize)]
pub struct PriceHistory {
    #[serde(deserialize_with = "de::flag")]
    pub success: bool,
    /// Reason for failure when `success` is false.
    pub message: Option<String>,
    /// Price points in upstream order, oldest first.
    #[serde(default = "Vec::new")]
    pub history: Vec<PricePoint>,
}

/// One historical price of the requested item variant.
#[derive(Clone, Debug, Deserialize)]
pub struct PricePoint {
    pub value: f64,
    /// Upper bound when the price was a range.
    pub value_high: Option<f64>,
    /// Internal name of the currency the price is stated in.
    pub currency: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub timestamp: DateTime<Utc>,
}
