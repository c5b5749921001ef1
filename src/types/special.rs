use crate::types::de;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Response of the IGetSpecialItems endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct SpecialItems {
    #[serde(deserialize_with = "de::flag")]
    pub success: bool,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub current_time: Option<DateTime<Utc>>,
    #[serde(default = "Vec::new")]
    pub items: Vec<SpecialItem>,
}

/// One promotional item descriptor.
#[derive(Clone, Debug, Deserialize)]
pub struct SpecialItem {
    /// Internal backpack.tf name.
    pub name: String,
    /// In-game name.
    pub item_name: Option<String>,
    /// Definition index; special items use negative virtual indexes.
    pub defindex: Option<i64>,
    /// In-game item class, such as `tf_wearable`.
    pub item_class: Option<String>,
    pub item_type_name: Option<String>,
    pub item_description: Option<String>,
    pub item_quality: Option<u32>,
    pub min_ilevel: Option<u32>,
    pub max_ilevel: Option<u32>,
    pub image_url: Option<String>,
    pub image_url_large: Option<String>,
    pub appid: Option<u32>,
}
