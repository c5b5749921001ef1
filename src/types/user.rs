use crate::types::de;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

/// Response of the users/info endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct UserInfo {
    /// Looked-up users, keyed by SteamID64.
    #[serde(default = "HashMap::new")]
    pub users: HashMap<u64, User>,
}

/// One user's backpack.tf profile.
///
/// Upstream omits fields instead of sending falsy values, so every flag and
/// stat that may be missing is an `Option`.
#[derive(Clone, Debug, Deserialize)]
pub struct User {
    pub name: String,
    pub avatar: String,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub last_online: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de::optional_flag")]
    pub admin: Option<bool>,
    /// Lifetime amount donated to the site, in USD.
    pub donated: Option<f64>,
    #[serde(default, deserialize_with = "de::optional_flag")]
    pub premium: Option<bool>,
    pub premium_months_gifted: Option<u64>,
    pub integrations: Option<Integrations>,
    pub bans: Option<Bans>,
    pub voting: Option<Voting>,
    /// Per-game inventory stats, keyed by AppID.
    #[serde(default = "HashMap::new")]
    pub inventory: HashMap<u32, InventoryStats>,
    pub trust: Option<Trust>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Integrations {
    #[serde(default, deserialize_with = "de::optional_flag")]
    pub group_member: Option<bool>,
    #[serde(default, deserialize_with = "de::optional_flag")]
    pub marketplace_seller: Option<bool>,
    /// Whether the user runs the automatic bump bot.
    #[serde(default, deserialize_with = "de::optional_flag")]
    pub automatic: Option<bool>,
    #[serde(default, deserialize_with = "de::optional_flag")]
    pub steamrep_admin: Option<bool>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Bans {
    #[serde(default, deserialize_with = "de::optional_flag")]
    pub steamrep_scammer: Option<bool>,
    #[serde(default, deserialize_with = "de::optional_flag")]
    pub steamrep_caution: Option<bool>,
    pub valve: Option<ValveBans>,
    /// Site-wide ban covering every section below.
    pub all: Option<SiteBan>,
    pub suggestions: Option<SiteBan>,
    pub comments: Option<SiteBan>,
    pub trust: Option<SiteBan>,
    pub issues: Option<SiteBan>,
    pub classifieds: Option<SiteBan>,
    pub customizations: Option<SiteBan>,
    pub reports: Option<SiteBan>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ValveBans {
    #[serde(default, deserialize_with = "de::optional_flag")]
    pub economy: Option<bool>,
    #[serde(default, deserialize_with = "de::optional_flag")]
    pub community: Option<bool>,
    #[serde(default, deserialize_with = "de::optional_flag")]
    pub vac: Option<bool>,
    #[serde(default, deserialize_with = "de::optional_flag")]
    pub game: Option<bool>,
}

/// A ban on one section of the site.
#[derive(Clone, Debug, Deserialize)]
pub struct SiteBan {
    /// When the ban ends.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub end: DateTime<Utc>,
    pub reason: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Voting {
    pub reputation: Option<i64>,
    pub votes: Option<Votes>,
    pub suggestions: Option<Suggestions>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Votes {
    pub positive: Option<u64>,
    pub negative: Option<u64>,
    pub accepted: Option<u64>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Suggestions {
    pub created: Option<u64>,
    pub accepted: Option<u64>,
    pub accepted_unusual: Option<u64>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct InventoryStats {
    /// Position on the site-wide inventory value ranking.
    pub ranking: u64,
    /// Total inventory value in the game's lowest currency.
    pub value: f64,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated: DateTime<Utc>,
    pub metal: f64,
    pub keys: u64,
    pub slots: Option<Slots>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Slots {
    pub used: u64,
    pub total: u64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Trust {
    pub positive: u64,
    pub negative: u64,
}
