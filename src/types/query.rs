use std::collections::BTreeMap;

/// Steam games backpack.tf tracks.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum AppId {
    #[default]
    Tf2 = 440,
    Dota2 = 570,
    Csgo = 730,
}

impl AppId {
    pub fn id(self) -> u32 {
        self as u32
    }
}

/// Whether currency/price endpoints include raw (unrounded) values.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RawMode {
    /// Rounded values only.
    #[default]
    Disabled = 0,
    /// Adds `value_raw` holding the average of the low and high raw values.
    Average = 1,
    /// Adds separate low and high raw values.
    LowHigh = 2,
}

/// Which side of the classifieds to search.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ListingIntent {
    /// Both buy and sell listings.
    #[default]
    Dual,
    Buy,
    Sell,
}

impl ListingIntent {
    pub fn as_str(self) -> &'static str {
        match self {
            ListingIntent::Dual => "dual",
            ListingIntent::Buy => "buy",
            ListingIntent::Sell => "sell",
        }
    }
}

/// Optional parameters for `Client::search_classifieds`.
///
/// `SearchOptions::default()` matches the upstream defaults: dual intent,
/// page 1, 10 listings per page, folded, no filters.
#[derive(Clone, Debug)]
pub struct SearchOptions {
    /// Ask upstream to resolve item names on each listing.
    pub item_names: bool,
    /// Extra filter parameters appended to the query verbatim, in key order.
    /// Keys and values are upstream-defined and not validated here.
    pub filters: BTreeMap<String, String>,
    pub intent: ListingIntent,
    /// 1-based page number.
    pub page: u32,
    /// Listings per page, upstream accepts 1 through 30.
    pub page_size: u32,
    /// Group listings with an identical price into one entry with a count.
    pub fold: bool,
    /// Restrict results to listings by this SteamID64.
    pub steam_id: Option<u64>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            item_names: false,
            filters: BTreeMap::new(),
            intent: ListingIntent::Dual,
            page: 1,
            page_size: 10,
            fold: true,
            steam_id: None,
        }
    }
}
