use crate::client::constants::{BASE_URL, MAX_USER_LOOKUP};
use crate::client::utils::build_http;
use crate::error::RequestError;
use crate::types::classifieds::ClassifiedsSearch;
use crate::types::currencies::Currencies;
use crate::types::history::PriceHistory;
use crate::types::http::ApiResponse;
use crate::types::prices::CommunityPrices;
use crate::types::query::{AppId, RawMode, SearchOptions};
use crate::types::special::SpecialItems;
use crate::types::user::UserInfo;
use reqwest::Url;

/// Client for the backpack.tf Web API.
///
/// Holds the API key and a shared `reqwest` connection pool; every method is
/// `&self` and independent, so one client can serve concurrent calls. The
/// client does not track the per-endpoint cooldowns backpack.tf documents,
/// that is up to the caller.
pub struct Client {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: Url,
    key: String,
}

impl Client {
    /**
    Constructs a new client with a default HTTP pool

    # Arguments
    - `api_key`: backpack.tf API key, appended to every request
    */
    pub fn new(api_key: &str) -> Self {
        Self::with_http(api_key, build_http())
    }

    /**
    Constructs a new client on top of an existing `reqwest::Client`

    Useful when the application already owns a connection pool or needs
    custom timeouts/proxies on it.

    # Arguments
    - `api_key`: backpack.tf API key, appended to every request
    - `http`: The HTTP client to perform requests with
    */
    pub fn with_http(api_key: &str, http: reqwest::Client) -> Self {
        Client {
            http,
            base_url: Url::parse(BASE_URL).expect("base url is valid"),
            key: api_key.to_string(),
        }
    }

    /**
    Fetch profile data for up to 100 Steam users

    # Arguments
    - `steam_ids`: SteamID64s to look up; the upstream cap is 100 per call,
      anything past the first 100 (in input order) is not sent

    # Returns
    A mapping from SteamID64 to the user's profile record
    */
    pub async fn get_user_info(&self, steam_ids: &[u64]) -> Result<UserInfo, RequestError> {
        let url = self.user_info_url(steam_ids);
        self.call_api("user info", url).await
    }

    /**
    Fetch the community price snapshot for every priced item

    # Arguments
    - `since`: Unix timestamp; only items whose price changed after it are
      returned. `None` fetches the full snapshot.

    # Returns
    The pricing snapshot, keyed by item name
    */
    pub async fn get_community_prices(
        &self,
        since: Option<u64>,
    ) -> Result<CommunityPrices, RequestError> {
        let url = self.community_prices_url(since);
        let root: ApiResponse<CommunityPrices> = self.call_api("community prices", url).await?;
        Ok(root.response)
    }

    /**
    Fetch the currency exchange-rate table

    # Arguments
    - `raw`: Whether unrounded values are included, see `RawMode`

    # Returns
    The currency table, keyed by internal currency name (eg. "metal", "keys")
    */
    pub async fn get_currencies(&self, raw: RawMode) -> Result<Currencies, RequestError> {
        let url = self.currencies_url(raw);
        let root: ApiResponse<Currencies> = self.call_api("currencies", url).await?;
        Ok(root.response)
    }

    /**
    Fetch the price history of one item variant

    # Arguments
    - `item`: Item name, eg. "Team Captain"
    - `quality`: Quality name or id, eg. "Unusual"
    - `app_id`: Which game the item belongs to
    - `craftable`: Whether to fetch the craftable or non-craftable variant
    - `price_index`: Priceindex of the variant; 0 for items with a single one

    # Returns
    The price history, oldest entry first
    */
    pub async fn get_price_history(
        &self,
        item: &str,
        quality: &str,
        app_id: AppId,
        craftable: bool,
        price_index: u32,
    ) -> Result<PriceHistory, RequestError> {
        let url = self.price_history_url(item, quality, app_id, craftable, price_index);
        let root: ApiResponse<PriceHistory> = self.call_api("price history", url).await?;
        Ok(root.response)
    }

    /**
    Search the classifieds listings for an item

    # Arguments
    - `item`: Item name to search for
    - `options`: Paging, intent, folding and raw filter parameters;
      `SearchOptions::default()` matches the upstream defaults

    # Returns
    The matched page, split into buy and sell buckets
    */
    pub async fn search_classifieds(
        &self,
        item: &str,
        options: SearchOptions,
    ) -> Result<ClassifiedsSearch, RequestError> {
        let url = self.search_classifieds_url(item, &options);
        self.call_api("classifieds search", url).await
    }

    /**
    Fetch the catalog of special/promotional items

    # Arguments
    - `app_id`: Which game to fetch the catalog for

    # Returns
    The special item descriptors
    */
    pub async fn get_special_items(&self, app_id: AppId) -> Result<SpecialItems, RequestError> {
        let url = self.special_items_url(app_id);
        let root: ApiResponse<SpecialItems> = self.call_api("special items", url).await?;
        Ok(root.response)
    }

    pub(crate) fn user_info_url(&self, steam_ids: &[u64]) -> Url {
        let ids = steam_ids
            .iter()
            .take(MAX_USER_LOOKUP)
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",");

        self.endpoint_url(
            "/api/users/info/v1",
            [("steamids", ids), ("key", self.key.clone())],
        )
    }

    pub(crate) fn community_prices_url(&self, since: Option<u64>) -> Url {
        let mut params = vec![("key", self.key.clone())];
        if let Some(since) = since {
            params.push(("since", since.to_string()));
        }

        self.endpoint_url("/api/IGetPrices/v4", params)
    }

    pub(crate) fn currencies_url(&self, raw: RawMode) -> Url {
        let mut params = vec![("key", self.key.clone())];
        if raw != RawMode::Disabled {
            params.push(("raw", (raw as u8).to_string()));
        }

        self.endpoint_url("/api/IGetCurrencies/v1", params)
    }

    pub(crate) fn price_history_url(
        &self,
        item: &str,
        quality: &str,
        app_id: AppId,
        craftable: bool,
        price_index: u32,
    ) -> Url {
        self.endpoint_url(
            "/api/IGetPriceHistory/v1",
            [
                ("item", item.to_string()),
                ("quality", quality.to_string()),
                ("key", self.key.clone()),
                ("appid", app_id.id().to_string()),
                ("craftable", one_zero(craftable)),
                ("priceindex", price_index.to_string()),
            ],
        )
    }

    pub(crate) fn search_classifieds_url(&self, item: &str, options: &SearchOptions) -> Url {
        let mut params = vec![
            ("item".to_string(), item.to_string()),
            ("item_names".to_string(), one_zero(options.item_names)),
        ];
        // Filter pairs go out verbatim; upstream owns their meaning.
        for (name, value) in &options.filters {
            params.push((name.clone(), value.clone()));
        }
        params.push(("intent".to_string(), options.intent.as_str().to_string()));
        params.push(("page".to_string(), options.page.to_string()));
        params.push(("page_size".to_string(), options.page_size.to_string()));
        params.push(("fold".to_string(), one_zero(options.fold)));
        if let Some(steam_id) = options.steam_id {
            params.push(("steamid".to_string(), steam_id.to_string()));
        }
        params.push(("key".to_string(), self.key.clone()));

        self.endpoint_url("/api/classifieds/search/v1", params)
    }

    pub(crate) fn special_items_url(&self, app_id: AppId) -> Url {
        self.endpoint_url(
            "/api/IGetSpecialItems/v1",
            [("key", self.key.clone()), ("appid", app_id.id().to_string())],
        )
    }
}

fn one_zero(flag: bool) -> String {
    (flag as u8).to_string()
}
