use crate::client::Client;
use crate::error::RequestError;
use reqwest::Url;
use serde::de::DeserializeOwned;

impl Client {
    /**
    INTERNAL: Build a full request URL from an endpoint path and query pairs.

    Pairs are appended in the order given and form-urlencoded, so the query
    string is stable across calls with the same inputs.
    */
    pub(crate) fn endpoint_url<K, V, I>(&self, path: &str, params: I) -> Url
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut url = self.base_url.clone();
        url.set_path(path);
        {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in params {
                pairs.append_pair(name.as_ref(), value.as_ref());
            }
        }
        url
    }

    /**
    INTERNAL: Perform a GET against one endpoint, returning the deserialized body.

    # Arguments
    - `endpoint`: Endpoint label used in error messages and log events.
    - `url`: Fully built request URL, query string included.

    # Returns
    - The deserialized response, or a `RequestError` naming the endpoint with
      the transport/parse failure attached as its cause.
    */
    pub(crate) async fn call_api<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        url: Url,
    ) -> Result<T, RequestError> {
        tracing::debug!(endpoint, path = url.path(), "requesting");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| RequestError::http(endpoint, err))?;

        let body = response
            .text()
            .await
            .map_err(|err| RequestError::http(endpoint, err))?;

        serde_json::from_str(&body).map_err(|err| RequestError::parse(endpoint, err))
    }
}
