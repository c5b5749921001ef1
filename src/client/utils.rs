/**
INTERNAL: Build the HTTP client with default settings

# Returns
- A `reqwest::Client` with assigned default headers
*/
pub(super) fn build_http() -> reqwest::Client {
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        reqwest::header::USER_AGENT,
        concat!("bptf-web/", env!("CARGO_PKG_VERSION")).parse().unwrap(),
    );

    reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .unwrap()
}
