use serde::Deserialize;

/// Envelope around the endpoints that wrap their payload in `{"response": ...}`.
#[derive(Clone, Deserialize)]
pub(crate) struct ApiResponse<T> {
    pub(crate) response: T,
}
