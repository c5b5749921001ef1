use thiserror::Error;

/// The one error kind returned by every `Client` method.
///
/// The message names the endpoint that failed; the underlying transport or
/// parse error is attached as the source and can be inspected through
/// [`RequestError::cause`] or the standard `Error::source` chain.
#[derive(Debug, Error)]
#[error("{endpoint} request failed")]
pub struct RequestError {
    endpoint: &'static str,
    #[source]
    cause: RequestCause,
}

/// What actually went wrong underneath a [`RequestError`].
#[derive(Debug, Error)]
pub enum RequestCause {
    /// Connection failure, or the endpoint answered with a non-success status.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// The body was not the JSON shape the endpoint documents.
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}

impl RequestError {
    pub(crate) fn http(endpoint: &'static str, err: reqwest::Error) -> Self {
        RequestError {
            endpoint,
            cause: RequestCause::Http(err),
        }
    }

    pub(crate) fn parse(endpoint: &'static str, err: serde_json::Error) -> Self {
        RequestError {
            endpoint,
            cause: RequestCause::Parse(err),
        }
    }

    /// Name of the endpoint the failing request was sent to.
    pub fn endpoint(&self) -> &'static str {
        self.endpoint
    }

    /// The underlying transport or parse error.
    pub fn cause(&self) -> &RequestCause {
        &self.cause
    }
}
