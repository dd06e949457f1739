use url::Url;

/// Everything that can go wrong when converting requests or assembling responses.
///
/// Matching and resolution never fail: they answer `false` or `None` instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("`{0}` is not a supported HTTP method")]
    UnsupportedMethod(String),
    #[error("the mock for {url} has no data for {method} requests")]
    MissingData { method: String, url: Url },
    #[error("no registered mock matches {method} {url}")]
    NoMatchingMock { method: String, url: Url },
    #[error("failed to parse the request URL")]
    Url(#[from] url::ParseError),
    #[error("failed to build the mocked response")]
    Http(#[from] http::Error),
    #[error("failed to read the request body")]
    Body(#[source] Box<dyn std::error::Error + Send + Sync>),
}
