//! Convenient re-exports of http types that are part of `stubwire`'s public API.
pub use http::{HeaderMap, HeaderName, HeaderValue, Response, StatusCode};
pub use http_body_util::Full;
pub use hyper::body::Bytes;
pub use url::Url;
