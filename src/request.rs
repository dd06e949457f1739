use std::fmt;
use std::path::Path;

use http::{HeaderMap, Method, Uri};
use http_body_util::BodyExt;
use hyper::body::Body;
use serde::de::DeserializeOwned;
use url::Url;

use crate::Error;

/// Default size, in bytes, of the request bodies printed in logs.
pub const BODY_PRINT_LIMIT: usize = 10_000;

/// Specifies limitations on printing request bodies when logging requests. Some bodies
/// may be too large to reasonably print and it may be desirable to limit them.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BodyPrintLimit {
    /// Maximum length of a body to print in bytes.
    Limited(usize),
    /// There is no limit to the size of a body that may be printed.
    Unlimited,
}

impl BodyPrintLimit {
    /// Interpret the value of the `STUBWIRE_BODY_PRINT_LIMIT` environment variable.
    ///
    /// A missing or unparseable value falls back to [`BODY_PRINT_LIMIT`] bytes.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.and_then(|x| x.parse::<usize>().ok()) {
            Some(limit) => BodyPrintLimit::Limited(limit),
            None => BodyPrintLimit::Limited(BODY_PRINT_LIMIT),
        }
    }
}

/// An outgoing request observed by the interception layer.
///
/// Each [`Mock`] gets an immutable reference to a `Request` in [`Mock::matches`] and
/// [`Mock::response_data`].
///
/// `method` is kept as an [`http::Method`] rather than a [`crate::Method`]: the
/// interception layer sees whatever the client sends, and it is up to each mock to decide
/// whether the method is one it understands.
///
/// [`Mock`]: crate::Mock
/// [`Mock::matches`]: crate::Mock::matches
/// [`Mock::response_data`]: crate::Mock::response_data
#[derive(Debug, Clone)]
pub struct Request {
    pub url: Url,
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Request {
    /// A request with no headers and an empty body.
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            url,
            method,
            headers: HeaderMap::new(),
            body: Vec::new(),
        }
    }

    /// The extension of the last non-empty path segment, without the leading dot.
    ///
    /// `https://example.com/files/report.pdf?download=1` yields `Some("pdf")`, while
    /// `https://example.com/files/`, `https://example.com/.hidden` and
    /// `https://example.com/file.` yield `None`.
    pub fn path_extension(&self) -> Option<&str> {
        let segment = self
            .url
            .path_segments()?
            .filter(|segment| !segment.is_empty())
            .last()?;
        Path::new(segment)
            .extension()?
            .to_str()
            .filter(|extension| !extension.is_empty())
    }

    /// Deserialize the request body as JSON.
    pub fn body_json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Convert a request with a streaming body, collecting the body in memory.
    pub async fn from_body<B>(request: http::Request<B>) -> Result<Request, Error>
    where
        B: Body,
        B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        let (parts, body) = request.into_parts();
        let url = url_from_uri(&parts.uri)?;
        let body = body
            .collect()
            .await
            .map_err(|e| Error::Body(e.into()))?
            .to_bytes();

        Ok(Self {
            url,
            method: parts.method,
            headers: parts.headers,
            body: body.to_vec(),
        })
    }

    pub(crate) fn print_with_limit(
        &self,
        mut buffer: impl fmt::Write,
        body_print_limit: BodyPrintLimit,
    ) -> fmt::Result {
        writeln!(buffer, "{} {}", self.method, self.url)?;
        for name in self.headers.keys() {
            let values = self
                .headers
                .get_all(name)
                .iter()
                .map(|value| String::from_utf8_lossy(value.as_bytes()))
                .collect::<Vec<_>>();
            let values = values.join(",");
            writeln!(buffer, "{}: {}", name, values)?;
        }

        match body_print_limit {
            BodyPrintLimit::Limited(limit) if self.body.len() > limit => {
                // A UTF-8 code point is at most 4 bytes long.
                let truncated = (limit..(limit + 4).min(self.body.len() + 1))
                    .find_map(|end_byte| std::str::from_utf8(&self.body[..end_byte]).ok());
                match truncated {
                    // Extending the cut to a code point boundary reached the end of the body.
                    Some(truncated) if truncated.len() == self.body.len() => {
                        writeln!(buffer, "{}", truncated)
                    }
                    Some(truncated) => {
                        writeln!(buffer, "{}", truncated)?;
                        writeln!(
                            buffer,
                            "We truncated the body because it was too large: {} bytes (limit: {} bytes)",
                            self.body.len(),
                            limit
                        )?;
                        writeln!(
                            buffer,
                            "Increase this limit by setting `STUBWIRE_BODY_PRINT_LIMIT`, or calling `MockSet::body_print_limit`"
                        )
                    }
                    None => writeln!(
                        buffer,
                        "Body is likely binary (invalid utf-8) size is {} bytes",
                        self.body.len()
                    ),
                }
            }
            _ => {
                if let Ok(body) = std::str::from_utf8(&self.body) {
                    writeln!(buffer, "{}", body)
                } else {
                    writeln!(
                        buffer,
                        "Body is likely binary (invalid utf-8) size is {} bytes",
                        self.body.len()
                    )
                }
            }
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print_with_limit(f, BodyPrintLimit::Limited(BODY_PRINT_LIMIT))
    }
}

impl<B> TryFrom<http::Request<B>> for Request
where
    B: Into<Vec<u8>>,
{
    type Error = Error;

    fn try_from(request: http::Request<B>) -> Result<Self, Self::Error> {
        let (parts, body) = request.into_parts();
        Ok(Self {
            url: url_from_uri(&parts.uri)?,
            method: parts.method,
            headers: parts.headers,
            body: body.into(),
        })
    }
}

// Origin-form URIs (`/path?query`) carry no authority: resolve them against localhost.
fn url_from_uri(uri: &Uri) -> Result<Url, Error> {
    let url = match uri.authority() {
        Some(_) => uri.to_string(),
        None => format!("http://localhost{}", uri),
    };
    Ok(url.parse()?)
}
