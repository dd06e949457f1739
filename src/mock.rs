use crate::{DataType, Error, Method, Register, Request};
use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderName, HeaderValue, Response};
use http_body_util::Full;
use hyper::body::Bytes;
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;
use url::{Position, Url};

/// Host of the URLs synthesized for mocks built without an explicit URL.
pub const MOCKED_HOST: &str = "mocked.stubwire.dev";

/// A `Mock` describes a fake HTTP response and the rule deciding which outgoing requests
/// it should satisfy instead of hitting the network.
///
/// A `Mock` works in one of two modes:
/// - **exact mode** (the default): a request matches if its URL is identical to the mock's
///   [`url`] and the mock holds data for the request's method;
/// - **extension mode**, selected by [`Mock::with_file_extensions`]: a request matches if the
///   extension of its URL path is one of the mock's extensions, whatever its method or URL.
///
/// ### Example:
/// ```rust
/// use stubwire::{DataType, Method, Mock, Request};
/// use url::Url;
///
/// let url = Url::parse("https://api.example.com/users/1").unwrap();
/// let mock = Mock::with_url(
///     url.clone(),
///     DataType::Json,
///     200,
///     [(Method::Get, r#"{"id": 1}"#)],
/// );
///
/// let get = Request::new(http::Method::GET, url.clone());
/// assert!(mock.matches(&get));
/// assert_eq!(mock.response_data(&get), Some(&br#"{"id": 1}"#[..]));
///
/// // No data for POST: the mock does not apply.
/// let post = Request::new(http::Method::POST, url);
/// assert!(!mock.matches(&post));
/// ```
///
/// `Mock`s have to be [`register`]ed with a registry (e.g. a [`MockSet`]) to become effective.
///
/// [`url`]: Mock::url
/// [`register`]: Mock::register
/// [`MockSet`]: crate::MockSet
#[derive(Debug, Clone)]
pub struct Mock {
    data_type: DataType,
    status_code: u16,
    url: Url,
    headers: HeaderMap,
    // `Some` and non-empty switches the mock to extension mode.
    file_extensions: Option<BTreeSet<String>>,
    responses: BTreeMap<Method, Vec<u8>>,
    delay: Option<Duration>,
    ignore_query: bool,
}

// Builder-style methods panic on unconvertible input instead of returning `Result`s.
impl Mock {
    /// Build a `Mock` without an explicit URL.
    ///
    /// The URL is synthesized as `https://mocked.stubwire.dev/<data type>/<status code>/`:
    /// two mocks with the same data type and status code share it. Use [`Mock::with_url`]
    /// when they need to be told apart.
    pub fn new<I, B>(data_type: DataType, status_code: u16, data: I) -> Self
    where
        I: IntoIterator<Item = (Method, B)>,
        B: Into<Vec<u8>>,
    {
        let url = synthesized_url(data_type, status_code);
        Self::build(url, None, data_type, status_code, data)
    }

    /// Build a `Mock` for requests to exactly `url`.
    pub fn with_url<I, B>(url: Url, data_type: DataType, status_code: u16, data: I) -> Self
    where
        I: IntoIterator<Item = (Method, B)>,
        B: Into<Vec<u8>>,
    {
        Self::build(url, None, data_type, status_code, data)
    }

    /// Build a `Mock` for every request whose URL path ends with one of `extensions`.
    ///
    /// Dots are stripped from each extension, so `".pdf"` and `"pdf"` are equivalent.
    /// Extensions left empty by the stripping are dropped: without any extension left, the
    /// mock falls back to exact mode on its synthesized URL.
    /// The method of the request is not taken into account when matching, but
    /// [`Mock::response_data`] still only returns data for the methods listed in `data`.
    ///
    /// ### Example:
    /// ```rust
    /// use stubwire::{DataType, Method, Mock, Request};
    /// use url::Url;
    ///
    /// let mock = Mock::with_file_extensions([".pdf"], DataType::Pdf, 200, [(Method::Get, b"%PDF".to_vec())]);
    ///
    /// let url = Url::parse("https://cdn.example.com/invoices/2024.pdf").unwrap();
    /// let delete = Request::new(http::Method::DELETE, url);
    /// assert!(mock.matches(&delete));
    /// assert_eq!(mock.response_data(&delete), None);
    /// ```
    pub fn with_file_extensions<E, S, I, B>(
        extensions: E,
        data_type: DataType,
        status_code: u16,
        data: I,
    ) -> Self
    where
        E: IntoIterator<Item = S>,
        S: AsRef<str>,
        I: IntoIterator<Item = (Method, B)>,
        B: Into<Vec<u8>>,
    {
        let extensions = extensions
            .into_iter()
            .map(|extension| extension.as_ref().replace('.', ""))
            .filter(|extension| !extension.is_empty())
            .collect();
        let url = synthesized_url(data_type, status_code);
        Self::build(url, Some(extensions), data_type, status_code, data)
    }

    fn build<I, B>(
        url: Url,
        file_extensions: Option<BTreeSet<String>>,
        data_type: DataType,
        status_code: u16,
        data: I,
    ) -> Self
    where
        I: IntoIterator<Item = (Method, B)>,
        B: Into<Vec<u8>>,
    {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static(data_type.header_value()),
        );
        Self {
            data_type,
            status_code,
            url,
            headers,
            file_extensions,
            responses: data
                .into_iter()
                .map(|(method, body)| (method, body.into()))
                .collect(),
            delay: None,
            ignore_query: false,
        }
    }

    /// Add headers to the mocked response.
    ///
    /// Each header replaces any previous value under the same name. `Content-Type` is
    /// always derived from the [`DataType`] of the mock: a `Content-Type` passed here is
    /// ignored.
    ///
    /// ### Example:
    /// ```rust
    /// use stubwire::{DataType, Method, Mock};
    ///
    /// let mock = Mock::new(DataType::Json, 200, [(Method::Get, "{}")])
    ///     .additional_headers([("X-Request-Id", "42"), ("content-type", "text/plain")]);
    ///
    /// assert_eq!(mock.headers()["x-request-id"], "42");
    /// assert_eq!(mock.headers()["content-type"], "application/json; charset=utf-8");
    /// ```
    pub fn additional_headers<K, V, I>(mut self, headers: I) -> Self
    where
        K: TryInto<HeaderName>,
        <K as TryInto<HeaderName>>::Error: std::fmt::Debug,
        V: TryInto<HeaderValue>,
        <V as TryInto<HeaderValue>>::Error: std::fmt::Debug,
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in headers {
            let key = key.try_into().expect("Failed to convert into header name.");
            let value = value
                .try_into()
                .expect("Failed to convert into header value.");
            self.headers.insert(key, value);
        }
        self.headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static(self.data_type.header_value()),
        );
        self
    }

    /// Attach an artificial latency to the mock.
    ///
    /// The delay is carried along for the interception layer to honour before delivering the
    /// response: nothing in this crate waits on it.
    pub fn set_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Compare URLs without their query string and fragment in exact mode.
    ///
    /// Useful when the client under test appends cache busters or pagination cursors.
    pub fn ignore_query(mut self) -> Self {
        self.ignore_query = true;
        self
    }

    /// Hand the mock over to a registry.
    pub fn register<R: Register>(self, registry: &mut R) {
        registry.register(self);
    }

    /// Does this mock apply to `request`?
    ///
    /// A request whose method is not a [`Method`] never matches.
    pub fn matches(&self, request: &Request) -> bool {
        let method = match Method::try_from(&request.method) {
            Ok(method) => method,
            Err(_) => return false,
        };

        match &self.file_extensions {
            Some(extensions) if !extensions.is_empty() => request
                .path_extension()
                .is_some_and(|extension| extensions.contains(extension)),
            _ => self.url_matches(&request.url) && self.responses.contains_key(&method),
        }
    }

    fn url_matches(&self, url: &Url) -> bool {
        if self.ignore_query {
            self.url[..Position::AfterPath] == url[..Position::AfterPath]
        } else {
            self.url.as_str() == url.as_str()
        }
    }

    /// The payload registered for the method of `request`, if any.
    ///
    /// This is a plain lookup: whether `request` matches the mock is not checked again.
    pub fn response_data(&self, request: &Request) -> Option<&[u8]> {
        let method = Method::try_from(&request.method).ok()?;
        self.responses.get(&method).map(Vec::as_slice)
    }

    /// Assemble the full mocked response for `request`: status code, headers and the
    /// payload returned by [`Mock::response_data`].
    ///
    /// Fails if the mock holds no data for the request's method or if its status code
    /// is not a valid HTTP status code.
    pub fn response(&self, request: &Request) -> Result<Response<Full<Bytes>>, Error> {
        let body = self
            .response_data(request)
            .ok_or_else(|| Error::MissingData {
                method: request.method.to_string(),
                url: request.url.clone(),
            })?;

        let mut response = Response::builder().status(self.status_code);
        if let Some(headers) = response.headers_mut() {
            *headers = self.headers.clone();
        }
        Ok(response.body(Full::new(Bytes::copy_from_slice(body)))?)
    }

    /// The kind of content served, which determines the `Content-Type` header.
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Status code of the mocked response. It is not validated until [`Mock::response`].
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// The URL matched in exact mode, explicit or synthesized.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Headers of the mocked response, `Content-Type` included.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The normalized extensions of a mock built with [`Mock::with_file_extensions`].
    pub fn file_extensions(&self) -> Option<&BTreeSet<String>> {
        self.file_extensions.as_ref()
    }

    /// Payloads by method, ordered by [`Method`].
    pub fn responses(&self) -> &BTreeMap<Method, Vec<u8>> {
        &self.responses
    }

    /// Latency to apply before delivering the response, if any.
    pub fn delay(&self) -> Option<Duration> {
        self.delay
    }

    /// Was [`Mock::ignore_query`] called on this mock?
    pub fn ignores_query(&self) -> bool {
        self.ignore_query
    }
}

/// Two mocks are equal if they share the same URL and hold data for the same methods.
///
/// This is the identity a registry uses to replace or remove mocks: payloads, headers,
/// status codes and delays are not compared.
impl PartialEq for Mock {
    fn eq(&self, other: &Self) -> bool {
        self.url.as_str() == other.url.as_str() && self.responses.keys().eq(other.responses.keys())
    }
}

impl Eq for Mock {}

fn synthesized_url(data_type: DataType, status_code: u16) -> Url {
    format!("https://{}/{}/{}/", MOCKED_HOST, data_type, status_code)
        .parse()
        .expect("Synthesized mock URLs are always valid.")
}
