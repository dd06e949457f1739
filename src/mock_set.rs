use crate::request::BodyPrintLimit;
use crate::{Error, Mock, Register, Request};
use http::Response;
use http_body_util::Full;
use hyper::body::Bytes;
use log::debug;
use std::env;
use std::time::Duration;
use url::Url;

/// An insertion-ordered collection of [`Mock`]s, for interception layers to look up the
/// mock that should answer an outgoing request.
///
/// `MockSet` performs no locking: an interception layer shared across threads wraps it in
/// the synchronisation primitive of its choice.
///
/// ### Example:
/// ```rust
/// use stubwire::{DataType, Method, Mock, MockSet, Request};
/// use url::Url;
///
/// let mut mock_set = MockSet::new();
/// Mock::with_file_extensions(["png"], DataType::ImagePng, 200, [(Method::Get, vec![0x89u8, 0x50])])
///     .register(&mut mock_set);
///
/// let url = Url::parse("https://images.example.com/avatars/7.png").unwrap();
/// let (response, delay) = mock_set.respond(&Request::new(http::Method::GET, url)).unwrap();
///
/// assert_eq!(response.status(), 200);
/// assert_eq!(response.headers()["content-type"], "image/png");
/// assert!(delay.is_none());
/// ```
///
/// [`Mock`]: crate::Mock
#[derive(Debug)]
pub struct MockSet {
    mocks: Vec<Mock>,
    ignored_urls: Vec<Url>,
    body_print_limit: BodyPrintLimit,
}

impl MockSet {
    /// An empty `MockSet`.
    ///
    /// The size of request bodies printed when no mock matches is read from the
    /// `STUBWIRE_BODY_PRINT_LIMIT` environment variable, falling back to 10 000 bytes.
    pub fn new() -> Self {
        let configured = env::var("STUBWIRE_BODY_PRINT_LIMIT").ok();
        let body_print_limit = BodyPrintLimit::from_env_value(configured.as_deref());
        Self {
            mocks: vec![],
            ignored_urls: vec![],
            body_print_limit,
        }
    }

    /// Override the size of request bodies printed when no mock matches.
    pub fn body_print_limit(mut self, limit: BodyPrintLimit) -> Self {
        self.body_print_limit = limit;
        self
    }

    /// Unregister every mock equal to `mock` and serving the same file extensions.
    /// Returns `true` if any was removed.
    ///
    /// Extension mocks share the URL synthesized from their data type and status code, so
    /// their extensions are part of what tells them apart here.
    pub fn remove(&mut self, mock: &Mock) -> bool {
        let n_mocks = self.mocks.len();
        self.mocks.retain(|registered| !same_registration(registered, mock));
        n_mocks != self.mocks.len()
    }

    /// Drop all registered mocks and ignore rules.
    pub fn reset(&mut self) {
        self.mocks = vec![];
        self.ignored_urls = vec![];
    }

    /// Registered mocks, in lookup order.
    pub fn mocks(&self) -> &[Mock] {
        &self.mocks
    }

    /// Number of registered mocks.
    pub fn len(&self) -> usize {
        self.mocks.len()
    }

    /// `true` if no mock is registered.
    pub fn is_empty(&self) -> bool {
        self.mocks.is_empty()
    }

    /// Let requests to `url` (or to any URL it prefixes) through to the network.
    ///
    /// Ignore rules are advisory: it is up to the interception layer to check
    /// [`MockSet::is_ignored`] before looking up a mock.
    pub fn ignore(&mut self, url: Url) {
        self.ignored_urls.push(url);
    }

    /// Does `request` target a URL registered with [`MockSet::ignore`]?
    pub fn is_ignored(&self, request: &Request) -> bool {
        self.ignored_urls
            .iter()
            .any(|ignored| request.url.as_str().starts_with(ignored.as_str()))
    }

    /// The first registered mock that matches `request`.
    pub fn find(&self, request: &Request) -> Option<&Mock> {
        self.mocks.iter().find(|mock| mock.matches(request))
    }

    /// Build the response of the first mock matching `request`, along with the delay the
    /// caller should wait for before delivering it.
    pub fn respond(
        &self,
        request: &Request,
    ) -> Result<(Response<Full<Bytes>>, Option<Duration>), Error> {
        debug!("Handling request.");
        match self.find(request) {
            Some(mock) => Ok((mock.response(request)?, mock.delay())),
            None => {
                let mut printed = String::new();
                // Writing to a `String` cannot fail.
                let _ = request.print_with_limit(&mut printed, self.body_print_limit);
                debug!("Got unexpected request:\n{}", printed);
                Err(Error::NoMatchingMock {
                    method: request.method.to_string(),
                    url: request.url.clone(),
                })
            }
        }
    }
}

impl Default for MockSet {
    fn default() -> Self {
        Self::new()
    }
}

fn same_registration(registered: &Mock, mock: &Mock) -> bool {
    registered == mock && registered.file_extensions() == mock.file_extensions()
}

impl Register for MockSet {
    /// Register `mock`, replacing any registered mock equal to it and serving the same
    /// file extensions.
    fn register(&mut self, mock: Mock) {
        if self.remove(&mock) {
            debug!("Replacing the mock registered for {}.", mock.url());
        } else {
            debug!("Registering a mock for {}.", mock.url());
        }
        self.mocks.push(mock);
    }
}
