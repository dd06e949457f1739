//! `stubwire` provides offline HTTP test doubles: canned responses that stand in for real
//! network calls, so tests of HTTP clients run deterministically and without a network.
//!
//! # Table of Contents
//! 1. [Getting started](#getting-started)
//! 2. [Matching](#matching)
//! 3. [Registering](#registering)
//! 4. [Non-goals](#non-goals)
//!
//! ## Getting started
//! ```rust
//! use stubwire::{DataType, Method, Mock, MockSet, Request};
//! use url::Url;
//!
//! let mut mock_set = MockSet::new();
//!
//! // Arrange: a GET on the users endpoint returns a canned JSON document.
//! let url = Url::parse("https://api.example.com/users").unwrap();
//! Mock::with_url(url.clone(), DataType::Json, 200, [(Method::Get, r#"[{"id": 1}]"#)])
//!     .register(&mut mock_set);
//!
//! // Act: the interception layer looks up the response for an outgoing request.
//! let request = Request::new(http::Method::GET, url);
//! let (response, _delay) = mock_set.respond(&request).unwrap();
//!
//! // Assert
//! assert_eq!(response.status(), 200);
//! assert_eq!(
//!     response.headers()["content-type"],
//!     "application/json; charset=utf-8"
//! );
//! ```
//!
//! ## Matching
//!
//! A [`Mock`] matches in one of two modes - check [`Mock::matches`]:
//! - **exact mode**: same URL, and the mock holds data for the request method;
//! - **extension mode**: the request path ends with one of the mock's file extensions,
//!   whatever the method.
//!
//! Requests using a method outside of [`Method`] never match.
//!
//! ## Registering
//!
//! Mocks are handed over to anything implementing [`Register`]. [`MockSet`] is a simple
//! insertion-ordered registry: registering a mock equal to one already registered
//! (same URL, same methods) replaces it.
//!
//! ## Non-goals
//!
//! `stubwire` does not hook into any HTTP client, does not perform network I/O and does not
//! wait on [`Mock::delay`]: those concerns belong to the interception layer.
mod data_type;
mod error;
pub mod http;
mod method;
mod mock;
mod mock_set;
mod register;
mod request;

pub use data_type::DataType;
pub use error::Error;
pub use method::Method;
pub use mock::{Mock, MOCKED_HOST};
pub use mock_set::MockSet;
pub use register::Register;
pub use request::{BodyPrintLimit, Request};
