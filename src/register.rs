use crate::Mock;

/// Anything that implements `Register` can accept [`Mock`]s handed over by test code.
///
/// `Register` is the seam between mocks and the layer intercepting outgoing requests:
/// the interception layer owns the storage and the locking strategy, mocks only need
/// somewhere to go.
///
/// [`MockSet`] is the implementation shipped with the crate:
/// ```rust
/// use stubwire::{DataType, Method, Mock, MockSet};
///
/// let mut mock_set = MockSet::new();
/// Mock::new(DataType::Json, 200, [(Method::Get, "{}")]).register(&mut mock_set);
///
/// assert_eq!(mock_set.len(), 1);
/// ```
///
/// Wrapping a registry shared with an interception layer is a matter of forwarding:
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use stubwire::{DataType, Method, Mock, MockSet, Register};
///
/// struct SharedMocks(Arc<Mutex<MockSet>>);
///
/// impl Register for SharedMocks {
///     fn register(&mut self, mock: Mock) {
///         self.0.lock().unwrap().register(mock);
///     }
/// }
///
/// let mocks = Arc::new(Mutex::new(MockSet::new()));
/// let mut handle = SharedMocks(mocks.clone());
/// Mock::new(DataType::Html, 404, [(Method::Get, "<h1>Not found</h1>")]).register(&mut handle);
///
/// assert_eq!(mocks.lock().unwrap().len(), 1);
/// ```
///
/// [`Mock`]: crate::Mock
/// [`MockSet`]: crate::MockSet
pub trait Register {
    /// Take ownership of `mock` and make it effective for subsequent requests.
    fn register(&mut self, mock: Mock);
}
