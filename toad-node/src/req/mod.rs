use std_alloc::string::{String, ToString};
use std_alloc::vec::Vec;
use toad_msg::{Id, Token, Type};

mod method;

#[doc(inline)]
pub use method::Method;

/// A request that has been decoded from a datagram
/// by a [`Codec`](crate::codec::Codec).
///
/// ```
/// use toad_node::req::{Method, Request};
///
/// let req = Request::put("/light").with_payload("1");
///
/// assert_eq!(req.method, Method::PUT);
/// assert_eq!(req.path, vec!["light".to_string()]);
/// assert_eq!(req.payload, b"1".to_vec());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
  /// see [`Type`]
  pub ty: Type,
  /// see [`Id`]
  pub id: Id,
  /// see [`Token`]
  pub token: Token,
  /// Request method (the message code)
  pub method: Method,
  /// Uri-Path segments, in order
  pub path: Vec<String>,
  /// Request body
  pub payload: Vec<u8>,
}

impl Request {
  /// Create a confirmable request
  ///
  /// `path` is split on `/`; empty segments are dropped.
  pub fn new(method: Method, path: impl AsRef<str>) -> Self {
    Self { ty: Type::Con,
           id: Id(0),
           token: Token(Default::default()),
           method,
           path: path.as_ref()
                     .split('/')
                     .filter(|s| !s.is_empty())
                     .map(ToString::to_string)
                     .collect(),
           payload: Vec::new() }
  }

  /// Create a new GET request
  pub fn get(path: impl AsRef<str>) -> Self {
    Self::new(Method::GET, path)
  }

  /// Create a new PUT request
  pub fn put(path: impl AsRef<str>) -> Self {
    Self::new(Method::PUT, path)
  }

  /// Create a new POST request
  pub fn post(path: impl AsRef<str>) -> Self {
    Self::new(Method::POST, path)
  }

  /// Create a new DELETE request
  pub fn delete(path: impl AsRef<str>) -> Self {
    Self::new(Method::DELETE, path)
  }

  /// Replace the request body
  pub fn with_payload(mut self, payload: impl AsRef<[u8]>) -> Self {
    self.payload = payload.as_ref().to_vec();
    self
  }

  /// Iterate over the Uri-Path segments
  pub fn path(&self) -> impl Iterator<Item = &str> {
    self.path.iter().map(String::as_str)
  }
}
