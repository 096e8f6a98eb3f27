use toad_bounded::Bounded;

use super::route::Route;

/// Capacity of the discovery document, in bytes
pub const DISCOVERY_CAPACITY: usize = 1500;

/// The CoRE Link-Format document served at `/.well-known/core`
/// ([RFC6690](https://www.rfc-editor.org/rfc/rfc6690)).
///
/// Lists every advertised [`Route`] as `</seg/seg>;attrs`, in table order,
/// separated by commas. A path is listed at most once, under the
/// attributes of the first route that advertises it.
///
/// The document never grows past `N` bytes. A table that does not fit is
/// cut off mid-entry and [`Discovery::is_truncated`] is set.
///
/// ```
/// use toad_node::req::Method;
/// use toad_node::server::discovery::Discovery;
/// use toad_node::server::route::{Handler, Route};
///
/// const ROUTES: &[Route] =
///   &[Route::new(Method::GET, &["light"], Handler::GetLight).link("ct=0"),
///     Route::new(Method::PUT, &["light"], Handler::PutLight),
///     Route::new(Method::GET, &["humidity", "dewpoint"], Handler::DewPoint).link("ct=0")];
///
/// assert_eq!(Discovery::<64>::build(ROUTES).as_str(),
///            "</light>;ct=0,</humidity/dewpoint>;ct=0");
///
/// let short = Discovery::<10>::build(ROUTES);
/// assert_eq!(short.as_str(), "</light>;c");
/// assert!(short.is_truncated());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discovery<const N: usize = DISCOVERY_CAPACITY>(Bounded<N>);

impl<const N: usize> Discovery<N> {
  /// Render the discovery document for `routes`
  pub fn build(routes: &[Route]) -> Self {
    let mut doc = Bounded::<N>::new();

    for (ix, route) in routes.iter().enumerate() {
      let attrs = match route.link_attrs {
        | Some(attrs) if !attrs.is_empty() => attrs,
        | _ => continue,
      };

      let listed = routes[..ix].iter()
                               .any(|prev| prev.is_advertised() && prev.path == route.path);
      if listed {
        continue;
      }

      if !doc.is_empty() {
        doc.push(',');
      }

      doc.push('<');
      route.path.segments().iter().for_each(|seg| {
                                    doc.push('/');
                                    doc.push_str(seg);
                                  });
      doc.push_str(">;");
      doc.push_str(attrs);

      if doc.is_truncated() {
        break;
      }
    }

    Self(doc)
  }

  /// The document as a string slice
  pub fn as_str(&self) -> &str {
    self.0.as_str()
  }

  /// The document as bytes
  pub fn as_bytes(&self) -> &[u8] {
    self.0.as_bytes()
  }

  /// Was the document cut off because the table did not fit?
  pub fn is_truncated(&self) -> bool {
    self.0.is_truncated()
  }
}
