use super::path::Path;
use crate::req::Method;

/// The resources a [`Route`] can lead to
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handler {
  /// The discovery document
  WellKnownCore,
  GetLight,
  PutLight,
  Humidity,
  HumidityTemperature,
  CompensatedHumidity,
  DewPoint,
  Pressure,
  PressureTemperature,
}

/// One entry of a resource table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Route {
  /// Method this route accepts
  pub method: Method,
  /// Path this route accepts
  pub path: Path,
  /// Resource serving matched requests
  pub handler: Handler,
  /// CoRE Link-Format attributes advertised for this resource.
  ///
  /// Routes without attributes are not listed in the discovery document.
  pub link_attrs: Option<&'static str>,
}

impl Route {
  /// Declare an unadvertised route
  pub const fn new(method: Method, path: &'static [&'static str], handler: Handler) -> Self {
    Self { method,
           path: Path::new(path),
           handler,
           link_attrs: None }
  }

  /// Advertise this route in the discovery document with `attrs`
  pub const fn link(self, attrs: &'static str) -> Self {
    Self { link_attrs: Some(attrs),
           ..self }
  }

  /// Will this route be listed in the discovery document?
  pub fn is_advertised(&self) -> bool {
    matches!(self.link_attrs, Some(attrs) if !attrs.is_empty())
  }
}

/// The node's resource table
pub const ROUTES: &[Route] =
  &[Route::new(Method::GET, &[".well-known", "core"], Handler::WellKnownCore),
    Route::new(Method::GET, &["light"], Handler::GetLight).link("ct=0"),
    Route::new(Method::PUT, &["light"], Handler::PutLight),
    Route::new(Method::GET, &["humidity"], Handler::Humidity).link("ct=0;if=HTU21D;rt=relative"),
    Route::new(Method::GET,
               &["humidity", "temperature"],
               Handler::HumidityTemperature).link("ct=0;if=HTU21D"),
    Route::new(Method::GET,
               &["humidity", "compensated"],
               Handler::CompensatedHumidity).link("ct=0;if=HTU21D;rt=temperature-compensated"),
    Route::new(Method::GET, &["humidity", "dewpoint"], Handler::DewPoint).link("ct=0;if=HTU21D"),
    Route::new(Method::GET, &["pressure"], Handler::Pressure).link("ct=0;if=MPL3115A2"),
    Route::new(Method::GET,
               &["pressure", "temperature"],
               Handler::PressureTemperature).link("ct=0;if=MPL3115A2")];

/// Resource table of a board with only the panel LED
pub const PANEL_ROUTES: &[Route] =
  &[Route::new(Method::GET, &[".well-known", "core"], Handler::WellKnownCore),
    Route::new(Method::GET, &["light"], Handler::GetLight).link("ct=0;title=\"Panel LED\";rt=\"state\""),
    Route::new(Method::PUT, &["light"], Handler::PutLight)];

/// Find the first route in `routes` accepting `method` and `path`
///
/// ```
/// use toad_node::req::Method;
/// use toad_node::server::route::{self, Handler};
///
/// let found = route::lookup(route::ROUTES, Method::PUT, &["light"]);
/// assert_eq!(found.map(|r| r.handler), Some(Handler::PutLight));
///
/// assert!(route::lookup(route::ROUTES, Method::DELETE, &["light"]).is_none());
/// ```
pub fn lookup<'a, S: AsRef<str>>(routes: &'a [Route],
                                 method: Method,
                                 path: &[S])
                                 -> Option<&'a Route> {
  routes.iter()
        .find(|r| r.method == method && r.path.matches(path))
}
