use toad_bounded::Bounded;
use toad_msg::Code;

use self::discovery::Discovery;
use self::route::{Handler, Route, ROUTES};
use crate::codec::Codec;
use crate::config::Config;
use crate::logging;
use crate::req::Request;
use crate::resp::{code, Reply, Response};
use crate::sensor::{Actuator, Sensors, Switch};
use crate::{value, ContentFormat};

/// The `/.well-known/core` document
pub mod discovery;
/// Resource paths
pub mod path;
/// The resource table
pub mod route;

/// Capacity of the buffer handlers write their response bodies to, in bytes
pub const SCRATCH_CAPACITY: usize = 64;

/// Buffer handlers write their response bodies to
pub type Scratch = Bounded<SCRATCH_CAPACITY>;

/// Errors that stop a request from being answered
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum Error<P, B> {
  /// The datagram could not be decoded; no resource was run
  Parse(P),
  /// The response could not be encoded
  Build(B),
}

/// Requests that are answered with an error response
#[derive(Clone, Debug, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
  /// No route accepts the request's method & path.
  ///
  /// Answered 4.04 NOT FOUND without a body.
  RouteNotFound,
  /// The request needs a body and had none.
  ///
  /// Answered 4.00 BAD REQUEST without a body.
  BadRequestPayload,
}

impl Rejection {
  /// The response code for this rejection
  pub fn code(&self) -> Code {
    match self {
      | Rejection::RouteNotFound => code::NOT_FOUND,
      | Rejection::BadRequestPayload => code::BAD_REQUEST,
    }
  }

  /// The reply sent for this rejection
  pub fn reply(&self) -> Reply<'static> {
    match self {
      | Rejection::RouteNotFound => Reply::empty(self.code()),
      | Rejection::BadRequestPayload => Reply { content_format: Some(ContentFormat::Text),
                                                ..Reply::empty(self.code()) },
    }
  }
}

/// Everything a resource may touch while handling a request
#[derive(Debug)]
pub struct Resources<S, A> {
  sensors: S,
  actuator: A,
  light: Switch,
  routes: &'static [Route],
  discovery: Discovery,
  scratch: Scratch,
  config: Config,
}

impl<S, A> Resources<S, A>
  where S: Sensors,
        A: Actuator
{
  fn new(sensors: S, actuator: A, config: Config, routes: &'static [Route]) -> Self {
    let discovery = Discovery::build(routes);

    if discovery.is_truncated() {
      log::warn!("discovery document truncated to {} bytes",
                 discovery.as_bytes().len());
    }

    Self { sensors,
           actuator,
           light: Switch::default(),
           routes,
           discovery,
           scratch: Scratch::new(),
           config }
  }

  /// Find the route for `req` and run its resource.
  ///
  /// The reply borrows this dispatcher's scratch buffer (or its discovery
  /// document) and must be dropped before the next request.
  pub fn dispatch(&mut self, req: &Request) -> Result<Reply<'_>, Rejection> {
    let routes = self.routes;
    let route = route::lookup(routes, req.method, &req.path).ok_or(Rejection::RouteNotFound)?;

    log::trace!("{} {} -> {:?}", route.method, route.path, route.handler);

    self.scratch.clear();
    self.run(route.handler, req)
  }

  fn run(&mut self, handler: Handler, req: &Request) -> Result<Reply<'_>, Rejection> {
    match handler {
      | Handler::WellKnownCore => {
        Ok(Reply::content(ContentFormat::LinkFormat, self.discovery.as_bytes()))
      },
      | Handler::GetLight => Ok(self.light_state(Reply::content(ContentFormat::Text, &[]))),
      | Handler::PutLight => {
        let first = req.payload.first().ok_or(Rejection::BadRequestPayload)?;
        let on = *first == b'1';

        self.light.set(on);
        self.actuator.set_actuator(on);

        Ok(self.light_state(Reply::changed(&[])))
      },
      | Handler::Humidity => {
        let h = self.sensors.read_humidity();
        Ok(self.text(value::humidity(h).as_str()))
      },
      | Handler::HumidityTemperature => {
        let t = self.sensors.read_temperature();
        Ok(self.text(value::temperature(t).as_str()))
      },
      | Handler::CompensatedHumidity => {
        let h = self.sensors.read_humidity();
        let t = self.sensors.read_temperature();
        let text = value::compensated_humidity(h, t, self.config.humidity);
        Ok(self.text(text.as_str()))
      },
      | Handler::DewPoint => {
        let t = self.sensors.read_temperature();
        let h = self.sensors.read_humidity();
        Ok(self.text(value::dew_point(t, h).as_str()))
      },
      | Handler::Pressure => {
        let p = self.sensors.read_pressure();
        Ok(self.text(value::pressure(p).as_str()))
      },
      | Handler::PressureTemperature => {
        let t = self.sensors.read_pressure_temperature();
        Ok(self.text(value::baro_temperature(t).as_str()))
      },
    }
  }

  /// Answer `reply` with the light's state as its body
  fn light_state<'a>(&'a mut self, reply: Reply<'static>) -> Reply<'a> {
    self.scratch.push(char::from(self.light.as_byte()));
    Reply { payload: self.scratch.as_bytes(),
            ..reply }
  }

  /// Answer 2.05 CONTENT with a `text/plain` body
  fn text(&mut self, text: &str) -> Reply<'_> {
    self.scratch.push_str(text);
    Reply::content(ContentFormat::Text, self.scratch.as_bytes())
  }
}

/// A CoAP sensor node.
///
/// Owns the codec, the hardware and the state of the node's resources,
/// and answers one datagram at a time with [`Node::handle`].
#[derive(Debug)]
pub struct Node<C, S, A> {
  codec: C,
  resources: Resources<S, A>,
}

impl<C, S, A> Node<C, S, A>
  where C: Codec,
        S: Sensors,
        A: Actuator
{
  /// Create a node serving [`ROUTES`]
  pub fn new(codec: C, sensors: S, actuator: A, config: Config) -> Self {
    Self::with_routes(codec, sensors, actuator, config, ROUTES)
  }

  /// Create a node serving a custom resource table.
  ///
  /// The discovery document is rendered here, once.
  pub fn with_routes(codec: C,
                     sensors: S,
                     actuator: A,
                     config: Config,
                     routes: &'static [Route])
                     -> Self {
    Self { codec,
           resources: Resources::new(sensors, actuator, config, routes) }
  }

  /// The `/.well-known/core` document
  pub fn discovery(&self) -> &Discovery {
    &self.resources.discovery
  }

  /// Current state of the light
  pub fn light(&self) -> Switch {
    self.resources.light
  }

  /// See [`Resources::dispatch`]
  pub fn dispatch(&mut self, req: &Request) -> Result<Reply<'_>, Rejection> {
    self.resources.dispatch(req)
  }

  /// Answer the datagram `dgram`, writing the response datagram to `out`.
  ///
  /// Returns the number of bytes written to `out`.
  ///
  /// Requests that don't match a resource, or that the resource rejects,
  /// are still answered (see [`Rejection`]); only codec failures are errors.
  pub fn handle(&mut self,
                dgram: &[u8],
                out: &mut [u8])
                -> Result<usize, Error<C::ParseError, C::BuildError>> {
    let req = self.codec.parse(dgram).map_err(|e| {
                                        log::warn!("dropping unparseable datagram: {:?}", e);
                                        Error::Parse(e)
                                      })?;

    log::debug!("<- {}", logging::req_summary(&req));

    let reply = self.resources.dispatch(&req).unwrap_or_else(|r| {
                                                  log::debug!("rejected: {:?}", r);
                                                  r.reply()
                                                });

    let rep = Response::for_request(&req, reply);
    log::debug!("-> {}", logging::resp_summary(&rep));

    self.codec.build(&rep, out).map_err(|e| {
                                  log::warn!("could not encode response: {:?}", e);
                                  Error::Build(e)
                                })
  }
}
