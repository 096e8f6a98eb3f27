//! `toad-node` is the resource layer of a constrained CoAP sensor node:
//! - a static table of resources (an actuator and a handful of environmental sensors)
//! - the CoRE Link-Format document advertised at `/.well-known/core`
//! - exact fixed-point text rendering of sensor readings
//! - a single [`Node::handle`](crate::server::Node::handle) entry point that turns
//!   an inbound datagram into an outbound one
//!
//! ## Resources
//! | Method | Path | Content-Format |
//! |---|---|---|
//! | GET | `/.well-known/core` | `application/link-format` |
//! | GET, PUT | `/light` | `text/plain` |
//! | GET | `/humidity` | `text/plain` |
//! | GET | `/humidity/temperature` | `text/plain` |
//! | GET | `/humidity/compensated` | `text/plain` |
//! | GET | `/humidity/dewpoint` | `text/plain` |
//! | GET | `/pressure` | `text/plain` |
//! | GET | `/pressure/temperature` | `text/plain` |
//!
//! ## Collaborators
//! Wire encoding is delegated to a [`Codec`](crate::codec::Codec)
//! ([`MsgCodec`](crate::codec::MsgCodec) uses `toad-msg`), and hardware
//! access to the [`Sensors`](crate::sensor::Sensors) and
//! [`Actuator`](crate::sensor::Actuator) traits.
//!
//! ```
//! use toad_node::codec::MsgCodec;
//! use toad_node::config::Config;
//! use toad_node::sensor::{Actuator, BaroTemperature, Centidegrees, Humidity, Pressure, Sensors};
//! use toad_node::server::Node;
//!
//! #[derive(Debug)]
//! struct Board;
//!
//! impl Sensors for Board {
//!   fn read_temperature(&mut self) -> Centidegrees {
//!     Centidegrees(2134)
//!   }
//!   fn read_humidity(&mut self) -> Humidity {
//!     Humidity(48)
//!   }
//!   fn read_pressure(&mut self) -> Pressure {
//!     Pressure(403)
//!   }
//!   fn read_pressure_temperature(&mut self) -> BaroTemperature {
//!     BaroTemperature(344)
//!   }
//! }
//!
//! impl Actuator for Board {
//!   fn set_actuator(&mut self, _on: bool) {}
//! }
//!
//! let node = Node::new(MsgCodec, Board, Board, Config::default());
//! assert!(node.discovery().as_str().starts_with("</light>;ct=0,"));
//! ```

// x-release-please-version
#![doc(html_root_url = "https://docs.rs/toad-node/0.1.0")]
// x-release-please-end
#![cfg_attr(any(docsrs, feature = "docs"), feature(doc_cfg))]
// -
// style
#![allow(clippy::unused_unit)]
// -
// deny
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![deny(missing_copy_implementations)]
#![cfg_attr(not(test), deny(unsafe_code))]
// -
// warnings
#![cfg_attr(not(test), warn(unreachable_pub))]
// -
// features
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc as std_alloc;

#[cfg(test)]
pub(crate) mod test;

pub(crate) mod logging;

/// requests
pub mod req;

/// responses
pub mod resp;

/// sensor & actuator adapters
pub mod sensor;

/// rendering fixed-point readings as text
pub mod value;

/// encoding & decoding CoAP messages
pub mod codec;

/// resource table, discovery & dispatch
pub mod server;

/// configuring runtime behavior
pub mod config;

mod option;

pub use option::ContentFormat;

macro_rules! code {
  (rfc7252($section:literal) $name:ident = $c:literal * $d:literal) => {
    #[doc = toad_macros::rfc_7252_doc!($section)]
    #[allow(clippy::zero_prefixed_literal)]
    pub const $name: toad_msg::Code = toad_msg::Code::new($c, $d);
  };
  (rfc7252($section:literal) $name:ident = $newtype:tt($c:literal * $d:literal)) => {
    #[doc = toad_macros::rfc_7252_doc!($section)]
    #[allow(clippy::zero_prefixed_literal)]
    pub const $name: $newtype = $newtype(toad_msg::Code::new($c, $d));
  };
}

pub(crate) use code;
