#![allow(dead_code)]

use std_alloc::collections::BTreeMap;
use std_alloc::vec::Vec;
use tinyvec::ArrayVec;
use toad_msg::alloc::Message;
use toad_msg::{Code, Id, OptNumber, OptValue, Payload, Token, TryFromBytes, TryIntoBytes, Type};

use crate::sensor::{Actuator, BaroTemperature, Centidegrees, Humidity, Pressure, Sensors};

pub const ID: Id = Id(0xBEEF);

pub fn token() -> Token {
  Token(ArrayVec::from([1, 2, 3, 4, 5, 6, 7, 8]))
}

pub fn init_logging() {
  simple_logger::SimpleLogger::new().init().ok();
}

/// Sensors returning fixed readings
#[derive(Debug, Clone, Copy)]
pub struct SensorsMock {
  pub temperature: Centidegrees,
  pub humidity: Humidity,
  pub pressure: Pressure,
  pub baro: BaroTemperature,
}

impl Default for SensorsMock {
  fn default() -> Self {
    Self { temperature: Centidegrees(2134),
           humidity: Humidity(48),
           pressure: Pressure(403),
           baro: BaroTemperature(344) }
  }
}

impl Sensors for SensorsMock {
  fn read_temperature(&mut self) -> Centidegrees {
    self.temperature
  }

  fn read_humidity(&mut self) -> Humidity {
    self.humidity
  }

  fn read_pressure(&mut self) -> Pressure {
    self.pressure
  }

  fn read_pressure_temperature(&mut self) -> BaroTemperature {
    self.baro
  }
}

/// Actuator that records every call
#[derive(Debug, Clone, Default)]
pub struct ActuatorMock {
  pub calls: Vec<bool>,
}

impl Actuator for ActuatorMock {
  fn set_actuator(&mut self, on: bool) {
    self.calls.push(on);
  }
}

/// Serialize a request with [`ID`] and [`token`]
pub fn request_bytes(ty: Type, code: Code, path: &[&str], payload: &[u8]) -> Vec<u8> {
  let path = path.iter().map(|s| s.as_bytes()).collect::<Vec<_>>();
  request_bytes_raw(ty, code, &path, payload)
}

/// [`request_bytes`] with arbitrary Uri-Path bytes
pub fn request_bytes_raw(ty: Type, code: Code, path: &[&[u8]], payload: &[u8]) -> Vec<u8> {
  let mut opts = BTreeMap::new();
  if !path.is_empty() {
    opts.insert(OptNumber(11),
                path.iter().map(|seg| OptValue(seg.to_vec())).collect::<Vec<_>>());
  }

  let msg = Message { id: ID,
                      ty,
                      ver: Default::default(),
                      token: token(),
                      code,
                      opts,
                      payload: Payload(payload.to_vec()) };

  msg.try_into_bytes::<Vec<u8>>().unwrap()
}

pub fn decode(bytes: &[u8]) -> Message {
  Message::try_from_bytes(bytes).unwrap()
}

/// The Content-Format of a decoded message, as an integer
pub fn content_format(msg: &Message) -> Option<u16> {
  msg.opts
     .get(&OptNumber(12))
     .and_then(|vs| vs.first())
     .map(|v| v.0.iter().fold(0u16, |n, b| (n << 8) | u16::from(*b)))
}
