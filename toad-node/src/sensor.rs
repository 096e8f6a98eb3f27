//! Domain values for the node's hardware.
//!
//! Drivers live outside this crate; they are reached through the
//! [`Sensors`] and [`Actuator`] traits. Readings are never cached here,
//! every request reads the bus again.

/// HTU21D temperature, in hundredths of a degree Celsius
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Centidegrees(pub i32);

/// HTU21D relative humidity, in whole percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Humidity(pub i32);

/// MPL3115A2 pressure sample.
///
/// Fixed point with 2 fractional bits: `raw >> 2` Pascal
/// and `raw & 0b11` quarters of a Pascal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pressure(pub u32);

impl Pressure {
  /// Whole Pascal
  pub fn whole(&self) -> u32 {
    self.0 >> 2
  }

  /// Fractional part, in hundredths of a Pascal
  pub fn hundredths(&self) -> u32 {
    25 * (self.0 & 0b11)
  }
}

/// MPL3115A2 temperature sample.
///
/// Two's complement fixed point with 4 fractional bits
/// (sixteenths of a degree Celsius).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BaroTemperature(pub i16);

impl BaroTemperature {
  /// Is this reading below zero?
  pub fn is_negative(&self) -> bool {
    self.0 < 0
  }

  /// Whole degrees of the magnitude of this reading
  pub fn whole(&self) -> u32 {
    self.magnitude() >> 4
  }

  /// Fractional part of the magnitude, in ten-thousandths of a degree
  pub fn ten_thousandths(&self) -> u32 {
    625 * (self.magnitude() & 0b1111)
  }

  fn magnitude(&self) -> u32 {
    u32::from(self.0.unsigned_abs())
  }
}

/// The node's environmental sensors
pub trait Sensors {
  /// Read the HTU21D temperature channel
  fn read_temperature(&mut self) -> Centidegrees;

  /// Read the HTU21D humidity channel
  fn read_humidity(&mut self) -> Humidity;

  /// Read the MPL3115A2 pressure channel
  fn read_pressure(&mut self) -> Pressure;

  /// Read the MPL3115A2 temperature channel
  fn read_pressure_temperature(&mut self) -> BaroTemperature;
}

/// The node's on/off output
pub trait Actuator {
  /// Drive the output
  fn set_actuator(&mut self, on: bool);
}

/// State of the actuator, as last set by a request.
///
/// Starts off.
///
/// ```
/// use toad_node::sensor::Switch;
///
/// let mut light = Switch::default();
/// assert_eq!(light.as_byte(), b'0');
///
/// light.set(true);
/// assert!(light.get());
/// assert_eq!(light.as_byte(), b'1');
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Switch {
  on: bool,
}

impl Switch {
  /// Is the output on?
  pub fn get(&self) -> bool {
    self.on
  }

  /// Record a new state
  pub fn set(&mut self, on: bool) {
    self.on = on;
  }

  /// `b'1'` when on, `b'0'` when off
  pub fn as_byte(&self) -> u8 {
    if self.on {
      b'1'
    } else {
      b'0'
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn pressure_parts() {
    let p = Pressure(403);
    assert_eq!(p.whole(), 100);
    assert_eq!(p.hundredths(), 75);
    assert_eq!(Pressure(400).hundredths(), 0);
  }

  #[test]
  fn baro_temperature_parts() {
    // 21.5 C
    let t = BaroTemperature(344);
    assert_eq!(t.whole(), 21);
    assert_eq!(t.ten_thousandths(), 5000);
    assert!(!t.is_negative());

    // -0.0625 C
    let t = BaroTemperature(-1);
    assert_eq!(t.whole(), 0);
    assert_eq!(t.ten_thousandths(), 625);
    assert!(t.is_negative());

    let t = BaroTemperature(i16::MIN);
    assert_eq!(t.whole(), 2048);
    assert_eq!(t.ten_thousandths(), 0);
  }
}
