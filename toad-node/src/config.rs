/// Configuration options related to derived humidity values
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Humidity {
  /// Temperature (whole degrees Celsius) at which the HTU21D
  /// humidity reading needs no compensation.
  ///
  /// Defaults to 25:
  /// ```
  /// use toad_node::config::Humidity;
  ///
  /// assert_eq!(Humidity::default().reference_temperature, 25);
  /// ```
  pub reference_temperature: i32,
  /// Temperature coefficient, in hundredths of a percent of
  /// relative humidity per degree Celsius.
  ///
  /// Compensated humidity is
  /// `humid + (reference_temperature - temp/100) * compensation_coefficient / 100`,
  /// evaluated with integer arithmetic in that order.
  ///
  /// Defaults to the HTU21D datasheet value of -0.15 %RH/°C:
  /// ```
  /// use toad_node::config::Humidity;
  ///
  /// assert_eq!(Humidity::default().compensation_coefficient, -15);
  /// ```
  pub compensation_coefficient: i32,
}

impl Default for Humidity {
  fn default() -> Self {
    Self { reference_temperature: 25,
           compensation_coefficient: -15 }
  }
}

/// Runtime config
///
/// Capacities of the node's buffers are compile-time constants;
/// see [`value::TEXT_CAPACITY`](crate::value::TEXT_CAPACITY),
/// [`DISCOVERY_CAPACITY`](crate::server::discovery::DISCOVERY_CAPACITY) and
/// [`SCRATCH_CAPACITY`](crate::server::SCRATCH_CAPACITY).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Config {
  /// See [`Humidity`]
  pub humidity: Humidity,
}
