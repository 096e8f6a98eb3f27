//! Text rendering of sensor readings.
//!
//! All arithmetic on readings is integer arithmetic on their fixed-point
//! representation, except for the dew point (see [`dew_point`]).
//! Every rendering fits in a [`Text`]; anything longer is truncated,
//! never written past [`TEXT_CAPACITY`].

use core::fmt::Write;

use toad_bounded::Bounded;

use crate::config;
use crate::sensor::{BaroTemperature, Centidegrees, Humidity, Pressure};

/// Capacity of a rendered reading, in bytes
pub const TEXT_CAPACITY: usize = 14;

/// A rendered reading
pub type Text = Bounded<TEXT_CAPACITY>;

/// `°C`; the degree sign is the 2-byte UTF-8 sequence `C2 B0`
const DEGREES_C: &str = "\u{b0}C";

/// Render a temperature as `D.DD°C`
///
/// The integer part is `t / 100` and the fractional part `t - 100 * (t / 100)`,
/// both truncated toward zero. The sign is written once, in front.
///
/// ```
/// use toad_node::sensor::Centidegrees;
/// use toad_node::value;
///
/// assert_eq!(value::temperature(Centidegrees(2134)), "21.34\u{b0}C");
/// assert_eq!(value::temperature(Centidegrees(-50)), "-0.50\u{b0}C");
/// ```
pub fn temperature(t: Centidegrees) -> Text {
  let whole = t.0 / 100;
  let frac = t.0 - 100 * whole;

  let mut text = Text::new();
  if t.0 < 0 {
    text.push('-');
  }
  write!(text,
         "{}.{:02}{}",
         whole.unsigned_abs(),
         frac.unsigned_abs(),
         DEGREES_C).ok();
  text
}

/// Render a relative humidity as `DD%`, showing anything above 99 as `100%`
pub fn humidity(h: Humidity) -> Text {
  if h.0 > 99 {
    Text::from("100%")
  } else {
    Text::fmt(format_args!("{}%", h.0))
  }
}

/// Correct a humidity reading for the temperature it was taken at
///
/// `humid + (reference - temp / 100) * coefficient / 100`
///
/// ```
/// use toad_node::config::Humidity as Cfg;
/// use toad_node::sensor::{Centidegrees, Humidity};
/// use toad_node::value;
///
/// // 45 C: (25 - 45) * -15 / 100 = 3
/// assert_eq!(value::compensate(Humidity(50), Centidegrees(4500), Cfg::default()),
///            Humidity(53));
/// ```
pub fn compensate(h: Humidity, t: Centidegrees, cfg: config::Humidity) -> Humidity {
  let correction = cfg.reference_temperature
                      .saturating_sub(t.0 / 100)
                      .saturating_mul(cfg.compensation_coefficient)
                  / 100;
  Humidity(h.0.saturating_add(correction))
}

/// Render a temperature-compensated humidity (see [`compensate`] and [`humidity`])
pub fn compensated_humidity(h: Humidity, t: Centidegrees, cfg: config::Humidity) -> Text {
  humidity(compensate(h, t, cfg))
}

/// Approximate the dew point of air at temperature `t` and humidity `h`.
///
/// ```text
/// pp = 10 ^ (8.1332 - 176239 / (t + 23566))
/// dp = -(1762.39 / (log10(h * pp / 100) - 8.1332) + 235.66)
/// ```
///
/// `pp` (the saturation vapour pressure) is computed first, then `dp`.
/// The result is floored to hundredths of a degree.
///
/// A humidity of zero gives `-235.66°C`; inputs for which the formula is
/// undefined (negative humidity) give `0.00°C`.
pub fn dew_point_of(t: Centidegrees, h: Humidity) -> Centidegrees {
  let temp = f64::from(t.0);
  let humid = f64::from(h.0);

  let pp = libm::pow(10.0, 8.1332 - 176239.0 / (temp + 23566.0));
  let dp = -(1762.39 / (libm::log10(humid * pp / 100.0) - 8.1332) + 235.66);

  // float -> int casts saturate, and NaN becomes 0
  Centidegrees(libm::floor(dp * 100.0) as i32)
}

/// Render the dew point (see [`dew_point_of`]) like a [`temperature`]
///
/// ```
/// use toad_node::sensor::{Centidegrees, Humidity};
/// use toad_node::value;
///
/// assert_eq!(value::dew_point(Centidegrees(2000), Humidity(50)), "9.30\u{b0}C");
/// ```
pub fn dew_point(t: Centidegrees, h: Humidity) -> Text {
  temperature(dew_point_of(t, h))
}

/// Render a pressure as `D.DD Pa`
///
/// ```
/// use toad_node::sensor::Pressure;
/// use toad_node::value;
///
/// assert_eq!(value::pressure(Pressure(403)), "100.75 Pa");
/// ```
pub fn pressure(p: Pressure) -> Text {
  Text::fmt(format_args!("{}.{:02} Pa", p.whole(), p.hundredths()))
}

/// Render a barometer temperature as `D.DDDD°C`
pub fn baro_temperature(t: BaroTemperature) -> Text {
  let mut text = Text::new();
  if t.is_negative() {
    text.push('-');
  }
  write!(text,
         "{}.{:04}{}",
         t.whole(),
         t.ten_thousandths(),
         DEGREES_C).ok();
  text
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn temperature_renders_two_fraction_digits() {
    assert_eq!(temperature(Centidegrees(2134)), "21.34\u{b0}C");
    assert_eq!(temperature(Centidegrees(2134)).as_bytes(),
               &[b'2', b'1', b'.', b'3', b'4', 0xC2, 0xB0, b'C'][..]);
    assert_eq!(temperature(Centidegrees(2100)), "21.00\u{b0}C");
    assert_eq!(temperature(Centidegrees(5)), "0.05\u{b0}C");
    assert_eq!(temperature(Centidegrees(10000)), "100.00\u{b0}C");
  }

  #[test]
  fn temperature_non_positive_is_never_empty() {
    assert_eq!(temperature(Centidegrees(0)), "0.00\u{b0}C");
    assert_eq!(temperature(Centidegrees(-50)), "-0.50\u{b0}C");
    assert_eq!(temperature(Centidegrees(-1234)), "-12.34\u{b0}C");
    assert_eq!(temperature(Centidegrees(-100)), "-1.00\u{b0}C");
  }

  #[test]
  fn temperature_extremes_stay_in_bounds() {
    let max = temperature(Centidegrees(i32::MAX));
    assert_eq!(max, "21474836.47\u{b0}C");
    assert!(!max.is_truncated());

    let min = temperature(Centidegrees(i32::MIN));
    assert_eq!(min, "-21474836.48\u{b0}");
    assert!(min.is_truncated());
    assert_eq!(min.len(), TEXT_CAPACITY);
  }

  #[test]
  fn humidity_clamps_above_99() {
    assert_eq!(humidity(Humidity(0)), "0%");
    assert_eq!(humidity(Humidity(48)), "48%");
    assert_eq!(humidity(Humidity(99)), "99%");
    assert_eq!(humidity(Humidity(100)), "100%");
    assert_eq!(humidity(Humidity(105)), "100%");
    assert_eq!(humidity(Humidity(i32::MAX)), "100%");
  }

  #[test]
  fn compensation_truncates_toward_zero() {
    let cfg = config::Humidity::default();

    // (25 - 20) * -15 = -75; -75 / 100 = 0
    assert_eq!(compensate(Humidity(50), Centidegrees(2000), cfg), Humidity(50));
    // (25 - 5) * -15 = -300
    assert_eq!(compensate(Humidity(50), Centidegrees(500), cfg), Humidity(47));
    // temp / 100 is truncated before the subtraction: 2599 -> 25
    assert_eq!(compensate(Humidity(50), Centidegrees(2599), cfg), Humidity(50));
    assert_eq!(compensated_humidity(Humidity(99), Centidegrees(4500), cfg), "100%");
    assert_eq!(compensated_humidity(Humidity(40), Centidegrees(4500), cfg), "43%");
  }

  #[test]
  fn compensation_uses_config() {
    let cfg = config::Humidity { reference_temperature: 20,
                                 compensation_coefficient: -100 };
    assert_eq!(compensate(Humidity(50), Centidegrees(2500), cfg), Humidity(55));
  }

  #[test]
  fn dew_point_matches_reference_formula() {
    let reference = |t: i32, h: i32| {
      let pp = 10f64.powf(8.1332 - 176239.0 / (t as f64 + 23566.0));
      let dp = -(1762.39 / ((h as f64 * pp / 100.0).log10() - 8.1332) + 235.66);
      (dp * 100.0).floor() as i32
    };

    assert_eq!(dew_point_of(Centidegrees(2000), Humidity(50)),
               Centidegrees(reference(2000, 50)));
    assert_eq!(dew_point_of(Centidegrees(2000), Humidity(50)), Centidegrees(930));
    assert_eq!(dew_point(Centidegrees(2000), Humidity(50)), "9.30\u{b0}C");
  }

  #[test]
  fn dew_point_floors_below_zero() {
    // -7.8889.. floors to -7.89
    assert_eq!(dew_point_of(Centidegrees(-500), Humidity(80)), Centidegrees(-789));
    assert_eq!(dew_point(Centidegrees(-500), Humidity(80)), "-7.89\u{b0}C");
  }

  #[test]
  fn dew_point_undefined_inputs_do_not_panic() {
    assert_eq!(dew_point_of(Centidegrees(2000), Humidity(-10)), Centidegrees(0));
    assert!(dew_point(Centidegrees(-23566), Humidity(50)).len() <= TEXT_CAPACITY);
    assert!(dew_point(Centidegrees(2000), Humidity(0)).starts_with(b"-235."));
  }

  #[test]
  fn pressure_quarters() {
    assert_eq!(pressure(Pressure(403)), "100.75 Pa");
    assert_eq!(pressure(Pressure(400)), "100.00 Pa");
    assert_eq!(pressure(Pressure(401)), "100.25 Pa");
    assert_eq!(pressure(Pressure(0)), "0.00 Pa");
    // 20-bit MPL3115A2 maximum
    assert_eq!(pressure(Pressure(0xF_FFFF)), "262143.75 Pa");
  }

  #[test]
  fn pressure_extreme_is_truncated() {
    let p = pressure(Pressure(u32::MAX));
    assert_eq!(p, "1073741823.75 ");
    assert!(p.is_truncated());
  }

  #[test]
  fn baro_temperature_sixteenths() {
    assert_eq!(baro_temperature(BaroTemperature(344)), "21.5000\u{b0}C");
    assert_eq!(baro_temperature(BaroTemperature(0)), "0.0000\u{b0}C");
    assert_eq!(baro_temperature(BaroTemperature(-1)), "-0.0625\u{b0}C");
    assert_eq!(baro_temperature(BaroTemperature(i16::MAX)), "2047.9375\u{b0}C");
    assert_eq!(baro_temperature(BaroTemperature(i16::MIN)), "-2048.0000\u{b0}C");
  }

  #[test]
  fn every_rendering_fits() {
    let temps = [i32::MIN, -23566, -1, 0, 1, 99, 100, 2134, i32::MAX];
    let humids = [i32::MIN, -1, 0, 50, 99, 100, i32::MAX];

    for t in temps {
      assert!(temperature(Centidegrees(t)).len() <= TEXT_CAPACITY);
      for h in humids {
        assert!(dew_point(Centidegrees(t), Humidity(h)).len() <= TEXT_CAPACITY);
        assert!(compensated_humidity(Humidity(h),
                                     Centidegrees(t),
                                     config::Humidity::default()).len()
                <= TEXT_CAPACITY);
      }
    }

    for h in humids {
      assert!(humidity(Humidity(h)).len() <= TEXT_CAPACITY);
    }

    for p in [0, 1, 2, 3, u32::MAX - 1, u32::MAX] {
      assert!(pressure(Pressure(p)).len() <= TEXT_CAPACITY);
    }

    for t in [i16::MIN, -1, 0, 1, i16::MAX] {
      assert!(baro_temperature(BaroTemperature(t)).len() <= TEXT_CAPACITY);
    }
  }
}
