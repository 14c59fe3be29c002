//! Display units and the conversions applied at render time.
//!
//! Stored results are always metric; these helpers only affect formatting.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayUnit {
    #[default]
    Metric,
    Imperial,
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn mps_to_kmh(mps: f64) -> f64 {
    mps * 3.6
}

pub fn kmh_to_mph(kmh: f64) -> f64 {
    kmh / 1.60934
}

/// Round to the nearest integer with halves going toward +∞ (`-2.5` -> `-2`).
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

impl DisplayUnit {
    pub fn toggle(&self) -> Self {
        match self {
            DisplayUnit::Metric => DisplayUnit::Imperial,
            DisplayUnit::Imperial => DisplayUnit::Metric,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayUnit::Metric => "metric",
            DisplayUnit::Imperial => "imperial",
        }
    }

    pub fn format_temperature(&self, celsius: f64) -> String {
        match self {
            DisplayUnit::Metric => format!("{}°C", round_half_up(celsius)),
            DisplayUnit::Imperial => format!("{}°F", round_half_up(celsius_to_fahrenheit(celsius))),
        }
    }

    pub fn format_wind(&self, mps: f64) -> String {
        let kmh = mps_to_kmh(mps);
        match self {
            DisplayUnit::Metric => format!("{} km/h", round_half_up(kmh)),
            DisplayUnit::Imperial => format!("{} mph", round_half_up(kmh_to_mph(kmh))),
        }
    }

    pub fn format_humidity(&self, humidity: f64) -> String {
        format!("{}%", round_half_up(humidity))
    }

    /// Label for the toggle control; names the unit it would switch *to*.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            DisplayUnit::Metric => "Switch to °F / mph",
            DisplayUnit::Imperial => "Switch to °C / km/h",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fahrenheit_reference_points() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn wind_is_converted_through_kmh() {
        assert_eq!(DisplayUnit::Metric.format_wind(10.0), "36 km/h");
        assert_eq!(DisplayUnit::Imperial.format_wind(10.0), "22 mph");
        assert_eq!(DisplayUnit::Metric.format_wind(4.1), "15 km/h");
    }

    #[test]
    fn temperature_is_rounded_with_suffix() {
        assert_eq!(DisplayUnit::Metric.format_temperature(15.3), "15°C");
        assert_eq!(DisplayUnit::Imperial.format_temperature(15.3), "60°F");
        assert_eq!(DisplayUnit::Imperial.format_temperature(0.0), "32°F");
    }

    #[test]
    fn halves_round_toward_positive_infinity() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-0.4), 0);
        assert_eq!(DisplayUnit::Metric.format_temperature(-0.4), "0°C");
    }

    #[test]
    fn toggle_twice_is_identity() {
        for unit in [DisplayUnit::Metric, DisplayUnit::Imperial] {
            assert_eq!(unit.toggle().toggle(), unit);
            assert_ne!(unit.toggle(), unit);
        }
    }

    #[test]
    fn toggle_label_names_the_other_unit() {
        assert_eq!(DisplayUnit::Metric.toggle_label(), "Switch to °F / mph");
        assert_eq!(DisplayUnit::Imperial.toggle_label(), "Switch to °C / km/h");
    }

    #[test]
    fn unit_serializes_lowercase() {
        let s = serde_json::to_string(&DisplayUnit::Imperial).unwrap();
        assert_eq!(s, "\"imperial\"");
    }
}
