use std::fmt;

use crate::icon::WeatherIcon;

/// Free-text city name as typed by the user.
///
/// Only the empty string is rejected; the text is otherwise passed to the
/// provider verbatim (no trimming, no case folding).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WeatherQuery(String);

impl WeatherQuery {
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.is_empty() { None } else { Some(Self(text)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WeatherQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One observation, always in the provider's metric units.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherResult {
    pub humidity: f64,
    pub wind_speed_mps: f64,
    pub temperature_c: f64,
    pub location_name: String,
    pub icon: WeatherIcon,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_is_rejected() {
        assert!(WeatherQuery::new("").is_none());
    }

    #[test]
    fn query_text_is_kept_verbatim() {
        let q = WeatherQuery::new("  new york ").expect("non-empty");
        assert_eq!(q.as_str(), "  new york ");
        assert_eq!(q.to_string(), "  new york ");
    }
}
