use async_trait::async_trait;
use std::fmt::Debug;

use crate::{WeatherQuery, WeatherResult, error::LookupError};

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// Source of current-weather observations.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, query: &WeatherQuery) -> Result<WeatherResult, LookupError>;
}

/// Cut a response body down to something that fits in a log line or error.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let end = (0..=MAX).rev().find(|&i| body.is_char_boundary(i)).unwrap_or(0);
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_bodies_are_untouched() {
        assert_eq!(truncate_body("{\"cod\":\"404\"}"), "{\"cod\":\"404\"}");
    }

    #[test]
    fn long_bodies_are_cut_on_char_boundary() {
        let body = "é".repeat(150);
        let out = truncate_body(&body);
        assert!(out.ends_with("..."));
        assert!(out.len() <= 203);
    }
}
