use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{
    config::Config,
    error::LookupError,
    icon::WeatherIcon,
    model::{WeatherQuery, WeatherResult},
};

use super::{WeatherProvider, truncate_body};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_base_url(config.resolved_api_key().to_string(), config.base_url.clone())
    }

    /// URL of the current-weather endpoint for `query`.
    ///
    /// Units are always metric here; the display unit is applied at render time.
    pub fn current_weather_url(&self, query: &WeatherQuery) -> Result<Url, LookupError> {
        let endpoint = format!("{}/weather", self.base_url);
        Url::parse_with_params(
            &endpoint,
            &[
                ("q", query.as_str()),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
            ],
        )
        .map_err(|e| LookupError::InvalidUrl {
            url: endpoint.clone(),
            reason: e.to_string(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    #[serde(default)]
    icon: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

impl OwCurrentResponse {
    fn into_result(self) -> Result<WeatherResult, LookupError> {
        let condition = self.weather.first().ok_or(LookupError::MissingCondition)?;
        let icon = condition
            .icon
            .as_deref()
            .map_or_else(WeatherIcon::default, WeatherIcon::from_condition_code);

        Ok(WeatherResult {
            humidity: self.main.humidity,
            wind_speed_mps: self.wind.speed,
            temperature_c: self.main.temp,
            icon,
            location_name: self.name,
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    #[instrument(skip_all, fields(query = %query))]
    async fn current_weather(&self, query: &WeatherQuery) -> Result<WeatherResult, LookupError> {
        let url = self.current_weather_url(query)?;

        // The URL carries the API key; keep it out of errors and logs.
        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Request(e.without_url()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| LookupError::Request(e.without_url()))?;
        debug!(%status, body = %truncate_body(&body), "OpenWeather current response");

        if !status.is_success() {
            return Err(LookupError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body)?;
        parsed.into_result()
    }
}
