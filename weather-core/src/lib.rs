//! Core library for the `weather` widget.
//!
//! This crate defines:
//! - Domain models and the condition-icon table
//! - Display units and conversions
//! - The OpenWeather provider behind a [`WeatherProvider`] trait
//! - The widget view model ([`WidgetState`]) and its rendering ([`WidgetView`])
//! - The async [`Widget`] driver that issues lookups
//! - Configuration & credentials handling
//!
//! It is used by `weather-widget`, but can also be embedded in other front ends.

pub mod config;
pub mod error;
pub mod icon;
pub mod model;
pub mod provider;
pub mod render;
pub mod state;
pub mod units;
pub mod widget;

pub use config::Config;
pub use error::{LookupError, failure_message};
pub use icon::WeatherIcon;
pub use model::{WeatherQuery, WeatherResult};
pub use provider::{OpenWeatherProvider, WeatherProvider};
pub use render::{WeatherPanel, WidgetView};
pub use state::{Completion, ResponseOrdering, SearchTicket, WidgetState};
pub use units::DisplayUnit;
pub use widget::Widget;
