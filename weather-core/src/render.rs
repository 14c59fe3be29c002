use std::fmt;

use crate::{icon::WeatherIcon, state::WidgetState};

pub const SEARCH_PLACEHOLDER: &str = "Search";

/// Everything the widget draws, formatted for the active display unit.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetView {
    pub search_placeholder: &'static str,
    pub error: Option<String>,
    pub panel: Option<WeatherPanel>,
    pub toggle_label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherPanel {
    pub icon: WeatherIcon,
    pub temperature: String,
    pub location: String,
    pub humidity: String,
    pub wind: String,
}

impl WidgetView {
    pub fn from_state(state: &WidgetState) -> Self {
        let unit = state.unit();
        let panel = state.result().map(|r| WeatherPanel {
            icon: r.icon,
            temperature: unit.format_temperature(r.temperature_c),
            location: r.location_name.clone(),
            humidity: unit.format_humidity(r.humidity),
            wind: unit.format_wind(r.wind_speed_mps),
        });

        Self {
            search_placeholder: SEARCH_PLACEHOLDER,
            error: state.error().filter(|e| !e.is_empty()).map(str::to_string),
            panel,
            toggle_label: unit.toggle_label(),
        }
    }
}

impl fmt::Display for WidgetView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[ {} ... ]", self.search_placeholder)?;
        if let Some(error) = &self.error {
            writeln!(f, "! {error}")?;
        }

        if let Some(panel) = &self.panel {
            writeln!(f)?;
            writeln!(f, "  {}  {}", panel.icon.glyph(), panel.icon.label())?;
            writeln!(f, "  {}", panel.temperature)?;
            writeln!(f, "  {}", panel.location)?;
            writeln!(f)?;
            writeln!(f, "  Humidity    {}", panel.humidity)?;
            writeln!(f, "  Wind Speed  {}", panel.wind)?;
        }

        writeln!(f)?;
        write!(f, "[ {} ]", self.toggle_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{WeatherQuery, WeatherResult},
        state::ResponseOrdering,
        units::DisplayUnit,
    };

    fn london() -> WeatherResult {
        WeatherResult {
            humidity: 72.0,
            wind_speed_mps: 4.1,
            temperature_c: 15.3,
            location_name: "London".into(),
            icon: WeatherIcon::from_condition_code("10d"),
        }
    }

    #[test]
    fn london_scenario_in_metric() {
        let state = WidgetState::default().apply_success(1, london());
        let view = WidgetView::from_state(&state);

        let panel = view.panel.expect("panel shown");
        assert_eq!(panel.icon, WeatherIcon::Rain);
        assert_eq!(panel.temperature, "15°C");
        assert_eq!(panel.location, "London");
        assert_eq!(panel.humidity, "72%");
        assert_eq!(panel.wind, "15 km/h");
        assert_eq!(view.toggle_label, "Switch to °F / mph");
        assert!(view.error.is_none());
    }

    #[test]
    fn imperial_view_converts_at_render_time() {
        let state = WidgetState::new(DisplayUnit::Imperial, ResponseOrdering::default())
            .apply_success(1, london());
        let view = WidgetView::from_state(&state);

        let panel = view.panel.unwrap();
        assert_eq!(panel.temperature, "60°F");
        assert_eq!(panel.wind, "9 mph");
        assert_eq!(panel.humidity, "72%");
        assert_eq!(view.toggle_label, "Switch to °C / km/h");
    }

    #[test]
    fn double_toggle_restores_the_view() {
        let state = WidgetState::default().apply_success(1, london());
        let before = WidgetView::from_state(&state);

        let after = WidgetView::from_state(&state.apply_unit_toggle().apply_unit_toggle());

        assert_eq!(before, after);
    }

    #[test]
    fn no_result_renders_no_panel() {
        let view = WidgetView::from_state(&WidgetState::default());
        assert!(view.panel.is_none());

        let text = view.to_string();
        assert!(text.contains("Search"));
        assert!(!text.contains("Humidity"));
        assert!(text.ends_with("[ Switch to °F / mph ]"));
    }

    #[test]
    fn error_line_is_shown_above_stale_result() {
        let query = WeatherQuery::new("Zzzzz").unwrap();
        let state = WidgetState::default()
            .apply_success(1, london())
            .apply_failure(2, &query);

        let text = WidgetView::from_state(&state).to_string();

        let error_at = text.find("City not found. Try again.Zzzzz").expect("error shown");
        let location_at = text.find("London").expect("stale result shown");
        assert!(error_at < location_at);
        assert!(text.contains("Humidity    72%"));
        assert!(text.contains("Wind Speed  15 km/h"));
    }
}
