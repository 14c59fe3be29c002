/// Condition icons the widget knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WeatherIcon {
    #[default]
    Clear,
    Cloud,
    Drizzle,
    Rain,
    Snow,
}

impl WeatherIcon {
    /// Map an OpenWeather condition code (`01d`, `10n`, ...) to an icon.
    ///
    /// Thunderstorm (`11x`) and mist (`50x`) have no entry and fall back to
    /// [`WeatherIcon::Clear`], as does anything unrecognised.
    pub fn from_condition_code(code: &str) -> Self {
        match code {
            "01d" | "01n" => WeatherIcon::Clear,
            "02d" | "02n" | "03d" | "03n" => WeatherIcon::Cloud,
            "04d" | "04n" => WeatherIcon::Drizzle,
            "09d" | "09n" | "10d" | "10n" => WeatherIcon::Rain,
            "13d" | "13n" => WeatherIcon::Snow,
            _ => WeatherIcon::default(),
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            WeatherIcon::Clear => "\u{2600}",
            WeatherIcon::Cloud => "\u{2601}",
            WeatherIcon::Drizzle => "\u{1f326}",
            WeatherIcon::Rain => "\u{1f327}",
            WeatherIcon::Snow => "\u{2744}",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherIcon::Clear => "clear",
            WeatherIcon::Cloud => "cloud",
            WeatherIcon::Drizzle => "drizzle",
            WeatherIcon::Rain => "rain",
            WeatherIcon::Snow => "snow",
        }
    }
}
