use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use inquire::Password;
use weather_core::{Config, DisplayUnit, OpenWeatherProvider, WeatherProvider, Widget};

use crate::interactive;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for a city, in your terminal")]
pub struct Cli {
    /// Start in imperial units (°F, mph) instead of the configured default.
    #[arg(long, global = true)]
    pub imperial: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive widget: type a city to search, `:u` to toggle units, `:q` to quit.
    Run,

    /// Look up one city, print the widget and exit.
    Show {
        /// City name, passed to the provider as typed.
        city: String,
    },

    /// Store the OpenWeather API key in the config file.
    Configure {
        /// API key; prompted for (hidden input) when omitted.
        #[arg(long)]
        api_key: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Run) {
            Command::Configure { api_key } => configure(api_key),
            Command::Show { city } => {
                let mut widget = build_widget(self.imperial)?;
                if widget.search(&city).is_none() {
                    bail!("City name must not be empty");
                }
                widget.settle().await;
                println!("{}", widget.view());
                Ok(())
            }
            Command::Run => {
                let widget = build_widget(self.imperial)?;
                interactive::run(widget).await
            }
        }
    }
}

fn build_widget(imperial: bool) -> anyhow::Result<Widget> {
    let mut config = Config::load()?;
    if imperial {
        config.default_unit = DisplayUnit::Imperial;
    }

    let provider: Arc<dyn WeatherProvider> = Arc::new(OpenWeatherProvider::from_config(&config));
    Ok(Widget::new(provider, config.initial_state()))
}

fn configure(api_key: Option<String>) -> anyhow::Result<()> {
    let mut config = Config::load_file()?;

    let api_key = match api_key {
        Some(key) => key,
        None => Password::new("OpenWeather API key:")
            .without_confirmation()
            .prompt()
            .context("Failed to read API key")?,
    };
    let api_key = api_key.trim().to_string();
    if api_key.is_empty() {
        bail!("API key must not be empty");
    }

    config.set_api_key(api_key);
    let path = config.save()?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["weather"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.imperial);
    }

    #[test]
    fn show_takes_city_and_global_imperial_flag() {
        let cli = Cli::try_parse_from(["weather", "show", "New York", "--imperial"]).unwrap();
        assert!(cli.imperial);
        match cli.command {
            Some(Command::Show { city }) => assert_eq!(city, "New York"),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn configure_accepts_key_flag() {
        let cli = Cli::try_parse_from(["weather", "configure", "--api-key", "abc"]).unwrap();
        match cli.command {
            Some(Command::Configure { api_key }) => assert_eq!(api_key.as_deref(), Some("abc")),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
