use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use inquire::{InquireError, Password, PasswordDisplayMode, Select, Text};
use weathercast_core::{
    AppState, Assistant, Config, Coord, LocationQuery, Theme, WeatherError, assistant::WELCOME,
    lookup, provider_from_config,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weathercast", version, about = "Weather lookup, forecast chart and travel chat")]
pub struct Cli {
    /// Show debug logs on stderr (`RUST_LOG` takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the OpenWeather API key and the default city.
    Configure,

    /// Show current weather and the daily forecast for a city.
    Show {
        /// City name; the configured default city if absent.
        city: Option<String>,
    },

    /// Show weather for coordinates instead of a city name.
    Locate {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },

    /// List recent searches.
    Recent {
        /// Pick one of them interactively and show its weather.
        #[arg(long)]
        pick: bool,
    },

    /// Show or change the colour theme.
    Theme {
        #[arg(value_enum)]
        action: Option<ThemeAction>,
    },

    /// Ask the weather assistant; starts a conversation when no message is given.
    Chat {
        message: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeAction {
    Light,
    Dark,
    Toggle,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city } => {
                let config = Config::load()?;
                let city = city.unwrap_or_else(|| config.default_city().to_string());
                if city.trim().is_empty() {
                    bail!("Please enter a city name.");
                }
                show(&config, LocationQuery::City(city.trim().to_string())).await
            }
            Command::Locate { lat, lon } => {
                let config = Config::load()?;
                show(&config, LocationQuery::Coordinates(Coord { lat, lon })).await
            }
            Command::Recent { pick } => recent(pick).await,
            Command::Theme { action } => theme(action),
            Command::Chat { message } => chat(&message.join(" ")).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let path = Config::config_file_path()?;
    let mut config = Config::load_from(&path)?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_help_message("Leave empty to keep the current key")
        .prompt()?;
    if !api_key.trim().is_empty() {
        config.api_key = Some(api_key.trim().to_string());
    }

    let city = Text::new("Default city:").with_default(config.default_city()).prompt()?;
    config.default_city = Some(city.trim().to_string());

    config.save_to(&path)?;
    println!("Configuration saved to {}", path.display());

    Ok(())
}

async fn show(config: &Config, query: LocationQuery) -> anyhow::Result<()> {
    let provider = provider_from_config(config)?;
    let mut state = AppState::load()?;

    let result = match lookup(provider.as_ref(), &query).await {
        Ok(result) => result,
        Err(WeatherError::NotFound(_)) => bail!("City not found."),
        Err(WeatherError::Network(err)) => {
            tracing::debug!(error = %err, "network failure");
            bail!("Network error. Please try again.")
        }
        Err(err) => return Err(err).with_context(|| format!("Could not fetch weather for {query}")),
    };

    let now = chrono::Local::now();
    println!("{}", render::paint(state.theme, &render::weather_card(&result.snapshot, &now)));
    println!();
    println!("{}", render::paint(state.theme, &render::chart(&result.daily)));

    state.recent.record(&result.snapshot.city_name);
    state.save()?;

    Ok(())
}

async fn recent(pick: bool) -> anyhow::Result<()> {
    let state = AppState::load()?;

    if state.recent.is_empty() {
        println!("No recent searches.");
        return Ok(());
    }

    if !pick {
        for (i, city) in state.recent.cities().iter().enumerate() {
            println!("{}. {city}", i + 1);
        }
        return Ok(());
    }

    let city = Select::new("Show weather for:", state.recent.cities().to_vec()).prompt()?;
    let config = Config::load()?;
    show(&config, LocationQuery::City(city)).await
}

fn theme(action: Option<ThemeAction>) -> anyhow::Result<()> {
    let mut state = AppState::load()?;

    if let Some(action) = action {
        state.theme = match action {
            ThemeAction::Light => Theme::Light,
            ThemeAction::Dark => Theme::Dark,
            ThemeAction::Toggle => state.theme.toggled(),
        };
        state.save()?;
    }

    println!("Theme: {}", state.theme);
    Ok(())
}

async fn chat(message: &str) -> anyhow::Result<()> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;
    let assistant = Assistant::new(provider.as_ref());

    if !message.trim().is_empty() {
        println!("{}", assistant.respond(message.trim()).await);
        return Ok(());
    }

    println!("{WELCOME}");
    loop {
        let line = match Text::new("You:").with_help_message("empty line or `exit` to quit").prompt() {
            Ok(line) => line,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        let line = line.trim();
        if line.is_empty() || line.eq_ignore_ascii_case("exit") {
            break;
        }

        println!("WeatherCast: {}", assistant.respond(line).await);
    }

    Ok(())
}
