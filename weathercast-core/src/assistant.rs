//! Scripted chat assistant: pulls a city out of a message and answers with a
//! travel recommendation for its current weather.

use crate::{
    error::WeatherError,
    extract::extract_city,
    model::LocationQuery,
    provider::WeatherProvider,
    recommend::compose,
};

pub const WELCOME: &str =
    "Yo, buddy 😏! WeatherCast here. I can tell if it's hotter outside… or just inside you.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Recommendation(String),
    CityNotFound(String),
    FetchFailed,
    Greeting,
    Help,
    Fallback,
}

impl std::fmt::Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reply::Recommendation(text) => f.write_str(text),
            Reply::CityNotFound(city) => write!(
                f,
                "Hmm… WeatherCast can't find weather info for \"{city}\". Check the spelling? 😏"
            ),
            Reply::FetchFailed => f.write_str(
                "Yo buddy 😎! WeatherCast is having trouble fetching weather right now. Try again later!",
            ),
            Reply::Greeting => f.write_str(
                "Yo, buddy 😏! WeatherCast here. Wanna see if it's hotter outside… or just in your vibe?",
            ),
            Reply::Help => f.write_str(
                "WeatherCast's got the 411 on cities & weather! Ask me: 'Is Paris nice today?' or 'Can I hit the beach in Bali?'",
            ),
            Reply::Fallback => f.write_str(
                "I'm your weather wingman 🌤️, WeatherCast style! Drop a city and I'll spill if it's chill or thrill there!",
            ),
        }
    }
}

#[derive(Debug)]
pub struct Assistant<'a> {
    provider: &'a dyn WeatherProvider,
}

impl<'a> Assistant<'a> {
    pub fn new(provider: &'a dyn WeatherProvider) -> Self {
        Self { provider }
    }

    /// Answers one chat message.
    ///
    /// Any non-empty city guess is looked up; small talk is only recognised
    /// when nothing city-like was found.
    pub async fn respond(&self, message: &str) -> Reply {
        let city = extract_city(message);

        if !city.is_empty() {
            return self.recommend_for(city).await;
        }

        let lower = message.to_lowercase();
        if lower.contains("hello") || lower.contains("hi") || lower.contains("hey") {
            Reply::Greeting
        } else if lower.contains("help") {
            Reply::Help
        } else {
            Reply::Fallback
        }
    }

    async fn recommend_for(&self, city: String) -> Reply {
        let query = LocationQuery::City(city.clone());

        match self.provider.current(&query).await {
            Ok(snapshot) => match compose(&snapshot) {
                Ok(text) => Reply::Recommendation(text),
                Err(err) => {
                    tracing::warn!(error = %err, "incomplete weather snapshot");
                    Reply::FetchFailed
                }
            },
            Err(WeatherError::NotFound(_) | WeatherError::Status { .. }) => Reply::CityNotFound(city),
            Err(err) => {
                tracing::warn!(error = %err, "chat weather lookup failed");
                Reply::FetchFailed
            }
        }
    }
}
