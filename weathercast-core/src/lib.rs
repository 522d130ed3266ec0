//! Core library for the `weathercast` app.
//!
//! This crate defines:
//! - Pure weather logic: daily forecast aggregation, city extraction from chat
//!   messages, and travel recommendations
//! - Configuration and persisted state (theme, recent searches)
//! - Abstraction over the weather provider, with an OpenWeather implementation
//! - The lookup service and the chat assistant built on top of it
//!
//! It is used by `weathercast-cli`, but can also be reused by other binaries or services.

pub mod assistant;
pub mod config;
pub mod error;
pub mod extract;
pub mod forecast;
pub mod lookup;
pub mod model;
pub mod provider;
pub mod recommend;
pub mod state;

#[cfg(test)]
mod test_support;

pub use assistant::{Assistant, Reply};
pub use config::Config;
pub use error::{InvalidInputError, WeatherError};
pub use extract::extract_city;
pub use forecast::aggregate;
pub use lookup::lookup;
pub use model::{Coord, DailySummary, ForecastSample, LocationQuery, Lookup, WeatherSnapshot};
pub use provider::{WeatherProvider, provider_from_config};
pub use recommend::compose;
pub use state::{AppState, RecentSearches, Theme};
