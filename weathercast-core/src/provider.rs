use crate::{
    Config,
    error::WeatherError,
    model::{Coord, ForecastSample, LocationQuery, WeatherSnapshot},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Source of current conditions and forecast series.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, query: &LocationQuery) -> Result<WeatherSnapshot, WeatherError>;

    /// Forecast samples in provider order, temperatures in °C.
    async fn forecast(&self, coord: Coord) -> Result<Vec<ForecastSample>, WeatherError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key()?.to_owned();

    let provider = match config.base_url.as_deref() {
        Some(base) => OpenWeatherProvider::with_base_url(api_key, base),
        None => OpenWeatherProvider::new(api_key),
    };

    Ok(Box::new(provider))
}
