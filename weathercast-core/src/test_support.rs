//! In-memory provider for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    error::WeatherError,
    model::{Coord, ForecastSample, LocationQuery, WeatherSnapshot},
    provider::WeatherProvider,
};

pub fn snapshot(city: &str, temp: f64, condition: &str, wind: f64) -> WeatherSnapshot {
    WeatherSnapshot {
        city_name: city.into(),
        temperature: temp,
        feels_like: temp,
        condition_main: condition.into(),
        description: condition.to_lowercase(),
        icon: "01d".into(),
        humidity: 50,
        pressure: 1013,
        wind_speed: wind,
        coord: Coord { lat: 59.91, lon: 10.75 },
        country: None,
        sunrise: None,
        sunset: None,
    }
}

#[derive(Debug, Clone)]
enum Current {
    Found(WeatherSnapshot),
    NotFound,
    Broken,
}

#[derive(Debug)]
pub struct FakeProvider {
    current: Current,
    forecast: Option<Vec<ForecastSample>>,
    pub queries: Mutex<Vec<LocationQuery>>,
}

impl FakeProvider {
    fn with_current(current: Current) -> Self {
        Self { current, forecast: Some(Vec::new()), queries: Mutex::new(Vec::new()) }
    }

    pub fn found(snapshot: WeatherSnapshot) -> Self {
        Self::with_current(Current::Found(snapshot))
    }

    pub fn not_found() -> Self {
        Self::with_current(Current::NotFound)
    }

    /// Current weather responds with an unparseable body.
    pub fn broken() -> Self {
        Self::with_current(Current::Broken)
    }

    pub fn with_forecast(mut self, samples: Vec<(&str, f64)>) -> Self {
        self.forecast =
            Some(samples.into_iter().map(|(ts, t)| ForecastSample::new(ts, t)).collect());
        self
    }

    pub fn failing_forecast(mut self) -> Self {
        self.forecast = None;
        self
    }

    pub fn asked_for(&self) -> Vec<LocationQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl WeatherProvider for FakeProvider {
    async fn current(&self, query: &LocationQuery) -> Result<WeatherSnapshot, WeatherError> {
        self.queries.lock().unwrap().push(query.clone());

        match &self.current {
            Current::Found(s) => Ok(s.clone()),
            Current::NotFound => Err(WeatherError::NotFound(query.to_string())),
            Current::Broken => {
                let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
                Err(WeatherError::Parse(err))
            }
        }
    }

    async fn forecast(&self, _coord: Coord) -> Result<Vec<ForecastSample>, WeatherError> {
        self.forecast.clone().ok_or_else(|| WeatherError::Status {
            status: 500,
            body: "forecast unavailable".into(),
        })
    }
}
