use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    error::{InvalidInputError, WeatherError},
    model::{Coord, ForecastSample, LocationQuery, WeatherSnapshot},
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: String, base_url: &str) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
        what: &str,
    ) -> Result<T, WeatherError> {
        let url = format!("{}/data/2.5/{endpoint}", self.base_url);
        tracing::debug!(%url, what, "requesting OpenWeather");

        let res = self
            .http
            .get(&url)
            .query(params)
            .query(&[("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if status == StatusCode::NOT_FOUND {
            return Err(WeatherError::NotFound(what.to_string()));
        }
        if !status.is_success() {
            return Err(WeatherError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Default, Deserialize)]
struct OwSys {
    country: Option<String>,
    sunrise: Option<i64>,
    sunset: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    coord: OwCoord,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    #[serde(default)]
    sys: OwSys,
}

#[derive(Debug, Deserialize)]
struct OwForecastMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt_txt: String,
    main: OwForecastMain,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

impl OwCurrentResponse {
    fn into_snapshot(self) -> Result<WeatherSnapshot, InvalidInputError> {
        let weather = self
            .weather
            .into_iter()
            .next()
            .ok_or(InvalidInputError::MissingField("weather[0]"))?;

        Ok(WeatherSnapshot {
            city_name: self.name,
            temperature: self.main.temp,
            feels_like: self.main.feels_like,
            condition_main: weather.main,
            description: weather.description,
            icon: weather.icon,
            humidity: self.main.humidity,
            pressure: self.main.pressure,
            wind_speed: self.wind.speed,
            coord: Coord { lat: self.coord.lat, lon: self.coord.lon },
            country: self.sys.country,
            sunrise: self.sys.sunrise,
            sunset: self.sys.sunset,
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, query: &LocationQuery) -> Result<WeatherSnapshot, WeatherError> {
        let params = match query {
            LocationQuery::City(name) => vec![("q", name.clone())],
            LocationQuery::Coordinates(c) => coord_params(*c),
        };

        let raw: OwCurrentResponse = self.get_json("weather", &params, &query.to_string()).await?;
        Ok(raw.into_snapshot()?)
    }

    async fn forecast(&self, coord: Coord) -> Result<Vec<ForecastSample>, WeatherError> {
        let what = LocationQuery::Coordinates(coord).to_string();
        let raw: OwForecastResponse = self.get_json("forecast", &coord_params(coord), &what).await?;

        Ok(raw
            .list
            .into_iter()
            .map(|entry| ForecastSample::new(entry.dt_txt, entry.main.temp))
            .collect())
    }
}

fn coord_params(coord: Coord) -> Vec<(&'static str, String)> {
    vec![("lat", coord.lat.to_string()), ("lon", coord.lon.to_string())]
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_body_keeps_short_bodies() {
        assert_eq!(truncate_body("oops"), "oops");
    }

    #[test]
    fn truncate_body_cuts_on_char_boundary() {
        let body = "°".repeat(300);
        let cut = truncate_body(&body);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 203);
    }

    #[test]
    fn snapshot_requires_a_weather_entry() {
        let raw: OwCurrentResponse = serde_json::from_value(serde_json::json!({
            "name": "Nowhere",
            "coord": { "lat": 0.0, "lon": 0.0 },
            "main": { "temp": 1.0, "feels_like": 1.0, "humidity": 1, "pressure": 1000 },
            "weather": [],
            "wind": { "speed": 1.0 }
        }))
        .unwrap();

        let err = raw.into_snapshot().unwrap_err();
        assert_eq!(err, InvalidInputError::MissingField("weather[0]"));
    }
}
