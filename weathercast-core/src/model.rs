use serde::{Deserialize, Serialize};

/// Geographic coordinates, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

/// What to look up: a city search or a "use my location" request.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    City(String),
    Coordinates(Coord),
}

impl std::fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationQuery::City(name) => f.write_str(name),
            LocationQuery::Coordinates(c) => write!(f, "{:.4},{:.4}", c.lat, c.lon),
        }
    }
}

/// One entry of a multi-day forecast series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    /// `"YYYY-MM-DD HH:MM:SS"`, as sent in the provider's `dt_txt`.
    pub timestamp: String,
    pub temperature: f64,
}

impl ForecastSample {
    pub fn new(timestamp: impl Into<String>, temperature: f64) -> Self {
        Self { timestamp: timestamp.into(), temperature }
    }
}

/// Average temperature for one forecast day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: String,
    pub average_temperature: i64,
}

/// A point-in-time weather reading for a location, temperatures in °C.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub city_name: String,
    pub temperature: f64,
    pub feels_like: f64,
    /// Provider category, e.g. `Rain`, `Clouds`, `Clear`, `Snow`.
    pub condition_main: String,
    pub description: String,
    pub icon: String,
    pub humidity: u8,
    pub pressure: u32,
    /// Metres per second.
    pub wind_speed: f64,
    pub coord: Coord,
    pub country: Option<String>,
    pub sunrise: Option<i64>,
    pub sunset: Option<i64>,
}

impl WeatherSnapshot {
    pub fn icon_url(&self) -> String {
        format!("https://openweathermap.org/img/wn/{}@2x.png", self.icon)
    }
}

/// Current conditions plus the daily forecast averages for the same place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lookup {
    pub snapshot: WeatherSnapshot,
    pub daily: Vec<DailySummary>,
}
