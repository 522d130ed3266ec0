use thiserror::Error;

/// Input that violates the contract of one of the pure core functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    #[error("malformed forecast timestamp '{0}', expected \"YYYY-MM-DD HH:MM:SS\"")]
    MalformedTimestamp(String),

    #[error("weather snapshot is missing required field '{0}'")]
    MissingField(&'static str),

    #[error("weather snapshot field '{0}' is not a finite number")]
    NonFinite(&'static str),
}

/// Failures of a weather provider request.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("City not found: {0}")]
    NotFound(String),

    #[error("Weather request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to parse weather response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
}

impl WeatherError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, WeatherError::NotFound(_))
    }
}
