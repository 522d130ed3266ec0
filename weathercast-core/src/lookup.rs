//! A full search: current conditions, then the daily forecast for the same place.

use crate::{
    error::WeatherError,
    forecast,
    model::{DailySummary, Lookup, LocationQuery, WeatherSnapshot},
    provider::WeatherProvider,
};

/// Fetches current weather for `query` and the daily averages for its coordinates.
///
/// Forecast problems are logged and leave `daily` empty; only the current
/// weather request can fail the lookup.
pub async fn lookup(
    provider: &dyn WeatherProvider,
    query: &LocationQuery,
) -> Result<Lookup, WeatherError> {
    let snapshot = provider.current(query).await?;
    tracing::info!(city = %snapshot.city_name, "current weather fetched");

    let daily = daily_forecast(provider, &snapshot).await;

    Ok(Lookup { snapshot, daily })
}

async fn daily_forecast(
    provider: &dyn WeatherProvider,
    snapshot: &WeatherSnapshot,
) -> Vec<DailySummary> {
    let samples = match provider.forecast(snapshot.coord).await {
        Ok(samples) => samples,
        Err(err) => {
            tracing::warn!(error = %err, city = %snapshot.city_name, "forecast fetch failed");
            return Vec::new();
        }
    };

    forecast::aggregate(&samples).unwrap_or_else(|err| {
        tracing::warn!(error = %err, city = %snapshot.city_name, "forecast aggregation failed");
        Vec::new()
    })
}
