//! Daily aggregation of a forecast series, used for the temperature chart.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::{
    error::InvalidInputError,
    model::{DailySummary, ForecastSample},
};

/// Maximum number of days kept in the aggregated series.
pub const MAX_DAYS: usize = 7;

struct DailyBucket<'a> {
    date: &'a str,
    samples: Vec<f64>,
}

/// Groups samples by calendar date and averages each day's temperatures.
///
/// Days appear in the order their first sample appears in `samples`, not in
/// calendar order, and only the first [`MAX_DAYS`] days are returned.
/// Averages are rounded half away from zero.
pub fn aggregate(samples: &[ForecastSample]) -> Result<Vec<DailySummary>, InvalidInputError> {
    let mut buckets: Vec<DailyBucket<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for sample in samples {
        let date = date_part(&sample.timestamp)?;

        match index.get(date) {
            Some(&i) => buckets[i].samples.push(sample.temperature),
            None => {
                index.insert(date, buckets.len());
                buckets.push(DailyBucket { date, samples: vec![sample.temperature] });
            }
        }
    }

    Ok(buckets
        .into_iter()
        .take(MAX_DAYS)
        .map(|bucket| DailySummary {
            date: bucket.date.to_string(),
            average_temperature: average(&bucket.samples).round() as i64,
        })
        .collect())
}

fn date_part(timestamp: &str) -> Result<&str, InvalidInputError> {
    let malformed = || InvalidInputError::MalformedTimestamp(timestamp.to_string());

    let (date, _time) = timestamp.split_once(' ').ok_or_else(malformed)?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| malformed())?;

    Ok(date)
}

// Buckets are created on their first sample, so `samples` is never empty.
fn average(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}
