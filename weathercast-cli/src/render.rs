//! Plain-text rendering of the weather card and the daily temperature chart.

use std::fmt::{Display, Write};

use chrono::{DateTime, Datelike, TimeZone};
use weathercast_core::{DailySummary, Theme, WeatherSnapshot};

const BAR_WIDTH: i64 = 30;
const RESET: &str = "\x1b[0m";

/// Foreground colour per theme: dark text on light backgrounds and vice versa.
fn ink(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "\x1b[30m",
        Theme::Dark => "\x1b[97m",
    }
}

pub fn paint(theme: Theme, text: &str) -> String {
    format!("{}{text}{RESET}", ink(theme))
}

/// Formats like `October 19th 2026, 3:04:05 pm`.
pub fn format_moment<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "{} {}{} {}",
        at.format("%B"),
        at.day(),
        ordinal_suffix(at.day()),
        at.format("%Y, %-I:%M:%S %P")
    )
}

fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Upper-cases the first letter of every word, e.g. `broken clouds` → `Broken Clouds`.
fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn clock<Tz>(ts: i64, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    DateTime::from_timestamp(ts, 0).map(|utc| utc.with_timezone(tz).format("%H:%M").to_string())
}

pub fn weather_card<Tz>(snapshot: &WeatherSnapshot, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let tz = now.timezone();
    let mut out = String::new();

    let place = match &snapshot.country {
        Some(country) => format!("{}, {country}", snapshot.city_name),
        None => snapshot.city_name.clone(),
    };

    let _ = writeln!(out, "{}°C", snapshot.temperature.round() as i64);
    let _ = writeln!(out, "{place}");
    let _ = writeln!(out, "{}", format_moment(now));
    let _ = writeln!(out, "{}", capitalize_words(&snapshot.description));
    let _ = writeln!(
        out,
        "Humidity: {}% | Wind: {} m/s",
        snapshot.humidity, snapshot.wind_speed
    );

    let mut details = vec![
        format!("Feels like: {}°C", snapshot.feels_like.round() as i64),
        format!("Pressure: {} hPa", snapshot.pressure),
    ];
    if let Some(sunrise) = snapshot.sunrise.and_then(|ts| clock(ts, &tz)) {
        details.push(format!("Sunrise: {sunrise}"));
    }
    if let Some(sunset) = snapshot.sunset.and_then(|ts| clock(ts, &tz)) {
        details.push(format!("Sunset: {sunset}"));
    }
    let _ = writeln!(out, "{}", details.join(" | "));
    let _ = write!(out, "Icon: {}", snapshot.icon_url());

    out
}

/// One line per day, bars scaled between the coldest and warmest average.
pub fn chart(daily: &[DailySummary]) -> String {
    let mut out = String::from("Avg Temp (°C)");

    let temps = daily.iter().map(|d| d.average_temperature);
    let (Some(min), Some(max)) = (temps.clone().min(), temps.max()) else {
        out.push_str("\n(no forecast available)");
        return out;
    };

    for day in daily {
        let width = if max == min {
            BAR_WIDTH
        } else {
            1 + (day.average_temperature - min) * (BAR_WIDTH - 1) / (max - min)
        };
        let bar = "█".repeat(width as usize);
        let _ = write!(
            out,
            "\n{}  {bar:<w$}  {:>3}°C",
            day.date,
            day.average_temperature,
            w = BAR_WIDTH as usize
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use weathercast_core::Coord;

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            city_name: "Noida".into(),
            temperature: 32.6,
            feels_like: 34.2,
            condition_main: "Clouds".into(),
            description: "broken clouds".into(),
            icon: "04d".into(),
            humidity: 38,
            pressure: 1008,
            wind_speed: 2.6,
            coord: Coord { lat: 28.58, lon: 77.33 },
            country: Some("IN".into()),
            sunrise: Some(1714521600),
            sunset: None,
        }
    }

    fn summary(date: &str, t: i64) -> DailySummary {
        DailySummary { date: date.into(), average_temperature: t }
    }

    #[test]
    fn ordinal_suffixes() {
        let got: Vec<&str> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 23, 31].map(ordinal_suffix).to_vec();
        assert_eq!(got, ["st", "nd", "rd", "th", "th", "th", "th", "st", "nd", "rd", "st"]);
    }

    #[test]
    fn moment_format() {
        let at = Utc.with_ymd_and_hms(2026, 10, 2, 15, 4, 5).unwrap();
        assert_eq!(format_moment(&at), "October 2nd 2026, 3:04:05 pm");

        let at = Utc.with_ymd_and_hms(2026, 1, 11, 0, 30, 0).unwrap();
        assert_eq!(format_moment(&at), "January 11th 2026, 12:30:00 am");
    }

    #[test]
    fn card_contains_rounded_values_and_details() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let card = weather_card(&snapshot(), &now);

        assert!(card.starts_with("33°C\nNoida, IN\nMay 1st 2024, 9:00:00 am\n"));
        assert!(card.contains("Broken Clouds"));
        assert!(card.contains("Humidity: 38% | Wind: 2.6 m/s"));
        assert!(card.contains("Feels like: 34°C | Pressure: 1008 hPa | Sunrise: 00:00"));
        assert!(!card.contains("Sunset"));
        assert!(card.ends_with("https://openweathermap.org/img/wn/04d@2x.png"));
    }

    #[test]
    fn chart_scales_bars() {
        let text = chart(&[summary("2024-05-01", 10), summary("2024-05-02", 20)]);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Avg Temp (°C)");
        assert_eq!(lines[1].matches('█').count(), 1);
        assert_eq!(lines[2].matches('█').count(), BAR_WIDTH as usize);
        assert!(lines[1].starts_with("2024-05-01"));
        assert!(lines[2].ends_with(" 20°C"));
    }

    #[test]
    fn chart_handles_flat_and_negative_series() {
        let flat = chart(&[summary("a", -4), summary("b", -4)]);
        assert!(flat.lines().skip(1).all(|l| l.ends_with(" -4°C")));

        let mixed = chart(&[summary("a", -5), summary("b", 5)]);
        assert_eq!(mixed.lines().nth(1).unwrap().matches('█').count(), 1);
    }

    #[test]
    fn chart_without_data() {
        assert!(chart(&[]).contains("no forecast available"));
    }

    #[test]
    fn paint_wraps_in_theme_colour() {
        assert_eq!(paint(Theme::Light, "x"), "\x1b[30mx\x1b[0m");
        assert_eq!(paint(Theme::Dark, "x"), "\x1b[97mx\x1b[0m");
    }
}
