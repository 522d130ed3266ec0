//! Canned travel recommendation for a weather snapshot.

use crate::{error::InvalidInputError, model::WeatherSnapshot};

const HOT: &str = "It's quite hot! Make sure to stay hydrated and wear light clothing if you go out. ";
const PLEASANT: &str = "The temperature is pleasant! It's a great time to be outdoors. ";
const COOL: &str = "It's a bit cool. You might want to bring a light jacket. ";
const COLD: &str = "It's quite cold! Make sure to bundle up if you go outside. ";

const RAIN: &str =
    "Since it's raining, you might want to carry an umbrella or consider indoor activities. ";
const CLOUDS: &str = "The clouds might make it feel a bit cooler than it actually is. ";
const CLEAR: &str = "The clear skies make it a perfect day to be outside! ";
const SNOW: &str = "There's snow, so be careful if you're driving or walking outside. ";

const WINDY: &str = "It's quite windy, so you might want to secure loose items and be cautious if doing outdoor activities. ";

const VERDICT_GREAT: &str = "Overall, it's a great time to visit! Enjoy your time there!";
const VERDICT_WET: &str =
    "You might want to reconsider outdoor activities or plan for indoor alternatives.";
const VERDICT_EXTREME: &str =
    "The extreme temperatures might make outdoor activities uncomfortable.";
const VERDICT_AVERAGE: &str =
    "Conditions are fairly average - not perfect but still okay for most activities.";

/// Wind speed (m/s) above which the windy warning is added.
const WINDY_ABOVE: f64 = 8.0;

/// Composes the assistant's recommendation for `snapshot`.
///
/// Clauses are appended in a fixed order: opening, temperature band, sky
/// condition, wind, and a closing verdict.
pub fn compose(snapshot: &WeatherSnapshot) -> Result<String, InvalidInputError> {
    validate(snapshot)?;

    let temp = snapshot.temperature;
    let wind = snapshot.wind_speed;
    let condition = snapshot.condition_main.to_lowercase();

    let mut text = format!(
        "In {}, it's currently {}°C with {}. ",
        snapshot.city_name, temp, condition
    );

    text.push_str(if temp > 30.0 {
        HOT
    } else if temp > 20.0 {
        PLEASANT
    } else if temp > 10.0 {
        COOL
    } else {
        COLD
    });

    let sky = [("rain", RAIN), ("cloud", CLOUDS), ("clear", CLEAR), ("snow", SNOW)]
        .into_iter()
        .find(|(needle, _)| condition.contains(*needle));
    if let Some((_, clause)) = sky {
        text.push_str(clause);
    }

    if wind > WINDY_ABOVE {
        text.push_str(WINDY);
    }

    // "storm" never appears in provider categories, but is kept in the wet check.
    let wet = condition.contains("rain") || condition.contains("storm");

    text.push_str(if (15.0..=28.0).contains(&temp) && !wet && wind < WINDY_ABOVE {
        VERDICT_GREAT
    } else if wet {
        VERDICT_WET
    } else if !(5.0..=35.0).contains(&temp) {
        VERDICT_EXTREME
    } else {
        VERDICT_AVERAGE
    });

    Ok(text)
}

fn validate(snapshot: &WeatherSnapshot) -> Result<(), InvalidInputError> {
    if snapshot.city_name.trim().is_empty() {
        return Err(InvalidInputError::MissingField("name"));
    }
    if snapshot.condition_main.trim().is_empty() {
        return Err(InvalidInputError::MissingField("weather[0].main"));
    }
    if !snapshot.temperature.is_finite() {
        return Err(InvalidInputError::NonFinite("main.temp"));
    }
    if !snapshot.wind_speed.is_finite() {
        return Err(InvalidInputError::NonFinite("wind.speed"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Coord;

    fn snapshot(temp: f64, condition: &str, wind: f64) -> WeatherSnapshot {
        WeatherSnapshot {
            city_name: "Noida".into(),
            temperature: temp,
            feels_like: temp,
            condition_main: condition.into(),
            description: condition.to_lowercase(),
            icon: "01d".into(),
            humidity: 40,
            pressure: 1012,
            wind_speed: wind,
            coord: Coord { lat: 28.58, lon: 77.33 },
            country: Some("IN".into()),
            sunrise: None,
            sunset: None,
        }
    }

    #[test]
    fn hot_clear_calm_is_fairly_average() {
        let text = compose(&snapshot(32.0, "Clear", 2.0)).unwrap();

        assert!(text.starts_with("In Noida, it's currently 32°C with clear. "));
        assert!(text.contains(HOT));
        assert!(text.contains(CLEAR));
        assert!(!text.contains(WINDY));
        assert!(text.ends_with(VERDICT_AVERAGE));
    }

    #[test]
    fn pleasant_rain_windy_reconsiders() {
        let text = compose(&snapshot(22.0, "Rain", 10.0)).unwrap();

        assert!(text.contains(PLEASANT));
        assert!(text.contains(RAIN));
        assert!(text.contains(WINDY));
        assert!(text.ends_with(VERDICT_WET));
    }

    #[test]
    fn full_text_for_ideal_day() {
        let text = compose(&snapshot(18.5, "Clouds", 3.0)).unwrap();

        assert_eq!(
            text,
            "In Noida, it's currently 18.5°C with clouds. \
             It's a bit cool. You might want to bring a light jacket. \
             The clouds might make it feel a bit cooler than it actually is. \
             Overall, it's a great time to visit! Enjoy your time there!"
        );
    }

    #[test]
    fn band_boundaries_fall_to_lower_band() {
        assert!(compose(&snapshot(30.0, "Clear", 0.0)).unwrap().contains(PLEASANT));
        assert!(compose(&snapshot(20.0, "Clear", 0.0)).unwrap().contains(COOL));
        assert!(compose(&snapshot(10.0, "Clear", 0.0)).unwrap().contains(COLD));
        assert!(compose(&snapshot(30.5, "Clear", 0.0)).unwrap().contains(HOT));
    }

    #[test]
    fn ideal_band_is_inclusive() {
        assert!(compose(&snapshot(15.0, "Clear", 0.0)).unwrap().ends_with(VERDICT_GREAT));
        assert!(compose(&snapshot(28.0, "Clear", 0.0)).unwrap().ends_with(VERDICT_GREAT));
        assert!(compose(&snapshot(28.1, "Clear", 0.0)).unwrap().ends_with(VERDICT_AVERAGE));
    }

    #[test]
    fn wind_of_exactly_eight_adds_no_clause_but_spoils_ideal_day() {
        let text = compose(&snapshot(20.0, "Clear", 8.0)).unwrap();

        assert!(!text.contains(WINDY));
        assert!(text.ends_with(VERDICT_AVERAGE));
    }

    #[test]
    fn extreme_temperatures() {
        assert!(compose(&snapshot(-3.0, "Snow", 1.0)).unwrap().ends_with(VERDICT_EXTREME));
        assert!(compose(&snapshot(36.0, "Clear", 1.0)).unwrap().ends_with(VERDICT_EXTREME));
        assert!(compose(&snapshot(5.0, "Snow", 1.0)).unwrap().ends_with(VERDICT_AVERAGE));
        assert!(compose(&snapshot(35.0, "Clear", 1.0)).unwrap().ends_with(VERDICT_AVERAGE));
    }

    #[test]
    fn snow_clause_and_unknown_condition() {
        assert!(compose(&snapshot(-1.0, "Snow", 1.0)).unwrap().contains(SNOW));

        let mist = compose(&snapshot(12.0, "Mist", 1.0)).unwrap();
        for clause in [RAIN, CLOUDS, CLEAR, SNOW] {
            assert!(!mist.contains(clause));
        }
    }

    #[test]
    fn thunderstorm_counts_as_wet_without_rain_clause() {
        let text = compose(&snapshot(25.0, "Thunderstorm", 1.0)).unwrap();

        assert!(!text.contains(RAIN));
        assert!(text.ends_with(VERDICT_WET));
    }

    #[test]
    fn missing_fields_are_rejected() {
        let mut s = snapshot(20.0, "Clear", 1.0);
        s.city_name.clear();
        assert_eq!(compose(&s).unwrap_err(), InvalidInputError::MissingField("name"));

        let s = snapshot(20.0, "", 1.0);
        assert_eq!(compose(&s).unwrap_err(), InvalidInputError::MissingField("weather[0].main"));

        let s = snapshot(f64::NAN, "Clear", 1.0);
        assert_eq!(compose(&s).unwrap_err(), InvalidInputError::NonFinite("main.temp"));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let s = snapshot(22.0, "Rain", 10.0);
        assert_eq!(compose(&s).unwrap(), compose(&s).unwrap());
    }
}
