//! OpenWeather "current weather" payload.

use serde::Deserialize;

use crate::{error::WeatherError, model::WeatherResult};

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    id: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
}

/// Decode a response body into a [`WeatherResult`], using the first condition.
pub fn decode(body: &str) -> Result<WeatherResult, WeatherError> {
    if body.trim().is_empty() {
        return Err(WeatherError::EmptyBody);
    }

    let parsed: OwCurrentResponse =
        serde_json::from_str(body).map_err(WeatherError::Malformed)?;

    let condition = parsed
        .weather
        .into_iter()
        .next()
        .ok_or(WeatherError::NoConditions)?;

    Ok(WeatherResult::new(
        condition.id,
        parsed.name,
        parsed.main.temp,
        condition.description,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const LONDON: &str = r#"{
        "coord": {"lon": -0.13, "lat": 51.51},
        "weather": [
            {"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"},
            {"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}
        ],
        "main": {"temp": 14.62, "feels_like": 13.9, "humidity": 72},
        "name": "London",
        "cod": 200
    }"#;

    #[test]
    fn projects_first_condition_and_temperature() {
        let result = decode(LONDON).expect("valid body must decode");

        assert_eq!(result.condition_id(), 803);
        assert_eq!(result.city_name(), "London");
        assert_eq!(result.temperature(), 14.62);
        assert_eq!(result.description(), "broken clouds");
        assert_eq!(result.condition_icon_id(), "cloud");
        assert_eq!(result.temperature_string(), "14.6");
    }

    #[test]
    fn empty_body_is_a_decode_error() {
        for body in ["", "   \n"] {
            let err = decode(body).unwrap_err();
            assert!(matches!(err, WeatherError::EmptyBody));
            assert_eq!(err.kind(), ErrorKind::Decode);
        }
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = decode("{\"name\": \"London\"").unwrap_err();
        assert!(matches!(err, WeatherError::Malformed(_)));
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn missing_required_field_is_a_decode_error() {
        let body = r#"{"name": "London", "weather": [{"id": 800, "description": "clear sky"}]}"#;
        let err = decode(body).unwrap_err();
        assert!(matches!(err, WeatherError::Malformed(_)));
    }

    #[test]
    fn empty_conditions_is_a_decode_error() {
        let body = r#"{"name": "London", "main": {"temp": 10.0}, "weather": []}"#;
        let err = decode(body).unwrap_err();
        assert!(matches!(err, WeatherError::NoConditions));
        assert_eq!(err.kind(), ErrorKind::Decode);
    }
}
