use serde::{Deserialize, Serialize};

use crate::icon::condition_icon;

/// What to ask the weather endpoint for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WeatherQuery {
    City { name: String },
    Coordinates { latitude: f64, longitude: f64 },
}

impl WeatherQuery {
    pub fn city(name: impl Into<String>) -> Self {
        WeatherQuery::City { name: name.into() }
    }

    pub fn coordinates(latitude: f64, longitude: f64) -> Self {
        WeatherQuery::Coordinates { latitude, longitude }
    }
}

impl std::fmt::Display for WeatherQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherQuery::City { name } => f.write_str(name),
            WeatherQuery::Coordinates { latitude, longitude } => {
                write!(f, "{latitude:.4},{longitude:.4}")
            }
        }
    }
}

/// Current weather for one location, built from a decoded response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherResult {
    condition_id: i64,
    city_name: String,
    temperature: f64,
    description: String,
}

impl WeatherResult {
    pub fn new(
        condition_id: i64,
        city_name: impl Into<String>,
        temperature: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            condition_id,
            city_name: city_name.into(),
            temperature,
            description: description.into(),
        }
    }

    pub fn condition_id(&self) -> i64 {
        self.condition_id
    }

    pub fn city_name(&self) -> &str {
        &self.city_name
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Temperature with one decimal, no unit suffix.
    ///
    /// Rounds half away from zero: `21.25` becomes `"21.3"` and `-21.25`
    /// becomes `"-21.3"`.
    pub fn temperature_string(&self) -> String {
        format_one_decimal(self.temperature)
    }

    pub fn condition_icon_id(&self) -> &'static str {
        condition_icon(self.condition_id)
    }
}

fn format_one_decimal(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    // -0.04 rounds to -0.0
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.1}")
}
