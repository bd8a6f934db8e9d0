use serde::{Deserialize, Serialize};

use crate::error::AgentError;

/// Entries kept from the 3-hour series (roughly the next 24 hours).
pub const FORECAST_WINDOW: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub timestamp: String,
    pub temperature_f: f64,
    pub condition: String,
    pub description: String,
}

impl ForecastPoint {
    pub fn summary_line(&self) -> String {
        format!(
            "- {}: {:?}°F, {}",
            self.timestamp, self.temperature_f, self.description
        )
    }
}

// Shape of the OpenWeatherMap /data/2.5/forecast response, reduced to what we read.
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastEntry {
    pub dt_txt: String,
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
}

#[derive(Debug, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
}

#[derive(Debug, Deserialize)]
pub struct WeatherCondition {
    pub main: String,
    pub description: String,
}

impl ForecastResponse {
    pub fn into_points(self) -> Result<Vec<ForecastPoint>, AgentError> {
        self.list
            .into_iter()
            .take(FORECAST_WINDOW)
            .map(|entry| {
                let condition = entry.weather.into_iter().next().ok_or_else(|| {
                    AgentError::ForecastUnavailable(format!(
                        "entry {} has no weather conditions",
                        entry.dt_txt
                    ))
                })?;
                Ok(ForecastPoint {
                    timestamp: entry.dt_txt,
                    temperature_f: entry.main.temp,
                    condition: condition.main,
                    description: condition.description,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_points_keeps_first_window_in_order() {
        let list: Vec<serde_json::Value> = (0..12)
            .map(|i| {
                serde_json::json!({
                    "dt_txt": format!("2026-10-19 {:02}:00:00", i),
                    "main": { "temp": 50.0 + i as f64 },
                    "weather": [{ "main": "Clouds", "description": "few clouds" }]
                })
            })
            .collect();
        let response: ForecastResponse =
            serde_json::from_value(serde_json::json!({ "list": list })).unwrap();

        let points = response.into_points().unwrap();
        assert_eq!(points.len(), FORECAST_WINDOW);
        assert_eq!(points[0].timestamp, "2026-10-19 00:00:00");
        assert_eq!(points[7].temperature_f, 57.0);
        assert_eq!(points[3].condition, "Clouds");
    }

    #[test]
    fn into_points_rejects_entry_without_conditions() {
        let response: ForecastResponse = serde_json::from_value(serde_json::json!({
            "list": [{ "dt_txt": "2026-10-19 03:00:00", "main": { "temp": 48.2 }, "weather": [] }]
        }))
        .unwrap();
        let err = response.into_points().unwrap_err();
        assert!(matches!(err, AgentError::ForecastUnavailable(msg) if msg.contains("03:00:00")));
    }

    #[test]
    fn summary_line_matches_prompt_format() {
        let point = ForecastPoint {
            timestamp: "2026-10-19 06:00:00".to_string(),
            temperature_f: 48.5,
            condition: "Rain".to_string(),
            description: "light rain".to_string(),
        };
        assert_eq!(point.summary_line(), "- 2026-10-19 06:00:00: 48.5°F, light rain");

        let whole = ForecastPoint {
            temperature_f: 55.0,
            ..point
        };
        assert_eq!(whole.summary_line(), "- 2026-10-19 06:00:00: 55.0°F, light rain");
    }
}
