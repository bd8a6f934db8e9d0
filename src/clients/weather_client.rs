use reqwest::Client;

use super::http::{describe_failure, send_with_retry};
use crate::error::AgentError;
use crate::models::forecast::{ForecastPoint, ForecastResponse};

const SERVICE: &str = "openweathermap";

/// Fetches the 3-hour forecast for `location` and keeps the first day of it.
pub async fn fetch_forecast(
    client: &Client,
    base_url: &str,
    location: &str,
    api_key: &str,
) -> Result<Vec<ForecastPoint>, AgentError> {
    let url = format!("{}/data/2.5/forecast", base_url.trim_end_matches('/'));

    let response = send_with_retry(SERVICE, || {
        client
            .get(&url)
            .query(&[("q", location), ("appid", api_key), ("units", "imperial")])
    })
    .await
    .map_err(|e| AgentError::ForecastUnavailable(e.to_string()))?;

    if !response.status().is_success() {
        let reason = describe_failure(response).await;
        tracing::error!(service = SERVICE, %reason, "forecast request rejected");
        return Err(AgentError::ForecastUnavailable(reason));
    }

    let text = response
        .text()
        .await
        .map_err(|e| AgentError::ForecastUnavailable(e.to_string()))?;
    let parsed: ForecastResponse = serde_json::from_str(&text).map_err(|e| {
        AgentError::ForecastUnavailable(format!("failed to parse forecast JSON: {}", e))
    })?;

    parsed.into_points()
}
