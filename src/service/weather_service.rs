use async_trait::async_trait;
use reqwest::Client;

use crate::clients::weather_client;
use crate::config::AgentConfig;
use crate::error::AgentError;
use crate::models::forecast::ForecastPoint;

#[async_trait]
pub trait WeatherClient: Send + Sync {
    async fn forecast(&self, location: &str) -> Result<Vec<ForecastPoint>, AgentError>;
}

pub struct WeatherService {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherService {
    pub fn new(client: Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    pub fn from_config(client: Client, config: &AgentConfig) -> Self {
        Self::new(
            client,
            config.weather_api_base.clone(),
            config.weather_api_key.clone(),
        )
    }
}

#[async_trait]
impl WeatherClient for WeatherService {
    async fn forecast(&self, location: &str) -> Result<Vec<ForecastPoint>, AgentError> {
        weather_client::fetch_forecast(&self.client, &self.base_url, location, &self.api_key).await
    }
}
