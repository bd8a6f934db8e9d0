use async_trait::async_trait;
use reqwest::Client;

use crate::clients::anthropic_client;
use crate::config::AgentConfig;
use crate::error::AgentError;

#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, AgentError>;
}

pub struct AnthropicService {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl AnthropicService {
    pub fn new(
        client: Client,
        base_url: String,
        api_key: String,
        model: String,
        max_tokens: u32,
    ) -> Self {
        Self {
            client,
            base_url,
            api_key,
            model,
            max_tokens,
        }
    }

    pub fn from_config(client: Client, config: &AgentConfig) -> Self {
        Self::new(
            client,
            config.anthropic_api_base.clone(),
            config.anthropic_api_key.clone(),
            config.model.clone(),
            config.max_tokens,
        )
    }
}

#[async_trait]
impl CompletionClient for AnthropicService {
    async fn complete(&self, prompt: &str) -> Result<String, AgentError> {
        anthropic_client::complete(
            &self.client,
            &self.base_url,
            &self.api_key,
            &self.model,
            self.max_tokens,
            prompt,
        )
        .await
    }
}
