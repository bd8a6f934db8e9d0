use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::http::{describe_failure, send_with_retry};
use crate::error::AgentError;

const SERVICE: &str = "anthropic";
const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

/// Sends `prompt` as a single user turn and returns the first text block.
pub async fn complete(
    client: &Client,
    base_url: &str,
    api_key: &str,
    model: &str,
    max_tokens: u32,
    prompt: &str,
) -> Result<String, AgentError> {
    let url = format!("{}/v1/messages", base_url.trim_end_matches('/'));
    let request = AnthropicRequest {
        model,
        max_tokens,
        messages: vec![AnthropicMessage {
            role: "user",
            content: prompt,
        }],
    };

    let response = send_with_retry(SERVICE, || {
        client
            .post(&url)
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
    })
    .await
    .map_err(|e| AgentError::DecisionServiceUnavailable(e.to_string()))?;

    if !response.status().is_success() {
        let reason = describe_failure(response).await;
        tracing::error!(service = SERVICE, %reason, "completion request rejected");
        return Err(AgentError::DecisionServiceUnavailable(reason));
    }

    let text = response
        .text()
        .await
        .map_err(|e| AgentError::DecisionServiceUnavailable(e.to_string()))?;
    let parsed: AnthropicResponse = serde_json::from_str(&text).map_err(|e| {
        AgentError::DecisionServiceUnavailable(format!(
            "failed to parse completion JSON: {}\nRaw body: {}",
            e, text
        ))
    })?;

    parsed
        .content
        .into_iter()
        .find(|block| block.kind == "text")
        .and_then(|block| block.text)
        .ok_or_else(|| {
            AgentError::DecisionServiceUnavailable("no text content in completion".to_string())
        })
}
