use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};

pub fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder().timeout(timeout).build()
}

fn is_transient(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect()
}

/// Sends a request, retrying once on a timeout, connect error or 5xx.
///
/// `build` is called per attempt since a sent `RequestBuilder` is consumed.
pub async fn send_with_retry<F>(service: &str, build: F) -> Result<Response, reqwest::Error>
where
    F: Fn() -> RequestBuilder,
{
    match build().send().await {
        Ok(response) if response.status().is_server_error() => {
            tracing::warn!(
                service,
                status = %response.status(),
                "transient upstream status, retrying once"
            );
        }
        Ok(response) => return Ok(response),
        Err(err) if is_transient(&err) => {
            tracing::warn!(service, error = %err, "transient network failure, retrying once");
        }
        Err(err) => return Err(err),
    }
    build().send().await
}

/// Reads the body of a non-2xx response into a short error description.
pub async fn describe_failure(response: Response) -> String {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let text = text.trim();
    if text.is_empty() {
        format!("request failed with status {}", status)
    } else {
        format!("request failed with status {}: {}", status, text)
    }
}
