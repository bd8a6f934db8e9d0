use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use crate::clients::http::build_client;
use crate::config::AgentConfig;
use crate::error::AgentError;
use crate::handlers::web::{self, WebState};
use crate::models::calendar::{demo_events, tomorrow_in};
use crate::service::agent_flow::WeatherAgent;
use crate::service::event_service::EventSource;
use crate::service::llm_service::AnthropicService;
use crate::service::weather_service::WeatherService;

/// Wires the live clients and the demo calendar into an agent.
pub fn build_agent(config: &AgentConfig) -> Result<WeatherAgent, AgentError> {
    let client = build_client(config.http_timeout)
        .map_err(|e| AgentError::Config(format!("failed to build HTTP client: {}", e)))?;
    let tomorrow = tomorrow_in(config.timezone);
    tracing::info!(%tomorrow, location = %config.location, "calendar loaded");

    Ok(WeatherAgent::new(
        Arc::new(WeatherService::from_config(client.clone(), config)),
        Arc::new(AnthropicService::from_config(client, config)),
        EventSource::new(demo_events(tomorrow)),
        config.location.clone(),
        config.recipient.clone(),
    ))
}

pub async fn run_api(config: AgentConfig) -> Result<(), AgentError> {
    let ip: IpAddr = config
        .host
        .parse()
        .map_err(|_| AgentError::Config(format!("HOST is not an IP address: {}", config.host)))?;
    let addr = SocketAddr::new(ip, config.port);

    let agent = build_agent(&config)?;
    let state = Arc::new(WebState::new(agent));

    tracing::info!(%addr, "serving weather agent");
    warp::serve(web::routes(state)).run(addr).await;
    Ok(())
}
