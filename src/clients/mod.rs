pub mod anthropic_client;
pub mod http;
pub mod weather_client;
