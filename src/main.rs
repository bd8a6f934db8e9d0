#![allow(non_snake_case)]

use std::env;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use weatherAgent::cli;
use weatherAgent::config::{AgentConfig, AppConfig};
use weatherAgent::runtime;

const DEFAULT_RUN_MODE: &str = "api";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let file_config = match env::var("CONFIG_FILE") {
        Ok(path) => match AppConfig::from_file(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::error!(error = %err, "failed to load config file");
                return ExitCode::FAILURE;
            }
        },
        Err(_) => AppConfig::default(),
    };

    let get_prop = |key: &str| -> Option<String> {
        file_config.get(key).or_else(|| env::var(key).ok())
    };

    let config = match AgentConfig::from_props(&get_prop) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "startup aborted");
            return ExitCode::FAILURE;
        }
    };

    let run_mode = get_prop("RUN_MODE").unwrap_or(DEFAULT_RUN_MODE.to_string());
    let result = match run_mode.as_str() {
        "api" => runtime::run_api(config).await,
        "cli" => cli::cli(config).await,
        other => {
            tracing::error!(run_mode = other, "invalid run mode");
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "agent exited with error");
            ExitCode::FAILURE
        }
    }
}
