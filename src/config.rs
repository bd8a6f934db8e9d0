use std::collections::HashMap;
use std::fs;
use std::time::Duration;

use chrono_tz::Tz;

use crate::error::AgentError;

pub const DEFAULT_RECIPIENT: &str = "alerts@example.com";
pub const DEFAULT_LOCATION: &str = "Seattle,WA,US";
pub const DEFAULT_TIMEZONE: &str = "America/Los_Angeles";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 10000;
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5-20250929";
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_WEATHER_API_BASE: &str = "https://api.openweathermap.org";
pub const DEFAULT_ANTHROPIC_API_BASE: &str = "https://api.anthropic.com";

/// Raw `KEY=VALUE` pairs read from `CONFIG_FILE`.
#[derive(Debug, Default, Clone)]
pub struct AppConfig {
    values: HashMap<String, String>,
}

impl AppConfig {
    pub fn from_file(path: &str) -> Result<Self, AgentError> {
        let content = fs::read_to_string(path)
            .map_err(|e| AgentError::Config(format!("cannot read {}: {}", path, e)))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, AgentError> {
        let mut values = HashMap::new();
        for (idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
            let Some((key, value)) = trimmed.split_once('=') else {
                return Err(AgentError::Config(format!(
                    "invalid config line {}: {}",
                    idx + 1,
                    line
                )));
            };
            let key = key.trim();
            let mut value = value.trim().to_string();
            if value.len() >= 2
                && ((value.starts_with('"') && value.ends_with('"'))
                    || (value.starts_with('\'') && value.ends_with('\'')))
            {
                value = value[1..value.len() - 1].to_string();
            }
            values.insert(key.to_string(), value);
        }
        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Everything a run needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub anthropic_api_key: String,
    pub weather_api_key: String,
    pub recipient: String,
    pub location: String,
    pub timezone: Tz,
    pub host: String,
    pub port: u16,
    pub model: String,
    pub max_tokens: u32,
    pub http_timeout: Duration,
    pub weather_api_base: String,
    pub anthropic_api_base: String,
}

impl AgentConfig {
    /// Builds the config from a property lookup (file first, then env in `main`).
    pub fn from_props<F>(get_prop: F) -> Result<Self, AgentError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String, AgentError> {
            get_prop(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| AgentError::Config(format!("{} must be set", key)))
        };
        let or_default =
            |key: &str, default: &str| get_prop(key).unwrap_or_else(|| default.to_string());

        let max_tokens: u32 = parse_number(&get_prop, "MAX_TOKENS", DEFAULT_MAX_TOKENS)?;
        if max_tokens == 0 {
            return Err(AgentError::Config("MAX_TOKENS must be greater than 0".to_string()));
        }
        let timeout_secs: u64 = parse_number(&get_prop, "HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(AgentError::Config(
                "HTTP_TIMEOUT_SECS must be greater than 0".to_string(),
            ));
        }

        let timezone_name = or_default("TIMEZONE", DEFAULT_TIMEZONE);
        let timezone: Tz = timezone_name
            .parse()
            .map_err(|_| AgentError::Config(format!("unknown TIMEZONE {}", timezone_name)))?;

        Ok(Self {
            anthropic_api_key: required("ANTHROPIC_API_KEY")?,
            weather_api_key: required("WEATHER_API_KEY")?,
            recipient: or_default("USER_EMAIL", DEFAULT_RECIPIENT),
            location: or_default("LOCATION", DEFAULT_LOCATION),
            timezone,
            host: or_default("HOST", DEFAULT_HOST),
            port: parse_number(&get_prop, "PORT", DEFAULT_PORT)?,
            model: or_default("ANTHROPIC_MODEL", DEFAULT_MODEL),
            max_tokens,
            http_timeout: Duration::from_secs(timeout_secs),
            weather_api_base: or_default("WEATHER_API_BASE", DEFAULT_WEATHER_API_BASE),
            anthropic_api_base: or_default("ANTHROPIC_API_BASE", DEFAULT_ANTHROPIC_API_BASE),
        })
    }

    pub fn location_name(&self) -> &str {
        city_name(&self.location)
    }
}

/// City part of a `city,region,country` location, used in prompts and transcripts.
pub fn city_name(location: &str) -> &str {
    location.split(',').next().unwrap_or(location).trim()
}

fn parse_number<F, T>(get_prop: &F, key: &str, default: T) -> Result<T, AgentError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match get_prop(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AgentError::Config(format!("{} is not a valid number: {}", key, raw))),
        None => Ok(default),
    }
}
