use std::io::Write;

use weatherAgent::config::{AgentConfig, AppConfig};
use weatherAgent::error::AgentError;

#[test]
fn config_file_feeds_agent_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "# demo\nANTHROPIC_API_KEY=sk-ant\nWEATHER_API_KEY=owm\nLOCATION=\"Brooklyn,NY,US\"\nTIMEZONE=America/New_York\nPORT=8081"
    )
    .unwrap();

    let app = AppConfig::from_file(file.path().to_str().unwrap()).unwrap();
    let config = AgentConfig::from_props(|key| app.get(key)).unwrap();

    assert_eq!(config.anthropic_api_key, "sk-ant");
    assert_eq!(config.location_name(), "Brooklyn");
    assert_eq!(config.timezone, chrono_tz::America::New_York);
    assert_eq!(config.port, 8081);
}

#[test]
fn missing_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.env");
    let err = AppConfig::from_file(path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, AgentError::Config(msg) if msg.contains("cannot read")));
}
