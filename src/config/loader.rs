//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::RelayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding `listener.port`.
pub const PORT_ENV: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("PORT='{0}' is not a valid port number")]
    InvalidPort(String),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a TOML document into a configuration without validating it.
pub fn parse_config(content: &str) -> Result<RelayConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Load configuration from an optional TOML file, apply environment
/// overrides, then validate.
pub fn load_config(path: Option<&Path>) -> Result<RelayConfig, ConfigError> {
    let mut config = match path {
        Some(path) => parse_config(&fs::read_to_string(path)?)?,
        None => RelayConfig::default(),
    };

    apply_port_override(&mut config, std::env::var(PORT_ENV).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Replace the listener port with the value of `PORT`, when set.
pub fn apply_port_override(config: &mut RelayConfig, value: Option<String>) -> Result<(), ConfigError> {
    let Some(raw) = value else {
        return Ok(());
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(());
    }

    config.listener.port = trimmed
        .parse()
        .map_err(|_| ConfigError::InvalidPort(raw.clone()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_port_override() {
        let mut config = RelayConfig::default();

        apply_port_override(&mut config, None).unwrap();
        assert_eq!(config.listener.port, 3000);

        apply_port_override(&mut config, Some(String::new())).unwrap();
        assert_eq!(config.listener.port, 3000);

        apply_port_override(&mut config, Some("8080".into())).unwrap();
        assert_eq!(config.listener.port, 8080);
    }

    #[test]
    fn test_invalid_port_rejected() {
        let mut config = RelayConfig::default();
        for bad in ["abc", "70000", "-1"] {
            let err = apply_port_override(&mut config, Some(bad.into())).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidPort(ref v) if v == bad));
        }
        assert_eq!(config.listener.port, 3000);
    }

    #[test]
    fn test_parse_error_surfaces() {
        let err = parse_config("[listener\nport = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_config_from_file() {
        let path = std::env::temp_dir().join(format!("api-relay-{}.toml", uuid::Uuid::new_v4()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[upstream]\nresource_url = \"http://127.0.0.1:9/items\"\ntimeout_secs = 5").unwrap();
        drop(file);

        let config = load_config(Some(&path));
        fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert_eq!(config.upstream.resource_url, "http://127.0.0.1:9/items");
        assert_eq!(config.upstream.timeout_secs, Some(5));
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let path = std::env::temp_dir().join(format!("api-relay-{}.toml", uuid::Uuid::new_v4()));
        fs::write(&path, "[upstream]\nresource_url = \"not a url\"\n").unwrap();

        let result = load_config(Some(&path));
        fs::remove_file(&path).unwrap();

        match result {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors, vec![ValidationError::InvalidResourceUrl("not a url".into())]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_example_config_is_valid() {
        let config = parse_config(include_str!("../../relay.example.toml")).unwrap();
        assert_eq!(validate_config(&config), Ok(()));
        assert_eq!(config.listener.port, 3000);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Some(Path::new("/nonexistent/api-relay.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
