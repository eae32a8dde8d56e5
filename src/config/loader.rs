//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::OrchestratorConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable naming an optional TOML config file.
pub const CONFIG_PATH_ENV: &str = "ORCHESTRATOR_CONFIG";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: '{value}'")]
    Env { key: &'static str, value: String },

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

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<OrchestratorConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: OrchestratorConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Build the effective configuration: defaults, then the optional file,
/// then environment overrides resolved through `lookup`.
pub fn load_layered<F>(path: Option<&Path>, lookup: F) -> Result<OrchestratorConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str::<OrchestratorConfig>(&content)?
        }
        None => OrchestratorConfig::default(),
    };

    apply_env_overrides(&mut config, lookup)?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load configuration from the process environment.
pub fn load_from_env(path: Option<&Path>) -> Result<OrchestratorConfig, ConfigError> {
    let env_path = std::env::var(CONFIG_PATH_ENV).ok();
    let path = path.or(env_path.as_deref().map(Path::new));
    load_layered(path, |key| std::env::var(key).ok())
}

/// Overlay environment-sourced values onto `config`.
pub fn apply_env_overrides<F>(config: &mut OrchestratorConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup("N8N_WEBHOOK_URL") {
        config.downstream.webhook_url = v;
    }
    if let Some(v) = lookup("N8N_HEALTH_URL") {
        config.downstream.health_url = v;
    }
    if let Some(v) = lookup("N8N_TIMEOUT_SECS") {
        config.downstream.request_timeout_secs = parse_secs("N8N_TIMEOUT_SECS", v)?;
    }
    if let Some(v) = lookup("N8N_HEALTH_TIMEOUT_SECS") {
        config.downstream.health_timeout_secs = parse_secs("N8N_HEALTH_TIMEOUT_SECS", v)?;
    }
    if let Some(v) = lookup("BIND_ADDRESS") {
        config.listener.bind_address = v;
    }
    if let Some(v) = lookup("LOG_LEVEL") {
        config.observability.log_level = v;
    }
    if let Some(v) = lookup("LOG_FORMAT") {
        config.observability.log_format = v.parse().map_err(|_| ConfigError::Env {
            key: "LOG_FORMAT",
            value: v.clone(),
        })?;
    }
    if let Some(v) = lookup("SERVICE_NAME") {
        config.service.name = v;
    }
    Ok(())
}

fn parse_secs(key: &'static str, value: String) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Env { key, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LogFormat;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_env_overrides_defaults() {
        let config = load_layered(
            None,
            env(&[
                ("N8N_WEBHOOK_URL", "http://127.0.0.1:5678/webhook/test"),
                ("N8N_TIMEOUT_SECS", "12"),
                ("LOG_LEVEL", "debug"),
                ("LOG_FORMAT", "json"),
            ]),
        )
        .unwrap();

        assert_eq!(config.downstream.webhook_url, "http://127.0.0.1:5678/webhook/test");
        assert_eq!(config.downstream.request_timeout_secs, 12);
        assert_eq!(config.downstream.health_timeout_secs, 5);
        assert_eq!(config.observability.log_level, "debug");
        assert_eq!(config.observability.log_format, LogFormat::Json);
    }

    #[test]
    fn test_bad_env_number() {
        let err = load_layered(None, env(&[("N8N_HEALTH_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::Env { key: "N8N_HEALTH_TIMEOUT_SECS", .. }));
    }

    #[test]
    fn test_env_value_is_validated() {
        let err = load_layered(None, env(&[("N8N_HEALTH_URL", "n8n:5678")])).unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_file_then_env() {
        let path = std::env::temp_dir().join(format!("orchestrator-{}.toml", uuid::Uuid::new_v4()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[downstream]\nwebhook_url = \"http://file:5678/webhook\"\nhealth_url = \"http://file:5678/healthz\"\n\n[service]\nname = \"orchestrator\""
        )
        .unwrap();

        let config = load_layered(Some(path.as_path()), env(&[("N8N_HEALTH_URL", "http://env:5678/healthz")])).unwrap();
        assert_eq!(config.downstream.webhook_url, "http://file:5678/webhook");
        assert_eq!(config.downstream.health_url, "http://env:5678/healthz");
        assert_eq!(config.service.name, "orchestrator");

        let from_file = load_config(&path).unwrap();
        assert_eq!(from_file.downstream.health_url, "http://file:5678/healthz");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
