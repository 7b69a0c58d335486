//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable naming an optional TOML config file.
pub const CONFIG_ENV_VAR: &str = "ZION_CONFIG";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

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
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load from the file named by `ZION_CONFIG`, or fall back to defaults.
pub fn load_from_env() -> Result<AppConfig, ConfigError> {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => load_config(&PathBuf::from(path)),
        None => Ok(AppConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[listener]\nbind_address = \"127.0.0.1:4000\"").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:4000");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config(Path::new("/nonexistent/zion.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[listener\nbind_address = ").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[timeouts]\nrequest_secs = 0").unwrap();

        let err = load_config(file.path()).unwrap_err();
        match err {
            ConfigError::Validation(errors) => {
                assert_eq!(errors, vec![ValidationError::ZeroRequestTimeout]);
            }
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn test_load_from_env() {
        let saved = std::env::var_os(CONFIG_ENV_VAR);

        std::env::remove_var(CONFIG_ENV_VAR);
        let config = load_from_env().unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");

        let mut valid = tempfile::NamedTempFile::new().unwrap();
        writeln!(valid, "[listener]\nbind_address = \"127.0.0.1:4100\"").unwrap();
        std::env::set_var(CONFIG_ENV_VAR, valid.path());
        let config = load_from_env().unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:4100");

        let mut invalid = tempfile::NamedTempFile::new().unwrap();
        writeln!(invalid, "[listener]\nbind_address = \"nope\"").unwrap();
        std::env::set_var(CONFIG_ENV_VAR, invalid.path());
        let err = load_from_env().unwrap_err();

        match saved {
            Some(value) => std::env::set_var(CONFIG_ENV_VAR, value),
            None => std::env::remove_var(CONFIG_ENV_VAR),
        }

        match err {
            ConfigError::Validation(errors) => {
                assert_eq!(errors, vec![ValidationError::InvalidBindAddress("nope".into())]);
            }
            other => panic!("expected validation error, got {other}"),
        }
    }
}
