use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {field} URL: '{value}'. Must start with http:// or https://")]
    InvalidUrl { field: &'static str, value: String },

    #[error("Collection name cannot be empty")]
    EmptyCollection,

    #[error("Generation model cannot be empty")]
    EmptyModel,

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. grimoire.yaml in the working directory (optional)
    /// 3. Environment variables (GRIMOIRE_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file("grimoire.yaml"))
            .merge(Env::prefixed("GRIMOIRE_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        Self::validate_url("embedding.base_url", &config.embedding.base_url)?;
        Self::validate_url("vector_store.base_url", &config.vector_store.base_url)?;
        Self::validate_url("generation.base_url", &config.generation.base_url)?;

        if config.vector_store.collection.is_empty() {
            return Err(ConfigError::EmptyCollection);
        }

        if config.generation.model.is_empty() {
            return Err(ConfigError::EmptyModel);
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        Ok(())
    }

    fn validate_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
        if value.starts_with("http://") || value.starts_with("https://") {
            Ok(())
        } else {
            Err(ConfigError::InvalidUrl {
                field,
                value: value.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.embedding.base_url, "http://localhost:8080");
        assert_eq!(config.vector_store.base_url, "http://localhost:8000");
        assert_eq!(config.vector_store.collection, "italian_brainrot");
        assert_eq!(config.generation.base_url, "http://localhost:11434");
        assert_eq!(config.generation.model, "llama3.2:1b");
        assert_eq!(config.logging.level, "info");
        ConfigLoader::validate(&config).expect("Default config should be valid");
    }

    #[test]
    fn test_env_override() {
        temp_env::with_vars(
            [
                ("GRIMOIRE_EMBEDDING__BASE_URL", Some("http://embed:9000")),
                ("GRIMOIRE_GENERATION__MODEL", Some("mistral")),
            ],
            || {
                let config = ConfigLoader::load().expect("Load should succeed");
                assert_eq!(config.embedding.base_url, "http://embed:9000");
                assert_eq!(config.generation.model, "mistral");
                // Untouched fields keep their defaults
                assert_eq!(config.vector_store.base_url, "http://localhost:8000");
            },
        );
    }

    #[test]
    fn test_rejects_non_http_url() {
        let mut config = Config::default();
        config.vector_store.base_url = "chroma:8000".to_string();
        let err = ConfigLoader::validate(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { field: "vector_store.base_url", .. }));
    }

    #[test]
    fn test_rejects_empty_collection() {
        let mut config = Config::default();
        config.vector_store.collection = String::new();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::EmptyCollection)
        ));
    }

    #[test]
    fn test_rejects_bad_log_level() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }
}
