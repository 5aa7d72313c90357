//! Service configuration.
//!
//! Defaults are overlaid first by an optional YAML file named in
//! `RANDFORGE_CONFIG`, then by individual environment variables.

use randforge_engines::config::{ENGINE_ENV_VAR, EngineConfig, SEED_ENV_VAR};
use serde::Deserialize;

use crate::error::AppError;

/// Environment variable naming an optional YAML configuration file.
pub const CONFIG_ENV_VAR: &str = "RANDFORGE_CONFIG";

/// Host, port and engine selection for the API server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Engine variant and seed.
    pub engine: EngineConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            engine: EngineConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the configuration file cannot be read
    /// or parsed, `PORT` is not a valid port, or `RANDFORGE_ENGINE` names an
    /// unknown engine.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ServiceConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut config = match lookup(CONFIG_ENV_VAR) {
            Some(path) => {
                let text = std::fs::read_to_string(&path)
                    .map_err(|e| AppError::Config(format!("cannot read {path}: {e}")))?;
                Self::from_yaml(&text)?
            }
            None => Self::default(),
        };
        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?;
        }
        if let Some(kind) = lookup(ENGINE_ENV_VAR) {
            config.engine.kind = kind
                .parse()
                .map_err(|e| AppError::Config(format!("{ENGINE_ENV_VAR}: {e}")))?;
        }
        if let Some(seed) = lookup(SEED_ENV_VAR).filter(|seed| !seed.is_empty()) {
            config.engine.seed = Some(seed);
        }
        Ok(config)
    }

    /// Parses a YAML document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the document is not valid YAML for this
    /// shape.
    pub fn from_yaml(text: &str) -> Result<Self, AppError> {
        serde_yaml::from_str(text).map_err(|e| AppError::Config(format!("invalid configuration file: {e}")))
    }
}
