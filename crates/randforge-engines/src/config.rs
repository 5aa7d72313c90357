//! Engine configuration.
//!
//! Consumers select an engine variant and an optional seed, either from a
//! deserialized configuration document or from the environment.

use randforge_core::error::RandomError;
use serde::{Deserialize, Serialize};

use crate::{AnyEngine, EngineKind};

/// Environment variable naming the engine kind.
pub const ENGINE_ENV_VAR: &str = "RANDFORGE_ENGINE";

/// Environment variable holding the string seed.
pub const SEED_ENV_VAR: &str = "RANDFORGE_SEED";

/// Which engine to build and how to seed it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// The engine variant.
    pub kind: EngineKind,
    /// String seed. `None` seeds from OS entropy.
    pub seed: Option<String>,
}

impl EngineConfig {
    /// Reads `RANDFORGE_ENGINE` and `RANDFORGE_SEED`, falling back to the
    /// defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidArgument` if `RANDFORGE_ENGINE` names an
    /// unknown engine.
    pub fn from_env() -> Result<Self, RandomError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidArgument` if the engine variable names
    /// an unknown engine.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, RandomError> {
        let kind = match lookup(ENGINE_ENV_VAR) {
            Some(name) => name.parse()?,
            None => EngineKind::default(),
        };
        let seed = lookup(SEED_ENV_VAR).filter(|s| !s.is_empty());
        Ok(Self { kind, seed })
    }

    /// Builds the configured engine.
    #[must_use]
    pub fn build(&self) -> AnyEngine {
        match &self.seed {
            Some(seed) => AnyEngine::from_seed_str(self.kind, seed),
            None => {
                tracing::info!(kind = %self.kind, "no seed configured, seeding from entropy");
                AnyEngine::from_entropy(self.kind)
            }
        }
    }
}
