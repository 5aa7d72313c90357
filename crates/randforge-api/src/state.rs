//! Shared application state.

use std::sync::{Arc, Mutex};

use randforge_core::engine::Engine;

use crate::error::ApiError;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The engine every request draws from.
    pub engine: Arc<Mutex<dyn Engine + Send>>,
}

impl AppState {
    /// Create new application state around `engine`.
    #[must_use]
    pub fn new(engine: impl Engine + Send + 'static) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }

    /// Runs `draw` with exclusive access to the engine. The lock is held only
    /// for the synchronous call.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::EngineUnavailable` if the engine mutex is poisoned.
    pub fn with_engine<T>(
        &self,
        draw: impl FnOnce(&mut (dyn Engine + Send)) -> T,
    ) -> Result<T, ApiError> {
        let mut guard = self
            .engine
            .lock()
            .map_err(|e| ApiError::EngineUnavailable(format!("engine mutex poisoned: {e}")))?;
        Ok(draw(&mut *guard))
    }
}
