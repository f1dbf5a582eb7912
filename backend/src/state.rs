//! Application state management
//!
//! Shared state passed to all request handlers via Axum's state extraction.
//! Everything is immutable after creation and cheap to clone (Arc-backed).

use crate::config::AppConfig;
use crate::persistence::PreparationStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Best-effort submission store
    pub store: Arc<PreparationStore>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: AppConfig) -> Self {
        let store = PreparationStore::new(config.persistence.enabled);
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the submission store
    #[inline]
    pub fn store(&self) -> &PreparationStore {
        &self.store
    }
}
