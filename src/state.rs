//! Shared application state

use crate::config::Config;
use crate::services::FontService;
use crate::storage::FontStorage;
use std::sync::Arc;

/// State handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// Font operations
    pub fonts: FontService,
    /// Loaded configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Build state over a storage backend
    pub fn new(config: Config, storage: Arc<dyn FontStorage>) -> Self {
        Self {
            fonts: FontService::new(storage),
            config: Arc::new(config),
        }
    }
}
