use std::sync::Arc;

use edukit_llm::TextGenerator;

use crate::config::RelayConfig;

/// Shared, read-only per-process state.
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub fn from_config(config: &RelayConfig) -> Self {
        Self::new(Arc::new(config.gemini_provider()))
    }
}
