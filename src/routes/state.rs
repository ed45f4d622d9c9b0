use std::sync::Arc;

use crate::services::{CompletionClient, CuratorSettings};

/// Shared, read-only application state
#[derive(Clone)]
pub struct AppState {
    pub completion: Arc<dyn CompletionClient>,
    pub settings: CuratorSettings,
}

impl AppState {
    pub fn new(completion: Arc<dyn CompletionClient>, settings: CuratorSettings) -> Self {
        Self {
            completion,
            settings,
        }
    }
}
