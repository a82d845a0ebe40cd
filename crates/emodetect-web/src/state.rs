//! Application state.

use emodetect_client::{EmotionClassifier, WatsonClient};
use emodetect_core::ClassifierConfig;
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<dyn EmotionClassifier>,
}

impl AppState {
    pub fn new(classifier: Arc<dyn EmotionClassifier>) -> Self {
        Self { classifier }
    }

    /// State backed by a Watson client built from `config`.
    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::new(Arc::new(WatsonClient::new(config)))
    }
}
