//! Classifier configuration.

use std::time::Duration;

use crate::error::{ConfigError, ConfigResult};

/// Default Watson NLP emotion endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://sn-watson-emotion.labs.skills.network/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict";

/// Header carrying the target model id.
pub const MODEL_ID_HEADER: &str = "grpc-metadata-mm-model-id";

/// Default model id.
pub const DEFAULT_MODEL_ID: &str = "emotion_aggregated-workflow_lang_en_stock";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where and how to reach the emotion classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierConfig {
    pub endpoint: String,
    pub model_id: String,
    pub timeout: Duration,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClassifierConfig {
    pub fn new(endpoint: impl Into<String>, model_id: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            model_id: model_id.into(),
            timeout,
        }
    }

    /// Reject configurations that can never produce a request.
    pub fn validate(&self) -> ConfigResult<()> {
        let endpoint = self.endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::InvalidEndpoint(self.endpoint.clone()));
        }
        if self.model_id.trim().is_empty() {
            return Err(ConfigError::EmptyModelId);
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ClassifierConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_endpoint() {
        let config = ClassifierConfig {
            endpoint: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidEndpoint("ftp://example.com".to_string()))
        );
    }

    #[test]
    fn test_rejects_empty_model_and_zero_timeout() {
        let config = ClassifierConfig {
            model_id: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyModelId));

        let config = ClassifierConfig::new(DEFAULT_ENDPOINT, DEFAULT_MODEL_ID, Duration::ZERO);
        assert_eq!(config.validate(), Err(ConfigError::ZeroTimeout));
    }
}
