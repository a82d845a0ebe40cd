//! Watson NLP HTTP client for emotion prediction.
//!
//! Posts `{"raw_document": {"text": ...}}` to the `EmotionPredict` endpoint
//! and reads the first entry of `emotionPredictions`.

use async_trait::async_trait;
use emodetect_core::config::MODEL_ID_HEADER;
use emodetect_core::{AnalysisFailure, AnalysisResult, ClassifierConfig, EmotionScores};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::classifier::EmotionClassifier;

/// Watson emotion prediction client.
#[derive(Clone)]
pub struct WatsonClient {
    endpoint: String,
    model_id: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    raw_document: RawDocument<'a>,
}

#[derive(Serialize)]
struct RawDocument<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct PredictResponse {
    #[serde(rename = "emotionPredictions")]
    emotion_predictions: Option<Vec<EmotionPrediction>>,
}

/// A missing `emotion` key yields all zeros; an explicit `null` is malformed.
#[derive(Deserialize)]
struct EmotionPrediction {
    #[serde(default)]
    emotion: RawScores,
}

/// Missing scores default to 0.0; an explicit `null` score is malformed.
#[derive(Deserialize, Default)]
#[serde(default)]
struct RawScores {
    anger: f64,
    disgust: f64,
    fear: f64,
    joy: f64,
    sadness: f64,
}

impl From<RawScores> for EmotionScores {
    fn from(raw: RawScores) -> Self {
        Self {
            anger: raw.anger,
            disgust: raw.disgust,
            fear: raw.fear,
            joy: raw.joy,
            sadness: raw.sadness,
        }
    }
}

impl WatsonClient {
    /// Create a client for the given configuration.
    pub fn new(config: &ClassifierConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();

        Self {
            endpoint: config.endpoint.trim().to_string(),
            model_id: config.model_id.clone(),
            client,
        }
    }

    /// Create a client pointed at the public Watson endpoint with the stock model.
    pub fn default_client() -> Self {
        Self::new(&ClassifierConfig::default())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one prediction request.
    pub async fn predict(&self, text: &str) -> Result<EmotionScores, AnalysisFailure> {
        let request = PredictRequest {
            raw_document: RawDocument { text },
        };

        debug!(endpoint = %self.endpoint, bytes = text.len(), "Requesting emotion prediction");

        let response = self
            .client
            .post(self.endpoint.as_str())
            .header(MODEL_ID_HEADER, self.model_id.as_str())
            .json(&request)
            .send()
            .await
            .map_err(|e| AnalysisFailure::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AnalysisFailure::Transport(e.to_string()))?;

        interpret_response(status, &body)
    }
}

#[async_trait]
impl EmotionClassifier for WatsonClient {
    async fn analyze(&self, text: &str) -> AnalysisResult {
        let result = self.predict(text).await;

        match &result {
            Ok(scores) => {
                debug!(dominant = %scores.dominant_emotion(), "Emotion prediction succeeded")
            }
            Err(AnalysisFailure::InvalidInput) => debug!("Upstream rejected input text"),
            Err(e) => warn!(error = %e, "Emotion prediction failed"),
        }

        result.into()
    }
}

/// Map an upstream status and body to scores or a failure reason.
///
/// 400 means the text was rejected; any other non-success status is an
/// upstream failure. A success body without predictions yields all zeros.
pub fn interpret_response(status: StatusCode, body: &str) -> Result<EmotionScores, AnalysisFailure> {
    if status == StatusCode::BAD_REQUEST {
        return Err(AnalysisFailure::InvalidInput);
    }
    if !status.is_success() {
        return Err(AnalysisFailure::UpstreamStatus(status.as_u16()));
    }
    parse_scores(body)
}

/// Extract the first prediction's scores, defaulting missing fields to 0.0.
///
/// The body must be a JSON object; explicit `null` scores or a `null`
/// emotion object are rejected as malformed.
pub fn parse_scores(body: &str) -> Result<EmotionScores, AnalysisFailure> {
    let response: PredictResponse = serde_json::from_str(body)
        .map_err(|e| AnalysisFailure::MalformedResponse(e.to_string()))?;

    let raw = response
        .emotion_predictions
        .and_then(|predictions| predictions.into_iter().next())
        .map(|prediction| prediction.emotion)
        .unwrap_or_default();

    Ok(raw.into())
}
