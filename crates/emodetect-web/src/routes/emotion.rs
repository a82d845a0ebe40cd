//! Emotion detection route handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use emodetect_core::{format_statement, AnalysisFailure, AnalysisResult, EmotionReport};
use tracing::debug;

use crate::state::AppState;

/// Body returned for missing, blank or rejected text.
pub const INVALID_TEXT_MESSAGE: &str = "Invalid text! Please try again!";

/// Body returned when the classifier could not produce scores.
pub const ANALYSIS_FAILED_MESSAGE: &str = "Emotion analysis failed. Please try again later.";

/// Query parameter carrying the text.
pub const TEXT_PARAM: &str = "textToAnalyze";

/// The `textToAnalyze` parameter of a request.
///
/// Built from the raw query pairs so a repeated parameter keeps its first
/// value instead of rejecting the request.
#[derive(Debug, Default)]
pub struct AnalyzeQuery {
    pub text_to_analyze: Option<String>,
}

impl AnalyzeQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let text_to_analyze = pairs
            .into_iter()
            .find(|(key, _)| key == TEXT_PARAM)
            .map(|(_, value)| value);
        Self { text_to_analyze }
    }

    /// The text to classify, or `None` when absent or blank.
    fn text(&self) -> Option<&str> {
        self.text_to_analyze
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

/// Status and message for a failed analysis.
pub fn failure_response(failure: &AnalysisFailure) -> (StatusCode, &'static str) {
    if failure.is_invalid_input() {
        (StatusCode::BAD_REQUEST, INVALID_TEXT_MESSAGE)
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, ANALYSIS_FAILED_MESSAGE)
    }
}

/// GET /emotionDetector - Classify text and describe the result in a sentence.
pub async fn emotion_detector(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<String, (StatusCode, String)> {
    let query = AnalyzeQuery::from_pairs(pairs);
    let text = query.text().ok_or_else(|| {
        debug!("Rejecting blank text before classification");
        (StatusCode::BAD_REQUEST, INVALID_TEXT_MESSAGE.to_string())
    })?;

    match state.classifier.analyze(text).await {
        AnalysisResult::Scores(scores) => Ok(format_statement(&scores)),
        AnalysisResult::Failed(failure) => {
            let (status, message) = failure_response(&failure);
            Err((status, message.to_string()))
        }
    }
}

/// GET /api/emotions - Classify text and return the flat score report as JSON.
///
/// Failures carry the all-`null` sentinel body.
pub async fn emotion_report(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<EmotionReport>, (StatusCode, Json<EmotionReport>)> {
    let query = AnalyzeQuery::from_pairs(pairs);
    let text = query
        .text()
        .ok_or((StatusCode::BAD_REQUEST, Json(EmotionReport::sentinel())))?;

    let result = state.classifier.analyze(text).await;
    match result.failure() {
        None => Ok(Json(result.report())),
        Some(failure) => Err((failure_response(failure).0, Json(result.report()))),
    }
}
