//! Router -> Watson client -> stub upstream, all in-process.

use axum::{
    body::{to_bytes, Body},
    http::{HeaderMap, Request, StatusCode},
    routing::post,
    Json, Router,
};
use emodetect_core::config::{DEFAULT_MODEL_ID, MODEL_ID_HEADER};
use emodetect_core::ClassifierConfig;
use emodetect_web::{create_router, state::AppState};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use tower::ServiceExt;

const PREDICT_PATH: &str = "/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict";

fn scores_for(text: &str) -> serde_json::Value {
    let (anger, disgust, fear, joy, sadness) = if text.contains("sad") {
        (0.01, 0.01, 0.01, 0.01, 0.95)
    } else if text.contains("glad") {
        (0.006, 0.002, 0.009, 0.968, 0.049)
    } else {
        (0.9, 0.1, 0.1, 0.9, 0.1)
    };
    serde_json::json!({
        "emotionPredictions": [{
            "emotion": {
                "anger": anger,
                "disgust": disgust,
                "fear": fear,
                "joy": joy,
                "sadness": sadness
            }
        }]
    })
}

/// Spawn a fake Watson service; returns its endpoint and a request counter.
async fn spawn_upstream(fail_with: Option<StatusCode>) -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();

    let handler = move |headers: HeaderMap, Json(body): Json<serde_json::Value>| {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            assert_eq!(
                headers.get(MODEL_ID_HEADER).and_then(|v| v.to_str().ok()),
                Some(DEFAULT_MODEL_ID)
            );
            if let Some(status) = fail_with {
                return (status, Json(serde_json::json!({ "error": "failed" })));
            }
            let text = body["raw_document"]["text"].as_str().unwrap_or_default();
            if text.trim().is_empty() {
                return (StatusCode::BAD_REQUEST, Json(serde_json::json!({ "code": 3 })));
            }
            (StatusCode::OK, Json(scores_for(text)))
        }
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, Router::new().route(PREDICT_PATH, post(handler)))
            .await
            .unwrap();
    });

    (format!("http://{}{}", addr, PREDICT_PATH), hits)
}

async fn call(endpoint: &str, uri: &str) -> (StatusCode, String) {
    let config = ClassifierConfig {
        endpoint: endpoint.to_string(),
        ..Default::default()
    };
    let router = create_router(AppState::from_config(&config));
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_sad_statement_end_to_end() {
    let (endpoint, hits) = spawn_upstream(None).await;
    let (status, body) = call(
        &endpoint,
        "/emotionDetector?textToAnalyze=I%20am%20so%20sad%20about%20this",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("'sadness': 0.95"));
    assert!(body.contains("The dominant emotion is sadness."));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_tie_resolves_to_anger_end_to_end() {
    let (endpoint, _) = spawn_upstream(None).await;
    let (status, body) = call(&endpoint, "/emotionDetector?textToAnalyze=mixed").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.ends_with("The dominant emotion is anger."));
}

#[tokio::test]
async fn test_blank_text_never_reaches_upstream() {
    let (endpoint, hits) = spawn_upstream(None).await;
    let (status, _) = call(&endpoint, "/emotionDetector?textToAnalyze=").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_upstream_status_mapping_end_to_end() {
    let (endpoint, _) = spawn_upstream(Some(StatusCode::BAD_REQUEST)).await;
    let (status, _) = call(&endpoint, "/emotionDetector?textToAnalyze=hello").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (endpoint, _) = spawn_upstream(Some(StatusCode::INTERNAL_SERVER_ERROR)).await;
    let (status, _) = call(&endpoint, "/emotionDetector?textToAnalyze=hello").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_json_report_end_to_end() {
    let (endpoint, _) = spawn_upstream(None).await;
    let (status, body) = call(&endpoint, "/api/emotions?textToAnalyze=I%20am%20glad").await;

    assert_eq!(status, StatusCode::OK);
    let report: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(report["dominant_emotion"], "joy");
    assert_eq!(report["joy"], 0.968);
}
