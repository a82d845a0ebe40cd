//! # Emodetect Client
//!
//! Emotion classification over the Watson NLP `EmotionPredict` API.

pub mod classifier;
pub mod watson;

pub use classifier::EmotionClassifier;
pub use watson::WatsonClient;
