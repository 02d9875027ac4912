use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::frame::FrameError;
use crate::scoring::ScoringError;
use crate::services::detector::DetectorError;

/// Wire body for a failed analysis: degraded but well-formed, so clients can
/// render it the same way as a normal report.
#[derive(Debug, Serialize)]
pub struct ErrorReport {
    pub error: String,
    pub face_detected: bool,
    pub focus_score: u8,
    pub alerts: Vec<String>,
}

/// Any failure inside the decode + detect + score pipeline. All variants map
/// to HTTP 500 with the fixed degraded body; failures are isolated per
/// request and never fatal to the process.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("image decode failed: {0}")]
    Frame(#[from] FrameError),
    #[error("face detection failed: {0}")]
    Detector(#[from] DetectorError),
    #[error("focus scoring failed: {0}")]
    Scoring(#[from] ScoringError),
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Frame analysis failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorReport {
                error: self.to_string(),
                face_detected: false,
                focus_score: 0,
                alerts: vec!["Analysis failed".to_string()],
            }),
        )
            .into_response()
    }
}
