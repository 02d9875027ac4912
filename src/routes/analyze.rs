use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;

use crate::frame;
use crate::response::AnalysisError;
use crate::scoring::{score_mesh, FocusReport};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// DataURL or raw base64 JPEG/PNG frame.
    pub image: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/analyze_face", post(analyze_face))
}

pub async fn analyze_face(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<FocusReport>, AnalysisError> {
    let frame = frame::decode_frame(&req.image)?;
    let mesh = state.detector().detect(&frame).await?;

    let report = match mesh {
        Some(mesh) => score_mesh(&mesh)?,
        None => FocusReport::no_face(),
    };

    tracing::debug!(
        face_detected = report.face_detected,
        focus_score = report.focus_score,
        alerts = report.alerts.len(),
        "frame analyzed"
    );

    Ok(Json(report))
}
