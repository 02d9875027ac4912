//! The focus scoring rule and its wire-facing report type.
//!
//! Each attention-loss condition deducts a fixed penalty from a base of 100;
//! the deductions stack and the result is clamped to [0, 100]. The no-face
//! case is a separate terminal branch with a fixed score of 30.

use serde::Serialize;

use super::ear::eye_aspect_ratio;
use super::gaze::{estimate_gaze, Gaze};
use super::head_pose::{estimate_head_pose, HeadPose};
use super::landmarks::{FaceMesh, LEFT_EYE, RIGHT_EYE};
use super::ScoringError;

/// Below this average EAR the eyes count as fully closed.
pub const EYES_CLOSED_EAR: f64 = 0.20;
/// Below this average EAR (but above closed) counts as drowsy; the same
/// threshold decides `eyes_open`.
pub const DROWSY_EAR: f64 = 0.25;

pub const EYES_CLOSED_PENALTY: i32 = 40;
pub const DROWSY_PENALTY: i32 = 20;
pub const GAZE_AWAY_PENALTY: i32 = 25;
pub const HEAD_AWAY_PENALTY: i32 = 30;

/// Score above which the subject counts as focused.
pub const FOCUSED_SCORE: u8 = 70;
/// Fixed score reported when no face is found in the frame.
pub const NO_FACE_SCORE: u8 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EyeData {
    pub left_ear: f64,
    pub right_ear: f64,
    pub avg_ear: f64,
    pub eyes_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Focused,
    Distracted,
}

#[derive(Debug, Clone, Serialize)]
pub struct FocusReport {
    pub face_detected: bool,
    pub focus_score: u8,
    pub alerts: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eye_data: Option<EyeData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gaze_data: Option<Gaze>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_pose: Option<HeadPose>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<Emotion>,
}

impl FocusReport {
    pub fn no_face() -> Self {
        Self {
            face_detected: false,
            focus_score: NO_FACE_SCORE,
            alerts: vec!["No face detected".to_string()],
            eye_data: None,
            gaze_data: None,
            head_pose: None,
            emotion: None,
        }
    }
}

pub fn score_mesh(mesh: &FaceMesh) -> Result<FocusReport, ScoringError> {
    let left_ear = eye_aspect_ratio(&mesh.eye_contour(&LEFT_EYE))?;
    let right_ear = eye_aspect_ratio(&mesh.eye_contour(&RIGHT_EYE))?;
    let avg_ear = (left_ear + right_ear) / 2.0;

    let gaze = estimate_gaze(mesh);
    let head_pose = estimate_head_pose(mesh)?;

    let mut score: i32 = 100;
    let mut alerts = Vec::new();

    // The two EAR rules are mutually exclusive; the other deductions stack.
    if avg_ear < EYES_CLOSED_EAR {
        score -= EYES_CLOSED_PENALTY;
        alerts.push("Eyes closed detected".to_string());
    } else if avg_ear < DROWSY_EAR {
        score -= DROWSY_PENALTY;
        alerts.push("Drowsiness detected".to_string());
    }

    if gaze.looking_away {
        score -= GAZE_AWAY_PENALTY;
        alerts.push("Looking away from screen".to_string());
    }

    if head_pose.looking_away {
        score -= HEAD_AWAY_PENALTY;
        alerts.push("Head turned away".to_string());
    }

    let focus_score = score.clamp(0, 100) as u8;

    Ok(FocusReport {
        face_detected: true,
        focus_score,
        alerts,
        eye_data: Some(EyeData {
            left_ear,
            right_ear,
            avg_ear,
            eyes_open: avg_ear > DROWSY_EAR,
        }),
        gaze_data: Some(gaze),
        head_pose: Some(head_pose),
        emotion: Some(if focus_score > FOCUSED_SCORE {
            Emotion::Focused
        } else {
            Emotion::Distracted
        }),
    })
}
