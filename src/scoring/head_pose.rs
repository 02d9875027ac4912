//! Head pose proxy from eye-corner and nose/chin spans.
//!
//! Yaw is the x-offset of the eye corners over the corner-to-corner span,
//! pitch the y-offset of nose over chin across the nose-chin span. Both are
//! degree-like once scaled by 90, not calibrated angles. The looking_away
//! decision uses the unscaled ratios.

use serde::Serialize;

use super::ear::MIN_SPAN;
use super::landmarks::{FaceMesh, CHIN, LEFT_EYE_CORNER, NOSE_TIP, RIGHT_EYE_CORNER};
use super::ScoringError;

/// Unscaled ratio beyond which the head counts as turned away.
pub const TURN_RATIO_LIMIT: f64 = 0.3;
/// Ratio-to-degrees proxy factor.
pub const ANGLE_SCALE: f64 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeadPose {
    pub yaw: f64,
    pub pitch: f64,
    pub looking_away: bool,
}

pub fn estimate_head_pose(mesh: &FaceMesh) -> Result<HeadPose, ScoringError> {
    let nose = mesh.point(NOSE_TIP);
    let chin = mesh.point(CHIN);
    let left_corner = mesh.point(LEFT_EYE_CORNER);
    let right_corner = mesh.point(RIGHT_EYE_CORNER);

    let face_width = left_corner.distance(&right_corner);
    if face_width < MIN_SPAN {
        return Err(ScoringError::DegenerateGeometry { span: "face width" });
    }
    let face_height = nose.distance(&chin);
    if face_height < MIN_SPAN {
        return Err(ScoringError::DegenerateGeometry { span: "face height" });
    }

    let yaw = (left_corner.x - right_corner.x) / face_width;
    let pitch = (nose.y - chin.y) / face_height;

    Ok(HeadPose {
        yaw: yaw * ANGLE_SCALE,
        pitch: pitch * ANGLE_SCALE,
        looking_away: yaw.abs() > TURN_RATIO_LIMIT || pitch.abs() > TURN_RATIO_LIMIT,
    })
}
