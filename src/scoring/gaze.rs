//! Gaze estimation from eye-centroid displacement.
//!
//! The centroid of the first six contour points of each eye is averaged into
//! an eye-center point; the vector from the nose tip to that point is the
//! gaze proxy. Only x and y take part in the on/off-screen decision.

use serde::Serialize;

use super::landmarks::{FaceMesh, Landmark, LEFT_EYE, NOSE_TIP, RIGHT_EYE};

/// Deviation beyond this, on either axis, counts as looking away.
pub const GAZE_DEVIATION_LIMIT: f64 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Gaze {
    pub x: f64,
    pub y: f64,
    pub looking_away: bool,
}

pub fn estimate_gaze(mesh: &FaceMesh) -> Gaze {
    let left_center = contour_centroid(mesh, &LEFT_EYE);
    let right_center = contour_centroid(mesh, &RIGHT_EYE);

    let eye_center = Landmark::new(
        (left_center.x + right_center.x) / 2.0,
        (left_center.y + right_center.y) / 2.0,
        (left_center.z + right_center.z) / 2.0,
    );
    let nose = mesh.point(NOSE_TIP);

    let x = eye_center.x - nose.x;
    let y = eye_center.y - nose.y;

    Gaze {
        x,
        y,
        looking_away: x.abs() > GAZE_DEVIATION_LIMIT || y.abs() > GAZE_DEVIATION_LIMIT,
    }
}

fn contour_centroid(mesh: &FaceMesh, eye: &[usize; 16]) -> Landmark {
    let points = mesh.eye_contour(eye);
    let n = points.len() as f64;
    let (sx, sy, sz) = points
        .iter()
        .fold((0.0, 0.0, 0.0), |(sx, sy, sz), p| (sx + p.x, sy + p.y, sz + p.z));
    Landmark::new(sx / n, sy / n, sz / n)
}
