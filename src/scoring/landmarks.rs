//! Landmark mesh type and the anatomical index contract.
//!
//! Indices follow the MediaPipe Face Mesh topology. They are contractual
//! constants, not configuration: a detector that numbers its points
//! differently is a different detector.

use serde::{Deserialize, Serialize};

use super::ScoringError;

/// Minimum number of points a face mesh must carry.
pub const MESH_POINTS: usize = 468;

/// Nose tip.
pub const NOSE_TIP: usize = 1;
/// Chin.
pub const CHIN: usize = 18;
/// Outer eye corners as seen in the (mirrored) camera image.
pub const LEFT_EYE_CORNER: usize = 33;
pub const RIGHT_EYE_CORNER: usize = 362;

/// Eye contour index lists, ordered. The first six entries of each list are
/// the 6-point EAR contour: two horizontal corners (0, 3) and two vertical
/// lid pairs (1, 5) and (2, 4).
pub const LEFT_EYE: [usize; 16] = [
    362, 382, 381, 380, 374, 373, 390, 249, 263, 466, 388, 387, 386, 385, 384, 398,
];
pub const RIGHT_EYE: [usize; 16] = [
    33, 7, 163, 144, 145, 153, 154, 155, 133, 173, 157, 158, 159, 160, 161, 246,
];

/// One 3-D facial landmark, x/y in normalized image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance over all three components.
    pub fn distance(&self, other: &Landmark) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// A validated landmark set for one detected face.
///
/// Construction checks the length once so that every fixed-index lookup
/// afterwards is infallible.
#[derive(Debug, Clone)]
pub struct FaceMesh {
    points: Vec<Landmark>,
}

impl FaceMesh {
    pub fn new(points: Vec<Landmark>) -> Result<Self, ScoringError> {
        if points.len() < MESH_POINTS {
            return Err(ScoringError::TooFewLandmarks {
                got: points.len(),
                need: MESH_POINTS,
            });
        }
        Ok(Self { points })
    }

    pub fn point(&self, index: usize) -> Landmark {
        self.points[index]
    }

    /// The 6-point EAR contour for one eye, in anatomical order.
    pub fn eye_contour(&self, eye: &[usize; 16]) -> [Landmark; 6] {
        [
            self.points[eye[0]],
            self.points[eye[1]],
            self.points[eye[2]],
            self.points[eye[3]],
            self.points[eye[4]],
            self.points[eye[5]],
        ]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
