//! Focus scoring over facial landmark meshes.
//!
//! Everything in here is a pure function of a [`landmarks::FaceMesh`]: eye
//! aspect ratio, gaze deviation, head pose ratios, and the weighted focus
//! score that combines them. No state survives a request.

pub mod ear;
pub mod focus;
pub mod gaze;
pub mod head_pose;
pub mod landmarks;

pub use focus::{score_mesh, FocusReport};
pub use landmarks::{FaceMesh, Landmark};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("landmark mesh too small: got {got} points, need {need}")]
    TooFewLandmarks { got: usize, need: usize },
    #[error("degenerate face geometry: {span} collapsed to zero")]
    DegenerateGeometry { span: &'static str },
}
