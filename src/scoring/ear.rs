//! Eye Aspect Ratio (EAR) over a 6-point eye contour.
//!
//! EAR = (|p1-p5| + |p2-p4|) / (2 * |p0-p3|) with p0/p3 the horizontal
//! corners and (p1,p5), (p2,p4) the vertical lid pairs. Smaller values mean
//! a more closed eye.

use super::landmarks::Landmark;
use super::ScoringError;

/// Spans below this are treated as collapsed geometry from a bad detection.
pub const MIN_SPAN: f64 = 1e-6;

pub fn eye_aspect_ratio(contour: &[Landmark; 6]) -> Result<f64, ScoringError> {
    let horizontal = contour[0].distance(&contour[3]);
    if horizontal < MIN_SPAN {
        return Err(ScoringError::DegenerateGeometry {
            span: "eye corner span",
        });
    }

    let vertical_a = contour[1].distance(&contour[5]);
    let vertical_b = contour[2].distance(&contour[4]);
    Ok((vertical_a + vertical_b) / (2.0 * horizontal))
}
