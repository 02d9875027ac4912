//! Synthetic landmark meshes with controllable measurements.
//!
//! The builder places the six EAR contour points of each eye, the nose tip,
//! and the chin so that EAR, gaze, and head-pose come out at exact target
//! values; every other mesh point stays at a neutral filler position. The
//! contour axis of each eye runs vertically in image space, which keeps the
//! two head-pose corner points (contour index 0 of each eye) free to encode
//! yaw without disturbing the EAR distances.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::RgbImage;

use focus_backend::scoring::landmarks::{
    Landmark, CHIN, LEFT_EYE, MESH_POINTS, NOSE_TIP, RIGHT_EYE,
};
use focus_backend::scoring::FaceMesh;

/// Corner-to-corner span of each synthetic eye contour.
const EYE_SPAN: f64 = 0.1;
/// Nose-to-chin span.
const FACE_HEIGHT: f64 = 0.3;

#[derive(Debug, Clone)]
pub struct FaceFixture {
    left_ear: f64,
    right_ear: f64,
    gaze: (f64, f64),
    head_turned: bool,
    head_pitched: bool,
}

impl FaceFixture {
    /// Open eyes (EAR 0.30), centered gaze, straight head: scores 100.
    pub fn attentive() -> Self {
        Self {
            left_ear: 0.30,
            right_ear: 0.30,
            gaze: (0.0, 0.0),
            head_turned: false,
            head_pitched: false,
        }
    }

    pub fn with_ear(mut self, left: f64, right: f64) -> Self {
        self.left_ear = left;
        self.right_ear = right;
        self
    }

    pub fn with_gaze(mut self, x: f64, y: f64) -> Self {
        self.gaze = (x, y);
        self
    }

    pub fn with_head_turned(mut self) -> Self {
        self.head_turned = true;
        self
    }

    pub fn with_head_pitched(mut self) -> Self {
        self.head_pitched = true;
        self
    }

    pub fn mesh(&self) -> FaceMesh {
        let mut points = vec![Landmark::new(0.5, 0.5, 0.0); MESH_POINTS];

        // Eye contour centers. Turning the head shifts one corner column
        // sideways, which drives the yaw ratio past its limit.
        let right_center = (0.40, 0.30);
        let left_center = (if self.head_turned { 0.0 } else { 0.40 }, 0.70);

        place_eye(&mut points, &RIGHT_EYE, right_center, self.right_ear);
        place_eye(&mut points, &LEFT_EYE, left_center, self.left_ear);

        // Each placed contour has its centroid exactly at the eye center, so
        // the nose tip position fixes the gaze vector exactly.
        let mid = (
            (left_center.0 + right_center.0) / 2.0,
            (left_center.1 + right_center.1) / 2.0,
        );
        let nose = (mid.0 - self.gaze.0, mid.1 - self.gaze.1);
        points[NOSE_TIP] = Landmark::new(nose.0, nose.1, 0.0);

        // A chin offset purely in x keeps pitch at zero; offsetting in y
        // sends the pitch ratio to -1.
        let chin = if self.head_pitched {
            (nose.0, nose.1 + FACE_HEIGHT)
        } else {
            (nose.0 + FACE_HEIGHT, nose.1)
        };
        points[CHIN] = Landmark::new(chin.0, chin.1, 0.0);

        FaceMesh::new(points).expect("fixture mesh")
    }
}

/// Writes a 6-point contour with corner span `EYE_SPAN` and both vertical
/// lid distances equal to `ear * EYE_SPAN`, centered on `(cx, cy)` with the
/// corner axis running vertically.
fn place_eye(points: &mut [Landmark], eye: &[usize; 16], center: (f64, f64), ear: f64) {
    let (cx, cy) = center;
    let w = EYE_SPAN;
    let h = ear * w;

    points[eye[0]] = Landmark::new(cx, cy - w / 2.0, 0.0);
    points[eye[1]] = Landmark::new(cx - h / 2.0, cy - w / 6.0, 0.0);
    points[eye[2]] = Landmark::new(cx - h / 2.0, cy + w / 6.0, 0.0);
    points[eye[3]] = Landmark::new(cx, cy + w / 2.0, 0.0);
    points[eye[4]] = Landmark::new(cx + h / 2.0, cy + w / 6.0, 0.0);
    points[eye[5]] = Landmark::new(cx + h / 2.0, cy - w / 6.0, 0.0);
}

/// A small valid PNG frame, base64-encoded, for request bodies.
pub fn frame_base64() -> String {
    let img = RgbImage::from_pixel(8, 8, image::Rgb([64, 64, 64]));
    let mut buf = std::io::Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png)
        .expect("encode fixture frame");
    BASE64.encode(buf.into_inner())
}

pub fn frame_data_url() -> String {
    format!("data:image/png;base64,{}", frame_base64())
}
