//! The external face-mesh detector capability.
//!
//! Landmark detection is not done in-process: frames are shipped to a
//! face-mesh inference endpoint that returns up to one set of 3-D landmark
//! points. The capability is constructed once at startup and injected
//! through [`crate::state::AppState`]; the fixture mode stands in for the
//! real endpoint in tests and mock deployments.
//!
//! `detect` takes `&self` and the type is `Send + Sync`, so a binding that
//! is not safe for concurrent invocation must serialize internally. The
//! remote binding is plain per-request HTTP over a shared client and needs
//! no lock.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::RgbImage;
use serde::{Deserialize, Serialize};

use crate::config::DetectorConfig;
use crate::frame;
use crate::scoring::{FaceMesh, Landmark};

#[derive(Debug, thiserror::Error)]
pub enum DetectorError {
    #[error("detector request failed: {0}")]
    Network(String),
    #[error("detector returned status {status}")]
    Api { status: u16 },
    #[error("detector returned an unusable landmark set: {0}")]
    InvalidPayload(String),
    #[error("failed to encode frame for detector: {0}")]
    Encode(String),
}

#[derive(Debug)]
pub enum FaceDetector {
    Remote(RemoteDetector),
    Fixture(FixtureDetector),
}

impl FaceDetector {
    /// Validate detector configuration at startup.
    /// Panics if mock mode is off but no endpoint is configured.
    pub fn validate_config(config: &DetectorConfig) {
        if !config.mock && config.api_url.trim().is_empty() {
            panic!(
                "Invalid detector configuration: DETECTOR_MOCK=false but \
                 DETECTOR_API_URL is empty. Point DETECTOR_API_URL at a \
                 face-mesh inference endpoint or set DETECTOR_MOCK=true."
            );
        }
    }

    pub fn from_config(config: &DetectorConfig) -> Self {
        if config.mock {
            FaceDetector::Fixture(FixtureDetector::no_face())
        } else {
            FaceDetector::Remote(RemoteDetector::new(config))
        }
    }

    /// Runs landmark detection on one frame. `Ok(None)` means the frame was
    /// processed but contained no face.
    pub async fn detect(&self, frame: &RgbImage) -> Result<Option<FaceMesh>, DetectorError> {
        match self {
            FaceDetector::Remote(remote) => remote.detect(frame).await,
            FaceDetector::Fixture(fixture) => fixture.detect(),
        }
    }
}

#[derive(Debug)]
pub struct RemoteDetector {
    api_url: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct DetectRequest<'a> {
    image: &'a str,
}

#[derive(Deserialize)]
struct DetectResponse {
    landmarks: Option<Vec<Landmark>>,
}

impl RemoteDetector {
    pub fn new(config: &DetectorConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            api_url: config.api_url.clone(),
            client,
        }
    }

    async fn detect(&self, frame: &RgbImage) -> Result<Option<FaceMesh>, DetectorError> {
        let png = frame::encode_png(frame).map_err(|e| DetectorError::Encode(e.to_string()))?;
        let payload = BASE64.encode(png);

        let response = self
            .client
            .post(&self.api_url)
            .json(&DetectRequest { image: &payload })
            .send()
            .await
            .map_err(|e| DetectorError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DetectorError::Api {
                status: status.as_u16(),
            });
        }

        let body: DetectResponse = response
            .json()
            .await
            .map_err(|e| DetectorError::InvalidPayload(e.to_string()))?;

        match body.landmarks {
            None => Ok(None),
            Some(points) => {
                let mesh = FaceMesh::new(points)
                    .map_err(|e| DetectorError::InvalidPayload(e.to_string()))?;
                Ok(Some(mesh))
            }
        }
    }
}

/// Canned detector responses for tests and mock deployments.
#[derive(Debug, Clone)]
pub struct FixtureDetector {
    response: FixtureResponse,
}

#[derive(Debug, Clone)]
enum FixtureResponse {
    NoFace,
    Mesh(FaceMesh),
    Failure(String),
}

impl FixtureDetector {
    pub fn no_face() -> Self {
        Self {
            response: FixtureResponse::NoFace,
        }
    }

    pub fn with_mesh(mesh: FaceMesh) -> Self {
        Self {
            response: FixtureResponse::Mesh(mesh),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: FixtureResponse::Failure(message.to_string()),
        }
    }

    fn detect(&self) -> Result<Option<FaceMesh>, DetectorError> {
        match &self.response {
            FixtureResponse::NoFace => Ok(None),
            FixtureResponse::Mesh(mesh) => Ok(Some(mesh.clone())),
            FixtureResponse::Failure(message) => Err(DetectorError::Network(message.clone())),
        }
    }
}
