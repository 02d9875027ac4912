use std::sync::Arc;

use crate::config::Config;
use crate::services::detector::FaceDetector;

#[derive(Clone)]
pub struct AppState {
    detector: Arc<FaceDetector>,
    config: Arc<Config>,
}

impl AppState {
    pub fn new(detector: Arc<FaceDetector>, config: &Config) -> Self {
        Self {
            detector,
            config: Arc::new(config.clone()),
        }
    }

    pub fn detector(&self) -> &FaceDetector {
        &self.detector
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
