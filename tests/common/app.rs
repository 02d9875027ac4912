use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use axum::Router;

use focus_backend::config::{Config, DetectorConfig};
use focus_backend::routes::build_router;
use focus_backend::scoring::FaceMesh;
use focus_backend::services::detector::{FaceDetector, FixtureDetector};
use focus_backend::state::AppState;

pub struct TestApp {
    pub app: Router,
    pub config: Config,
}

/// Builds the router around an injected detector. Config is constructed
/// directly instead of via env vars to avoid set_var races between tests.
pub fn spawn_with_detector(detector: FaceDetector) -> TestApp {
    let config = Config {
        host: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
        port: 5000,
        log_level: "info".to_string(),
        enable_file_logs: false,
        log_dir: "./logs".to_string(),
        cors_origin: "*".to_string(),
        detector: DetectorConfig::default(),
    };

    let state = AppState::new(Arc::new(detector), &config);
    let app = build_router(state);

    TestApp { app, config }
}

pub fn spawn_test_app() -> TestApp {
    spawn_with_detector(FaceDetector::Fixture(FixtureDetector::no_face()))
}

pub fn spawn_with_mesh(mesh: FaceMesh) -> TestApp {
    spawn_with_detector(FaceDetector::Fixture(FixtureDetector::with_mesh(mesh)))
}

pub fn spawn_with_failing_detector(message: &str) -> TestApp {
    spawn_with_detector(FaceDetector::Fixture(FixtureDetector::failing(message)))
}
