pub mod config;
pub mod frame;
pub mod logging;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod scoring;
pub mod services;
pub mod state;
