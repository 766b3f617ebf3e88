//! Liveness check.
//!
//! Answers with a fixed `{"healthy": true}` document. It reads no state and
//! touches no external service, so it stays cheap for load balancers to poll.

use axum::{response::Response, routing::get};
use serde::Serialize;

use crate::{
    controller::{format, Routes},
    Result,
};

/// Represents the health status of the application.
#[derive(Debug, Serialize)]
pub struct Health {
    pub healthy: bool,
}

/// Report the process as healthy.
///
/// # Errors
///
/// Only when the body cannot be serialized.
pub async fn health_check() -> Result<Response> {
    format::json(Health { healthy: true })
}

/// Defines and returns the health check route.
#[must_use]
pub fn routes() -> Routes {
    Routes::new().add("/health/", get(health_check))
}
