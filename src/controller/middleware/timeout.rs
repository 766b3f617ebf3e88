//! Timeout Request Middleware.
//!
//! If a request exceeds the configured timeout (milliseconds), the client gets
//! a `408 Request Timeout`.
use std::time::Duration;

use axum::Router as AXRouter;
use serde::{Deserialize, Serialize};
use tower_http::timeout::TimeoutLayer;

use crate::{app::AppContext, controller::middleware::MiddlewareLayer, Result};

/// Timeout middleware configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TimeOut {
    pub enable: bool,
    // Timeout request in milliseconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for TimeOut {
    fn default() -> Self {
        Self {
            enable: true,
            timeout: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    5_000
}

impl MiddlewareLayer for TimeOut {
    /// Returns the name of the middleware.
    fn name(&self) -> &'static str {
        "timeout_request"
    }

    /// Checks if the timeout middleware is enabled.
    fn is_enabled(&self) -> bool {
        self.enable
    }

    fn config(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    /// Applies the timeout middleware to the application router.
    fn apply(&self, app: AXRouter<AppContext>) -> Result<AXRouter<AppContext>> {
        Ok(app.layer(TimeoutLayer::new(Duration::from_millis(self.timeout))))
    }
}
