//! Base Middlewares
//!
//! The default stack wrapped around every route, configured from
//! `server.middlewares` in the environment YAML.
//!
//! ```yaml
//! server:
//!   middlewares:
//!     catch_panic:
//!       enable: true
//!     timeout_request:
//!       enable: true
//!       timeout: 5000
//!     fallback:
//!       enable: true
//!       not_found: "nothing here"
//! ```

pub mod catch_panic;
pub mod fallback;
pub mod logger;
pub mod powered_by;
pub mod request_id;
pub mod timeout;

use axum::Router as AXRouter;
use serde::{Deserialize, Serialize};

use crate::{app::AppContext, Result};

/// Trait representing the behavior of middleware components in the
/// application.
pub trait MiddlewareLayer {
    /// Returns the name of the middleware.
    fn name(&self) -> &'static str;

    /// Returns whether the middleware is enabled or not.
    fn is_enabled(&self) -> bool {
        true
    }

    /// Returns the middleware configuration, used by the `middleware` CLI
    /// command.
    ///
    /// # Errors
    ///
    /// Fails when the configuration cannot be serialized.
    fn config(&self) -> serde_json::Result<serde_json::Value>;

    /// Applies the middleware to the given Axum router and returns the
    /// modified router.
    ///
    /// # Errors
    ///
    /// If there is an issue when adding the middleware to the router.
    fn apply(&self, app: AXRouter<AppContext>) -> Result<AXRouter<AppContext>>;
}

/// Server middleware configuration structure.
#[derive(Default, Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Configure fallback behavior when hitting a missing URL
    pub fallback: Option<fallback::Fallback>,
    /// catch any code panic and log the error.
    pub catch_panic: Option<catch_panic::CatchPanic>,
    /// Setting a global timeout for the requests
    pub timeout_request: Option<timeout::TimeOut>,
    /// Middleware that improve the tracing logger and adding trace id for each
    /// request.
    pub logger: Option<logger::Config>,
    /// Assign a unique id to every request
    pub request_id: Option<request_id::RequestId>,
}

/// Constructs the default middleware stack, innermost layer first.
#[must_use]
pub fn default_middleware_stack(ctx: &AppContext) -> Vec<Box<dyn MiddlewareLayer>> {
    let middlewares = &ctx.config.server.middlewares;

    vec![
        Box::new(middlewares.fallback.clone().unwrap_or_default()),
        Box::new(middlewares.catch_panic.clone().unwrap_or_default()),
        Box::new(middlewares.timeout_request.clone().unwrap_or_default()),
        Box::new(logger::new(
            &middlewares.logger.clone().unwrap_or_default(),
            &ctx.environment,
        )),
        Box::new(middlewares.request_id.clone().unwrap_or_default()),
        Box::new(powered_by::new(ctx.config.server.ident.as_deref())),
    ]
}
