//! Turns a panicking handler into the same `500` JSON body any other
//! internal error produces, and logs the panic payload.
use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    Router as AXRouter,
};
use serde::{Deserialize, Serialize};
use tower_http::catch_panic::CatchPanicLayer;

use crate::{app::AppContext, controller::middleware::MiddlewareLayer, Error, Result};

/// `server.middlewares.catch_panic`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatchPanic {
    #[serde(default = "enabled")]
    pub enable: bool,
}

const fn enabled() -> bool {
    true
}

impl Default for CatchPanic {
    fn default() -> Self {
        Self { enable: enabled() }
    }
}

/// Panic payloads are `&'static str` for literal messages and `String` for
/// formatted ones. Anything else carries no readable message.
fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&'static str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("panic payload is not a string")
}

#[allow(clippy::needless_pass_by_value)]
fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!(panic.msg = panic_message(payload.as_ref()), "handler panicked");
    Error::InternalServerError.into_response()
}

impl MiddlewareLayer for CatchPanic {
    fn name(&self) -> &'static str {
        "catch_panic"
    }

    fn is_enabled(&self) -> bool {
        self.enable
    }

    fn config(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    fn apply(&self, app: AXRouter<AppContext>) -> Result<AXRouter<AppContext>> {
        Ok(app.layer(CatchPanicLayer::custom(panic_response)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_literal_and_formatted_payloads() {
        let literal: Box<dyn Any + Send> = Box::new("template cache poisoned");
        assert_eq!(panic_message(literal.as_ref()), "template cache poisoned");

        let formatted: Box<dyn Any + Send> = Box::new(format!("worker {} died", 3));
        assert_eq!(panic_message(formatted.as_ref()), "worker 3 died");

        let opaque: Box<dyn Any + Send> = Box::new(42_u8);
        assert_eq!(
            panic_message(opaque.as_ref()),
            "panic payload is not a string"
        );
    }

    #[test]
    fn enabled_unless_configured_off() {
        let omitted: CatchPanic = serde_json::from_str("{}").unwrap();
        assert!(omitted.is_enabled());

        let off: CatchPanic = serde_json::from_str(r#"{"enable": false}"#).unwrap();
        assert!(!off.is_enabled());
        assert_eq!(off.config().unwrap(), serde_json::json!({"enable": false}));
    }
}
