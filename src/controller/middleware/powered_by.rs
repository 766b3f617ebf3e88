//! Powered-By Middleware
//!
//! Injects an `x-powered-by` header into every response. The value comes from
//! `server.ident` and defaults to `landing-core`. An empty ident turns the
//! header off.

use std::sync::OnceLock;

use axum::{
    http::header::{HeaderName, HeaderValue},
    Router as AXRouter,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::{app::AppContext, controller::middleware::MiddlewareLayer, Result};

static DEFAULT_IDENT_HEADER_VALUE: OnceLock<HeaderValue> = OnceLock::new();

fn get_default_ident_header_value() -> &'static HeaderValue {
    DEFAULT_IDENT_HEADER_VALUE.get_or_init(|| HeaderValue::from_static("landing-core"))
}

#[derive(Debug)]
pub struct Middleware {
    ident: Option<HeaderValue>,
}

/// Creates the middleware from the configured ident.
///
/// An ident that is not a valid header value falls back to the default.
#[must_use]
pub fn new(ident: Option<&str>) -> Middleware {
    let ident_value = ident.map_or_else(
        || Some(get_default_ident_header_value().clone()),
        |ident| {
            if ident.is_empty() {
                None
            } else {
                match HeaderValue::from_str(ident) {
                    Ok(val) => Some(val),
                    Err(e) => {
                        tracing::info!(
                            error = e.to_string(),
                            val = ident,
                            "could not set custom ident header"
                        );
                        Some(get_default_ident_header_value().clone())
                    }
                }
            }
        },
    );

    Middleware { ident: ident_value }
}

impl MiddlewareLayer for Middleware {
    fn name(&self) -> &'static str {
        "powered_by"
    }

    fn is_enabled(&self) -> bool {
        self.ident.is_some()
    }

    fn config(&self) -> serde_json::Result<serde_json::Value> {
        self.ident.as_ref().map_or_else(
            || Ok(serde_json::json!({})),
            |ident| Ok(serde_json::json!({"ident": ident.to_str().unwrap_or_default()})),
        )
    }

    fn apply(&self, app: AXRouter<AppContext>) -> Result<AXRouter<AppContext>> {
        Ok(app.layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-powered-by"),
            self.ident
                .clone()
                .unwrap_or_else(|| get_default_ident_header_value().clone()),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ident_selection() {
        let middleware = new(None);
        assert!(middleware.is_enabled());
        assert_eq!(
            middleware.config().unwrap(),
            serde_json::json!({"ident": "landing-core"})
        );

        let middleware = new(Some("acme"));
        assert_eq!(
            middleware.config().unwrap(),
            serde_json::json!({"ident": "acme"})
        );

        let middleware = new(Some(""));
        assert!(!middleware.is_enabled());

        let middleware = new(Some("bad\nvalue"));
        assert_eq!(
            middleware.config().unwrap(),
            serde_json::json!({"ident": "landing-core"})
        );
    }
}
