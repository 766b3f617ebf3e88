//! Ensures every request carries an id.
//!
//! An incoming `x-request-id` header is sanitized and reused, otherwise a
//! UUID v4 is generated. The id is stored in the request extensions for the
//! logger span and echoed back in the response headers.

use std::sync::OnceLock;

use axum::{
    extract::Request, http::HeaderValue, middleware::Next, response::Response, Router as AXRouter,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{app::AppContext, controller::middleware::MiddlewareLayer, Result};

const X_REQUEST_ID: &str = "x-request-id";
const MAX_LEN: usize = 255;

static ID_CLEANUP: OnceLock<Regex> = OnceLock::new();

fn id_cleanup() -> &'static Regex {
    ID_CLEANUP.get_or_init(|| Regex::new(r"[^\w\-@]").expect("valid request id regex"))
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RequestId {
    enable: bool,
}

impl Default for RequestId {
    fn default() -> Self {
        Self { enable: true }
    }
}

impl MiddlewareLayer for RequestId {
    fn name(&self) -> &'static str {
        "request_id"
    }

    fn is_enabled(&self) -> bool {
        self.enable
    }

    fn config(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    fn apply(&self, app: AXRouter<AppContext>) -> Result<AXRouter<AppContext>> {
        Ok(app.layer(axum::middleware::from_fn(request_id_middleware)))
    }
}

/// Request id stored in the request extensions.
#[derive(Debug, Clone)]
pub struct AppRequestId(String);

impl AppRequestId {
    #[must_use]
    pub fn get(&self) -> &str {
        self.0.as_str()
    }
}

pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let header_request_id = request.headers().get(X_REQUEST_ID).cloned();
    let request_id = make_request_id(header_request_id);
    request
        .extensions_mut()
        .insert(AppRequestId(request_id.clone()));
    let mut res = next.run(request).await;

    if let Ok(v) = HeaderValue::from_str(request_id.as_str()) {
        res.headers_mut().insert(X_REQUEST_ID, v);
    } else {
        tracing::warn!(request_id, "could not set request id into response headers");
    }
    res
}

fn make_request_id(maybe_request_id: Option<HeaderValue>) -> String {
    maybe_request_id
        .and_then(|hdr| {
            let id: Option<String> = hdr.to_str().ok().map(|s| {
                id_cleanup()
                    .replace_all(s, "")
                    .chars()
                    .take(MAX_LEN)
                    .collect()
            });
            id.filter(|s| !s.is_empty())
        })
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::make_request_id;

    #[test]
    fn sanitizes_incoming_id() {
        let id = make_request_id(Some(HeaderValue::from_static("foo-bar=baz")));
        assert_eq!(id, "foo-barbaz");
    }

    #[test]
    fn generates_id_when_missing_or_empty() {
        let id = make_request_id(None);
        assert_eq!(id.len(), 36);

        let id = make_request_id(Some(HeaderValue::from_static("$$$")));
        assert_eq!(id.len(), 36);
        assert_ne!(id, "$$$");
    }

    #[test]
    fn truncates_long_id() {
        let long = "x".repeat(1000);
        let id = make_request_id(Some(HeaderValue::from_str(&long).unwrap()));
        assert_eq!(id.len(), 255);
    }
}
