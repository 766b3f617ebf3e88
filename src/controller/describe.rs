use std::sync::OnceLock;

use axum::http;
use regex::Regex;

use crate::app::AppContext;

static DESCRIBE_METHOD_ACTION: OnceLock<Regex> = OnceLock::new();

fn get_describe_method_action() -> &'static Regex {
    DESCRIBE_METHOD_ACTION.get_or_init(|| Regex::new(r"\b(\w+):\s*BoxedHandler\b").unwrap())
}

/// Extract the allow list method actions from MethodRouter.
///
/// Axum does not expose the methods a router answers, so we read them back
/// from its `Debug` output. A router built with `any` only has a fallback
/// handler and yields an empty list.
pub fn method_action(method: &axum::routing::MethodRouter<AppContext>) -> Vec<http::Method> {
    let method_str = format!("{method:?}");

    get_describe_method_action()
        .captures_iter(&method_str)
        .filter_map(|captures| captures.get(1).map(|m| m.as_str().to_lowercase()))
        .filter_map(|method_name| match method_name.as_str() {
            "get" => Some(http::Method::GET),
            "post" => Some(http::Method::POST),
            "put" => Some(http::Method::PUT),
            "delete" => Some(http::Method::DELETE),
            "head" => Some(http::Method::HEAD),
            "options" => Some(http::Method::OPTIONS),
            "connect" => Some(http::Method::CONNECT),
            "patch" => Some(http::Method::PATCH),
            "trace" => Some(http::Method::TRACE),
            "fallback" => None,
            _ => {
                tracing::info!("Unknown method: {}", method_name);
                None
            }
        })
        .collect::<Vec<_>>()
}
