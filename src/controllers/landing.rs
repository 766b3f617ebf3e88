//! Landing page.

use axum::{response::Response, routing::any};
use serde_json::json;

use crate::{
    controller::{
        format,
        views::{engines::TeraView, ViewEngine},
        Routes,
    },
    Result,
};

/// Template rendered for the landing page, relative to the views directory.
pub const LANDING_TEMPLATE: &str = "core/landing.html";

/// Render the landing page with an empty context.
///
/// # Errors
///
/// Fails when the template is missing or does not render. The error turns
/// into a `500` response.
pub async fn landing_page(ViewEngine(v): ViewEngine<TeraView>) -> Result<Response> {
    format::view(&v, LANDING_TEMPLATE, json!({}))
}

/// Defines and returns the landing page route. Every method is accepted.
#[must_use]
pub fn routes() -> Routes {
    Routes::new().add("/", any(landing_page))
}
