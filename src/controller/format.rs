//! Response constructors used by the controllers.
//!
//! ```rust
//! use landing_core::prelude::*;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! pub struct Health {
//!     pub healthy: bool,
//! }
//!
//! async fn health() -> Result<Response> {
//!    format::json(Health { healthy: true })
//! }
//! ```

use axum::response::{Html, IntoResponse, Response};
use serde::Serialize;

use super::views::ViewRenderer;
use crate::{controller::Json, Result};

/// `200 OK` with `t` serialized as `application/json`.
///
/// # Errors
///
/// Never fails today. Returns `Result` so handlers can end with it.
pub fn json<T: Serialize>(t: T) -> Result<Response> {
    Ok(Json(t).into_response())
}

/// `200 OK` with `content` as `text/html; charset=utf-8`.
///
/// # Errors
///
/// Never fails today. Returns `Result` so handlers can end with it.
pub fn html(content: &str) -> Result<Response> {
    Ok(Html(content.to_string()).into_response())
}

/// Render the template `key` with `data` and wrap it with [`html`].
///
/// # Errors
///
/// The renderer error, unchanged. For Tera a missing template surfaces as
/// [`crate::Error::Tera`].
pub fn view<V, S>(v: &V, key: &str, data: S) -> Result<Response>
where
    V: ViewRenderer,
    S: Serialize,
{
    let res = v.render(key, data)?;
    html(&res)
}
