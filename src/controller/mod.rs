//! Manage web server routing
//!
//! # Example
//!
//! Add your own routes by implementing [`crate::app::Hooks::routes`]:
//!
//! ```rust
//! use landing_core::{controller::AppRoutes, prelude::*};
//!
//! async fn about() -> Result<Response> {
//!     format::html("<h1>about</h1>")
//! }
//!
//! fn routes() -> AppRoutes {
//!     AppRoutes::with_default_routes().add_route(Routes::new().add("/about", get(about)))
//! }
//! ```

pub use app_routes::{AppRoutes, ListRoutes};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
pub use routes::Routes;
use serde::Serialize;

use crate::errors::Error;

mod app_routes;
mod describe;
pub mod format;
pub mod middleware;
mod routes;
pub mod views;

#[derive(Debug, Serialize)]
/// Structure representing details about an error.
pub struct ErrorDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ErrorDetail {
    /// Create a new `ErrorDetail` with the specified error and description.
    #[must_use]
    pub fn new<T: Into<String>>(error: T, description: T) -> Self {
        Self {
            error: Some(error.into()),
            description: Some(description.into()),
        }
    }
}

/// JSON responder used by [`format::json`] and the error bodies.
#[derive(Debug)]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> axum::response::Response {
        axum::Json(self.0).into_response()
    }
}

impl IntoResponse for Error {
    /// Convert an `Error` into an HTTP response.
    fn into_response(self) -> Response {
        tracing::error!(
            error.msg = %self,
            error.details = ?self,
            "controller_error"
        );

        match self {
            Self::NotFound => json_error_response(
                StatusCode::NOT_FOUND,
                ErrorDetail::new("not_found", "Resource was not found"),
            ),
            Self::CustomError(status_code, data) => json_error_response(status_code, data),
            Self::BadRequest(err) => json_error_response(
                StatusCode::BAD_REQUEST,
                ErrorDetail::new("bad_request", err.as_str()),
            ),
            Self::Message(err) => (StatusCode::BAD_REQUEST, err).into_response(),
            _ => json_error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail::new("internal_server_error", "Internal Server Error"),
            ),
        }
    }
}

/// Create a JSON error response with the specified status code and error
/// detail.
fn json_error_response(status_code: StatusCode, detail: ErrorDetail) -> Response {
    (status_code, Json(detail)).into_response()
}
