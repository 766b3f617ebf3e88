use axum::{extract::FromRequestParts, http::request::Parts, Extension};
use serde::Serialize;

use crate::{Error, Result};

pub mod engines;

pub trait ViewRenderer {
    /// Render a view template located by `key`
    ///
    /// # Errors
    ///
    /// This function will return an error if render fails
    fn render<S: Serialize>(&self, key: &str, data: S) -> Result<String>;
}

/// Extractor for the view engine registered as a router extension.
///
/// Extraction fails with a `500` when no engine was registered, so a handler
/// that renders views never runs without one.
#[derive(Debug, Clone)]
pub struct ViewEngine<E>(pub E);

impl<E> ViewEngine<E> {
    /// Creates a new [`ViewEngine`] instance.
    pub const fn new(engine: E) -> Self {
        Self(engine)
    }
}

/// A generic implementation of the [`ViewEngine`] extractor.
impl<S, E> FromRequestParts<S> for ViewEngine<E>
where
    S: Send + Sync,
    E: Clone + Send + Sync + 'static,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self> {
        let Extension(engine) = Extension::<Self>::from_request_parts(parts, state)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "view engine is not configured");
                Error::InternalServerError
            })?;
        Ok(engine)
    }
}

impl<E> From<E> for ViewEngine<E> {
    fn from(inner: E) -> Self {
        Self::new(inner)
    }
}
