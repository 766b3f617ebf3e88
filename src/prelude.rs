pub use async_trait::async_trait;
pub use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{any, delete, get, head, options, patch, post, put, trace},
};

pub use crate::{
    app::{AppContext, Initializer},
    controller::{
        format,
        views::{engines::TeraView, ViewEngine, ViewRenderer},
        Json, Routes,
    },
    errors::Error,
    Result,
};
#[cfg(feature = "testing")]
pub use crate::testing::prelude::*;
