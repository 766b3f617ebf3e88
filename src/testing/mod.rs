//! # Test Utilities Module
//!
//! Helpers for booting the application in the `test` environment and driving
//! it through an in-process [`axum_test::TestServer`].
pub mod redaction;
pub mod request;

pub mod prelude {
    pub use super::{
        redaction::cleanup_request_id,
        request::{boot_test, request, request_with_config, RequestConfig, RequestConfigBuilder},
    };
}
