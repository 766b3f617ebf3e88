#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
//! ## Landing core
//!
//! A small web service exposing a JSON health check and a server-rendered
//! landing page.
//!
//! ```sh
//! landing_core-cli start
//! curl http://localhost:5150/health/
//! {"healthy":true}
//! ```
//!
//! ## Available Features
//!
//! | Feature   | Default | Description            |
//! |-----------|---------|------------------------|
//! | `cli`     | true    | Expose Cli commands.   |
//! | `testing` | false   | Test Utilities Module. |
pub use self::errors::Error;

mod banner;
pub mod prelude;
mod tera;

pub mod app;
#[cfg(feature = "cli")]
pub mod cli;

pub mod boot;
pub mod config;
pub mod controller;
pub mod controllers;
pub mod environment;
pub mod errors;
pub mod initializers;
mod logger;
#[cfg(feature = "testing")]
pub mod testing;
#[cfg(test)]
mod tests_cfg;
#[cfg(feature = "testing")]
pub use axum_test::TestServer;

/// Application results options list
pub type Result<T> = std::result::Result<T, Error>;
