//! Initializers wired into [`crate::app::App`].
pub mod view_engine;
