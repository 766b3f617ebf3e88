pub mod app;
pub mod config;

pub use app::{get_app_context, AppHook};
