//! Controllers served by the application.
pub mod health;
pub mod landing;
