//! Thumbnail Service
//!
//! Microservice that fetches a source image over HTTP and returns a
//! proportionally-scaled thumbnail encoded in the format matching the
//! source's file extension (PNG, JPEG, or GIF).

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

// Public re-exports
pub use config::Config;
pub use error::{AppError, Result};
