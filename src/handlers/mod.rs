/// HTTP handlers for the thumbnail endpoint
pub mod thumbnail;

pub use thumbnail::{thumbnail_get, thumbnail_post};
