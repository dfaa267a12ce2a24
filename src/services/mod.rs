//! Thumbnail pipeline services
//!
//! - Codec resolution from file extensions
//! - Fetcher for downloading the source image
//! - Processor for resizing and re-encoding

pub mod codec;
pub mod fetcher;
pub mod processor;

pub use codec::ImageCodec;
pub use fetcher::ImageFetcher;
pub use processor::{ThumbnailOutput, ThumbnailProcessor};
