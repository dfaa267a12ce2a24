//! Codec resolution - maps a file extension to a supported image encoder
//!
//! An extension that matches no supported format is a normal outcome the
//! caller branches on, not an error raised here.

use mime::Mime;
use url::Url;

/// A supported thumbnail encoding format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageCodec {
    Png,
    Jpeg,
    Gif,
}

impl ImageCodec {
    /// Resolve a file extension (leading dot optional, any case) to a
    /// codec. `jpg` and `jpeg` both resolve to JPEG. Returns `None` for
    /// anything outside {gif, png, jpg, jpeg}.
    pub fn from_extension(extension: &str) -> Option<Self> {
        let extension = extension.strip_prefix('.').unwrap_or(extension);
        match extension.to_ascii_lowercase().as_str() {
            "png" => Some(ImageCodec::Png),
            "jpg" | "jpeg" => Some(ImageCodec::Jpeg),
            "gif" => Some(ImageCodec::Gif),
            _ => None,
        }
    }

    /// Resolve a codec from the extension of a URL's final path segment
    pub fn from_url(url: &Url) -> Option<Self> {
        let file_name = url.path_segments().and_then(|segments| segments.last())?;
        let (_, extension) = file_name.rsplit_once('.')?;
        Self::from_extension(extension)
    }

    /// The true MIME type for this codec's output
    pub fn content_type(&self) -> Mime {
        match self {
            ImageCodec::Png => mime::IMAGE_PNG,
            ImageCodec::Jpeg => mime::IMAGE_JPEG,
            ImageCodec::Gif => mime::IMAGE_GIF,
        }
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            ImageCodec::Png => "png",
            ImageCodec::Jpeg => "jpeg",
            ImageCodec::Gif => "gif",
        }
    }
}
