//! Thumbnail processor - generates thumbnails from original images
//!
//! Decodes the source bytes, scales them down to the configured target
//! width with the height derived from the same integer divisor (aspect
//! ratio preserved by construction), and re-encodes with the resolved
//! codec.
//!
//! Uses `spawn_blocking` for CPU-intensive operations to avoid blocking
//! the async runtime.

use crate::error::{AppError, Result};
use crate::services::codec::ImageCodec;
use bytes::Bytes;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageOutputFormat};
use std::io::Cursor;
use std::sync::Arc;
use tracing::debug;

const JPEG_QUALITY: u8 = 85;

/// Result of thumbnail generation
#[derive(Debug)]
pub struct ThumbnailOutput {
    /// The encoded thumbnail bytes
    pub data: Bytes,
    /// Width of the thumbnail
    pub width: u32,
    /// Height of the thumbnail
    pub height: u32,
    /// Codec the thumbnail was encoded with
    pub codec: ImageCodec,
}

/// Thumbnail processor
pub struct ThumbnailProcessor {
    target_width: u32,
}

impl ThumbnailProcessor {
    /// Create a new processor. The target width must already be
    /// validated >= 1 (see `Config::from_env`).
    pub fn new(target_width: u32) -> Self {
        Self { target_width }
    }

    /// Generate a thumbnail from the given image data (blocking version)
    ///
    /// **Note:** This method performs CPU-intensive operations and should
    /// not be called directly from async code. Use `generate_async`.
    pub fn generate(&self, original_data: &[u8], codec: ImageCodec) -> Result<ThumbnailOutput> {
        let img = image::load_from_memory(original_data)
            .map_err(|e| AppError::DecodeFailed(format!("failed to decode image: {e}")))?;

        let (orig_w, orig_h) = img.dimensions();
        debug!(
            original_width = orig_w,
            original_height = orig_h,
            codec = codec.name(),
            "Processing image for thumbnail"
        );

        let (new_w, new_h) = self.scaled_dimensions(orig_w, orig_h)?;

        let resized = img.resize_exact(new_w, new_h, FilterType::Lanczos3);
        let data = encode(&resized, codec)?;

        debug!(
            width = new_w,
            height = new_h,
            size = data.len(),
            "Thumbnail generated"
        );

        Ok(ThumbnailOutput {
            data,
            width: new_w,
            height: new_h,
            codec,
        })
    }

    /// Generate a thumbnail asynchronously using a blocking thread pool
    pub async fn generate_async(
        self: Arc<Self>,
        original_data: Bytes,
        codec: ImageCodec,
    ) -> Result<ThumbnailOutput> {
        let processor = self.clone();

        tokio::task::spawn_blocking(move || processor.generate(&original_data, codec))
            .await
            .map_err(|e| AppError::Internal(format!("Thumbnail task panicked: {e}")))?
    }

    /// Compute target dimensions from the integer scale divisor.
    ///
    /// divisor = floor(width / target_width); height is the rational
    /// height/divisor rounded to nearest, ties away from zero. A divisor
    /// of zero (source narrower than the target width) is a
    /// configuration error, never a silent divide-by-zero.
    fn scaled_dimensions(&self, width: u32, height: u32) -> Result<(u32, u32)> {
        let divisor = width / self.target_width;
        if divisor == 0 {
            return Err(AppError::Configuration(format!(
                "target width {} exceeds source width {}",
                self.target_width, width
            )));
        }

        let height = height as u64;
        let divisor = divisor as u64;
        let new_height = ((2 * height + divisor) / (2 * divisor)) as u32;

        Ok((self.target_width, new_height.max(1)))
    }
}

/// Encode the image with the given codec into an in-memory buffer
fn encode(img: &DynamicImage, codec: ImageCodec) -> Result<Bytes> {
    let mut buf = Vec::new();
    let mut cursor = Cursor::new(&mut buf);

    let result = match codec {
        ImageCodec::Png => img.write_to(&mut cursor, ImageOutputFormat::Png),
        ImageCodec::Gif => img.write_to(&mut cursor, ImageOutputFormat::Gif),
        ImageCodec::Jpeg => {
            // The JPEG encoder rejects alpha channels
            DynamicImage::ImageRgb8(img.to_rgb8())
                .write_to(&mut cursor, ImageOutputFormat::Jpeg(JPEG_QUALITY))
        }
    };
    result.map_err(|e| {
        AppError::EncodeFailed(format!("failed to encode {} thumbnail: {e}", codec.name()))
    })?;

    Ok(Bytes::from(buf))
}
