/// Thumbnail handlers - HTTP endpoints for thumbnail generation
///
/// The route accepts GET (query string) and POST (form-encoded body).
/// Per-request flow: resolve codec from the URL's extension, fetch the
/// source bytes, generate the thumbnail, respond with the encoded bytes
/// under the codec's true content type.
use actix_web::web;
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::ThumbnailQuery;
use crate::services::{ImageCodec, ImageFetcher, ThumbnailProcessor};

const NO_URL_MESSAGE: &str = "This HTTP triggered function executed successfully. \
    Pass an image URL in the imgURL query string or form field to receive a thumbnail.";

/// Generate a thumbnail, source URL supplied in the query string
pub async fn thumbnail_get(
    fetcher: web::Data<ImageFetcher>,
    processor: web::Data<Arc<ThumbnailProcessor>>,
    query: web::Query<ThumbnailQuery>,
) -> Result<actix_web::HttpResponse> {
    process(&fetcher, &processor, query.into_inner()).await
}

/// Generate a thumbnail, source URL supplied as a form-encoded body
pub async fn thumbnail_post(
    fetcher: web::Data<ImageFetcher>,
    processor: web::Data<Arc<ThumbnailProcessor>>,
    form: web::Form<ThumbnailQuery>,
) -> Result<actix_web::HttpResponse> {
    process(&fetcher, &processor, form.into_inner()).await
}

async fn process(
    fetcher: &ImageFetcher,
    processor: &Arc<ThumbnailProcessor>,
    query: ThumbnailQuery,
) -> Result<actix_web::HttpResponse> {
    let img_url = match query.source_url() {
        Some(url) => url,
        None => {
            info!("No imgURL provided");
            return Ok(actix_web::HttpResponse::Ok()
                .content_type(mime::TEXT_PLAIN_UTF_8)
                .body(NO_URL_MESSAGE));
        }
    };

    let url = Url::parse(img_url)
        .map_err(|e| AppError::BadRequest(format!("invalid imgURL {img_url}: {e}")))?;

    let codec = ImageCodec::from_url(&url).ok_or_else(|| {
        AppError::UnsupportedFormat(format!("no encoder support for: {img_url}"))
    })?;
    debug!(url = %url, codec = codec.name(), "Resolved codec from extension");

    let original = fetcher.fetch(&url).await?;

    let thumbnail = processor.clone().generate_async(original, codec).await?;

    info!(
        url = %url,
        width = thumbnail.width,
        height = thumbnail.height,
        size = thumbnail.data.len(),
        "Thumbnail generated"
    );

    Ok(actix_web::HttpResponse::Ok()
        .content_type(thumbnail.codec.content_type())
        .body(thumbnail.data))
}
