/// Thumbnail Service - HTTP Server
///
/// Fetches a source image and returns a proportionally-scaled thumbnail.
use actix_web::{middleware as actix_middleware, web, App, HttpResponse, HttpServer};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use thumbnail_service::handlers;
use thumbnail_service::services::{ImageFetcher, ThumbnailProcessor};
use thumbnail_service::Config;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration from environment; an invalid THUMBNAIL_WIDTH
    // rejects the process here instead of failing requests later
    let config = Config::from_env().expect("Failed to load configuration");

    let bind_address = format!("{}:{}", config.app.host, config.app.port);

    let fetcher = ImageFetcher::new(Duration::from_secs(config.thumbnail.fetch_timeout_secs))
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    let processor = Arc::new(ThumbnailProcessor::new(config.thumbnail.target_width));

    tracing::info!(
        bind_address = %bind_address,
        target_width = config.thumbnail.target_width,
        "Thumbnail service starting HTTP server"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(fetcher.clone()))
            .app_data(web::Data::new(processor.clone()))
            .wrap(actix_middleware::Logger::default())
            .route(
                "/health",
                web::get()
                    .to(|| async { HttpResponse::Ok().json(serde_json::json!({"status": "ok"})) }),
            )
            .route("/", web::get().to(handlers::thumbnail_get))
            .route("/", web::post().to(handlers::thumbnail_post))
    })
    .bind(&bind_address)?
    .run()
    .await
}
