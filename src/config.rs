/// Configuration management for thumbnail-service
///
/// Loads configuration from environment variables with sensible defaults.
/// The target thumbnail width is validated once here, at startup, so the
/// request pipeline never has to guard against a zero or negative width.
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub thumbnail: ThumbnailSettings,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ThumbnailSettings {
    /// Target thumbnail width in pixels, always >= 1 after validation
    pub target_width: u32,
    /// Timeout for fetching the source image
    pub fetch_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let target_width: u32 = std::env::var("THUMBNAIL_WIDTH")
            .unwrap_or_else(|_| "100".to_string())
            .parse()
            .map_err(|_| "THUMBNAIL_WIDTH must be a positive integer")?;
        if target_width == 0 {
            return Err("THUMBNAIL_WIDTH must be at least 1".into());
        }

        Ok(Config {
            app: AppConfig {
                host: std::env::var("THUMBNAIL_SERVICE_HOST")
                    .unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("THUMBNAIL_SERVICE_PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()
                    .unwrap_or(8080),
            },
            thumbnail: ThumbnailSettings {
                target_width,
                fetch_timeout_secs: std::env::var("FETCH_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .unwrap_or(30),
            },
        })
    }
}
