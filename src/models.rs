/// Request and response DTOs for the thumbnail endpoint
use serde::{Deserialize, Serialize};

/// Parameters accepted by the thumbnail route, via query string (GET)
/// or form-encoded body (POST).
#[derive(Debug, Clone, Deserialize)]
pub struct ThumbnailQuery {
    /// Absolute URL of the source image. Absent and empty are both
    /// treated as "no URL provided".
    #[serde(rename = "imgURL", default)]
    pub img_url: Option<String>,
}

impl ThumbnailQuery {
    /// The source URL, if a non-empty one was supplied
    pub fn source_url(&self) -> Option<&str> {
        self.img_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// JSON body returned for every error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status: u16,
    pub error_type: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(error: &str, message: &str, status: u16, error_type: &str, code: &str) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            status,
            error_type: error_type.to_string(),
            code: code.to_string(),
        }
    }
}
