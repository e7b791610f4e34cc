// ABOUTME: Client seam for the KraftCloud images service.
// ABOUTME: Defines the service trait and its error type.

mod images;

pub use images::{Image, ImagesClient};

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the images service.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error (status {code}): {message}")]
    Service { code: u16, message: String },

    #[error("malformed API response: missing data")]
    MissingData,
}

/// Image operations against a metro-scoped images endpoint: list, delete.
///
/// The HTTP client implements this; tests substitute their own.
#[async_trait]
pub trait ImagesService: Send + Sync {
    /// List the images visible to the caller in the target metro.
    async fn list(&self) -> Result<Vec<Image>, ApiError>;

    /// Delete an image by name, tag, or digest reference.
    async fn delete_by_name(&self, name: &str) -> Result<(), ApiError>;
}
