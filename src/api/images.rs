// ABOUTME: HTTP client for the KraftCloud images endpoint.
// ABOUTME: Speaks the v1 JSON envelope over reqwest with bearer token auth.

use super::{ApiError, ImagesService};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A remote disk image as reported by the listing endpoint.
///
/// Unknown fields are ignored so the client keeps working when the service
/// grows its schema.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Image {
    pub digest: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub public: bool,

    #[serde(default)]
    pub size_in_bytes: u64,
}

/// The v1 response envelope: `status` is `"success"` or `"error"`, `message`
/// carries the error text, `data` the payload.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    status: String,
    message: Option<String>,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct ImagesData {
    images: Vec<Image>,
}

// Empty-object `data` on deletes.
#[derive(Debug, Deserialize)]
struct Empty {}

impl<T> Envelope<T> {
    fn check(&self, http_status: reqwest::StatusCode) -> Result<(), ApiError> {
        if http_status.is_success() && self.status == "success" {
            return Ok(());
        }
        Err(ApiError::Service {
            code: http_status.as_u16(),
            message: self
                .message
                .clone()
                .unwrap_or_else(|| format!("service reported status {}", self.status)),
        })
    }

    fn into_data(self, http_status: reqwest::StatusCode) -> Result<T, ApiError> {
        self.check(http_status)?;
        self.data.ok_or(ApiError::MissingData)
    }
}

/// Images client scoped to a single metro.
pub struct ImagesClient {
    http: reqwest::Client,
    token: String,
    metro: String,
}

impl ImagesClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            token: token.into(),
            metro: String::new(),
        }
    }

    /// Scope the client to a metro; every request targets that deployment.
    pub fn with_metro(mut self, metro: impl Into<String>) -> Self {
        self.metro = metro.into();
        self
    }

    fn base_url(&self) -> String {
        format!("https://api.{}.kraft.cloud/v1", self.metro)
    }
}

#[async_trait]
impl ImagesService for ImagesClient {
    async fn list(&self) -> Result<Vec<Image>, ApiError> {
        let response = self
            .http
            .get(format!("{}/images", self.base_url()))
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        let envelope: Envelope<ImagesData> = response.json().await?;
        Ok(envelope.into_data(status)?.images)
    }

    async fn delete_by_name(&self, name: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(format!("{}/images/{}", self.base_url(), name))
            .bearer_auth(&self.token)
            .send()
            .await?;

        // Deletes carry no payload worth keeping; only the status matters.
        let status = response.status();
        let envelope: Envelope<Empty> = response.json().await?;
        envelope.check(status)
    }
}
