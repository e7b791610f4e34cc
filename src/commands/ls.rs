// ABOUTME: Implementation of `kcloud img ls`.
// ABOUTME: Lists the images visible in the target metro.

use super::resolve_metro;
use crate::api::{Image, ImagesClient, ImagesService};
use crate::auth::Credentials;
use crate::error::{Error, Result};
use crate::output::{OutputFormat, print_images};
use std::sync::Arc;

/// Resolved configuration for a single `img ls` invocation.
pub struct LsOptions {
    pub metro: String,
    pub format: OutputFormat,
    pub auth: Option<Credentials>,
    pub client: Option<Arc<dyn ImagesService>>,
}

impl LsOptions {
    pub fn validate(
        format: OutputFormat,
        metro_flag: Option<&str>,
        metro_env: Option<&str>,
    ) -> Result<Self> {
        let metro = resolve_metro(metro_flag, metro_env)?;
        tracing::debug!(metro = %metro, "using");

        Ok(Self {
            metro,
            format,
            auth: None,
            client: None,
        })
    }

    pub async fn run(mut self) -> Result<()> {
        let images = self.list().await?;
        print_images(&images, self.format);
        Ok(())
    }

    /// Fetch the listing without printing; split out for tests.
    pub async fn list(&mut self) -> Result<Vec<Image>> {
        let auth = match self.auth.take() {
            Some(auth) => auth,
            None => Credentials::resolve().map_err(Error::Credentials)?,
        };

        let client: Arc<dyn ImagesService> = match self.client.take() {
            Some(client) => client,
            None => Arc::new(ImagesClient::new(auth.token_auth()).with_metro(&self.metro)),
        };

        client.list().await.map_err(Error::ListImages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use async_trait::async_trait;

    // `unwrap_err` needs Debug on the Ok type; the trait-object client field
    // rules out deriving it on the struct itself.
    impl std::fmt::Debug for LsOptions {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("LsOptions")
                .field("metro", &self.metro)
                .field("format", &self.format)
                .finish_non_exhaustive()
        }
    }

    struct FixedImages(Vec<Image>);

    #[async_trait]
    impl ImagesService for FixedImages {
        async fn list(&self) -> std::result::Result<Vec<Image>, ApiError> {
            Ok(self.0.clone())
        }

        async fn delete_by_name(&self, _name: &str) -> std::result::Result<(), ApiError> {
            unreachable!("ls never deletes");
        }
    }

    #[test]
    fn validate_requires_a_metro() {
        let err = LsOptions::validate(OutputFormat::Table, None, None).unwrap_err();
        assert!(matches!(err, Error::MetroUnset));
    }

    #[tokio::test]
    async fn list_returns_the_service_listing() {
        let fixture = vec![Image {
            digest: "abc123".to_string(),
            tags: vec!["unikraft.io/u/app:latest".to_string()],
            public: false,
            size_in_bytes: 1024,
        }];

        let mut opts = LsOptions {
            metro: "fra0".to_string(),
            format: OutputFormat::Table,
            auth: Some(Credentials {
                user: "robot$abc123.users.kraftcloud".to_string(),
                token: "tok".to_string(),
            }),
            client: Some(Arc::new(FixedImages(fixture))),
        };

        let images = opts.list().await.unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].digest, "abc123");
    }
}
