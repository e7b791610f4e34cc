// ABOUTME: Implementation of `kcloud img rm`.
// ABOUTME: Deletes named images, or every image owned by the caller with --all.

use super::resolve_metro;
use crate::api::{ImagesClient, ImagesService};
use crate::auth::Credentials;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Resolved configuration for a single `img rm` invocation.
///
/// `auth` and `client` are normally left empty and constructed on first use
/// in [`RmOptions::run`]; tests pre-supply both to substitute collaborators.
pub struct RmOptions {
    pub all: bool,
    pub metro: String,
    pub auth: Option<Credentials>,
    pub client: Option<Arc<dyn ImagesService>>,
}

impl RmOptions {
    /// Validate the invocation and resolve the target metro.
    ///
    /// Fails when neither a positional image name nor `--all` was given, and
    /// when neither the `--metro` flag nor the environment supplies a metro.
    pub fn validate(
        all: bool,
        args: &[String],
        metro_flag: Option<&str>,
        metro_env: Option<&str>,
    ) -> Result<Self> {
        if !all && args.is_empty() {
            return Err(Error::NoTarget);
        }

        let metro = resolve_metro(metro_flag, metro_env)?;
        tracing::debug!(metro = %metro, "using");

        Ok(Self {
            all,
            metro,
            auth: None,
            client: None,
        })
    }

    /// Delete the targeted images.
    ///
    /// With `--all`, every image whose digest carries the caller's owner id
    /// is deleted first; a failure there is logged and the sweep continues.
    /// Explicit arguments are deleted afterwards, aborting on the first
    /// failure.
    pub async fn run(mut self, args: &[String]) -> Result<()> {
        let auth = match self.auth.take() {
            Some(auth) => auth,
            None => Credentials::resolve().map_err(Error::Credentials)?,
        };

        let client: Arc<dyn ImagesService> = match self.client.take() {
            Some(client) => client,
            None => Arc::new(ImagesClient::new(auth.token_auth()).with_metro(&self.metro)),
        };

        if self.all {
            let images = client.list().await.map_err(Error::ListImages)?;
            let owner = auth.owner_id();

            for image in images {
                if !image.digest.starts_with(owner) {
                    continue;
                }

                tracing::info!("removing {}", image.digest);

                if let Err(e) = client.delete_by_name(&image.digest).await {
                    tracing::error!("could not delete image: {e}");
                }
            }
        }

        for arg in args {
            client
                .delete_by_name(arg)
                .await
                .map_err(Error::DeleteImage)?;

            tracing::info!("removing {arg}");
        }

        Ok(())
    }
}
