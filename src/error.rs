// ABOUTME: Application-wide error types for kcloud.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::api::ApiError;
use crate::auth::AuthError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("either specify an image name, or use the --all flag")]
    NoTarget,

    #[error("kraftcloud metro is unset")]
    MetroUnset,

    #[error("could not retrieve credentials: {0}")]
    Credentials(#[source] AuthError),

    #[error("could not get list of all images: {0}")]
    ListImages(#[source] ApiError),

    #[error("could not delete image: {0}")]
    DeleteImage(#[source] ApiError),
}

pub type Result<T> = std::result::Result<T, Error>;
