// ABOUTME: KraftCloud credential resolution and token derivation.
// ABOUTME: Reads KRAFTCLOUD_USER/KRAFTCLOUD_TOKEN, falling back to the config file.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Robot accounts are issued as `robot$<id>.users.kraftcloud`.
const USER_PREFIX: &str = "robot$";
const USER_SUFFIX: &str = ".users.kraftcloud";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error(
        "no credentials found: set KRAFTCLOUD_USER and KRAFTCLOUD_TOKEN, or add an auth section to {0}"
    )]
    NotFound(PathBuf),

    #[error("config file {0} has no auth section")]
    MissingAuth(PathBuf),

    #[error("could not determine the user config directory")]
    NoConfigDir,

    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A KraftCloud credential pair.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub user: String,
    pub token: String,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    auth: Option<Credentials>,
}

impl Credentials {
    /// Resolve credentials from the environment, falling back to the config
    /// file (`$KRAFTCLOUD_CONFIG`, else `<config_dir>/kraftcloud/config.yaml`).
    pub fn resolve() -> Result<Self, AuthError> {
        if let Some(creds) = Self::from_env() {
            return Ok(creds);
        }

        let path = config_path()?;
        if !path.exists() {
            return Err(AuthError::NotFound(path));
        }
        Self::from_file(&path)
    }

    /// Read credentials from `KRAFTCLOUD_USER` and `KRAFTCLOUD_TOKEN`.
    /// Returns `None` unless both are set and non-empty.
    pub fn from_env() -> Option<Self> {
        let user = env::var("KRAFTCLOUD_USER").ok().filter(|v| !v.is_empty())?;
        let token = env::var("KRAFTCLOUD_TOKEN").ok().filter(|v| !v.is_empty())?;
        Some(Self { user, token })
    }

    /// Read credentials from the `auth` section of a YAML config file.
    pub fn from_file(path: &Path) -> Result<Self, AuthError> {
        let raw = std::fs::read_to_string(path)?;
        let config: ConfigFile = serde_yaml::from_str(&raw)?;
        config
            .auth
            .ok_or_else(|| AuthError::MissingAuth(path.to_path_buf()))
    }

    /// The owner id used to match image digests: the user identifier with a
    /// leading `robot$` and a trailing `.users.kraftcloud` stripped. Either
    /// part is left untouched when absent.
    pub fn owner_id(&self) -> &str {
        let id = self.user.strip_prefix(USER_PREFIX).unwrap_or(&self.user);
        id.strip_suffix(USER_SUFFIX).unwrap_or(id)
    }

    /// Derive the bearer token sent to the API: `base64(user:token)`.
    pub fn token_auth(&self) -> String {
        BASE64.encode(format!("{}:{}", self.user, self.token))
    }
}

fn config_path() -> Result<PathBuf, AuthError> {
    if let Ok(path) = env::var("KRAFTCLOUD_CONFIG")
        && !path.is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    let dir = dirs::config_dir().ok_or(AuthError::NoConfigDir)?;
    Ok(dir.join("kraftcloud").join("config.yaml"))
}
