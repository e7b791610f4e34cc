// ABOUTME: Command module aggregator for the kcloud CLI.
// ABOUTME: Re-exports the image rm and ls command handlers.

mod ls;
mod rm;

pub use ls::LsOptions;
pub use rm::RmOptions;

use crate::error::{Error, Result};

/// Resolve the target metro: a non-empty `--metro` flag wins, else the
/// non-empty `KRAFTCLOUD_METRO` environment value.
pub(crate) fn resolve_metro(flag: Option<&str>, env: Option<&str>) -> Result<String> {
    flag.filter(|m| !m.is_empty())
        .or_else(|| env.filter(|m| !m.is_empty()))
        .map(str::to_string)
        .ok_or(Error::MetroUnset)
}
