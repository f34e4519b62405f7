use crate::domain::catalog::{FLATPAK_PLATFORMS, POLICY_PATHS};
use crate::domain::errors::ZeroBraveError;
use std::path::PathBuf;

pub fn current_platform() -> &'static str {
    std::env::consts::OS
}

/// Maps a platform id to its managed policy file. Pure lookup, no filesystem access.
pub fn resolve_policy_path(platform: &str) -> Result<PathBuf, ZeroBraveError> {
    let id = platform.trim().to_ascii_lowercase();
    POLICY_PATHS
        .iter()
        .find(|(p, _)| *p == id)
        .map(|(_, path)| PathBuf::from(path))
        .ok_or_else(|| ZeroBraveError::UnsupportedPlatform(platform.to_string()))
}

pub fn supports_flatpak(platform: &str) -> bool {
    FLATPAK_PLATFORMS.contains(&platform)
}

/// The file to write: an explicit override wins over the platform table.
pub fn target_path(
    override_path: Option<&PathBuf>,
    platform: &str,
) -> Result<PathBuf, ZeroBraveError> {
    match override_path {
        Some(p) => Ok(p.clone()),
        None => resolve_policy_path(platform),
    }
}
