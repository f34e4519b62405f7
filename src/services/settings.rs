use crate::domain::models::Settings;
use anyhow::Context;
use std::path::{Path, PathBuf};

pub fn default_settings_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/zerobrave/config.toml"))
}

/// Missing file means defaults; a malformed file is an error.
pub fn load_settings(explicit: Option<&Path>) -> anyhow::Result<Settings> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match default_settings_path() {
            Ok(p) => p,
            Err(_) => return Ok(Settings::default()),
        },
    };
    if !path.exists() {
        return Ok(Settings::default());
    }
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("invalid settings file {}", path.display()))?;
    toml::from_str(&raw).map_err(|e| anyhow::anyhow!("invalid settings file {}: {}", path.display(), e))
}
