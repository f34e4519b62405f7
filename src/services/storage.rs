use crate::domain::errors::ZeroBraveError;
use serde_json::{Map, Value};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub fn ensure_parent_dir(path: &Path) -> Result<(), ZeroBraveError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| ZeroBraveError::from_io(parent, e))?;
        }
    }
    Ok(())
}

/// Two-space indented JSON with non-ASCII kept literal.
pub fn render_document(doc: &Map<String, Value>) -> Result<String, ZeroBraveError> {
    serde_json::to_string_pretty(doc).map_err(|e| ZeroBraveError::InvalidDocument(e.to_string()))
}

pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".bak");
    path.with_file_name(name)
}

/// Copies an existing target aside. Returns the backup location when one was made.
pub fn backup_existing(path: &Path) -> Result<Option<PathBuf>, ZeroBraveError> {
    if !path.is_file() {
        return Ok(None);
    }
    let dst = backup_path(path);
    std::fs::copy(path, &dst).map_err(|e| ZeroBraveError::from_io(&dst, e))?;
    info!(backup = %dst.display(), "previous policy file backed up");
    Ok(Some(dst))
}

/// Writes to a sibling temp file and renames it over `path`, so readers see
/// either the old document or the new one.
pub fn write_document(path: &Path, doc: &Map<String, Value>) -> Result<(), ZeroBraveError> {
    ensure_parent_dir(path)?;
    let body = render_document(doc)?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".policies")
        .suffix(".tmp")
        .tempfile_in(&dir)
        .map_err(|e| ZeroBraveError::from_io(&dir, e))?;
    tmp.write_all(body.as_bytes())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| ZeroBraveError::from_io(tmp.path(), e))?;

    // Browsers read managed policy as an unprivileged user.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(|e| ZeroBraveError::from_io(tmp.path(), e))?;
    }

    tmp.persist(path)
        .map_err(|e| ZeroBraveError::from_io(path, e.error))?;
    debug!(bytes = body.len(), "policy document persisted");
    info!(path = %path.display(), keys = doc.len(), "policies written");
    Ok(())
}
