use std::io;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum ZeroBraveError {
    #[error("unsupported operating system: {0}")]
    UnsupportedPlatform(String),
    #[error("download failed: HTTP {status}")]
    DownloadFailed { status: u16 },
    #[error("download failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid policy document: {0}")]
    InvalidDocument(String),
    #[error("permission denied writing {}", .path.display())]
    PermissionDenied { path: PathBuf },
    #[error("no space left on device writing {}", .path.display())]
    DiskFull { path: PathBuf },
    #[error("filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("sandbox detection unavailable: {0}")]
    PermissionCheckUnavailable(String),
    #[error("`{command}` failed with exit code {}", .code.map_or_else(|| "none".to_string(), |c| c.to_string()))]
    SubprocessFailed { command: String, code: Option<i32> },
    #[error("unknown policy group: {0}")]
    UnknownGroup(String),
}

impl ZeroBraveError {
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => ZeroBraveError::PermissionDenied {
                path: path.to_path_buf(),
            },
            io::ErrorKind::StorageFull => ZeroBraveError::DiskFull {
                path: path.to_path_buf(),
            },
            _ => ZeroBraveError::Filesystem {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ZeroBraveError;
    use std::io;
    use std::path::Path;

    #[test]
    fn io_errors_are_classified_by_kind() {
        let p = Path::new("/etc/brave/policies/managed/policies.json");
        let denied = ZeroBraveError::from_io(p, io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(denied, ZeroBraveError::PermissionDenied { .. }));

        let full = ZeroBraveError::from_io(p, io::Error::from(io::ErrorKind::StorageFull));
        assert!(matches!(full, ZeroBraveError::DiskFull { .. }));

        let other = ZeroBraveError::from_io(p, io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(other, ZeroBraveError::Filesystem { .. }));
    }

    #[test]
    fn download_failure_names_status() {
        let e = ZeroBraveError::DownloadFailed { status: 404 };
        assert_eq!(e.to_string(), "download failed: HTTP 404");
    }
}
