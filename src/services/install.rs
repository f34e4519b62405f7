use crate::domain::errors::ZeroBraveError;
use crate::domain::models::{ApplyReport, SandboxOutcome};
use crate::services::output::Reporter;
use crate::services::sandbox::{adjust_sandbox, CommandRunner};
use crate::services::storage::{backup_existing, write_document};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::info;

/// Write side of both entry modes: backup, write, then Flatpak access.
pub struct Installer<'r> {
    pub path: PathBuf,
    pub dry_run: bool,
    pub backup: bool,
    /// Flatpak app id when this platform/run should consider the sandbox.
    pub flatpak_app_id: Option<String>,
    pub runner: &'r dyn CommandRunner,
}

impl Installer<'_> {
    pub fn install(
        &self,
        doc: &Map<String, Value>,
        reporter: &mut dyn Reporter,
    ) -> Result<ApplyReport, ZeroBraveError> {
        let mut report = ApplyReport {
            path: self.path.display().to_string(),
            policies: doc.len(),
            dry_run: self.dry_run,
            backup: None,
            sandbox: SandboxOutcome::Skipped,
        };

        if self.dry_run {
            info!(path = %self.path.display(), "dry run, nothing written");
            reporter.success(&report);
            return Ok(report);
        }

        if self.backup {
            reporter.progress("backing up current policies");
            report.backup = backup_existing(&self.path)?.map(|p| p.display().to_string());
        }

        reporter.progress("writing configuration");
        write_document(&self.path, doc)?;

        if let Some(app_id) = &self.flatpak_app_id {
            reporter.progress("checking for a flatpak install");
            let dir = self.path.parent().unwrap_or(Path::new("/"));
            report.sandbox =
                adjust_sandbox(self.runner, app_id, dir, &mut |q: &str| reporter.confirm(q))?;
        }

        reporter.success(&report);
        Ok(report)
    }
}
