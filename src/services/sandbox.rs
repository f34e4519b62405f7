//! Flatpak read-access override for the managed policy directory.
//!
//! A missing `flatpak` binary reads as "not sandboxed". That conflates "not
//! installed" with "cannot tell"; callers get a warning in the log, nothing more.

use crate::domain::errors::ZeroBraveError;
use crate::domain::models::SandboxOutcome;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    pub success: bool,
    pub code: Option<i32>,
}

/// Process seam so detection/override can run against a fake in tests.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> std::io::Result<RunStatus>;
}

pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> std::io::Result<RunStatus> {
        let status = Command::new(program)
            .args(args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;
        Ok(RunStatus {
            success: status.success(),
            code: status.code(),
        })
    }
}

pub fn detect_flatpak(runner: &dyn CommandRunner, app_id: &str) -> Result<bool, ZeroBraveError> {
    match runner.run("flatpak", &["info", app_id]) {
        Ok(s) => Ok(s.success),
        Err(e) => Err(ZeroBraveError::PermissionCheckUnavailable(e.to_string())),
    }
}

pub fn is_flatpak_install(runner: &dyn CommandRunner, app_id: &str) -> bool {
    match detect_flatpak(runner, app_id) {
        Ok(found) => {
            debug!(app_id, found, "flatpak detection");
            found
        }
        Err(e) => {
            warn!("{}; assuming no flatpak install", e);
            false
        }
    }
}

pub fn override_args(app_id: &str, dir: &Path) -> Vec<String> {
    vec![
        "flatpak".to_string(),
        "override".to_string(),
        format!("--filesystem={}:ro", dir.display()),
        app_id.to_string(),
    ]
}

pub fn grant_read_access(
    runner: &dyn CommandRunner,
    app_id: &str,
    dir: &Path,
) -> Result<(), ZeroBraveError> {
    let args = override_args(app_id, dir);
    let argv: Vec<&str> = args.iter().map(String::as_str).collect();
    let command = format!("sudo {}", args.join(" "));
    info!(%command, "granting flatpak read access");
    let status = runner
        .run("sudo", &argv)
        .map_err(|_| ZeroBraveError::SubprocessFailed {
            command: command.clone(),
            code: None,
        })?;
    if !status.success {
        return Err(ZeroBraveError::SubprocessFailed {
            command,
            code: status.code,
        });
    }
    Ok(())
}

/// Detect, ask, grant. `confirm` is only consulted when a Flatpak install is present.
pub fn adjust_sandbox(
    runner: &dyn CommandRunner,
    app_id: &str,
    dir: &Path,
    confirm: &mut dyn FnMut(&str) -> bool,
) -> Result<SandboxOutcome, ZeroBraveError> {
    if !is_flatpak_install(runner, app_id) {
        return Ok(SandboxOutcome::NotSandboxed);
    }
    let question = format!(
        "Flatpak Brave detected. Allow it to read {}?",
        dir.display()
    );
    if !confirm(&question) {
        return Ok(SandboxOutcome::Declined);
    }
    grant_read_access(runner, app_id, dir)?;
    Ok(SandboxOutcome::Granted)
}

#[cfg(test)]
pub(crate) mod fake {
    use super::{CommandRunner, RunStatus};
    use std::cell::RefCell;

    /// Scripted runner: `info` and `override` outcomes are fixed, calls are recorded.
    pub struct FakeRunner {
        pub flatpak_present: Option<bool>,
        pub override_code: i32,
        pub calls: RefCell<Vec<String>>,
    }

    impl FakeRunner {
        pub fn new(flatpak_present: Option<bool>, override_code: i32) -> Self {
            Self {
                flatpak_present,
                override_code,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(&self, program: &str, args: &[&str]) -> std::io::Result<RunStatus> {
            self.calls
                .borrow_mut()
                .push(format!("{} {}", program, args.join(" ")));
            if program == "flatpak" {
                return match self.flatpak_present {
                    None => Err(std::io::Error::from(std::io::ErrorKind::NotFound)),
                    Some(found) => Ok(RunStatus {
                        success: found,
                        code: Some(if found { 0 } else { 1 }),
                    }),
                };
            }
            Ok(RunStatus {
                success: self.override_code == 0,
                code: Some(self.override_code),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeRunner;
    use super::*;
    use std::path::PathBuf;

    fn dir() -> PathBuf {
        PathBuf::from("/etc/brave/policies/managed")
    }

    #[test]
    fn missing_tool_reads_as_absent() {
        let runner = FakeRunner::new(None, 0);
        assert!(matches!(
            detect_flatpak(&runner, "com.brave.Browser"),
            Err(ZeroBraveError::PermissionCheckUnavailable(_))
        ));
        let mut asked = false;
        let outcome = adjust_sandbox(&runner, "com.brave.Browser", &dir(), &mut |_| {
            asked = true;
            true
        })
        .expect("absent is not an error");
        assert_eq!(outcome, SandboxOutcome::NotSandboxed);
        assert!(!asked);
    }

    #[test]
    fn declined_prompt_runs_no_override() {
        let runner = FakeRunner::new(Some(true), 0);
        let outcome =
            adjust_sandbox(&runner, "com.brave.Browser", &dir(), &mut |_| false).expect("ok");
        assert_eq!(outcome, SandboxOutcome::Declined);
        assert_eq!(runner.calls.borrow().len(), 1);
    }

    #[test]
    fn accepted_prompt_grants_read_only_access() {
        let runner = FakeRunner::new(Some(true), 0);
        let outcome =
            adjust_sandbox(&runner, "com.brave.Browser", &dir(), &mut |_| true).expect("ok");
        assert_eq!(outcome, SandboxOutcome::Granted);
        assert_eq!(
            runner.calls.borrow()[1],
            "sudo flatpak override --filesystem=/etc/brave/policies/managed:ro com.brave.Browser"
        );
    }

    #[test]
    fn failed_override_propagates_exit_code() {
        let runner = FakeRunner::new(Some(true), 3);
        let err = adjust_sandbox(&runner, "com.brave.Browser", &dir(), &mut |_| true)
            .expect_err("override failure must surface");
        assert!(matches!(
            err,
            ZeroBraveError::SubprocessFailed { code: Some(3), .. }
        ));
    }
}
