use crate::domain::models::{ApplyReport, JsonOut, SandboxOutcome};
use serde::Serialize;
use std::io::{BufRead, Write};

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Presentation hooks for the install pipeline.
pub trait Reporter {
    fn progress(&mut self, step: &str);
    fn success(&mut self, report: &ApplyReport);
    fn error(&mut self, err: &dyn std::fmt::Display);
    /// Yes/no question for the operator.
    fn confirm(&mut self, question: &str) -> bool;
}

/// One read from the operator console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleInput {
    Line(String),
    /// Not valid UTF-8; the stream itself is still usable.
    Unreadable,
    End,
}

/// Line-oriented operator console over any reader/writer pair.
pub struct ConsoleReporter<R: BufRead, W: Write> {
    input: R,
    out: W,
    assume_yes: bool,
}

impl<R: BufRead, W: Write> ConsoleReporter<R, W> {
    pub fn new(input: R, out: W, assume_yes: bool) -> Self {
        Self {
            input,
            out,
            assume_yes,
        }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    /// A failed read counts as end of input; a bad line does not.
    pub fn read_line(&mut self) -> ConsoleInput {
        let _ = self.out.flush();
        let mut buf = Vec::new();
        match self.input.read_until(b'\n', &mut buf) {
            Ok(0) | Err(_) => ConsoleInput::End,
            Ok(_) => String::from_utf8(buf)
                .map(ConsoleInput::Line)
                .unwrap_or(ConsoleInput::Unreadable),
        }
    }
}

pub fn describe_report(report: &ApplyReport) -> String {
    let mut lines = Vec::new();
    if report.dry_run {
        lines.push(format!(
            ">> DRY-RUN: {} policies would be written to {}",
            report.policies, report.path
        ));
    } else {
        lines.push(format!(
            ">>> SUCCESS: applied {} policies to {}",
            report.policies, report.path
        ));
    }
    if let Some(b) = &report.backup {
        lines.push(format!("previous file saved as {}", b));
    }
    match report.sandbox {
        SandboxOutcome::Granted => lines.push("flatpak read access granted".to_string()),
        SandboxOutcome::Declined => {
            lines.push("flatpak read access not granted; the sandboxed browser may ignore these policies".to_string())
        }
        SandboxOutcome::Skipped | SandboxOutcome::NotSandboxed => {}
    }
    if !report.dry_run {
        lines.push("Restart Brave for changes to take effect.".to_string());
    }
    lines.join("\n")
}

// Terminal write failures are not worth aborting an install over.
impl<R: BufRead, W: Write> Reporter for ConsoleReporter<R, W> {
    fn progress(&mut self, step: &str) {
        let _ = writeln!(self.out, "  .. {}", step);
    }

    fn success(&mut self, report: &ApplyReport) {
        let _ = writeln!(self.out, "{}", describe_report(report));
    }

    fn error(&mut self, err: &dyn std::fmt::Display) {
        let _ = writeln!(self.out, "ERROR: {}", err);
    }

    fn confirm(&mut self, question: &str) -> bool {
        if self.assume_yes {
            let _ = writeln!(self.out, "{} [y/N] y", question);
            return true;
        }
        let _ = write!(self.out, "{} [y/N] ", question);
        match self.read_line() {
            ConsoleInput::Line(answer) => {
                matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
            }
            ConsoleInput::Unreadable | ConsoleInput::End => false,
        }
    }
}

/// Prints nothing; used with `--json` where stdout carries the envelope.
/// With no operator to ask, questions are answered by `assume_yes`.
pub struct SilentReporter {
    pub assume_yes: bool,
}

impl Reporter for SilentReporter {
    fn progress(&mut self, _step: &str) {}
    fn success(&mut self, _report: &ApplyReport) {}
    fn error(&mut self, _err: &dyn std::fmt::Display) {}
    fn confirm(&mut self, _question: &str) -> bool {
        self.assume_yes
    }
}
