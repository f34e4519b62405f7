//! Interactive group selection.
//!
//! `parse_command` normalizes a read into a `MenuCommand`, `Menu::dispatch` applies it to the
//! selection and returns an `Effect`, and `Menu::run` draws the table and the effect.
//! Unrecognized input maps to `Ignore`.

use crate::domain::catalog::PolicyGroup;
use crate::services::install::Installer;
use crate::services::output::{ConsoleInput, ConsoleReporter, Reporter};
use crate::services::selection::Selection;
use crate::services::storage::render_document;
use serde_json::{Map, Value};
use std::io::{BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, error, info};

const BANNER: &str = "\
 ZEROBRAVE
 Privacy-First Brave Configuration";

const FAREWELL: &str = "Goodbye! Remember to restart Brave for changes to take effect.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Browsing,
    Exited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Toggle(usize),
    ToggleAll,
    Preview,
    Apply,
    Quit,
    Ignore,
}

/// What a dispatched command leaves for the screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Nothing,
    Toggled { tag: &'static str, on: bool },
    Preview(Map<String, Value>),
    Farewell,
}

/// End of input quits like `q`; an unreadable line is ignored.
pub fn parse_command(input: &ConsoleInput) -> MenuCommand {
    let line = match input {
        ConsoleInput::Line(line) => line,
        ConsoleInput::Unreadable => return MenuCommand::Ignore,
        ConsoleInput::End => return MenuCommand::Quit,
    };
    match line.trim().to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => MenuCommand::Quit,
        "a" | "all" => MenuCommand::ToggleAll,
        "p" | "preview" => MenuCommand::Preview,
        "" | "enter" | "apply" => MenuCommand::Apply,
        s => s
            .parse::<usize>()
            .map(MenuCommand::Toggle)
            .unwrap_or(MenuCommand::Ignore),
    }
}

/// Ctrl-C state shared between the menu loop and the signal handler thread.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    requested: Arc<AtomicBool>,
    at_prompt: Arc<AtomicBool>,
}

impl Interrupt {
    /// Records the interrupt. Returns true when the menu is blocked reading input.
    pub fn request(&self) -> bool {
        self.requested.store(true, Ordering::SeqCst);
        self.at_prompt.load(Ordering::SeqCst)
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    fn waiting<T>(&self, read: impl FnOnce() -> T) -> T {
        self.at_prompt.store(true, Ordering::SeqCst);
        let got = read();
        self.at_prompt.store(false, Ordering::SeqCst);
        got
    }
}

/// Ctrl-C at the prompt leaves the menu the same way `q` does. Anywhere else the running
/// step finishes first and the loop quits before the next prompt.
pub fn install_interrupt_handler(interrupt: Interrupt) {
    // Reads restart after the signal, so a blocked prompt has to be left from here.
    if let Err(e) = ctrlc::set_handler(move || {
        if interrupt.request() {
            println!();
            println!("{}", FAREWELL);
            std::process::exit(0);
        }
    }) {
        debug!("interrupt handler not installed: {}", e);
    }
}

pub struct Menu<'a, R: BufRead, W: Write> {
    selection: Selection<'static>,
    installer: &'a Installer<'a>,
    console: ConsoleReporter<R, W>,
    interrupt: Interrupt,
    state: MenuState,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(
        catalog: &'static [PolicyGroup],
        installer: &'a Installer<'a>,
        console: ConsoleReporter<R, W>,
    ) -> Self {
        Self {
            selection: Selection::new(catalog),
            installer,
            console,
            interrupt: Interrupt::default(),
            state: MenuState::Browsing,
        }
    }

    #[cfg(test)]
    pub fn selection(&self) -> &Selection<'static> {
        &self.selection
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn interrupt(&self) -> Interrupt {
        self.interrupt.clone()
    }

    pub fn run(&mut self) {
        while self.state == MenuState::Browsing {
            if self.interrupt.is_requested() {
                info!("interrupted; leaving the menu");
                let effect = self.dispatch(MenuCommand::Quit);
                self.show(effect);
                break;
            }
            self.render();
            let _ = write!(self.console.out(), ">>> ");
            let console = &mut self.console;
            let input = self.interrupt.waiting(|| console.read_line());
            let cmd = if self.interrupt.is_requested() {
                MenuCommand::Quit
            } else {
                parse_command(&input)
            };
            let effect = self.dispatch(cmd);
            self.show(effect);
        }
    }

    pub fn dispatch(&mut self, cmd: MenuCommand) -> Effect {
        if self.state == MenuState::Exited {
            return Effect::Nothing;
        }
        match cmd {
            MenuCommand::Toggle(i) => match self.selection.toggle(i) {
                Some(on) => {
                    let group = &self.selection.catalog()[i - 1];
                    debug!(group = group.id, enabled = on, "group toggled");
                    Effect::Toggled { tag: group.tag, on }
                }
                None => Effect::Nothing,
            },
            MenuCommand::ToggleAll => {
                self.selection.toggle_all();
                Effect::Nothing
            }
            MenuCommand::Preview => Effect::Preview(self.selection.build_document()),
            MenuCommand::Apply => {
                self.apply();
                Effect::Nothing
            }
            MenuCommand::Quit => {
                self.state = MenuState::Exited;
                Effect::Farewell
            }
            MenuCommand::Ignore => Effect::Nothing,
        }
    }

    fn show(&mut self, effect: Effect) {
        match effect {
            Effect::Nothing => {}
            Effect::Toggled { tag, on } => {
                let _ = writeln!(
                    self.console.out(),
                    "  {} -> {}",
                    tag,
                    if on { "ON" } else { "OFF" }
                );
            }
            Effect::Preview(doc) => self.preview(&doc),
            Effect::Farewell => {
                let _ = writeln!(self.console.out(), "\n{}", FAREWELL);
            }
        }
    }

    fn preview(&mut self, doc: &Map<String, Value>) {
        match render_document(doc) {
            Ok(text) => {
                let _ = writeln!(self.console.out(), "<< {} Policies >>\n{}", doc.len(), text);
            }
            Err(e) => self.console.error(&e),
        }
    }

    fn apply(&mut self) {
        let doc = self.selection.build_document();
        if let Err(e) = self.installer.install(&doc, &mut self.console) {
            error!("apply failed: {}", e);
            self.console.error(&e);
        }
    }

    fn render(&mut self) {
        let summary = self.selection.summary();
        let rows = self.selection.rows();
        let dry_run = self.installer.dry_run;
        let out = self.console.out();

        let _ = writeln!(out, "{}\n", BANNER);
        let mut status = format!(
            "Categories: {}/{}  |  Policies: {}",
            summary.enabled_groups, summary.total_groups, summary.policies
        );
        if dry_run {
            status = format!(">> DRY-RUN MODE <<  |  {}", status);
        }
        let _ = writeln!(out, "{}\n", status);
        let _ = writeln!(
            out,
            "{:>3}  {:<8} {:<7} {:<20} {}",
            "#", "Tag", "Status", "Category", "Details"
        );
        for r in rows {
            let _ = writeln!(
                out,
                "{:>3}  {:<8} {:<7} {:<20} {}",
                r.index,
                r.tag,
                if r.enabled { "++ ON" } else { "-- OFF" },
                r.name,
                r.description
            );
        }
        let _ = writeln!(
            out,
            "\n1-{} Toggle  |  A All ON/OFF  |  P Preview  |  ENTER Apply  |  Q Quit",
            summary.total_groups
        );
    }
}
