use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "zerobrave",
    version,
    about = "Privacy-first Brave managed policy installer"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, global = true, help = "Settings file (default ~/.config/zerobrave/config.toml)")]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
    #[arg(long, global = true, help = "Remote policy document URL")]
    pub source_url: Option<String>,
    #[arg(
        long,
        global = true,
        help = "Write here instead of the platform's managed policy path"
    )]
    pub policy_path: Option<PathBuf>,
    #[arg(long, global = true, help = "Report what would be written without writing")]
    pub dry_run: bool,
    #[arg(long, global = true, help = "Never touch Flatpak sandbox permissions")]
    pub skip_sandbox: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download the published policy document and install it.
    Sync {
        #[arg(long, help = "Grant Flatpak access without asking")]
        yes: bool,
    },
    /// Interactive group selection menu.
    Menu,
    /// List catalog policy groups.
    List,
    /// Print the merged document for the selected groups.
    Preview {
        #[arg(long, value_delimiter = ',')]
        disable: Vec<String>,
    },
    /// Install the merged document for the selected groups.
    Apply {
        #[arg(long, value_delimiter = ',')]
        disable: Vec<String>,
        #[arg(long, help = "Grant Flatpak access without asking")]
        yes: bool,
    },
    /// Print the managed policy path for this platform.
    Path,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
