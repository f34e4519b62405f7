use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;
use commands::handle_runtime_commands;
use services::settings::load_settings;

fn init_logging(cli: &Cli) {
    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| cli.log_level.as_filter_str().to_string());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let settings = load_settings(cli.config.as_deref())?;
    handle_runtime_commands(&cli, &settings)
}
