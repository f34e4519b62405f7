use crate::cli::{Cli, Commands};
use crate::commands::menu::{install_interrupt_handler, Menu};
use crate::domain::catalog::CATALOG;
use crate::domain::models::{ApplyReport, Settings};
use crate::services::fetch::download_policies;
use crate::services::install::Installer;
use crate::services::output::{print_one, print_out, ConsoleReporter, Reporter, SilentReporter};
use crate::services::platform::{current_platform, supports_flatpak, target_path};
use crate::services::sandbox::{CommandRunner, SystemRunner};
use crate::services::selection::Selection;
use crate::services::storage::render_document;
use serde_json::{Map, Value};
use std::io::{BufReader, Stdin};
use tracing::info;

pub fn handle_runtime_commands(cli: &Cli, settings: &Settings) -> anyhow::Result<()> {
    let runner = SystemRunner;
    match &cli.command {
        Commands::Sync { yes } => {
            let url = cli.source_url.as_deref().unwrap_or(&settings.source_url);
            let doc = download_policies(url)?;
            info!(keys = doc.len(), "remote policy document parsed");
            let installer = build_installer(cli, settings, &runner)?;
            let report = install_with_output(cli, &installer, &doc, *yes)?;
            print_report(cli.json, report)?;
        }
        Commands::Menu => {
            let installer = build_installer(cli, settings, &runner)?;
            let console = ConsoleReporter::new(stdin_reader(), std::io::stdout(), false);
            let mut menu = Menu::new(CATALOG, &installer, console);
            install_interrupt_handler(menu.interrupt());
            menu.run();
        }
        Commands::List => {
            let rows = Selection::new(CATALOG).rows();
            print_out(cli.json, &rows, |r| {
                format!(
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    r.index, r.tag, r.id, r.name, r.description, r.policies
                )
            })?;
        }
        Commands::Preview { disable } => {
            let doc = selected_document(disable)?;
            if cli.json {
                print_one(true, &doc, |_| String::new())?;
            } else {
                println!("<< {} Policies >>", doc.len());
                println!("{}", render_document(&doc)?);
            }
        }
        Commands::Apply { disable, yes } => {
            let doc = selected_document(disable)?;
            let installer = build_installer(cli, settings, &runner)?;
            let report = install_with_output(cli, &installer, &doc, *yes)?;
            print_report(cli.json, report)?;
        }
        Commands::Path => {
            let path = target_path(
                cli.policy_path.as_ref().or(settings.policy_path.as_ref()),
                current_platform(),
            )?;
            print_one(cli.json, path.display().to_string(), |p| p.clone())?;
        }
    }
    Ok(())
}

fn stdin_reader() -> BufReader<Stdin> {
    BufReader::new(std::io::stdin())
}

fn selected_document(disable: &[String]) -> anyhow::Result<Map<String, Value>> {
    let mut selection = Selection::new(CATALOG);
    for id in disable {
        selection.set(id.trim(), false)?;
    }
    Ok(selection.build_document())
}

fn build_installer<'r>(
    cli: &Cli,
    settings: &Settings,
    runner: &'r dyn CommandRunner,
) -> anyhow::Result<Installer<'r>> {
    let platform = current_platform();
    let path = target_path(
        cli.policy_path.as_ref().or(settings.policy_path.as_ref()),
        platform,
    )?;
    let sandbox = settings.sandbox && !cli.skip_sandbox && supports_flatpak(platform);
    Ok(Installer {
        path,
        dry_run: cli.dry_run,
        backup: settings.backup,
        flatpak_app_id: sandbox.then(|| settings.flatpak_app_id.clone()),
        runner,
    })
}

/// Human progress goes to stdout unless `--json` owns it. Failures surface through `main`.
fn install_with_output(
    cli: &Cli,
    installer: &Installer,
    doc: &Map<String, Value>,
    yes: bool,
) -> anyhow::Result<ApplyReport> {
    let mut reporter: Box<dyn Reporter> = if cli.json {
        Box::new(SilentReporter { assume_yes: yes })
    } else {
        Box::new(ConsoleReporter::new(stdin_reader(), std::io::stdout(), yes))
    };
    Ok(installer.install(doc, reporter.as_mut())?)
}

fn print_report(json: bool, report: ApplyReport) -> anyhow::Result<()> {
    if json {
        print_one(true, report, |_| String::new())?;
    }
    Ok(())
}
