//! Subcommand implementations.
//!
//! Each subcommand picks its registry accessor (live registry or a snapshot
//! file), runs the resolution core, and renders the outcome. Resolution
//! output goes to stdout so scripts can capture the path; diagnostics go to
//! stderr.

use clap::CommandFactory;
use console::style;
use serde_json::json;

use crate::clue::{Clue, PublisherClue, UninstallClue};
use crate::drives::list_drives;
use crate::error::Result;
use crate::registry::{MemoryRegistry, RegistryAccessor};
use crate::resolver::find_program;

use super::args::{Cli, Commands, CompletionsArgs, PublisherArgs, UninstallArgs};

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Exit code: 0 when the command produced its answer, 1 when the
    /// resolution came up empty. Errors become exit code 2 in `main`.
    pub exit_code: i32,
}

impl CommandResult {
    fn hit() -> Self {
        Self { exit_code: 0 }
    }

    fn miss() -> Self {
        Self { exit_code: 1 }
    }
}

/// Dispatch and execute the parsed command.
pub fn dispatch(cli: &Cli) -> Result<CommandResult> {
    match &cli.command {
        Commands::Uninstall(args) => run_uninstall(cli, args),
        Commands::Publisher(args) => run_publisher(cli, args),
        Commands::Drives => run_drives(cli),
        Commands::Completions(args) => run_completions(args),
    }
}

fn run_uninstall(cli: &Cli, args: &UninstallArgs) -> Result<CommandResult> {
    let clue = Clue::Uninstall(UninstallClue::new(
        args.key.clone(),
        args.display_name.clone(),
    )?);
    resolve_and_report(cli, &clue)
}

fn run_publisher(cli: &Cli, args: &PublisherArgs) -> Result<CommandResult> {
    let clue = Clue::Publisher(PublisherClue::new(&args.publisher, &args.program));
    resolve_and_report(cli, &clue)
}

fn resolve_and_report(cli: &Cli, clue: &Clue) -> Result<CommandResult> {
    let registry = open_registry(cli)?;
    match find_program(registry.as_ref(), clue)? {
        Some(path) => {
            if cli.json {
                println!("{}", json!({ "found": true, "path": path }));
            } else {
                println!("{path}");
            }
            Ok(CommandResult::hit())
        }
        None => {
            if cli.json {
                println!("{}", json!({ "found": false }));
            } else if !cli.quiet {
                eprintln!("{}", style("No matching program entry found.").yellow());
            }
            Ok(CommandResult::miss())
        }
    }
}

fn run_drives(cli: &Cli) -> Result<CommandResult> {
    let drives = list_drives();
    if cli.json {
        println!("{}", json!({ "drives": drives }));
    } else {
        for drive in &drives {
            println!("{drive}");
        }
    }
    Ok(CommandResult::hit())
}

fn run_completions(args: &CompletionsArgs) -> Result<CommandResult> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(args.shell, &mut cmd, name, &mut std::io::stdout());
    Ok(CommandResult::hit())
}

fn open_registry(cli: &Cli) -> Result<Box<dyn RegistryAccessor>> {
    match &cli.snapshot {
        Some(path) => Ok(Box::new(MemoryRegistry::from_snapshot_file(path)?)),
        None => live_registry(),
    }
}

#[cfg(windows)]
fn live_registry() -> Result<Box<dyn RegistryAccessor>> {
    Ok(Box::new(crate::registry::LiveRegistry::new()))
}

/// Without a live registry to probe, a snapshot is the only usable source.
#[cfg(not(windows))]
fn live_registry() -> Result<Box<dyn RegistryAccessor>> {
    Err(crate::error::FindprogError::Other(anyhow::anyhow!(
        "no live registry on this platform; pass --snapshot"
    )))
}
