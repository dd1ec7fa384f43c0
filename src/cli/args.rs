//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Findprog - locate installed programs through the Windows registry.
#[derive(Debug, Parser)]
#[command(name = "findprog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Resolve against a JSON registry snapshot instead of the live registry
    #[arg(short, long, global = true, env = "FINDPROG_SNAPSHOT")]
    pub snapshot: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve a program through the uninstall registry subtree
    Uninstall(UninstallArgs),

    /// Resolve a program through its publisher registry path
    Publisher(PublisherArgs),

    /// List logical drives
    Drives,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `uninstall` command.
#[derive(Debug, Clone, clap::Args)]
pub struct UninstallArgs {
    /// Uninstall registry subkey name (e.g. "Steam App 730")
    #[arg(short, long)]
    pub key: Option<String>,

    /// Display name registered by the installer
    #[arg(short = 'n', long)]
    pub display_name: Option<String>,
}

/// Arguments for the `publisher` command.
#[derive(Debug, Clone, clap::Args)]
pub struct PublisherArgs {
    /// Publisher key under SOFTWARE (e.g. "Valve")
    pub publisher: String,

    /// Program key under the publisher (e.g. "cs2")
    pub program: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uninstall_accepts_key_and_display_name() {
        let cli = Cli::parse_from([
            "findprog",
            "uninstall",
            "--key",
            "Steam App 730",
            "--display-name",
            "Counter-Strike 2",
        ]);
        match cli.command {
            Commands::Uninstall(args) => {
                assert_eq!(args.key.as_deref(), Some("Steam App 730"));
                assert_eq!(args.display_name.as_deref(), Some("Counter-Strike 2"));
            }
            other => panic!("Expected uninstall command, got {other:?}"),
        }
    }

    #[test]
    fn publisher_takes_positional_pair() {
        let cli = Cli::parse_from(["findprog", "publisher", "Valve", "cs2"]);
        match cli.command {
            Commands::Publisher(args) => {
                assert_eq!(args.publisher, "Valve");
                assert_eq!(args.program, "cs2");
            }
            other => panic!("Expected publisher command, got {other:?}"),
        }
    }

    #[test]
    fn snapshot_flag_is_global() {
        let cli = Cli::parse_from(["findprog", "drives", "--snapshot", "reg.json"]);
        assert_eq!(cli.snapshot.as_deref(), Some(std::path::Path::new("reg.json")));
    }
}
