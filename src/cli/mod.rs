//! Command-line interface for findprog.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Subcommand implementations and dispatch

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, PublisherArgs, UninstallArgs};
pub use commands::{dispatch, CommandResult};
