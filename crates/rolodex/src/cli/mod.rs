//! Command-line interface for rolodex.
//!
//! This module provides the CLI structure for the `rolo` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AddCommand, ConfigCommand, FieldArg, ListCommand, OutputFormat, RemoveCommand, SearchCommand,
};

/// rolo - a local customer registry
///
/// Register customers with validated phone and national-ID fields, then
/// search them by name or number. Everything lives in a single JSON file
/// on your machine; there is no server and no account.
#[derive(Debug, Parser)]
#[command(name = "rolo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Register a new customer
    Add(AddCommand),

    /// List all registered customers
    List(ListCommand),

    /// Search customers by name, phone, or national ID
    Search(SearchCommand),

    /// Remove a customer by ID
    Remove(RemoveCommand),

    /// Show the number of registered customers
    Count,

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
