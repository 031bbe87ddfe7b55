//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::search::SearchScope;

/// Add command arguments.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Customer name (at least 2 characters)
    #[arg(short, long)]
    pub name: String,

    /// Street address (at least 5 characters)
    #[arg(short, long)]
    pub address: String,

    /// Phone number with 10 or 11 digits; punctuation is ignored
    #[arg(short, long)]
    pub phone: String,

    /// National ID with 11 digits (optional)
    #[arg(short = 'i', long)]
    pub national_id: Option<String>,
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Search command arguments.
#[derive(Debug, Args)]
pub struct SearchCommand {
    /// The search query
    pub query: String,

    /// Which field to match against
    #[arg(short = 'F', long, value_enum, default_value = "all")]
    pub field: FieldArg,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,

    /// Disable highlighting of query matches
    #[arg(long)]
    pub no_color: bool,
}

/// Remove command arguments.
#[derive(Debug, Args)]
pub struct RemoveCommand {
    /// ID of the customer to remove
    pub id: String,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Search field argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FieldArg {
    /// Match name, phone, or national ID
    #[default]
    All,
    /// Match the name only
    Name,
    /// Match the phone only
    Phone,
    /// Match the national ID only
    NationalId,
}

impl From<FieldArg> for SearchScope {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::All => Self::All,
            FieldArg::Name => Self::Name,
            FieldArg::Phone => Self::Phone,
            FieldArg::NationalId => Self::NationalId,
        }
    }
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// Formatted table
    Table,
    /// JSON output
    Json,
}
