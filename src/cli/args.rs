//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all tsctl
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `check`: Run catalog checks (placeholders, duplicates, unfinished, ...)
//! - `lookup`: Translate one string through the catalogs
//! - `clean`: Remove obsolete and vanished messages from catalog files
//! - `init`: Initialize tsctl configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::check::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.common.verbose,
            Some(Command::Clean(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root directory (default: current directory)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Catalogs directory path (overrides config file)
    #[arg(long)]
    pub translations_root: Option<PathBuf>,

    /// Language of the source texts (overrides config file)
    #[arg(long)]
    pub source_language: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Context name (e.g. "SqlExport")
    #[arg(allow_hyphen_values = true)]
    pub context: String,

    /// Untranslated source text (e.g. "-- Table: %1")
    #[arg(allow_hyphen_values = true)]
    pub source: String,

    /// Target locale (required when several locales are loaded)
    #[arg(long, conflicts_with = "bundled")]
    pub locale: Option<String>,

    /// Value for %1, %2, ... (repeat in order: --arg users --arg 3)
    #[arg(long = "arg", value_name = "VALUE")]
    pub args: Vec<String>,

    /// Use the bundled SqlExport pt_BR catalog instead of the project catalogs
    #[arg(long)]
    pub bundled: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Parser)]
pub struct CleanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually remove messages (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub args: CleanArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check catalogs for issues (placeholders, duplicates, unfinished, untranslated, obsolete)
    Check(CheckCommand),
    /// Print the translation of a source text, falling back to the source
    Lookup(LookupCommand),
    /// Remove obsolete and vanished messages from catalog files
    Clean(CleanCommand),
    /// Initialize a new .tsctlrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
