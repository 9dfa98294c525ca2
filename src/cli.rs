//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Wiki page index generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Wiki directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name, relative to the wiki root (default: wiki-index.toml)
    #[arg(short = 'C', long, default_value = "wiki-index.toml")]
    pub config: PathBuf,

    /// subcommands (default: insert)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Regenerate the page index inside the home page
    Insert,

    /// Print the generated page index to stdout without touching any file
    Print,
}

impl Cli {
    /// Resolved subcommand, `insert` when none was given.
    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Insert)
    }
}
