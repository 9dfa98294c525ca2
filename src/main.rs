//! wiki-index - A page index generator for flat Markdown wikis.

mod cli;
mod config;
mod index;
mod logger;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::IndexConfig;
use index::{generate_page_index, insert_page_index, splice::SpliceOutcome};
use std::io::Write;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = IndexConfig::load(&cli)?;

    match cli.command() {
        Commands::Insert => insert(&config),
        Commands::Print => {
            let index = generate_page_index(&config)?;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(index.text.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

/// Regenerate the index inside the home page and report what changed.
fn insert(config: &IndexConfig) -> Result<()> {
    let (index, outcome) = insert_page_index(config)?;

    log!(
        "index";
        "scanned {} pages ({} tagged, {} untagged) under {} top-level tags",
        index.pages,
        index.tagged,
        index.pages - index.tagged,
        index.tree.children.len()
    );

    let home = config.home.file.display();
    match outcome {
        SpliceOutcome::Replaced => log!("home"; "replaced page index in {home}"),
        SpliceOutcome::Prepended => log!("home"; "no markers found, page index added to top of {home}"),
        SpliceOutcome::Truncated => log!(
            "home";
            "end marker missing in {home}, content after the start marker was dropped"
        ),
    }
    log!("home"; "previous version kept as {}", config.home.backup.display());

    Ok(())
}
