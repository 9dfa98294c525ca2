//! Page index generation and insertion.
//!
//! # Pipeline
//!
//! ```text
//! list_pages ─► scan_page ─► TagTree::classify ─► render ─► splice ─► Home.md
//! ```
//!
//! The tree is rebuilt from scratch on every run.

pub mod render;
pub mod scan;
pub mod splice;
pub mod tree;

use crate::config::IndexConfig;
use anyhow::{Context, Result};
use render::RenderOptions;
use splice::{Markers, SpliceOutcome};
use std::{
    fs,
    io::{self, Write},
    path::Path,
};
use tempfile::NamedTempFile;
use tree::TagTree;

/// A rendered index and what went into it.
#[derive(Debug, Clone)]
pub struct PageIndex {
    /// Markdown including both marker lines.
    pub text: String,
    pub tree: TagTree,
    /// Pages scanned.
    pub pages: usize,
    /// Pages with at least one tag.
    pub tagged: usize,
}

/// Scan every page under the root and classify it into a fresh tree.
pub fn build_tag_tree(config: &IndexConfig) -> Result<(TagTree, usize, usize)> {
    let exclude = config.exclude_regex()?;
    let skip = [config.config_path.clone()];
    let pages = scan::list_pages(&config.root, &exclude, &skip)?;

    let mut tree = TagTree::new();
    let mut tagged = 0;
    for page in &pages {
        let tags = scan::scan_page(page, &config.scan.tag_prefix)?;
        if !tags.is_empty() {
            tagged += 1;
        }
        tree.classify(&page.name, &tags);
    }

    Ok((tree, pages.len(), tagged))
}

/// Render the index that goes between the markers, markers included.
pub fn generate_page_index(config: &IndexConfig) -> Result<PageIndex> {
    let (tree, pages, tagged) = build_tag_tree(config)?;
    let body = render::render(
        &tree,
        config.render.heading_level,
        RenderOptions {
            link_prefix: &config.render.link_prefix,
        },
    );
    let text = format!(
        "{}\n# {}\n\n{}{}",
        config.start_line(),
        config.home.title,
        body,
        config.end_line()
    );

    Ok(PageIndex {
        text,
        tree,
        pages,
        tagged,
    })
}

/// Rewrite the home page with a freshly generated index.
///
/// The old page is renamed to the backup name first and left on disk.
/// The new page is written to a temporary file and renamed into place.
pub fn insert_page_index(config: &IndexConfig) -> Result<(PageIndex, SpliceOutcome)> {
    let home = config.home_path();
    let backup = config.backup_path();

    fs::rename(&home, &backup).with_context(|| {
        format!(
            "Failed to move {} to {}",
            home.display(),
            backup.display()
        )
    })?;

    let old = fs::read(&backup).with_context(|| format!("Failed to read {}", backup.display()))?;
    let old = decode_home(&old);

    let index = generate_page_index(config)?;
    let (start, end) = (config.start_line(), config.end_line());
    let spliced = splice::splice(&old, &index.text, Markers { start: &start, end: &end });

    let mut file = NamedTempFile::new_in(&config.root)
        .with_context(|| format!("Failed to create temp file in {}", config.root.display()))?;
    file.write_all(spliced.text.as_bytes())
        .and_then(|()| file.flush())
        .with_context(|| format!("Failed to write {}", file.path().display()))?;
    if let Err(err) = copy_permissions(&backup, file.path()) {
        crate::log!(
            "warning";
            "could not copy permissions of {} to {}: {err}",
            backup.display(),
            home.display()
        );
    }
    file.persist(&home)
        .map_err(|err| err.error)
        .with_context(|| format!("Failed to write {}", home.display()))?;

    Ok((index, spliced.outcome))
}

/// Lossy-decode the home page and fold CRLF line endings to `\n`,
/// so marker lines written by Windows editors still match.
fn decode_home(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).replace("\r\n", "\n")
}

fn copy_permissions(from: &Path, to: &Path) -> io::Result<()> {
    fs::set_permissions(to, fs::metadata(from)?.permissions())
}
