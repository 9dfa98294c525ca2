//! Page discovery and tag line extraction.
//!
//! A page declares its tags on the first line starting with the tag prefix:
//!
//! ```text
//! Tags: Tag_One Tag_Two Tag_Three-Sub_Tag_A
//! ```
//!
//! Reading stops at that line. Files are decoded lossily, so pages with
//! broken encodings are still indexed.

use anyhow::{Context, Result};
use regex::Regex;
use std::{
    fs::{self, File},
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

/// A wiki page found in the root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Bare file name, the page identity.
    pub name: String,
    /// Location on disk.
    pub path: PathBuf,
}

/// List scan candidates in `root`, sorted by name.
///
/// Only regular files are returned. Names matching `exclude` and paths
/// listed in `skip` are left out.
pub fn list_pages(root: &Path, exclude: &Regex, skip: &[PathBuf]) -> Result<Vec<Page>> {
    let entries =
        fs::read_dir(root).with_context(|| format!("Failed to read {}", root.display()))?;

    let mut pages = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read {}", root.display()))?;
        let path = entry.path();
        if !path.is_file() || skip.contains(&path) {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if exclude.is_match(&name) {
            continue;
        }
        pages.push(Page { name, path });
    }

    pages.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(pages)
}

/// Read the tags of a single page.
pub fn scan_page(page: &Page, tag_prefix: &str) -> Result<Vec<String>> {
    let file =
        File::open(&page.path).with_context(|| format!("Failed to open {}", page.path.display()))?;
    scan_tags(BufReader::new(file), tag_prefix)
        .with_context(|| format!("Failed to read {}", page.path.display()))
}

/// Return the tags of the first tag line in `reader`, or nothing.
///
/// A prefixed line without any tag does not end the scan.
pub fn scan_tags<R: BufRead>(mut reader: R, tag_prefix: &str) -> io::Result<Vec<String>> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(Vec::new());
        }

        let tags = parse_tag_line(&String::from_utf8_lossy(&buf), tag_prefix);
        if !tags.is_empty() {
            return Ok(tags);
        }
    }
}

/// Whitespace-separated tokens after `tag_prefix`, or nothing if the line
/// does not start with it.
pub fn parse_tag_line(line: &str, tag_prefix: &str) -> Vec<String> {
    line.strip_prefix(tag_prefix)
        .map(|rest| rest.split_whitespace().map(str::to_owned).collect())
        .unwrap_or_default()
}
