//! Markdown rendering of a [`TagTree`].
//!
//! Pages of a node come first as link lines, then each child tag as a
//! heading followed by its own subtree one level deeper.

use super::tree::TagTree;
use std::{fmt::Write, path::Path};

/// Link and heading layout.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
    /// Prefix of every link target.
    pub link_prefix: &'a str,
}

/// Render `tree` with its first tag headings at `level`.
pub fn render(tree: &TagTree, level: usize, options: RenderOptions<'_>) -> String {
    let mut out = String::new();
    render_into(&mut out, tree, level, options);
    out
}

fn render_into(out: &mut String, node: &TagTree, level: usize, options: RenderOptions<'_>) {
    for page in &node.untagged {
        let (text, target) = page_link(page);
        writeln!(out, "[{text}]({}{target})\n", options.link_prefix).ok();
    }

    for (tag, child) in &node.children {
        writeln!(out, "{} {}\n", "#".repeat(level), heading_text(tag)).ok();
        render_into(out, child, level + 1, options);
    }
}

/// Display text and link target for a page file name.
///
/// `My-Page.md` → (`My Page`, `My-Page`)
pub fn page_link(page: &str) -> (String, &str) {
    let stem = strip_extension(page);
    (stem.replace('-', " "), stem)
}

/// Heading text for a tag segment: underscores become spaces.
pub fn heading_text(tag: &str) -> String {
    tag.replace('_', " ")
}

/// File name without its last extension. Leading-dot names keep their dot.
fn strip_extension(name: &str) -> &str {
    Path::new(name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(name)
}
