//! Tag tree built from scanned pages.
//!
//! ```text
//! root
//! ├── untagged: {Orphan.md}
//! ├── Rust
//! │   ├── untagged: {Intro.md}
//! │   └── Async
//! │       └── untagged: {Tokio.md}
//! └── Tools
//!     └── untagged: {Intro.md}
//! ```
//!
//! A page tagged `Rust-Async` lands in the leaf `Async` node, not in `Rust`.
//! Every node owns its children and always has an untagged set, even when
//! it is empty.

use std::collections::{BTreeMap, BTreeSet};

/// Separator between segments of a tag token (`Tag-SubTag`).
pub const TAG_SEPARATOR: char = '-';

/// One node of the tag tree.
///
/// `BTreeSet`/`BTreeMap` keep pages and child tags in ordinal order, so
/// rendering needs no extra sort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagTree {
    /// Pages classified directly at this node.
    pub untagged: BTreeSet<String>,
    /// Child nodes keyed by tag segment.
    pub children: BTreeMap<String, TagTree>,
}

impl TagTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one page by the complete list of tags found on it.
    ///
    /// No tags puts the page in the root untagged set; otherwise it goes to
    /// the leaf of every tag path and never to the root.
    pub fn classify(&mut self, page: &str, tags: &[String]) {
        if tags.is_empty() {
            self.add_untagged(page);
        } else {
            for tag in tags {
                self.add_tagged(page, tag);
            }
        }
    }

    /// Insert a page into the root untagged set.
    pub fn add_untagged(&mut self, page: &str) {
        self.untagged.insert(page.to_owned());
    }

    /// Insert a page at the node addressed by `tag`, creating missing nodes.
    pub fn add_tagged(&mut self, page: &str, tag: &str) {
        let mut node = self;
        for segment in tag.split(TAG_SEPARATOR) {
            node = node.children.entry(segment.to_owned()).or_default();
        }
        node.untagged.insert(page.to_owned());
    }

    /// Look up a node by its segment path.
    #[cfg(test)]
    pub fn get<S: AsRef<str>>(&self, path: &[S]) -> Option<&TagTree> {
        path.iter()
            .try_fold(self, |node, segment| node.children.get(segment.as_ref()))
    }
}
