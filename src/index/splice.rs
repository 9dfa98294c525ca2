//! Replacing the index region of the home page.
//!
//! The old page is read as lines (newlines kept). Marker lines match only
//! when equal to the marker plus `\n`.
//!
//! | Old page                      | New page                               |
//! |-------------------------------|----------------------------------------|
//! | no start marker               | index, then the whole old page         |
//! | start and end marker          | preamble, index, text after end marker |
//! | start marker, no end marker   | preamble, index (rest is dropped)      |

/// Marker lines, newline included.
#[derive(Debug, Clone, Copy)]
pub struct Markers<'a> {
    pub start: &'a str,
    pub end: &'a str,
}

/// What happened to the old index region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpliceOutcome {
    /// No start marker: index placed at the top.
    Prepended,
    /// Region between the markers replaced.
    Replaced,
    /// End marker missing: everything after the start marker was dropped.
    Truncated,
}

/// Result of [`splice`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spliced {
    pub text: String,
    pub outcome: SpliceOutcome,
}

/// Build the new home page from the old one and a freshly rendered index.
///
/// The index carries its own marker lines; old markers are never copied.
pub fn splice(old: &str, index: &str, markers: Markers<'_>) -> Spliced {
    let mut lines = old.split_inclusive('\n');
    let mut text = String::with_capacity(old.len() + index.len());

    let found_start = lines.by_ref().any(|line| {
        let is_start = line == markers.start;
        if !is_start {
            text.push_str(line);
        }
        is_start
    });

    if !found_start {
        text.clear();
        text.push_str(index);
        text.push_str(old);
        return Spliced {
            text,
            outcome: SpliceOutcome::Prepended,
        };
    }

    let found_end = lines.by_ref().any(|line| line == markers.end);
    text.push_str(index);
    text.extend(lines);

    let outcome = if found_end {
        SpliceOutcome::Replaced
    } else {
        SpliceOutcome::Truncated
    };
    Spliced { text, outcome }
}
