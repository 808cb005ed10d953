//! Parser module — segment, build, merge.

pub mod annotation;
pub mod entry;
pub mod examples;
pub mod fence;
pub mod merge;
pub mod rewrite;
pub mod segment;

use crate::model::Entry;
use std::path::Path;

pub use segment::is_markdown;

/// Parse every documentation entry in `content`.
///
/// `extension` selects the input kind: markdown extensions treat the whole
/// text as one block, anything else (or none) is scanned for `/* */`
/// comments.
pub fn parse(content: &str, extension: Option<&str>) -> Vec<Entry> {
    let blocks = segment::segment(content, extension);
    log::debug!("found {} documentation block(s)", blocks.len());
    let entries = blocks.into_iter().filter_map(entry::build).collect();
    merge::merge(entries)
}

/// Parse a file's content, taking the input kind from its extension.
pub fn parse_file(path: &Path, content: &str) -> Vec<Entry> {
    parse(content, path.extension().and_then(|e| e.to_str()))
}
