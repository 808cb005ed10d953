//! Block segmentation: find the documentation units in an input.
//!
//! Markdown files are a single block. Any other input is scanned for
//! `/* ... */` comments, each of which becomes one block.

use regex::Regex;
use std::sync::LazyLock;

/// Extensions whose whole content is one documentation block.
pub const MARKDOWN_EXTENSIONS: &[&str] = &["markdown", "mdown", "md"];

static RE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)/\*(.*?)\*/").unwrap());

pub fn is_markdown(extension: Option<&str>) -> bool {
    extension.is_some_and(|ext| MARKDOWN_EXTENSIONS.contains(&ext))
}

/// Split `text` into raw documentation blocks.
///
/// Comment blocks are returned with their leading and trailing runs of
/// whitespace and `*` removed. An empty comment still yields an empty block.
pub fn segment<'a>(text: &'a str, extension: Option<&str>) -> Vec<&'a str> {
    if is_markdown(extension) {
        return vec![text];
    }

    RE_COMMENT
        .captures_iter(text)
        .map(|caps| {
            let inner = caps.get(1).map_or("", |m| m.as_str());
            inner.trim_matches(|c: char| c.is_whitespace() || c == '*')
        })
        .collect()
}
