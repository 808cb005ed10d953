//! Fence header annotations: `name.extension [key[=value] ...]`.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Extensions that get an `<example>` placeholder in the description.
pub const RENDERABLE_EXTENSIONS: &[&str] = &["html", "jsx", "handlebars", "hbs"];

// name excludes `.` and whitespace, extension is a bare word
static RE_ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([^.\s]+)\.([A-Za-z0-9_]+)(.*)$").unwrap());

// Same shape for stripping, where the name also stops at `,` and an optional
// `,segment` after the extension is dropped
static RE_STRIPPABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[^.\s,]+\.([A-Za-z0-9_]+)(?:,\S+)?(.*)$").unwrap());

/// A parsed fence header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation<'a> {
    pub name: &'a str,
    pub extension: &'a str,
    /// Everything after the extension, unparsed.
    pub rest: &'a str,
    pub options: HashMap<&'a str, Option<&'a str>>,
}

impl<'a> Annotation<'a> {
    pub fn is_hidden(&self) -> bool {
        self.options.contains_key("hidden")
    }

    /// A non-empty `height=` option.
    pub fn height(&self) -> Option<&'a str> {
        self.options
            .get("height")
            .copied()
            .flatten()
            .filter(|h| !h.is_empty())
    }

    pub fn is_renderable(&self) -> bool {
        RENDERABLE_EXTENSIONS.contains(&self.extension)
    }
}

/// Parse the text following the opening backticks of a fence.
///
/// Returns `None` for plain headers such as `js` or an empty header, and
/// when the extension runs into something other than whitespace or `,`.
pub fn parse(header: &str) -> Option<Annotation<'_>> {
    let caps = RE_ANNOTATION.captures(header)?;
    let name = caps.get(1)?.as_str();
    let extension = caps.get(2)?.as_str();
    let rest = caps.get(3).map_or("", |m| m.as_str());
    if !at_boundary(rest) {
        return None;
    }

    Some(Annotation {
        name,
        extension,
        rest,
        options: parse_options(rest),
    })
}

/// Split space-separated `key` / `key=value` tokens. Later keys win.
fn parse_options(rest: &str) -> HashMap<&str, Option<&str>> {
    rest.split_whitespace()
        .map(|token| match token.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (token, None),
        })
        .collect()
}

/// Rewrite `name.extension[,segment] rest` into `extension rest`.
///
/// Returns `None` when the header carries no name to strip.
pub fn strip_name(header: &str) -> Option<String> {
    let caps = RE_STRIPPABLE.captures(header)?;
    let extension = caps.get(1)?.as_str();
    let rest = caps.get(2).map_or("", |m| m.as_str());
    if !at_boundary(rest) {
        return None;
    }
    Some(format!("{extension}{rest}"))
}

/// Whether a raw header marks its block as hidden.
///
/// Works on the header text alone, so plain fences like `js hidden` count.
pub fn is_hidden_header(header: &str) -> bool {
    header
        .split_whitespace()
        .any(|token| token == "hidden" || token.starts_with("hidden="))
}

fn at_boundary(rest: &str) -> bool {
    rest.chars()
        .next()
        .is_none_or(|c| c.is_whitespace() || c == ',')
}
