//! Split a description into plain-text spans and fenced code spans.
//!
//! A fence opens on a line starting with three backticks and closes on the
//! next line that is exactly three backticks (trailing whitespace allowed).
//! An opening line that is never closed stays plain text. The closing line's
//! newline belongs to the following text span, so [`join`] reproduces the
//! input byte for byte.

const BACKTICKS: &str = "```";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Fence(Fence),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fence {
    /// Text after the opening backticks, without the newline.
    pub header: String,
    /// Lines between the fences, each with its newline.
    pub body: String,
    /// The closing line without its newline.
    pub closing: String,
}

impl Fence {
    fn write_to(&self, out: &mut String) {
        out.push_str(BACKTICKS);
        out.push_str(&self.header);
        out.push('\n');
        out.push_str(&self.body);
        out.push_str(&self.closing);
    }
}

pub fn split(text: &str) -> Vec<Span> {
    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    let mut spans = Vec::new();
    let mut pending = String::new();
    // Once a search for a closing line fails, no later fence can close either
    let mut closings_exhausted = false;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        let close = match line.strip_prefix(BACKTICKS) {
            Some(_) if !closings_exhausted && line.ends_with('\n') => {
                let found = (i + 1..lines.len()).find(|&j| is_closing(lines[j]));
                closings_exhausted = found.is_none();
                found
            }
            _ => None,
        };

        let Some(close) = close else {
            pending.push_str(line);
            i += 1;
            continue;
        };

        if !pending.is_empty() {
            spans.push(Span::Text(std::mem::take(&mut pending)));
        }
        let header = &line[BACKTICKS.len()..line.len() - 1];
        let closing_line = lines[close];
        let closing = closing_line.strip_suffix('\n').unwrap_or(closing_line);
        spans.push(Span::Fence(Fence {
            header: header.to_string(),
            body: lines[i + 1..close].concat(),
            closing: closing.to_string(),
        }));
        if closing_line.ends_with('\n') {
            pending.push('\n');
        }
        i = close + 1;
    }

    if !pending.is_empty() {
        spans.push(Span::Text(pending));
    }
    spans
}

pub fn join(spans: &[Span]) -> String {
    let mut out = String::new();
    for span in spans {
        match span {
            Span::Text(text) => out.push_str(text),
            Span::Fence(fence) => fence.write_to(&mut out),
        }
    }
    out
}

fn is_closing(line: &str) -> bool {
    line.trim_end() == BACKTICKS
}
