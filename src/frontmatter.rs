//! YAML front matter at the top of a documentation block.
//!
//! ```text
//! ---
//! name: Button
//! category: Forms
//! states:
//!   - hover
//!   - disabled
//! ---
//! Body text starts here.
//! ```
//!
//! Field values are reduced to [`Field::Scalar`] or [`Field::List`]; the
//! entry builder expands both the same way.

use serde_yaml::Value;

const DELIMITER: &str = "---";

/// A declared front matter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Scalar(String),
    List(Vec<String>),
}

impl Field {
    /// Every value of the field, in declaration order.
    pub fn values(&self) -> &[String] {
        match self {
            Field::Scalar(v) => std::slice::from_ref(v),
            Field::List(vs) => vs,
        }
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Field::Scalar(v) => Some(v),
            Field::List(_) => None,
        }
    }
}

/// Parsed header fields plus the body that follows them.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatter<'a> {
    /// Fields in the order they are declared.
    pub data: Vec<(String, Field)>,
    pub content: &'a str,
}

impl<'a> FrontMatter<'a> {
    fn without_header(content: &'a str) -> Self {
        Self {
            data: Vec::new(),
            content,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Field> {
        self.data.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// A scalar field, `None` when missing or list-valued.
    pub fn get_scalar(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Field::as_scalar)
    }
}

/// Split `text` into front matter fields and body.
///
/// Text that does not open with a `---` line, or never closes the header,
/// comes back unchanged with no fields. A header that is not a YAML mapping
/// yields no fields but its body is still returned.
pub fn extract(text: &str) -> FrontMatter<'_> {
    let mut lines = text.split_inclusive('\n');
    let header_start = match lines.next() {
        Some(first) if first.trim_end() == DELIMITER => first.len(),
        _ => return FrontMatter::without_header(text),
    };

    let mut offset = header_start;
    for line in lines {
        if line.trim_end() == DELIMITER {
            let yaml = &text[header_start..offset];
            return FrontMatter {
                data: parse_fields(yaml),
                content: &text[offset + line.len()..],
            };
        }
        offset += line.len();
    }

    log::debug!("front matter has no closing delimiter, treating block as body");
    FrontMatter::without_header(text)
}

fn parse_fields(yaml: &str) -> Vec<(String, Field)> {
    if yaml.trim().is_empty() {
        return Vec::new();
    }
    let value = match serde_yaml::from_str::<Value>(yaml) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("failed to parse front matter YAML: {e}");
            return Vec::new();
        }
    };

    match value {
        Value::Mapping(mapping) => mapping
            .iter()
            .map(|(key, value)| (scalar(key), field(value)))
            .collect(),
        Value::Null => Vec::new(),
        _ => {
            log::warn!("front matter is not a mapping, ignoring it");
            Vec::new()
        }
    }
}

fn field(value: &Value) -> Field {
    match value {
        Value::Sequence(items) => Field::List(items.iter().map(scalar).collect()),
        Value::Tagged(tagged) => field(&tagged.value),
        other => Field::Scalar(scalar(other)),
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Tagged(tagged) => scalar(&tagged.value),
        // Nested structures are kept as compact JSON
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}
