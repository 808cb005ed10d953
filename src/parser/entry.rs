//! Build one entry from one raw documentation block.

use crate::frontmatter;
use crate::model::Entry;
use crate::parser::{examples, rewrite};

const RESERVED_FIELDS: &[&str] = &["name", "category"];

/// Build the entry described by `block`.
///
/// Blocks without a `name` in their front matter are not documentation and
/// yield `None`.
pub fn build(block: &str) -> Option<Entry> {
    let parsed = frontmatter::extract(block);

    let Some(name) = parsed.get_scalar("name").filter(|n| !n.is_empty()) else {
        log::debug!("dropping block without a name");
        return None;
    };

    let mut entry = Entry::default();
    entry.set_name(name);
    entry.set_category(
        parsed
            .get_scalar("category")
            .filter(|c| !c.is_empty())
            .map(str::to_string),
    );

    for (key, field) in &parsed.data {
        if RESERVED_FIELDS.contains(&key.as_str()) {
            continue;
        }
        for value in field.values() {
            entry.add_meta(key.as_str(), value.as_str());
        }
    }

    for example in examples::collect(parsed.content) {
        entry.add_example(&example.name, example.blocks, example.options);
    }
    let description = rewrite::rewrite(parsed.content, entry.examples());
    entry.set_description(description);

    Some(entry)
}
