//! Merge entries that document the same component.
//!
//! A component may be documented across several comment blocks or files.
//! Entries are grouped by name and folded into the first occurrence.

use crate::model::Entry;
use std::collections::HashMap;

/// Collapse entries sharing a name, keeping first-seen order.
pub fn merge(entries: Vec<Entry>) -> Vec<Entry> {
    let mut by_name: HashMap<String, Entry> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for entry in entries {
        if let Some(existing) = by_name.get_mut(&entry.name) {
            merge_into(existing, entry);
        } else {
            order.push(entry.name.clone());
            by_name.insert(entry.name.clone(), entry);
        }
    }

    order
        .into_iter()
        .filter_map(|name| by_name.remove(&name))
        .collect()
}

fn merge_into(existing: &mut Entry, incoming: Entry) {
    if existing.category.is_none() {
        existing.category = incoming.category;
    }

    existing.meta.extend(incoming.meta);

    if !incoming.description.is_empty() {
        if existing.description.is_empty() {
            existing.description = incoming.description;
        } else {
            let joined = format!(
                "{}\n\n{}",
                existing.description.trim_end_matches('\n'),
                incoming.description
            );
            existing.set_description(joined);
        }
    }

    for example in incoming.examples {
        existing.add_example(&example.name, example.blocks, example.options);
    }
}
