//! Data model for parsed documentation entries.

use serde::Serialize;

/// One documented component, built from a single documentation block.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Metadata fields other than `name` and `category`, in declaration order.
    pub meta: Vec<MetaEntry>,
    pub description: String,
    /// Examples in the order their first fence appears.
    pub examples: Vec<Example>,
}

/// A single `key: value` metadata pair. List-valued fields expand to one
/// pair per element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaEntry {
    pub key: String,
    pub value: String,
}

/// A named bundle of code blocks, possibly in several languages.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Example {
    pub name: String,
    pub blocks: Vec<CodeBlock>,
    pub options: ExampleOptions,
}

/// Options aggregated over every block of an example.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ExampleOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
}

/// One fenced code block belonging to an example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    pub extension: String,
    pub code: String,
    pub hidden: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
}

impl Entry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category;
    }

    pub fn add_meta(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.meta.push(MetaEntry {
            key: key.into(),
            value: value.into(),
        });
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Register code blocks under an example name.
    ///
    /// A name seen before keeps its position: the blocks are appended and a
    /// height already set is never replaced.
    pub fn add_example(&mut self, name: &str, blocks: Vec<CodeBlock>, options: ExampleOptions) {
        if let Some(existing) = self.examples.iter_mut().find(|e| e.name == name) {
            existing.blocks.extend(blocks);
            if existing.options.height.is_none() {
                existing.options.height = options.height;
            }
            return;
        }
        self.examples.push(Example {
            name: name.to_string(),
            blocks,
            options,
        });
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    pub fn example(&self, name: &str) -> Option<&Example> {
        self.examples.iter().find(|e| e.name == name)
    }
}
