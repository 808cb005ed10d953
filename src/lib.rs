//! compdoc — extract component documentation from markdown files and
//! `/* ... */` comment blocks.
//!
//! Each documentation block carries YAML front matter (`name`, `category`
//! and free-form metadata) followed by a markdown description. Fenced code
//! blocks annotated as `name.extension [options]` are collected into named
//! examples, and the description is rewritten so renderable examples get an
//! `<example>` placeholder.

pub mod frontmatter;
pub mod model;
pub mod parser;
pub mod render;

pub use model::{CodeBlock, Entry, Example, ExampleOptions, MetaEntry};
pub use parser::{parse, parse_file};
