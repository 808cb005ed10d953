//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod yaml;

use crate::model::Entry;
use anyhow::{anyhow, Result};

/// Trait for serializing parsed entries into an output format.
pub trait Renderer {
    fn render(&self, entries: &[Entry]) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "json" => Ok(Box::new(json::JsonRenderer)),
        "yaml" | "yml" => Ok(Box::new(yaml::YamlRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use json or yaml", format)),
    }
}
