//! YAML renderer.

use crate::model::Entry;
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct YamlRenderer;

impl Renderer for YamlRenderer {
    fn render(&self, entries: &[Entry]) -> Result<String> {
        serde_yaml::to_string(entries).context("failed to serialize entries as YAML")
    }

    fn file_extension(&self) -> &str {
        "yaml"
    }
}
