//! JSON renderer — structured output for site generators and tooling.

use crate::model::Entry;
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, entries: &[Entry]) -> Result<String> {
        let mut out =
            serde_json::to_string_pretty(entries).context("failed to serialize entries as JSON")?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
