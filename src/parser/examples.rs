//! Collect annotated fences into named examples.

use crate::model::{CodeBlock, Example, ExampleOptions};
use crate::parser::annotation;
use crate::parser::fence::{self, Span};

/// Group every annotated fence in `content` by example name.
///
/// Examples come back in order of first appearance and keep their blocks in
/// source order. The first block declaring a height sets the example height.
pub fn collect(content: &str) -> Vec<Example> {
    let mut examples: Vec<Example> = Vec::new();

    for span in fence::split(content) {
        let Span::Fence(fence) = span else {
            continue;
        };
        let Some(annotation) = annotation::parse(&fence.header) else {
            log::debug!("skipping unnamed fence `{}`", fence.header.trim());
            continue;
        };

        let height = annotation.height().map(str::to_string);
        let block = CodeBlock {
            extension: annotation.extension.to_string(),
            code: fence.body.to_string(),
            hidden: annotation.is_hidden(),
            height: height.clone(),
        };

        let idx = match examples.iter().position(|e| e.name == annotation.name) {
            Some(idx) => idx,
            None => {
                examples.push(Example {
                    name: annotation.name.to_string(),
                    blocks: Vec::new(),
                    options: ExampleOptions::default(),
                });
                examples.len() - 1
            }
        };
        let example = &mut examples[idx];
        example.blocks.push(block);
        if example.options.height.is_none() {
            example.options.height = height;
        }
    }

    examples
}
