//! Description rewriting.
//!
//! Three passes run in a fixed order over the fence spans of a description:
//!
//! 1. the first renderable fence of each example gets an `<example>` tag
//!    in front of it and every renderable fence of an example loses its name,
//! 2. fences whose header contains `hidden` are removed together with the
//!    newline before them,
//! 3. remaining `name.extension[,segment]` headers become plain `extension`.
//!
//! Once a header has lost its name no pass matches it again, so rewriting
//! the output a second time changes nothing.

use crate::model::Example;
use crate::parser::annotation;
use crate::parser::fence::{self, Span};
use std::collections::HashSet;

pub fn rewrite(content: &str, examples: &[Example]) -> String {
    let spans = fence::split(content);
    let spans = insert_placeholders(spans, examples);
    let spans = remove_hidden(spans);
    let spans = strip_annotations(spans);
    fence::join(&spans)
}

fn placeholder(example: &Example) -> String {
    match example.options.height {
        Some(ref height) => format!(
            "<example name=\"{}\" height=\"{}\"></example>\n",
            example.name, height
        ),
        None => format!("<example name=\"{}\"></example>\n", example.name),
    }
}

fn insert_placeholders(spans: Vec<Span>, examples: &[Example]) -> Vec<Span> {
    let mut tagged: HashSet<String> = HashSet::new();
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let mut fence = match span {
            Span::Fence(fence) => fence,
            text => {
                out.push(text);
                continue;
            }
        };

        let renamed = annotation::parse(&fence.header)
            .filter(|a| a.is_renderable())
            .and_then(|a| {
                let example = examples.iter().find(|e| e.name == a.name)?;
                Some((example, format!("{}{}", a.extension, a.rest)))
            });

        if let Some((example, header)) = renamed {
            if tagged.insert(example.name.clone()) {
                out.push(Span::Text(placeholder(example)));
            }
            fence.header = header;
        }
        out.push(Span::Fence(fence));
    }

    out
}

fn remove_hidden(spans: Vec<Span>) -> Vec<Span> {
    let mut out: Vec<Span> = Vec::with_capacity(spans.len());

    for span in spans {
        if let Span::Fence(ref fence) = span {
            if annotation::is_hidden_header(&fence.header) {
                if let Some(Span::Text(prev)) = out.last_mut() {
                    if prev.ends_with('\n') {
                        prev.pop();
                    }
                }
                continue;
            }
        }
        out.push(span);
    }

    out
}

fn strip_annotations(mut spans: Vec<Span>) -> Vec<Span> {
    for span in &mut spans {
        if let Span::Fence(fence) = span {
            if let Some(header) = annotation::strip_name(&fence.header) {
                fence.header = header;
            }
        }
    }
    spans
}
