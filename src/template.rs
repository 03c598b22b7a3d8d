//! `{placeholder}` substitution for recorded step text.
//!
//! Recorded URLs and input values may reference columns of an input row,
//! e.g. `https://example.com/candidates/{candidateId}`. The syntax is the
//! brace syntax used by the recorder: `{name}` is replaced by the input
//! named `name`, `{{` and `}}` produce literal braces.

use crate::data::WorkflowInputs;
use crate::error::TemplateError;

/// A parsed piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Variable(String),
}

/// Splits a template into literal text and variable references.
pub fn parse(template: &str) -> Result<Vec<Segment>, TemplateError> {
    let mut segments = Vec::new();
    let mut text = String::new();
    let mut chars = template.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        match c {
            '{' if matches!(chars.peek(), Some((_, '{'))) => {
                chars.next();
                text.push('{');
            }
            '{' => {
                let mut name = String::new();
                let mut closed = false;
                for (_, inner) in chars.by_ref() {
                    match inner {
                        '}' => {
                            closed = true;
                            break;
                        }
                        '{' => break,
                        other => name.push(other),
                    }
                }
                if !closed {
                    return Err(TemplateError::UnbalancedBrace {
                        brace: '{',
                        position,
                    });
                }
                if !text.is_empty() {
                    segments.push(Segment::Text(std::mem::take(&mut text)));
                }
                segments.push(Segment::Variable(name.trim().to_string()));
            }
            '}' if matches!(chars.peek(), Some((_, '}'))) => {
                chars.next();
                text.push('}');
            }
            '}' => {
                return Err(TemplateError::UnbalancedBrace {
                    brace: '}',
                    position,
                });
            }
            other => text.push(other),
        }
    }

    if !text.is_empty() {
        segments.push(Segment::Text(text));
    }
    Ok(segments)
}

/// Substitutes every placeholder, failing on the first unknown variable.
pub fn render(template: &str, inputs: &WorkflowInputs) -> Result<String, TemplateError> {
    let mut rendered = String::with_capacity(template.len());
    for segment in parse(template)? {
        match segment {
            Segment::Text(text) => rendered.push_str(&text),
            Segment::Variable(name) => match inputs.get(&name) {
                Some(value) => rendered.push_str(value),
                None => return Err(TemplateError::MissingVariable(name)),
            },
        }
    }
    Ok(rendered)
}

/// Like [`render`], but returns the template unchanged when substitution fails.
pub fn render_lenient(template: &str, inputs: &WorkflowInputs) -> String {
    match render(template, inputs) {
        Ok(rendered) => rendered,
        Err(e) => {
            tracing::warn!(error = %e, "Placeholder substitution failed, keeping text as recorded");
            template.to_string()
        }
    }
}

/// Names of the variables a template references, in order of first use.
pub fn placeholders(template: &str) -> Result<Vec<String>, TemplateError> {
    let mut names: Vec<String> = Vec::new();
    for segment in parse(template)? {
        if let Segment::Variable(name) = segment {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    Ok(names)
}
