//! Condition descriptions and actual-value rendering.
//!
//! Descriptions are templates with positional placeholders: `{0}` is the
//! argument name and `{1}`, `{2}`, ... are the condition's arguments. `{{` and
//! `}}` produce literal braces.

use std::fmt::{Debug, Write as _};

use crate::config;

/// Error produced when a description template cannot be formatted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TemplateError {
    /// A `{` was never closed.
    #[error("unclosed placeholder starting at byte {0}")]
    Unclosed(usize),

    /// A lone `}` appeared outside a placeholder.
    #[error("unmatched '}}' at byte {0}")]
    Unmatched(usize),

    /// A placeholder did not contain a non-negative integer.
    #[error("placeholder '{{{0}}}' is not a positional index")]
    NotAnIndex(String),

    /// A placeholder referred to an argument that does not exist.
    #[error("placeholder index {index} is out of range ({available} values available)")]
    OutOfRange { index: usize, available: usize },
}

/// Formats `template`, substituting `{0}` with `name` and `{n}` with `args[n - 1]`.
pub fn format_template(
    template: &str,
    name: &str,
    args: &[String],
) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len() + name.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' if chars.peek().is_some_and(|&(_, c)| c == '{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek().is_some_and(|&(_, c)| c == '}') => {
                chars.next();
                out.push('}');
            }
            '}' => return Err(TemplateError::Unmatched(pos)),
            '{' => {
                let mut key = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, c)) => key.push(c),
                        None => return Err(TemplateError::Unclosed(pos)),
                    }
                }
                let index: usize = key
                    .trim()
                    .parse()
                    .map_err(|_| TemplateError::NotAnIndex(key.clone()))?;
                match index {
                    0 => out.push_str(name),
                    n => {
                        let arg = args.get(n - 1).ok_or(TemplateError::OutOfRange {
                            index: n,
                            available: args.len() + 1,
                        })?;
                        out.push_str(arg);
                    }
                }
            }
            c => out.push(c),
        }
    }

    Ok(out)
}

/// Formats a description, falling back to the verbatim template when it is malformed.
pub fn describe(template: &str, name: &str, args: &[String]) -> String {
    match format_template(template, name, args) {
        Ok(text) => text,
        Err(error) => {
            tracing::debug!(
                template,
                %error,
                "condition description is malformed, using it verbatim"
            );
            template.to_owned()
        }
    }
}

/// Renders a value for use as a condition argument.
pub fn render<V: Debug + ?Sized>(value: &V) -> String {
    format!("{value:?}")
}

/// Renders the offending value for the "actual value" clause.
///
/// Returns `None` when the configuration disables the clause. Renderings
/// longer than the configured limit are cut and end with `…`.
pub fn render_actual<V: Debug + ?Sized>(value: &V) -> Option<String> {
    let config = config::current();
    if !config.show_actual_values {
        return None;
    }
    Some(truncate(render(value), config.max_actual_value_len))
}

pub(crate) fn truncate(mut text: String, max_chars: usize) -> String {
    if let Some((cut, _)) = text.char_indices().nth(max_chars) {
        text.truncate(cut);
        text.push('…');
    }
    text
}

/// Renders a list of values as `[a, b, c]`.
pub(crate) fn render_list<V: Debug>(values: &[V]) -> String {
    let mut out = String::from("[");
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{value:?}");
    }
    out.push(']');
    out
}
