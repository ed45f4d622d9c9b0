//! Lenient JSON recovery for model output
//!
//! Completion models are asked for bare JSON but regularly wrap it in
//! markdown fences or a sentence of prose. Recovery strips the fences, then
//! tries the widest bracketed span for the expected shape, then the whole
//! text. Nothing here fails: an answer that cannot be reduced to JSON comes
//! back as [`Recovered::Unrecoverable`] and the caller picks its default.
//!
//! The span is always first-opening to last-closing bracket. When the text
//! holds several bracketed spans the result covers all of them and usually
//! fails to parse; that limitation is accepted.

use regex::Regex;
use serde_json::{json, Value};
use std::sync::LazyLock;

/// Fence ending its line, with an optional language tag (```json, ```JSON, ```)
static TAGGED_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```[A-Za-z]*[ \t]*(?:\r?\n|$)").expect("fence pattern is valid")
});

const BARE_FENCE: &str = "```";

/// JSON shape a call site expects back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Array,
    Object,
}

impl Shape {
    /// Empty value of this shape
    pub fn default_value(&self) -> Value {
        match self {
            Shape::Array => json!([]),
            Shape::Object => json!({}),
        }
    }
}

/// Outcome of a recovery attempt
#[derive(Debug, Clone, PartialEq)]
pub enum Recovered {
    /// Some candidate parsed as JSON
    Parsed(Value),
    /// No candidate parsed
    Unrecoverable,
}

impl Recovered {
    pub fn into_value(self) -> Option<Value> {
        match self {
            Recovered::Parsed(value) => Some(value),
            Recovered::Unrecoverable => None,
        }
    }
}

/// Extracts a JSON value from raw model text
///
/// Array callers try the `[`..`]` span first and fall back to the `{`..`}`
/// span; object callers go straight to the `{`..`}` span. The whole cleaned
/// text is the last candidate.
pub fn recover(raw: &str, shape: Shape) -> Recovered {
    let stripped = strip_fences(raw);
    let cleaned = stripped.trim();

    if shape == Shape::Array {
        if let Some(value) = parse_span(cleaned, '[', ']') {
            return Recovered::Parsed(value);
        }
    }

    if let Some(value) = parse_span(cleaned, '{', '}') {
        return Recovered::Parsed(value);
    }

    match serde_json::from_str::<Value>(cleaned) {
        Ok(value) => Recovered::Parsed(value),
        Err(e) => {
            tracing::debug!(error = %e, ?shape, "No JSON candidate could be parsed");
            Recovered::Unrecoverable
        }
    }
}

/// Removes every markdown fence marker from `text`
pub fn strip_fences(text: &str) -> String {
    TAGGED_FENCE.replace_all(text, "").replace(BARE_FENCE, "")
}

/// Parses the span from the first `open` to the last `close`, inclusive
fn parse_span(text: &str, open: char, close: char) -> Option<Value> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    if start >= end {
        return None;
    }

    match serde_json::from_str(&text[start..=end]) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(error = %e, %open, "Bracketed span is not valid JSON");
            None
        }
    }
}
