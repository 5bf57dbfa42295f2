//! Response classification: decide whether generated text renders as code.
//!
//! This is a substring heuristic, not a Markdown parser. Any fence or schema
//! marker makes the whole response Code, and every fence delimiter is cut out
//! wherever it appears. An unterminated fence still classifies as Code.

use std::ops::Range;

/// Plain code-fence delimiter.
pub const FENCE: &str = "```";

/// Liquid settings block opener.
pub const SCHEMA_MARKER: &str = "{% schema %}";

/// Delimiters removed from Code payloads, longest first.
const STRIPPED_FENCES: [&str; 3] = ["```liquid", "```html", FENCE];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Code,
    Prose,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedResponse {
    pub kind: Kind,
    pub payload: String,
}

impl ClassifiedResponse {
    pub fn is_code(&self) -> bool {
        self.kind == Kind::Code
    }
}

/// Classify raw model output and strip fence delimiters from code.
pub fn classify(raw: &str) -> ClassifiedResponse {
    if raw.contains(FENCE) || raw.contains(SCHEMA_MARKER) {
        ClassifiedResponse {
            kind: Kind::Code,
            payload: strip_fences(raw),
        }
    } else {
        ClassifiedResponse {
            kind: Kind::Prose,
            payload: raw.to_string(),
        }
    }
}

/// Byte ranges of the fence delimiters `classify` removes, in order.
///
/// Scans left to right and takes the longest delimiter starting at each
/// match, so "```liquid" is one span rather than "```" plus text.
///
/// A run of more than three backticks splits at its first three, so the tag
/// after "````liquid" is kept: the span is the leading "```" and the payload
/// keeps "`liquid".
pub fn fence_spans(raw: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut pos = 0;

    while let Some(offset) = raw[pos..].find(FENCE) {
        let start = pos + offset;
        let rest = &raw[start..];
        let len = STRIPPED_FENCES
            .iter()
            .find(|f| rest.starts_with(**f))
            .map_or(FENCE.len(), |f| f.len());
        spans.push(start..start + len);
        pos = start + len;
    }

    spans
}

fn strip_fences(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut last = 0;
    for span in fence_spans(raw) {
        out.push_str(&raw[last..span.start]);
        last = span.end;
    }
    out.push_str(&raw[last..]);
    out
}
