//! Token types shared across the scanner, assembler, and tooling.
//!
//! A token is a categorized half-open byte span `[start, end)` into the
//! buffer it was scanned from. Tokens never own text; callers hand the buffer
//! back in to resolve content. Spans are produced in document order with
//! non-decreasing starts and never overlap, though adjacent spans may touch.

pub mod scanner;

pub use scanner::scan;

use serde::Serialize;
use std::fmt;

/// Token categories produced by the scanner.
///
/// `RawBlock` is reserved for a future block-literal syntax; the current
/// scanner never produces it and no backend consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Title,
    Text,
    Var,
    RawBlock,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Title => "title",
            Kind::Text => "text",
            Kind::Var => "var",
            Kind::RawBlock => "rawblock",
        };
        f.write_str(name)
    }
}

/// A categorized span of source bytes.
///
/// Invariant: `start <= end <= buffer.len()` for the buffer the token was
/// scanned from. A zero-length span is legal and renders as nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: Kind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(kind: Kind, start: usize, end: usize) -> Self {
        Token { kind, start, end }
    }

    /// The raw bytes this token spans.
    pub fn get<'a>(&self, content: &'a [u8]) -> &'a [u8] {
        &content[self.start..self.end]
    }

    /// Debug rendering: `kind:\t[start:end]\t"content"`.
    ///
    /// A span that does not fit `content` renders as `INVALID BOUNDS` so this
    /// stays usable on tokens paired with the wrong buffer.
    pub fn stringify(&self, content: &[u8]) -> String {
        let mut out = String::with_capacity(self.end.saturating_sub(self.start) + 24);
        out.push_str(&format!("{}:\t[{}:{}]\t", self.kind, self.start, self.end));
        if self.start > self.end || self.end > content.len() {
            out.push_str("INVALID BOUNDS");
        } else {
            out.push('"');
            out.push_str(&String::from_utf8_lossy(self.get(content)));
            out.push('"');
        }
        out
    }
}

/// Render a whole token sequence, one token per line.
pub fn stringify_tokens(tokens: &[Token], content: &[u8]) -> String {
    if content.is_empty() {
        return "no content".to_string();
    }
    if tokens.is_empty() {
        return "no tokens".to_string();
    }
    tokens
        .iter()
        .map(|tok| tok.stringify(content))
        .collect::<Vec<_>>()
        .join("\n")
}
