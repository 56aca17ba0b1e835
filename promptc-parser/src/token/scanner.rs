//! Single-pass scanner for prompt source buffers.
//!
//! The scanner walks the buffer once, left to right, and is total: it never
//! fails, and any input it cannot interpret degenerates into text tokens.
//! State between bytes is an explicit tagged value, one variant per kind of
//! span currently open, each carrying the span's start offset. Nothing is
//! shared across invocations.
//!
//! Line structure matters only at line starts. A `.` opening a line starts a
//! directive candidate; the candidate becomes a title span when the bytes up
//! to the first space spell `.title`, and rejoins ordinary text otherwise.
//! Newlines immediately preceding a directive line are trimmed from the open
//! span, since directive lines never belong to the surrounding body. A `~`
//! opening a line is reserved and consumed without effect.
//!
//! `<!` opens a variable span anywhere, closing whatever span was open;
//! `>` closes it. Titles end at the newline. Text spans run across newlines
//! and close only at a variable, a directive line, or the end of the buffer.

use super::{Kind, Token};
use tracing::trace;

/// Directive keyword recognized at line start.
const DIRECTIVE_TITLE: &[u8] = b".title";

/// Scanner state between bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    InText { start: usize },
    InTitle { start: usize },
    InVar { start: usize },
    InDirective { start: usize },
}

/// Scan a buffer into its token sequence.
pub fn scan(content: &[u8]) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut state = State::Idle;
    let mut line_start = true;

    for (i, &byte) in content.iter().enumerate() {
        let at_line_start = line_start;
        line_start = byte == b'\n';

        if at_line_start {
            match byte {
                b'.' => {
                    if let Some(token) = close_before_directive(state, content, i) {
                        trace!(token = %token.stringify(content), "span closed before directive");
                        tokens.push(token);
                    }
                    state = State::InDirective { start: i };
                    continue;
                }
                // Reserved marker, consumed with no state change.
                b'~' => continue,
                _ => {}
            }
        }

        state = match state {
            State::InDirective { start } => match byte {
                b' ' => {
                    if &content[start..i] == DIRECTIVE_TITLE {
                        State::InTitle { start: i + 1 }
                    } else {
                        // Unrecognized directives are not errors; the line
                        // rejoins ordinary text from the `.`.
                        State::InText { start }
                    }
                }
                b'\n' => State::InText { start },
                b'<' if content.get(i + 1) == Some(&b'!') => {
                    tokens.push(Token::new(Kind::Text, start, i));
                    State::InVar { start: i + 2 }
                }
                _ => state,
            },
            State::InVar { start } => match byte {
                b'>' => {
                    tokens.push(Token::new(Kind::Var, start, i));
                    State::Idle
                }
                b'<' if content.get(i + 1) == Some(&b'!') => {
                    tokens.push(Token::new(Kind::Var, start, i));
                    State::InVar { start: i + 2 }
                }
                _ => state,
            },
            State::InTitle { start } => match byte {
                b'\n' => {
                    tokens.push(Token::new(Kind::Title, start, i));
                    State::Idle
                }
                b'<' if content.get(i + 1) == Some(&b'!') => {
                    tokens.push(Token::new(Kind::Title, start, i));
                    State::InVar { start: i + 2 }
                }
                _ => state,
            },
            State::InText { start } => match byte {
                b'<' if content.get(i + 1) == Some(&b'!') => {
                    tokens.push(Token::new(Kind::Text, start, i));
                    State::InVar { start: i + 2 }
                }
                _ => state,
            },
            State::Idle => match byte {
                b'<' if content.get(i + 1) == Some(&b'!') => State::InVar { start: i + 2 },
                // The newline leading into a directive line is dropped so no
                // empty text span opens between prompts.
                b'\n' if content.get(i + 1) == Some(&b'.') => State::Idle,
                _ => State::InText { start: i },
            },
        };
    }

    if let Some(token) = flush(state, content.len()) {
        trace!(token = %token.stringify(content), "span flushed at end of input");
        tokens.push(token);
    }
    tokens
}

/// Close the open span ahead of a directive at `directive_start`, trimming
/// the run of newlines that separates it from the directive line.
fn close_before_directive(state: State, content: &[u8], directive_start: usize) -> Option<Token> {
    let (kind, start) = kind_and_start(state)?;
    let mut end = directive_start;
    while end > start && content[end - 1] == b'\n' {
        end -= 1;
    }
    Some(Token::new(kind, start, end))
}

/// Close the open span at the end of the buffer.
fn flush(state: State, end: usize) -> Option<Token> {
    let (kind, start) = kind_and_start(state)?;
    Some(Token::new(kind, start, end))
}

fn kind_and_start(state: State) -> Option<(Kind, usize)> {
    match state {
        State::Idle => None,
        // An incomplete directive is just text that never earned a keyword.
        State::InText { start } | State::InDirective { start } => Some((Kind::Text, start)),
        State::InTitle { start } => Some((Kind::Title, start)),
        State::InVar { start } => Some((Kind::Var, start)),
    }
}
