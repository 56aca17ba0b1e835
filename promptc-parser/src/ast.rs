//! Prompt assembly.
//!
//! A scanned token sequence is partitioned into maximal runs. Each run starts
//! at the beginning of the sequence or at a title token and continues up to
//! the next title token; each run becomes one [Prompt]. A run led by a title
//! token keeps it as the prompt's title, with the rest of the run as body.
//!
//! Structural rules are enforced here, fail-fast: a file may assemble into a
//! single untitled prompt (the file name is the fallback identifier source),
//! but once a file holds several prompts, every one of them needs a title.

use std::fmt;

use crate::casing::{self, CaseStyle};
use crate::token::{self, Kind, Token};

/// Structural failure raised while grouping tokens into prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssembleError {
    /// The token sequence held no prompts at all.
    NoPrompts,
    /// A file with more than one prompt has an untitled prompt at this
    /// zero-based index.
    MissingTitle { index: usize },
}

impl fmt::Display for AssembleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssembleError::NoPrompts => write!(f, "no prompts in file"),
            AssembleError::MissingTitle { index } => {
                write!(f, "prompt {index} has no title")
            }
        }
    }
}

impl std::error::Error for AssembleError {}

/// One logical unit of a source file: an optional title plus a body of text
/// and variable tokens. Each prompt becomes one generated function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub title: Option<Token>,
    pub body: Vec<Token>,
}

impl Prompt {
    /// Unique variable identifiers referenced by this prompt's body, in
    /// first-occurrence order, converted to `style`. De-duplication matches
    /// on the converted identifier, so raw spellings that collapse to the
    /// same name count once.
    ///
    /// The second value is the summed character length of the unique
    /// identifiers; backends feed it into their line-wrap decision.
    pub fn vars(&self, content: &[u8], style: CaseStyle) -> (Vec<String>, usize) {
        let mut names: Vec<String> = Vec::new();
        let mut total = 0;
        for tok in &self.body {
            if tok.kind != Kind::Var {
                continue;
            }
            let name = casing::convert(tok.get(content), style);
            if names.contains(&name) {
                continue;
            }
            total += name.chars().count();
            names.push(name);
        }
        (names, total)
    }
}

/// A parsed source file: name, raw contents, and assembled prompts.
///
/// Built once and never mutated; tokens inside the prompts index into
/// `content`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub name: String,
    pub content: Vec<u8>,
    pub prompts: Vec<Prompt>,
}

impl File {
    /// Scan and assemble `content` into a file record.
    ///
    /// `name` may carry the source file extension; only the stem is kept, as
    /// the fallback identifier source for a sole untitled prompt.
    pub fn parse(name: &str, content: Vec<u8>) -> Result<File, AssembleError> {
        let tokens = token::scan(&content);
        let prompts = assemble(&tokens)?;
        Ok(File {
            name: stem(name).to_string(),
            content,
            prompts,
        })
    }
}

fn stem(name: &str) -> &str {
    match name.rfind('.') {
        Some(0) | None => name,
        Some(idx) => &name[..idx],
    }
}

/// Partition a token sequence into prompts.
///
/// Fails fast: the first untitled prompt in a multi-prompt sequence aborts
/// assembly with its index; later prompts are not inspected.
pub fn assemble(tokens: &[Token]) -> Result<Vec<Prompt>, AssembleError> {
    let mut prompts: Vec<Prompt> = Vec::new();
    for &tok in tokens {
        if tok.kind == Kind::Title {
            prompts.push(Prompt {
                title: Some(tok),
                body: Vec::new(),
            });
        } else if let Some(prompt) = prompts.last_mut() {
            prompt.body.push(tok);
        } else {
            prompts.push(Prompt {
                title: None,
                body: vec![tok],
            });
        }
    }
    if prompts.is_empty() {
        return Err(AssembleError::NoPrompts);
    }
    if prompts.len() > 1 {
        if let Some(index) = prompts.iter().position(|p| p.title.is_none()) {
            return Err(AssembleError::MissingTitle { index });
        }
    }
    Ok(prompts)
}
