//! # promptc-parser
//!
//! Scanner and prompt assembler for the promptc template language.
//!
//! A `.prompt` source file holds one or more prompts. Each prompt is an
//! optional `.title` directive line followed by a body of literal text with
//! embedded `<!name>` variable placeholders. This crate turns the raw bytes of
//! such a file into structured records, in two strictly one-way stages:
//!
//!     bytes --scan--> tokens --assemble--> prompts
//!
//! The [token] module owns the first stage: a single-pass scanner producing
//! categorized byte spans. The scanner is total; malformed input degenerates
//! into text tokens rather than being rejected. The [ast] module owns the
//! second stage: grouping the token sequence into [ast::Prompt] records and
//! enforcing the structural rules (a file may hold a single untitled prompt,
//! but never several prompts where one lacks a title).
//!
//! Code generation lives in the sibling promptc-codegen crate; this crate is
//! a pure library with no I/O and no knowledge of target languages. The
//! [casing] module carries the identifier case conversion that backends apply
//! to titles, file names, and variable names.

pub mod ast;
pub mod casing;
pub mod token;

pub use ast::{assemble, AssembleError, File, Prompt};
pub use casing::CaseStyle;
pub use token::{scan, Kind, Token};
