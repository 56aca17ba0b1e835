//! JavaScript backend.
//!
//! Emits an ES module with one exported function per prompt: a JSDoc block
//! with one `@param` line per unique variable, a function header whose
//! parameter list wraps to one name per line past the configured line width,
//! and a template-literal body reconstructed from the prompt's tokens with
//! `${...}` substitutions. Identifiers are lower camel case.

use crate::backend::{Backend, GenOptions};
use crate::error::GenError;
use promptc_parser::ast::{AssembleError, File, Prompt};
use promptc_parser::casing::{self, CaseStyle};
use promptc_parser::token::Kind;

/// Projected width of the header line around the identifier and the joined
/// parameter names.
const INLINE_HEADER_OVERHEAD: usize = 19;

/// Reference backend emitting documentation-commented template functions.
pub struct JsBackend;

impl Backend for JsBackend {
    fn name(&self) -> &str {
        "js"
    }

    fn description(&self) -> &str {
        "ES module with one exported template-literal function per prompt"
    }

    fn extension(&self) -> &str {
        "js"
    }

    fn generate(&self, file: &File, opts: &GenOptions) -> Result<Vec<u8>, GenError> {
        if file.prompts.is_empty() {
            return Err(AssembleError::NoPrompts.into());
        }
        let mut out = Vec::new();
        if let [prompt] = file.prompts.as_slice() {
            // A sole prompt may be untitled; the file name names the function.
            let name = match prompt.title {
                Some(title) => casing::convert(title.get(&file.content), CaseStyle::Camel),
                None => casing::convert(file.name.as_bytes(), CaseStyle::Camel),
            };
            gen_function(&mut out, prompt, &name, &file.content, opts);
            return Ok(out);
        }
        for (i, prompt) in file.prompts.iter().enumerate() {
            let title = match prompt.title {
                Some(title) => title,
                None => return Err(AssembleError::MissingTitle { index: i }.into()),
            };
            let name = casing::convert(title.get(&file.content), CaseStyle::Camel);
            gen_function(&mut out, prompt, &name, &file.content, opts);
            if i < file.prompts.len() - 1 {
                out.push(b'\n');
            }
        }
        Ok(out)
    }
}

fn gen_function(out: &mut Vec<u8>, prompt: &Prompt, name: &str, content: &[u8], opts: &GenOptions) {
    let (vars, length) = prompt.vars(content, CaseStyle::Camel);
    js_doc(out, &vars);
    function_header(out, name, &vars, length, opts.max_line_length);
    string_template(out, prompt, content);
}

fn js_doc(out: &mut Vec<u8>, vars: &[String]) {
    out.extend_from_slice(b"/**\n");
    for name in vars {
        out.extend_from_slice(b" * @param {string} ");
        out.extend_from_slice(name.as_bytes());
        out.push(b'\n');
    }
    out.extend_from_slice(b" * @returns {string}\n");
    out.extend_from_slice(b" */\n");
}

fn function_header(
    out: &mut Vec<u8>,
    name: &str,
    vars: &[String],
    length: usize,
    max_line_length: usize,
) {
    out.extend_from_slice(b"export function ");
    out.extend_from_slice(name.as_bytes());
    out.push(b'(');
    if name.len() + length + INLINE_HEADER_OVERHEAD > max_line_length {
        for (i, var) in vars.iter().enumerate() {
            if i == 0 {
                out.push(b'\n');
            }
            out.push(b'\t');
            out.extend_from_slice(var.as_bytes());
            out.extend_from_slice(b",\n");
        }
    } else {
        for (i, var) in vars.iter().enumerate() {
            out.extend_from_slice(var.as_bytes());
            if i < vars.len() - 1 {
                out.extend_from_slice(b", ");
            }
        }
    }
    out.extend_from_slice(b") {\n");
}

fn string_template(out: &mut Vec<u8>, prompt: &Prompt, content: &[u8]) {
    out.extend_from_slice(b"\treturn `");
    for tok in &prompt.body {
        if tok.kind == Kind::Var {
            out.extend_from_slice(b"${");
            out.extend_from_slice(casing::convert(tok.get(content), CaseStyle::Camel).as_bytes());
            out.push(b'}');
        } else {
            out.extend_from_slice(tok.get(content));
        }
    }
    out.extend_from_slice(b"`;\n}\n");
}
