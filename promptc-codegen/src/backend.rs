//! Backend trait definition.
//!
//! This module defines the Backend trait that all target-language
//! implementations must implement, plus the options they consume.

use crate::error::GenError;
use promptc_parser::ast::File;

/// Generation knobs consumed, not owned, by backends.
#[derive(Debug, Clone, Copy)]
pub struct GenOptions {
    /// Parameter lists wrap to one name per line once the projected function
    /// header width crosses this threshold.
    pub max_line_length: usize,
}

impl Default for GenOptions {
    fn default() -> Self {
        GenOptions {
            max_line_length: 80,
        }
    }
}

/// Trait for target-language backends.
///
/// Implementors translate an assembled [File] into target-language source
/// bytes, one exported function per prompt. Generation consumes the whole
/// file atomically: either the complete module is returned or an error is,
/// never partial output.
///
/// # Examples
///
/// ```ignore
/// struct MyBackend;
///
/// impl Backend for MyBackend {
///     fn name(&self) -> &str {
///         "my-lang"
///     }
///
///     fn extension(&self) -> &str {
///         "ml"
///     }
///
///     fn generate(&self, file: &File, opts: &GenOptions) -> Result<Vec<u8>, GenError> {
///         // Render every prompt into one module
///         todo!()
///     }
/// }
/// ```
pub trait Backend: Send + Sync {
    /// The name of this backend (e.g. "js")
    fn name(&self) -> &str;

    /// Optional description of this backend
    fn description(&self) -> &str {
        ""
    }

    /// File extension of generated modules, without the dot
    fn extension(&self) -> &str;

    /// Generate a complete source module for `file`
    fn generate(&self, file: &File, opts: &GenOptions) -> Result<Vec<u8>, GenError>;
}
