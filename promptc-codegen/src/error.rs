//! Typed errors for the code generation layer.

use promptc_parser::ast::AssembleError;
use std::fmt;

/// Error that can occur during generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    /// Backend not found in registry
    BackendNotFound(String),
    /// The file's prompt structure cannot be generated
    Structure(AssembleError),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::BackendNotFound(name) => write!(f, "Backend '{name}' not found"),
            GenError::Structure(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenError::Structure(err) => Some(err),
            GenError::BackendNotFound(_) => None,
        }
    }
}

impl From<AssembleError> for GenError {
    fn from(err: AssembleError) -> Self {
        GenError::Structure(err)
    }
}
