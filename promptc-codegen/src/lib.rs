//! Target-language code generation for promptc
//!
//!     This crate turns assembled prompt files into source modules in a
//!     target language, one exported function per prompt.
//!
//! Architecture
//!
//!     - Backend trait: uniform interface every target language implements
//!     - BackendRegistry: centralized discovery and selection of backends
//!     - Backend implementations: one module per target under ./backends
//!
//!     This is a pure lib: it powers the promptc CLI but is shell agnostic.
//!     No code here writes to disk, prints, or reads env vars. Generation is
//!     atomic per file: a backend either returns the complete module bytes or
//!     a typed error, never partial output, so callers can guarantee a
//!     destination never observes a half-written module.
//!
//!     The file structure:
//!     .
//!     ├── error.rs                # GenError
//!     ├── backend.rs              # Backend trait and GenOptions
//!     ├── registry.rs             # BackendRegistry for discovery and selection
//!     ├── backends
//!     │   └── js.rs               # Reference backend (JS template literals)
//!     └── lib.rs
//!
//! Adding a backend
//!
//!     A backend owns its identifier casing, comment syntax, and
//!     interpolation syntax; everything structural (prompt grouping, variable
//!     extraction and de-duplication, the missing-title rules) is decided
//!     upstream in promptc-parser and shared by all backends. Implement the
//!     Backend trait and register the type in
//!     BackendRegistry::with_defaults.

pub mod backend;
pub mod backends;
pub mod error;
pub mod registry;

pub use backend::{Backend, GenOptions};
pub use error::GenError;
pub use registry::BackendRegistry;
