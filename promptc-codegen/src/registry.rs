//! Backend registry for discovery and selection.
//!
//! This module provides a centralized registry for all available backends.
//! Backends can be registered and retrieved by name.

use crate::backend::{Backend, GenOptions};
use crate::error::GenError;
use promptc_parser::ast::File;
use std::collections::HashMap;

/// Registry of target-language backends.
///
/// # Examples
///
/// ```ignore
/// let mut registry = BackendRegistry::new();
/// registry.register(MyBackend);
///
/// let backend = registry.get("my-lang")?;
/// let bytes = backend.generate(&file, &opts)?;
/// ```
pub struct BackendRegistry {
    backends: HashMap<String, Box<dyn Backend>>,
}

impl BackendRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        BackendRegistry {
            backends: HashMap::new(),
        }
    }

    /// Register a backend
    ///
    /// If a backend with the same name already exists, it will be replaced.
    pub fn register<B: Backend + 'static>(&mut self, backend: B) {
        self.backends
            .insert(backend.name().to_string(), Box::new(backend));
    }

    /// Get a backend by name
    pub fn get(&self, name: &str) -> Result<&dyn Backend, GenError> {
        self.backends
            .get(name)
            .map(|b| b.as_ref())
            .ok_or_else(|| GenError::BackendNotFound(name.to_string()))
    }

    /// Check if a backend exists
    pub fn has(&self, name: &str) -> bool {
        self.backends.contains_key(name)
    }

    /// List all available backend names (sorted)
    pub fn list_backends(&self) -> Vec<String> {
        let mut names: Vec<_> = self.backends.keys().cloned().collect();
        names.sort();
        names
    }

    /// Generate a module for `file` using the named backend
    pub fn generate(
        &self,
        file: &File,
        backend: &str,
        opts: &GenOptions,
    ) -> Result<Vec<u8>, GenError> {
        self.get(backend)?.generate(file, opts)
    }

    /// Create a registry with the built-in backends
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::backends::js::JsBackend);

        registry
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
