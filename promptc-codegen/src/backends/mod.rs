//! Backend implementations.

pub mod js;

pub use js::JsBackend;
