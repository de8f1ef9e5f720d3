//! Core vocabulary for Subglot, the subtitle translation pipeline.
//!
//! Everything here is pure data and pure functions; no I/O, no HTTP
//! types. The provider dispatch layer builds on these.
//!
//! # Architecture
//!
//! - [`types::Dialect`]: the closed set of wire-format dialects
//! - [`types`]: per-dialect request body shapes and the translation result
//! - [`selection::ModelSelection`]: resolved per-call configuration
//! - [`prompt`]: the fixed translation instruction frame
//! - [`error::TranslateError`]: the classified failure taxonomy

pub mod error;
pub mod prompt;
pub mod selection;
pub mod types;

// Re-export main types for convenience
pub use error::TranslateError;
pub use selection::ModelSelection;
pub use types::{ChatMessage, Dialect, TextOrigin, Translation};
