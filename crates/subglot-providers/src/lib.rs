//! Provider dispatch layer for Subglot.
//!
//! Adapts one translation call to whichever chat completion API the user
//! selected, without per-provider client code.
//!
//! # Architecture
//!
//! - [`registry`]: static catalog of selectable backends
//! - [`encode`]: per-dialect request construction (pure, no I/O)
//! - [`decode`]: canonical extraction, fallback probes, raw dump
//! - [`transport::Transport`]: the HTTP seam, with a reqwest impl
//! - [`client::Translator`]: the orchestrator tying it all together

pub mod client;
pub mod decode;
pub mod encode;
pub mod registry;
pub mod transport;

// Re-export main types for convenience
pub use client::Translator;
pub use decode::decode;
pub use encode::{encode, EncodedRequest, TEMPERATURE};
pub use registry::{default_endpoint_for, find_profile, ProviderProfile, PROFILES};
pub use transport::{RawResponse, ReqwestTransport, Transport};
