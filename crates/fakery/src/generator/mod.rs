//! Formatter dispatch and template resolution.
//!
//! A [`Generator`] owns registered providers, resolves formatter names to the
//! provider that registered them last, and expands `{{ token }}` templates.

mod engine;
mod error;
mod registry;

pub use engine::Generator;
pub use error::{FakerError, compute_suggestions};
pub use registry::{FormatterRegistry, RegisteredProvider};
