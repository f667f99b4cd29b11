//! Template tokenizer.
//!
//! Produces a [`Template`] of literal and placeholder segments that the
//! generator resolves by calling formatters.

pub mod ast;
mod template;

pub use ast::*;
pub use template::parse_template;
