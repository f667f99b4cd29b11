//! CLI command implementations.

mod doc;
mod generate;

pub use generate::{run_generate, GenerateArgs};
