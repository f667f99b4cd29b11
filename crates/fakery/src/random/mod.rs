//! Random sources and weighted sampling.

mod sampler;
mod source;

pub use sampler::{choices_distribution, choices_distribution_unique, sample};
pub use source::RandomSource;
