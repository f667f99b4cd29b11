//! Providers: named bundles of formatters backed by static data tables.
//!
//! A provider answers [`Provider::call`] for each name in
//! [`Provider::formatters`]. Formatters receive a [`Context`] giving access to
//! the owning generator's randomness, templates, and other formatters.

pub mod address;
pub mod base;
mod context;
pub mod color;
pub mod credit_card;
pub mod date_time;
pub mod dynamic;
pub mod internet;
pub mod lorem;
pub mod misc;
pub mod person;
pub mod phone_number;

use crate::generator::FakerError;
use crate::types::{Args, Value};

pub use base::BaseProvider;
pub use context::Context;
pub use dynamic::DynamicProvider;

/// A named set of formatters.
pub trait Provider {
    /// Provider name, used as its path when added directly to a generator.
    fn name(&self) -> &str;

    /// Formatter names this provider answers for.
    ///
    /// Names starting with `_` are private and never registered.
    fn formatters(&self) -> Vec<&str>;

    /// Produce a value for `formatter`.
    fn call(&self, formatter: &str, ctx: &Context<'_>, args: &Args) -> Result<Value, FakerError>;
}
