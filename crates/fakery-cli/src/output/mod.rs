//! Rendering of results and errors.

mod diagnostic;
pub mod table;

pub use diagnostic::FakerDiagnostic;
