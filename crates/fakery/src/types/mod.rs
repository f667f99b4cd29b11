mod args;
mod choices;
mod value;

pub use args::Args;
pub use choices::Choices;
pub use value::Value;
