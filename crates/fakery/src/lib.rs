//! Localized fake data generation.
//!
//! Providers expose named formatters backed by static per-locale tables. A
//! [`Generator`] dispatches formatter calls to the provider that registered
//! the name last and expands `{{ token }}` templates. The [`factory`] builds
//! generators for a locale from a [`Catalog`](factory::Catalog), and [`Faker`]
//! fronts one or more of them.
//!
//! # Example
//!
//! ```
//! use fakery::{Faker, kwargs};
//!
//! let mut faker = Faker::new("en_US").unwrap();
//! faker.seed_instance(0);
//!
//! let address = faker.fake("address").unwrap();
//! assert!(address.to_string().contains('\n'));
//!
//! let words = faker.format("words", &kwargs! { "nb" => 4 }).unwrap();
//! assert_eq!(words.as_list().map(<[_]>::len), Some(4));
//! ```

pub mod factory;
pub mod generator;
pub mod global;
pub mod parser;
pub mod providers;
pub mod proxy;
pub mod random;
pub mod types;

pub use factory::{Catalog, Factory, FactoryOptions};
pub use generator::{FakerError, Generator, compute_suggestions};
pub use providers::{Context, DynamicProvider, Provider};
pub use proxy::{Faker, FakerOptions, LocaleSpec, OptionalProxy, UniqueProxy};
pub use types::{Args, Choices, Value};
