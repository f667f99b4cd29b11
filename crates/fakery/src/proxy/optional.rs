//! Formatter calls that sometimes return nothing.

use crate::generator::FakerError;
use crate::kwargs;
use crate::proxy::Faker;
use crate::types::{Args, Value};

/// Default probability of getting a real value.
pub const DEFAULT_PROB: f64 = 0.5;

/// Wraps a [`Faker`] so calls return `Null` with probability `1 - prob`.
///
/// `prob` is read from a `prob` keyword argument and removed before the
/// formatter sees the arguments.
///
/// # Example
///
/// ```
/// use fakery::{Args, Faker};
///
/// let faker = Faker::new("en_US").unwrap();
/// let always = faker.optional().format("first_name", &Args::new().kwarg("prob", 1.0)).unwrap();
/// assert!(!always.is_null());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OptionalProxy<'f> {
    faker: &'f Faker,
}

impl<'f> OptionalProxy<'f> {
    pub(crate) fn new(faker: &'f Faker) -> Self {
        Self { faker }
    }

    /// Call `name` with probability `prob`, else return `Null`.
    ///
    /// Fails unless `0 < prob <= 1`.
    pub fn format(&self, name: &str, args: &Args) -> Result<Value, FakerError> {
        let mut args = args.clone();
        let prob = match args.take_keyword("prob") {
            None | Some(Value::Null) => DEFAULT_PROB,
            Some(value) => value
                .as_float()
                .ok_or_else(|| FakerError::invalid_argument(name, "prob", "expected a number"))?,
        };
        if !(prob > 0.0 && prob <= 1.0) {
            return Err(FakerError::InvalidProbability { prob });
        }

        let generator = self.faker.select_generator(name)?;
        let chance = (prob * 100.0).trunc() as i64;
        let hit = self
            .faker
            .format("boolean", &kwargs! { "chance_of_getting_true" => chance })?;
        if hit.as_bool() == Some(true) {
            generator.format(name, &args)
        } else {
            Ok(Value::Null)
        }
    }

    /// Call a formatter with the default probability.
    pub fn fake(&self, name: &str) -> Result<Value, FakerError> {
        self.format(name, &Args::new())
    }
}
