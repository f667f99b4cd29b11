//! Formatter calls that never repeat a value.

use tracing::debug;

use crate::generator::FakerError;
use crate::proxy::Faker;
use crate::types::{Args, Value};

/// Attempts before giving up on finding an unseen value.
pub const UNIQUE_ATTEMPTS: usize = 1000;

/// Wraps a [`Faker`] so each `(formatter, args)` call returns values not
/// returned before for the same call.
///
/// The history lives in the facade and survives between `unique()` calls;
/// [`clear`](UniqueProxy::clear) resets it.
///
/// # Example
///
/// ```
/// use fakery::{Args, Faker};
///
/// let faker = Faker::new("en_US").unwrap();
/// let digits: Vec<_> = (0..10)
///     .map(|_| faker.unique().fake("random_digit").unwrap())
///     .collect();
/// assert_eq!(digits.iter().collect::<std::collections::HashSet<_>>().len(), 10);
/// assert!(faker.unique().fake("random_digit").is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UniqueProxy<'f> {
    faker: &'f Faker,
}

impl<'f> UniqueProxy<'f> {
    pub(crate) fn new(faker: &'f Faker) -> Self {
        Self { faker }
    }

    /// Forget every value returned so far.
    pub fn clear(&self) {
        self.faker.unique_seen.borrow_mut().clear();
    }

    /// Call a formatter until it yields a value not seen for these arguments.
    ///
    /// The generator is selected once per call. `Null` counts as a value.
    pub fn format(&self, name: &str, args: &Args) -> Result<Value, FakerError> {
        let generator = self.faker.select_generator(name)?;
        let key = (name.to_string(), args.clone());

        for _ in 0..UNIQUE_ATTEMPTS {
            let value = generator.format(name, args)?;
            let mut seen = self.faker.unique_seen.borrow_mut();
            let history = seen.entry(key.clone()).or_default();
            if history.insert(value.clone()) {
                return Ok(value);
            }
        }

        debug!(formatter = name, attempts = UNIQUE_ATTEMPTS, "unique values exhausted");
        Err(FakerError::UniquenessExhausted {
            formatter: name.to_string(),
            attempts: UNIQUE_ATTEMPTS,
        })
    }

    /// Call a formatter with no arguments.
    pub fn fake(&self, name: &str) -> Result<Value, FakerError> {
        self.format(name, &Args::new())
    }
}
