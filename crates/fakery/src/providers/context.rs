//! The view of a generator that a provider gets while one of its formatters
//! runs.

use crate::generator::{FakerError, Generator, RegisteredProvider};
use crate::random::{RandomSource, sample};
use crate::types::{Args, Choices, Value};

/// Access to the owning generator plus the calling provider's tags.
///
/// Providers use it to draw randomness, sample tables, cross-call other
/// formatters, and expand templates. The low-level helpers (`numerify`,
/// `random_element`, ...) live in [`base`](super::base).
#[derive(Clone, Copy)]
pub struct Context<'g> {
    generator: &'g Generator,
    use_weighting: bool,
    locale: Option<&'g str>,
}

impl<'g> Context<'g> {
    /// A context for code running outside any registered provider.
    pub fn new(generator: &'g Generator) -> Self {
        Self {
            generator,
            use_weighting: generator.use_weighting(),
            locale: generator.locale(),
        }
    }

    pub(crate) fn for_provider(generator: &'g Generator, registered: &'g RegisteredProvider) -> Self {
        Self {
            generator,
            use_weighting: registered.use_weighting,
            locale: registered.locale.as_deref(),
        }
    }

    /// The same context with weighting switched on or off.
    pub fn with_weighting(self, use_weighting: bool) -> Self {
        Self {
            use_weighting,
            ..self
        }
    }

    /// The owning generator.
    pub fn generator(&self) -> &'g Generator {
        self.generator
    }

    /// The generator's random source.
    pub fn random(&self) -> &'g RandomSource {
        self.generator.random()
    }

    /// Whether weighted tables are sampled by weight.
    pub fn use_weighting(&self) -> bool {
        self.use_weighting
    }

    /// Locale the calling provider was resolved for.
    pub fn locale(&self) -> Option<&'g str> {
        self.locale
    }

    /// Call another formatter on the owning generator.
    pub fn format(&self, name: &str, args: &Args) -> Result<Value, FakerError> {
        self.generator.format(name, args)
    }

    /// Call another formatter with no arguments and render it as text.
    pub fn fake(&self, name: &str) -> Result<String, FakerError> {
        self.generator.fake(name).map(|value| value.to_string())
    }

    /// Expand `{{ token }}` placeholders through the owning generator.
    pub fn parse(&self, text: &str) -> Result<String, FakerError> {
        self.generator.parse(text)
    }

    /// Draw `length` values (random count when `None`) from `choices`.
    pub fn random_elements<T: Clone>(
        &self,
        choices: Choices<'_, T>,
        length: Option<usize>,
        unique: bool,
    ) -> Result<Vec<T>, FakerError> {
        let use_weighting = self.use_weighting;
        self.random()
            .with_rng(|rng| sample(choices, length, unique, use_weighting, rng))
    }

    /// Draw exactly one value from `choices`.
    pub fn random_element<T: Clone>(&self, choices: Choices<'_, T>) -> Result<T, FakerError> {
        self.random_elements(choices, Some(1), false)?
            .pop()
            .ok_or(FakerError::EmptyChoices)
    }

    /// Draw `length` values with replacement.
    pub fn random_choices<T: Clone>(
        &self,
        choices: Choices<'_, T>,
        length: Option<usize>,
    ) -> Result<Vec<T>, FakerError> {
        self.random_elements(choices, length, false)
    }

    /// Draw `length` distinct values.
    pub fn random_sample<T: Clone>(
        &self,
        choices: Choices<'_, T>,
        length: Option<usize>,
    ) -> Result<Vec<T>, FakerError> {
        self.random_elements(choices, length, true)
    }

    /// Pick one entry of a static string table.
    pub fn pick(&self, table: &[&'static str]) -> Result<&'static str, FakerError> {
        self.random_element(Choices::uniform(table))
    }

    /// Pick one entry of a weighted static string table.
    pub fn pick_weighted(&self, table: &[(&'static str, f64)]) -> Result<&'static str, FakerError> {
        self.random_element(Choices::weighted(table))
    }

    /// Pick a template from `formats` and expand it.
    pub fn parse_one_of(&self, formats: &[&'static str]) -> Result<String, FakerError> {
        let pattern = self.pick(formats)?;
        self.parse(pattern)
    }

    /// Pick a weighted template from `formats` and expand it.
    pub fn parse_one_of_weighted(&self, formats: &[(&'static str, f64)]) -> Result<String, FakerError> {
        let pattern = self.pick_weighted(formats)?;
        self.parse(pattern)
    }
}
