//! The user-facing facade over one or more locale generators.

mod optional;
mod unique;

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use bon::Builder;
use tracing::trace;

use crate::factory::{Catalog, DEFAULT_LOCALE, Factory, FactoryOptions, normalize_locale};
use crate::generator::{FakerError, Generator, compute_suggestions};
use crate::global::with_shared_rng;
use crate::providers::Provider;
use crate::random::{RandomSource, choices_distribution};
use crate::types::{Args, Value};

pub use optional::OptionalProxy;
pub use unique::UniqueProxy;

/// Which locales a [`Faker`] is built for.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LocaleSpec {
    /// The default locale (`en_US`).
    #[default]
    Default,
    /// One locale.
    Single(String),
    /// Several locales chosen uniformly per call.
    Many(Vec<String>),
    /// Several locales chosen with the given relative weights.
    Weighted(Vec<(String, f64)>),
}

impl From<&str> for LocaleSpec {
    fn from(locale: &str) -> Self {
        LocaleSpec::Single(locale.to_string())
    }
}

impl From<String> for LocaleSpec {
    fn from(locale: String) -> Self {
        LocaleSpec::Single(locale)
    }
}

impl From<Vec<String>> for LocaleSpec {
    fn from(locales: Vec<String>) -> Self {
        LocaleSpec::Many(locales)
    }
}

impl From<&[&str]> for LocaleSpec {
    fn from(locales: &[&str]) -> Self {
        LocaleSpec::Many(locales.iter().map(ToString::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for LocaleSpec {
    fn from(locales: [&str; N]) -> Self {
        LocaleSpec::Many(locales.iter().map(ToString::to_string).collect())
    }
}

impl From<Vec<(String, f64)>> for LocaleSpec {
    fn from(pairs: Vec<(String, f64)>) -> Self {
        LocaleSpec::Weighted(pairs)
    }
}

impl<const N: usize> From<[(&str, f64); N]> for LocaleSpec {
    fn from(pairs: [(&str, f64); N]) -> Self {
        LocaleSpec::Weighted(
            pairs
                .iter()
                .map(|(locale, weight)| (locale.to_string(), *weight))
                .collect(),
        )
    }
}

/// Options for [`Faker::with_options`].
#[derive(Debug, Builder)]
pub struct FakerOptions {
    #[builder(into, default)]
    pub locale: LocaleSpec,

    /// Provider paths for every generator; the whole catalog when unset.
    pub providers: Option<Vec<String>>,

    /// Extra provider paths, usually dynamic providers from include files.
    #[builder(default)]
    pub includes: Vec<String>,

    #[builder(default = true)]
    pub use_weighting: bool,

    /// Catalog to build from; the built-in one when unset.
    pub catalog: Option<Catalog>,
}

impl Default for FakerOptions {
    fn default() -> Self {
        FakerOptions::builder().build()
    }
}

/// Key of the unique proxy's history: formatter name and call arguments.
type CallKey = (String, Args);

/// Generates fake data for one or more locales.
///
/// With one locale every call goes straight to its generator. With several,
/// each formatter call picks one of the generators that implement the
/// formatter, weighted by locale when weights were given.
///
/// # Example
///
/// ```
/// use fakery::Faker;
///
/// let mut faker = Faker::new(["en_US", "de_DE"]).unwrap();
/// faker.seed_instance(4321);
/// let name = faker.fake("name").unwrap();
/// assert!(!name.to_string().is_empty());
/// assert!(faker.generator().is_err());
/// ```
#[derive(Debug)]
pub struct Faker {
    locales: Vec<String>,
    weights: Option<Vec<f64>>,
    generators: Vec<Generator>,
    /// Formatter name -> indices of generators implementing it.
    selection_cache: RefCell<HashMap<String, Rc<[usize]>>>,
    /// Values already returned through [`Faker::unique`].
    unique_seen: RefCell<HashMap<CallKey, HashSet<Value>>>,
}

impl Faker {
    /// Build a facade for `locale` with every built-in provider.
    pub fn new(locale: impl Into<LocaleSpec>) -> Result<Self, FakerError> {
        Self::with_options(FakerOptions::builder().locale(locale).build())
    }

    /// Build a facade from explicit options.
    pub fn with_options(options: FakerOptions) -> Result<Self, FakerError> {
        let (locales, weights) = resolve_locales(options.locale)?;
        let catalog = options.catalog.unwrap_or_else(Catalog::builtin);

        let generators = locales
            .iter()
            .map(|locale| {
                let factory_options = FactoryOptions::builder()
                    .locale(locale.clone())
                    .maybe_providers(options.providers.clone())
                    .includes(options.includes.clone())
                    .use_weighting(options.use_weighting)
                    .build();
                Factory::create(&catalog, factory_options)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            locales,
            weights,
            generators,
            selection_cache: RefCell::new(HashMap::new()),
            unique_seen: RefCell::new(HashMap::new()),
        })
    }

    /// Returns true when backed by more than one generator.
    pub fn is_multi_locale(&self) -> bool {
        self.generators.len() > 1
    }

    /// Normalized locales, in construction order.
    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    /// Locale weights, when constructed with weights.
    pub fn weights(&self) -> Option<&[f64]> {
        self.weights.as_deref()
    }

    /// All generators, parallel to [`locales`](Self::locales).
    pub fn generators(&self) -> &[Generator] {
        &self.generators
    }

    /// The generator for `locale` (normalized before lookup).
    pub fn generator_for(&self, locale: &str) -> Option<&Generator> {
        let locale = normalize_locale(locale);
        self.locales
            .iter()
            .position(|l| *l == locale)
            .map(|index| &self.generators[index])
    }

    // =========================================================================
    // Formatter calls
    // =========================================================================

    /// Call a formatter on the selected generator.
    pub fn format(&self, name: &str, args: &Args) -> Result<Value, FakerError> {
        self.select_generator(name)?.format(name, args)
    }

    /// Call a formatter with no arguments.
    pub fn fake(&self, name: &str) -> Result<Value, FakerError> {
        self.format(name, &Args::new())
    }

    /// Pick the generator that answers `name` for this call.
    pub fn select_generator(&self, name: &str) -> Result<&Generator, FakerError> {
        if let [generator] = self.generators.as_slice() {
            return Ok(generator);
        }

        let indexes = self.implementing(name);
        let index = match indexes.as_ref() {
            [] => return Err(self.unknown_formatter(name)),
            [index] => *index,
            _ => {
                let weights: Option<Vec<f64>> = self
                    .weights
                    .as_ref()
                    .map(|weights| indexes.iter().map(|&i| weights[i]).collect());
                let picked = with_shared_rng(|rng| {
                    choices_distribution(&indexes[..], weights.as_deref(), 1, rng)
                })?;
                picked.first().copied().ok_or(FakerError::EmptyChoices)?
            }
        };
        trace!(formatter = name, locale = %self.locales[index], "selected generator");
        Ok(&self.generators[index])
    }

    /// Indices of generators implementing `name`, cached per name.
    fn implementing(&self, name: &str) -> Rc<[usize]> {
        if let Some(indexes) = self.selection_cache.borrow().get(name) {
            return Rc::clone(indexes);
        }
        let indexes: Rc<[usize]> = self
            .generators
            .iter()
            .enumerate()
            .filter(|(_, generator)| generator.has_formatter(name))
            .map(|(index, _)| index)
            .collect();
        self.selection_cache
            .borrow_mut()
            .insert(name.to_string(), Rc::clone(&indexes));
        indexes
    }

    fn unknown_formatter(&self, name: &str) -> FakerError {
        let mut available: Vec<&str> = self
            .generators
            .iter()
            .flat_map(Generator::formatter_names)
            .collect();
        available.sort_unstable();
        available.dedup();
        FakerError::UnknownFormatter {
            name: name.to_string(),
            locale: None,
            suggestions: compute_suggestions(name, available.into_iter()),
        }
    }

    /// Number of formatter names with a cached generator selection.
    pub fn selection_cache_len(&self) -> usize {
        self.selection_cache.borrow().len()
    }

    // =========================================================================
    // Sub-proxies
    // =========================================================================

    /// Calls that never return the same value twice for the same arguments.
    pub fn unique(&self) -> UniqueProxy<'_> {
        UniqueProxy::new(self)
    }

    /// Calls that return `Null` with probability `1 - prob`.
    pub fn optional(&self) -> OptionalProxy<'_> {
        OptionalProxy::new(self)
    }

    // =========================================================================
    // Single-locale generator access
    // =========================================================================

    fn single(&self, operation: &str) -> Result<&Generator, FakerError> {
        match self.generators.as_slice() {
            [generator] => Ok(generator),
            _ => Err(FakerError::UnsupportedInMultiLocale {
                operation: operation.to_string(),
            }),
        }
    }

    /// The only generator.
    pub fn generator(&self) -> Result<&Generator, FakerError> {
        self.single("generator")
    }

    /// The only generator, mutably; for argument groups and providers.
    pub fn generator_mut(&mut self) -> Result<&mut Generator, FakerError> {
        match self.generators.as_mut_slice() {
            [generator] => Ok(generator),
            _ => Err(FakerError::UnsupportedInMultiLocale {
                operation: "generator_mut".to_string(),
            }),
        }
    }

    /// The only generator's random source.
    pub fn random(&self) -> Result<&RandomSource, FakerError> {
        Ok(self.single("random")?.random())
    }

    /// Expand a template with the only generator.
    pub fn parse(&self, text: &str) -> Result<String, FakerError> {
        self.single("parse")?.parse(text)
    }

    /// Register a provider with the only generator.
    pub fn add_provider(&mut self, provider: impl Provider + 'static) -> Result<(), FakerError> {
        match self.generators.as_mut_slice() {
            [generator] => {
                generator.add_provider(provider);
                self.selection_cache.get_mut().clear();
                Ok(())
            }
            _ => Err(FakerError::UnsupportedInMultiLocale {
                operation: "add_provider".to_string(),
            }),
        }
    }

    // =========================================================================
    // Seeding
    // =========================================================================

    /// Seed the shared random source. Affects every generator not seeded
    /// individually, in every facade.
    pub fn seed(seed: u64) {
        Generator::seed(seed);
    }

    /// Seed every generator of this facade individually.
    pub fn seed_instance(&mut self, seed: u64) -> &mut Self {
        for generator in &mut self.generators {
            generator.seed_instance(seed);
        }
        self
    }

    /// Seed the generator of one locale.
    pub fn seed_locale(&mut self, locale: &str, seed: u64) -> Result<&mut Self, FakerError> {
        let normalized = normalize_locale(locale);
        let index = self
            .locales
            .iter()
            .position(|l| *l == normalized)
            .ok_or(FakerError::InvalidLocale { locale: normalized })?;
        self.generators[index].seed_instance(seed);
        Ok(self)
    }
}

impl Clone for Faker {
    /// Clones generators and the selection cache; the unique history starts
    /// empty in the clone.
    fn clone(&self) -> Self {
        Self {
            locales: self.locales.clone(),
            weights: self.weights.clone(),
            generators: self.generators.clone(),
            selection_cache: self.selection_cache.clone(),
            unique_seen: RefCell::new(HashMap::new()),
        }
    }
}

/// Normalize, deduplicate and validate the requested locales.
fn resolve_locales(requested: LocaleSpec) -> Result<(Vec<String>, Option<Vec<f64>>), FakerError> {
    let (locales, weights): (Vec<String>, Option<Vec<f64>>) = match requested {
        LocaleSpec::Default => (vec![DEFAULT_LOCALE.to_string()], None),
        LocaleSpec::Single(locale) => (vec![locale], None),
        LocaleSpec::Many(locales) => (locales, None),
        LocaleSpec::Weighted(pairs) => {
            if let Some((locale, weight)) = pairs.iter().find(|(_, w)| !w.is_finite() || *w <= 0.0) {
                return Err(FakerError::InvalidWeights {
                    message: format!("weight for locale '{locale}' must be positive, got {weight}"),
                });
            }
            let (locales, weights) = pairs.into_iter().unzip();
            (locales, Some(weights))
        }
    };

    let mut seen = HashSet::new();
    let mut unique_locales = Vec::new();
    let mut unique_weights = Vec::new();
    for (index, locale) in locales.iter().enumerate() {
        let normalized = normalize_locale(locale);
        if seen.insert(normalized.clone()) {
            unique_locales.push(normalized);
            if let Some(weights) = &weights {
                unique_weights.push(weights[index]);
            }
        }
    }
    if unique_locales.is_empty() {
        unique_locales.push(DEFAULT_LOCALE.to_string());
    }
    let weights = weights.map(|_| unique_weights).filter(|w| !w.is_empty());
    Ok((unique_locales, weights))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locales_are_normalized_and_deduplicated() {
        let (locales, weights) =
            resolve_locales(LocaleSpec::from(["en-US", "de_DE", "en_US"])).unwrap();
        assert_eq!(locales, vec!["en_US", "de_DE"]);
        assert_eq!(weights, None);
    }

    #[test]
    fn weights_follow_deduplicated_locales() {
        let (locales, weights) =
            resolve_locales(LocaleSpec::from([("de_DE", 2.0), ("en_US", 1.0), ("de-DE", 5.0)]))
                .unwrap();
        assert_eq!(locales, vec!["de_DE", "en_US"]);
        assert_eq!(weights, Some(vec![2.0, 1.0]));
    }

    #[test]
    fn non_positive_weights_are_rejected() {
        let err = resolve_locales(LocaleSpec::from([("de_DE", 0.0)])).unwrap_err();
        assert!(matches!(err, FakerError::InvalidWeights { .. }));
    }

    #[test]
    fn empty_list_means_default_locale() {
        let (locales, _) = resolve_locales(LocaleSpec::Many(Vec::new())).unwrap();
        assert_eq!(locales, vec!["en_US"]);
    }
}
