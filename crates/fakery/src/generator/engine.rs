//! The generator: formatter dispatch, argument groups, seeding, and template
//! resolution.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};

use bon::Builder;
use tracing::{debug, trace};

use crate::generator::error::compute_suggestions;
use crate::generator::registry::{FormatterRegistry, RegisteredProvider};
use crate::generator::FakerError;
use crate::global::{seed_shared, shared_is_seeded};
use crate::parser::{Placeholder, Segment, Template, parse_template};
use crate::providers::{Context, Provider};
use crate::random::RandomSource;
use crate::types::{Args, Value};

/// Maximum nesting of formatter calls before giving up.
const MAX_DEPTH: usize = 64;

/// Owns an ordered set of providers and exposes their formatters.
///
/// Formatters are looked up in an explicit table that each
/// [`add_provider`](Generator::add_provider) call overwrites, so the provider
/// registered last wins for a given name.
///
/// # Example
///
/// ```
/// use fakery::{Args, Generator};
/// use fakery::providers::DynamicProvider;
///
/// let mut generator = Generator::builder().locale("en_US").build();
/// let fruit = DynamicProvider::new("fruit", vec!["apple".into(), "pear".into()]).unwrap();
/// generator.add_provider(fruit);
///
/// let value = generator.format("fruit", &Args::new()).unwrap();
/// assert!(["apple", "pear"].contains(&value.to_string().as_str()));
///
/// let sentence = generator.parse("I like {{ fruit }}.").unwrap();
/// assert!(sentence.starts_with("I like "));
/// ```
#[derive(Debug, Clone, Builder)]
pub struct Generator {
    /// Locale this generator was configured for, reported in errors.
    #[builder(into)]
    locale: Option<String>,

    /// Default weighting flag for providers added without explicit tags.
    #[builder(default = true)]
    use_weighting: bool,

    #[builder(skip)]
    registry: FormatterRegistry,

    /// Argument groups: group -> argument -> value.
    #[builder(skip)]
    arguments: BTreeMap<String, BTreeMap<String, Value>>,

    #[builder(skip)]
    random: RandomSource,

    #[builder(skip)]
    seeded: bool,

    /// Cache of tokenized templates keyed by their source text.
    #[builder(skip)]
    template_cache: RefCell<HashMap<String, Template>>,

    /// Current formatter nesting depth.
    #[builder(skip)]
    depth: Cell<usize>,
}

impl Default for Generator {
    fn default() -> Self {
        Generator::builder().build()
    }
}

impl Generator {
    /// Create a generator with no locale and weighting enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Locale this generator was configured for.
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Default weighting flag.
    pub fn use_weighting(&self) -> bool {
        self.use_weighting
    }

    // =========================================================================
    // Providers
    // =========================================================================

    /// Register a provider with this generator's default tags.
    ///
    /// The provider's name is used as its path.
    pub fn add_provider(&mut self, provider: impl Provider + 'static) {
        let path = provider.name().to_string();
        let registered =
            RegisteredProvider::new(path, None, self.use_weighting, Box::new(provider));
        self.add_registered(registered);
    }

    /// Register an already tagged provider.
    pub fn add_registered(&mut self, registered: RegisteredProvider) {
        let path = registered.path.clone();
        let locale = registered.locale.clone();
        let names = self.registry.insert(registered);
        debug!(
            provider = %path,
            locale = locale.as_deref().unwrap_or("-"),
            formatters = names.len(),
            "registered provider"
        );
    }

    /// Registered providers, newest first.
    pub fn providers(&self) -> impl Iterator<Item = &RegisteredProvider> {
        self.registry.providers()
    }

    /// The most recently registered provider with the given path.
    pub fn provider(&self, path: &str) -> Option<&RegisteredProvider> {
        self.providers()
            .find(|registered| registered.path.eq_ignore_ascii_case(path))
    }

    /// Sorted names of every available formatter.
    pub fn formatter_names(&self) -> impl Iterator<Item = &str> {
        self.registry.formatter_names()
    }

    /// Returns true if `name` resolves to a formatter.
    pub fn has_formatter(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// The provider currently answering for `name`.
    pub fn formatter_provider(&self, name: &str) -> Option<&RegisteredProvider> {
        self.registry.get(name)
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    /// Call a formatter by name.
    pub fn format(&self, name: &str, args: &Args) -> Result<Value, FakerError> {
        let registered = self
            .registry
            .get(name)
            .ok_or_else(|| self.unknown_formatter(name))?;

        let _guard = DepthGuard::enter(&self.depth, name)?;
        trace!(formatter = name, provider = %registered.path, "format");

        let ctx = Context::for_provider(self, registered);
        registered.provider().call(name, &ctx, args)
    }

    /// Call a formatter with no arguments.
    pub fn fake(&self, name: &str) -> Result<Value, FakerError> {
        self.format(name, &Args::new())
    }

    /// Replace every `{{ name }}` / `{{ name:group }}` token in `text`.
    ///
    /// A token with a group is called with that group's keyword arguments.
    /// Results are substituted as-is; they are not scanned for further tokens.
    pub fn parse(&self, text: &str) -> Result<String, FakerError> {
        let template = self.cached_template(text);
        let mut output = String::with_capacity(text.len());
        for segment in &template.segments {
            match segment {
                Segment::Literal(s) => output.push_str(s),
                Segment::Placeholder(placeholder) => {
                    let value = self.resolve_placeholder(placeholder)?;
                    output.push_str(&value.to_string());
                }
            }
        }
        Ok(output)
    }

    fn resolve_placeholder(&self, placeholder: &Placeholder) -> Result<Value, FakerError> {
        match &placeholder.group {
            Some(group) => {
                let arguments = self.arguments.get(group).ok_or_else(|| {
                    FakerError::UnknownArgumentGroup {
                        group: group.clone(),
                    }
                })?;
                let args = Args::from_keywords(arguments.clone());
                self.format(&placeholder.formatter, &args)
            }
            None => self.fake(&placeholder.formatter),
        }
    }

    fn unknown_formatter(&self, name: &str) -> FakerError {
        FakerError::UnknownFormatter {
            name: name.to_string(),
            locale: self.locale.clone(),
            suggestions: compute_suggestions(name, self.registry.formatter_names()),
        }
    }

    /// Clear the template cache.
    pub fn clear_template_cache(&self) {
        self.template_cache.borrow_mut().clear();
    }

    /// Return the number of cached templates.
    pub fn template_cache_len(&self) -> usize {
        self.template_cache.borrow().len()
    }

    /// Look up or tokenize and cache a template string.
    fn cached_template(&self, text: &str) -> Template {
        {
            let cache = self.template_cache.borrow();
            if let Some(template) = cache.get(text) {
                return template.clone();
            }
        }
        let template = parse_template(text);
        self.template_cache
            .borrow_mut()
            .insert(text.to_string(), template.clone());
        template
    }

    // =========================================================================
    // Argument groups
    // =========================================================================

    /// Set one argument within a group, creating the group if needed.
    pub fn set_argument(
        &mut self,
        group: impl Into<String>,
        argument: impl Into<String>,
        value: impl Into<Value>,
    ) {
        self.arguments
            .entry(group.into())
            .or_default()
            .insert(argument.into(), value.into());
    }

    /// Replace a group's whole argument set.
    pub fn set_arguments(&mut self, group: impl Into<String>, arguments: BTreeMap<String, Value>) {
        self.arguments.insert(group.into(), arguments);
    }

    /// Get one argument from a group.
    pub fn get_argument(&self, group: &str, argument: &str) -> Option<&Value> {
        self.arguments.get(group).and_then(|args| args.get(argument))
    }

    /// Get a group's argument set.
    pub fn get_arguments(&self, group: &str) -> Option<&BTreeMap<String, Value>> {
        self.arguments.get(group)
    }

    /// Remove one argument from a group, returning it.
    pub fn del_argument(&mut self, group: &str, argument: &str) -> Option<Value> {
        self.arguments
            .get_mut(group)
            .and_then(|args| args.remove(argument))
    }

    /// Remove a whole group, returning its arguments.
    pub fn del_arguments(&mut self, group: &str) -> Option<BTreeMap<String, Value>> {
        self.arguments.remove(group)
    }

    // =========================================================================
    // Randomness
    // =========================================================================

    /// The random source formatters draw from.
    pub fn random(&self) -> &RandomSource {
        &self.random
    }

    /// Replace the random source.
    pub fn set_random(&mut self, random: RandomSource) {
        self.random = random;
    }

    /// Seed this generator only.
    ///
    /// The first call detaches the generator from the shared source, so
    /// siblings that still use it are unaffected.
    pub fn seed_instance(&mut self, seed: u64) -> &mut Self {
        self.random.seed(seed);
        self.seeded = true;
        self
    }

    /// Seed the shared source used by every generator that was not seeded
    /// individually.
    pub fn seed(seed: u64) {
        seed_shared(seed);
    }

    /// Returns true if this generator or the shared source was seeded.
    pub fn is_seeded(&self) -> bool {
        self.seeded || shared_is_seeded()
    }
}

/// Tracks formatter nesting for the lifetime of one `format` call.
struct DepthGuard<'a> {
    depth: &'a Cell<usize>,
}

impl<'a> DepthGuard<'a> {
    fn enter(depth: &'a Cell<usize>, formatter: &str) -> Result<Self, FakerError> {
        if depth.get() >= MAX_DEPTH {
            return Err(FakerError::RecursionLimit {
                formatter: formatter.to_string(),
            });
        }
        depth.set(depth.get() + 1);
        Ok(Self { depth })
    }
}

impl Drop for DepthGuard<'_> {
    fn drop(&mut self) {
        self.depth.set(self.depth.get().saturating_sub(1));
    }
}
