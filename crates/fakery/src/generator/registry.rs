//! Formatter registry mapping formatter names to the providers that own them.

use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::rc::Rc;

use crate::providers::Provider;

/// A provider together with the tags assigned when it was registered.
pub struct RegisteredProvider {
    /// Catalog path the provider came from (e.g. `"address"`).
    pub path: String,
    /// Locale the provider was resolved for; `None` when not localized.
    pub locale: Option<String>,
    /// Whether weighted tables are sampled by weight.
    pub use_weighting: bool,
    provider: Box<dyn Provider>,
}

impl RegisteredProvider {
    /// Wrap `provider` with its registration tags.
    pub fn new(
        path: impl Into<String>,
        locale: Option<String>,
        use_weighting: bool,
        provider: Box<dyn Provider>,
    ) -> Self {
        Self {
            path: path.into(),
            locale,
            use_weighting,
            provider,
        }
    }

    /// The wrapped provider.
    pub fn provider(&self) -> &dyn Provider {
        self.provider.as_ref()
    }

    /// Public formatter names of the wrapped provider.
    ///
    /// Names starting with `_` are private and never registered.
    pub fn public_formatters(&self) -> Vec<String> {
        self.provider
            .formatters()
            .into_iter()
            .filter(|name| !name.starts_with('_'))
            .map(str::to_string)
            .collect()
    }
}

impl Debug for RegisteredProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("RegisteredProvider")
            .field("path", &self.path)
            .field("name", &self.provider.name())
            .field("locale", &self.locale)
            .field("use_weighting", &self.use_weighting)
            .finish()
    }
}

/// Ordered provider list plus the flattened formatter table.
///
/// Providers are kept newest first. Registering a provider overwrites the
/// table entry of every formatter name it exposes, so the most recently
/// registered provider wins.
#[derive(Debug, Clone, Default)]
pub struct FormatterRegistry {
    providers: Vec<Rc<RegisteredProvider>>,
    formatters: BTreeMap<String, Rc<RegisteredProvider>>,
}

impl FormatterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider, overwriting same-named formatters.
    ///
    /// Returns the formatter names that were registered.
    pub fn insert(&mut self, registered: RegisteredProvider) -> Vec<String> {
        let registered = Rc::new(registered);
        let names = registered.public_formatters();
        for name in &names {
            self.formatters.insert(name.clone(), Rc::clone(&registered));
        }
        self.providers.insert(0, registered);
        names
    }

    /// Get the provider currently answering for `name`.
    pub fn get(&self, name: &str) -> Option<&RegisteredProvider> {
        self.formatters.get(name).map(Rc::as_ref)
    }

    /// Returns true if some provider answers for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Registered providers, newest first.
    pub fn providers(&self) -> impl Iterator<Item = &RegisteredProvider> {
        self.providers.iter().map(Rc::as_ref)
    }

    /// All formatter names in sorted order.
    pub fn formatter_names(&self) -> impl Iterator<Item = &str> {
        self.formatters.keys().map(String::as_str)
    }

    /// Number of distinct formatter names.
    pub fn len(&self) -> usize {
        self.formatters.len()
    }

    /// Returns true when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.formatters.is_empty()
    }
}
