//! The set of provider modules a factory can build generators from.

use std::collections::BTreeSet;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::path::Path;
use std::rc::Rc;

use crate::factory::DEFAULT_LOCALE;
use crate::generator::FakerError;
use crate::providers::address::{self, AddressProvider};
use crate::providers::color::{self, ColorProvider};
use crate::providers::credit_card::{self, CreditCardProvider};
use crate::providers::date_time::DateTimeProvider;
use crate::providers::internet::{self, InternetProvider};
use crate::providers::lorem::{self, LoremProvider};
use crate::providers::misc::MiscProvider;
use crate::providers::person::{self, PersonProvider};
use crate::providers::phone_number::{self, PhoneNumberProvider};
use crate::providers::{BaseProvider, Provider, dynamic};

type Constructor = Rc<dyn Fn(Option<&str>) -> Option<Box<dyn Provider>>>;

/// How a module relates to locales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Localization {
    /// One provider serves every locale.
    None,
    /// Per-locale providers, with a fallback for unsupported locales.
    Localized {
        locales: Vec<String>,
        default_locale: String,
    },
}

/// A catalog entry: a provider path and how to build its provider.
#[derive(Clone)]
pub struct ProviderModule {
    path: String,
    localization: Localization,
    build: Constructor,
}

impl ProviderModule {
    /// A module whose provider ignores the locale.
    pub fn unlocalized<P, F>(path: impl Into<String>, build: F) -> Self
    where
        P: Provider + 'static,
        F: Fn() -> P + 'static,
    {
        Self {
            path: path.into(),
            localization: Localization::None,
            build: Rc::new(move |_: Option<&str>| Some(Box::new(build()) as Box<dyn Provider>)),
        }
    }

    /// A module with one provider per locale in `locales`.
    ///
    /// `build` returns `None` for locales it has no table for.
    pub fn localized<P, F>(
        path: impl Into<String>,
        locales: &[&str],
        default_locale: &str,
        build: F,
    ) -> Self
    where
        P: Provider + 'static,
        F: Fn(&str) -> Option<P> + 'static,
    {
        Self {
            path: path.into(),
            localization: Localization::Localized {
                locales: locales.iter().map(ToString::to_string).collect(),
                default_locale: default_locale.to_string(),
            },
            build: Rc::new(move |locale: Option<&str>| {
                locale
                    .and_then(&build)
                    .map(|provider| Box::new(provider) as Box<dyn Provider>)
            }),
        }
    }

    /// Catalog path of this module.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Locale metadata of this module.
    pub fn localization(&self) -> &Localization {
        &self.localization
    }

    /// Returns true if the module has per-locale providers.
    pub fn is_localized(&self) -> bool {
        matches!(self.localization, Localization::Localized { .. })
    }

    /// The locale this module would actually use for `requested`.
    ///
    /// `None` for unlocalized modules.
    pub fn resolve_locale(&self, requested: &str) -> Option<String> {
        match &self.localization {
            Localization::None => None,
            Localization::Localized {
                locales,
                default_locale,
            } => {
                if locales.iter().any(|locale| locale == requested) {
                    Some(requested.to_string())
                } else if locales.iter().any(|locale| locale == default_locale) {
                    Some(default_locale.clone())
                } else {
                    Some(DEFAULT_LOCALE.to_string())
                }
            }
        }
    }

    /// Instantiate the provider for a resolved locale.
    pub fn instantiate(&self, locale: Option<&str>) -> Option<Box<dyn Provider>> {
        (self.build)(locale)
    }
}

impl Debug for ProviderModule {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ProviderModule")
            .field("path", &self.path)
            .field("localization", &self.localization)
            .finish_non_exhaustive()
    }
}

/// Ordered provider modules.
///
/// Order is registration order and decides precedence: a generator built
/// from the catalog lets later modules override same-named formatters of
/// earlier ones.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    modules: Vec<ProviderModule>,
}

impl Catalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every built-in provider, `base` first.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.register(ProviderModule::unlocalized("base", || BaseProvider));
        catalog.register(ProviderModule::localized(
            "address",
            address::LOCALES,
            address::DEFAULT_LOCALE,
            AddressProvider::for_locale,
        ));
        catalog.register(ProviderModule::localized(
            "color",
            color::LOCALES,
            color::DEFAULT_LOCALE,
            ColorProvider::for_locale,
        ));
        catalog.register(ProviderModule::localized(
            "credit_card",
            credit_card::LOCALES,
            credit_card::DEFAULT_LOCALE,
            CreditCardProvider::for_locale,
        ));
        catalog.register(ProviderModule::unlocalized("date_time", || DateTimeProvider));
        catalog.register(ProviderModule::localized(
            "internet",
            internet::LOCALES,
            internet::DEFAULT_LOCALE,
            InternetProvider::for_locale,
        ));
        catalog.register(ProviderModule::localized(
            "lorem",
            lorem::LOCALES,
            lorem::DEFAULT_LOCALE,
            LoremProvider::for_locale,
        ));
        catalog.register(ProviderModule::unlocalized("misc", || MiscProvider));
        catalog.register(ProviderModule::localized(
            "person",
            person::LOCALES,
            person::DEFAULT_LOCALE,
            PersonProvider::for_locale,
        ));
        catalog.register(ProviderModule::localized(
            "phone_number",
            phone_number::LOCALES,
            phone_number::DEFAULT_LOCALE,
            PhoneNumberProvider::for_locale,
        ));
        catalog
    }

    /// Add a module, replacing any module with the same path in place.
    pub fn register(&mut self, module: ProviderModule) {
        match self.modules.iter_mut().find(|m| m.path == module.path) {
            Some(existing) => *existing = module,
            None => self.modules.push(module),
        }
    }

    /// Look up a module by path.
    pub fn get(&self, path: &str) -> Result<&ProviderModule, FakerError> {
        self.modules
            .iter()
            .find(|module| module.path == path)
            .ok_or_else(|| FakerError::ProviderNotFound {
                path: path.to_string(),
            })
    }

    /// Module paths in registration order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(ProviderModule::path)
    }

    /// Sorted locales supported by at least one localized module.
    pub fn available_locales(&self) -> BTreeSet<String> {
        self.modules
            .iter()
            .filter_map(|module| match &module.localization {
                Localization::Localized { locales, .. } => Some(locales.iter().cloned()),
                Localization::None => None,
            })
            .flatten()
            .collect()
    }

    /// Register every dynamic provider in a JSON include file.
    ///
    /// Returns the registered paths, suitable as factory includes.
    pub fn load_dynamic_file(&mut self, path: &Path) -> Result<Vec<String>, FakerError> {
        let providers = dynamic::load_file(path)?;
        let mut paths = Vec::with_capacity(providers.len());
        for provider in providers {
            let name = provider.name().to_string();
            self.register(ProviderModule::unlocalized(name.clone(), move || provider.clone()));
            paths.push(name);
        }
        Ok(paths)
    }
}
