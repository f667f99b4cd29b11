//! Building generators for a locale from a provider catalog.

mod catalog;
mod locale;

use bon::Builder;
use tracing::debug;

use crate::generator::{FakerError, Generator, RegisteredProvider};

pub use catalog::{Catalog, Localization, ProviderModule};
pub use locale::{DEFAULT_LOCALE, normalize_locale};

/// Options for [`Factory::create`].
///
/// # Example
///
/// ```
/// use fakery::factory::{Catalog, Factory, FactoryOptions};
///
/// let options = FactoryOptions::builder()
///     .locale("de-DE")
///     .providers(vec!["base".into(), "person".into()])
///     .build();
/// let generator = Factory::create(&Catalog::builtin(), options).unwrap();
/// assert_eq!(generator.locale(), Some("de_DE"));
/// assert!(generator.has_formatter("last_name"));
/// assert!(!generator.has_formatter("address"));
/// ```
#[derive(Debug, Builder)]
pub struct FactoryOptions {
    /// Requested locale; `en_US` when unset.
    #[builder(into)]
    pub locale: Option<String>,

    /// Provider paths to add, in order. Every catalog module when unset.
    pub providers: Option<Vec<String>>,

    /// Extra provider paths added after `providers`.
    #[builder(default)]
    pub includes: Vec<String>,

    /// Whether providers sample weighted tables by weight.
    #[builder(default = true)]
    pub use_weighting: bool,

    /// Existing generator to populate instead of a fresh one.
    pub generator: Option<Generator>,
}

impl Default for FactoryOptions {
    fn default() -> Self {
        FactoryOptions::builder().build()
    }
}

/// Builds generators from a [`Catalog`].
pub struct Factory;

impl Factory {
    /// Build a generator for `options.locale` holding the requested providers.
    ///
    /// Localized modules without a table for the locale fall back to their
    /// default locale. Fails if the locale is not supported by any module or
    /// a provider path is unknown.
    pub fn create(catalog: &Catalog, options: FactoryOptions) -> Result<Generator, FakerError> {
        let locale = options
            .locale
            .as_deref()
            .map_or_else(|| DEFAULT_LOCALE.to_string(), normalize_locale);
        if !catalog.available_locales().contains(&locale) {
            return Err(FakerError::InvalidLocale { locale });
        }

        let paths: Vec<String> = match options.providers {
            Some(paths) => paths,
            None => catalog.paths().map(str::to_string).collect(),
        };

        let mut generator = match options.generator {
            Some(generator) => generator,
            None => Generator::builder()
                .locale(locale.clone())
                .use_weighting(options.use_weighting)
                .build(),
        };

        for path in paths.iter().chain(&options.includes) {
            let module = catalog.get(path)?;
            let resolved = module.resolve_locale(&locale);
            if let Some(resolved) = resolved.as_deref().filter(|resolved| *resolved != locale) {
                debug!(
                    provider = %path,
                    requested = %locale,
                    using = resolved,
                    "provider has no data for locale, falling back"
                );
            }
            let provider = module
                .instantiate(resolved.as_deref())
                .ok_or_else(|| FakerError::ProviderNotFound { path: path.clone() })?;
            generator.add_registered(RegisteredProvider::new(
                path.clone(),
                resolved,
                options.use_weighting,
                provider,
            ));
        }

        Ok(generator)
    }
}
