//! Locale key normalization.

use icu_locale_core::LanguageIdentifier;

use crate::providers::base::LANGUAGE_LOCALE_CODES;

/// Locale used when none is requested.
pub const DEFAULT_LOCALE: &str = "en_US";

/// Normalize a locale key to the `ll_CC` form used by the catalog.
///
/// Hyphens become underscores, encoding (`.UTF-8`) and modifier (`@euro`)
/// suffixes are dropped, and letter case is canonicalized. A bare language
/// code gains its primary territory (`en` -> `en_US`); languages without a
/// known territory (`la`) stay bare. Keys that are not valid language
/// identifiers are returned with only the first two steps applied, so the
/// catalog lookup reports them.
///
/// # Example
///
/// ```
/// use fakery::factory::normalize_locale;
///
/// assert_eq!(normalize_locale("en-us"), "en_US");
/// assert_eq!(normalize_locale("de_DE.UTF-8"), "de_DE");
/// assert_eq!(normalize_locale("la"), "la");
/// assert_eq!(normalize_locale("DE"), "de_DE");
/// ```
pub fn normalize_locale(locale: &str) -> String {
    let base = locale
        .split(['.', '@'])
        .next()
        .unwrap_or(locale)
        .trim()
        .replace('-', "_");
    match base.replace('_', "-").parse::<LanguageIdentifier>() {
        Ok(identifier) => match primary_territory(&identifier) {
            Some(territory) => format!("{}_{territory}", identifier.language),
            None => identifier.to_string().replace('-', "_"),
        },
        Err(_) => base,
    }
}

/// Territory for an identifier that names only a language.
fn primary_territory(identifier: &LanguageIdentifier) -> Option<&'static str> {
    if identifier.region.is_some() || identifier.script.is_some() || !identifier.variants.is_empty() {
        return None;
    }
    let language = identifier.language.as_str();
    LANGUAGE_LOCALE_CODES
        .iter()
        .find(|(code, _)| *code == language)
        .and_then(|(_, territories)| territories.first().copied())
}
