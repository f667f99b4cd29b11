//! Error types for generation, sampling and factory setup.

use std::io::Error as IoError;
use std::path::PathBuf;

use strsim::levenshtein;
use thiserror::Error;

/// An error raised while building a generator or producing a value.
#[derive(Debug, Error)]
pub enum FakerError {
    /// No registered provider exposes the requested formatter.
    #[error("Unknown formatter '{name}'{}{}", locale_suffix(locale.as_deref()), suggestion_suffix(suggestions))]
    UnknownFormatter {
        name: String,
        locale: Option<String>,
        suggestions: Vec<String>,
    },

    /// A template referenced an argument group that was never set.
    #[error("Unknown argument group '{group}'")]
    UnknownArgumentGroup { group: String },

    /// The locale is not supported by any provider in the catalog.
    #[error("Invalid configuration for faker locale `{locale}`")]
    InvalidLocale { locale: String },

    /// A provider path has no module in the catalog.
    #[error("Unable to find provider '{path}'")]
    ProviderNotFound { path: String },

    /// Sampling was requested from an empty choice set.
    #[error("cannot sample from an empty set of choices")]
    EmptyChoices,

    /// Weights are negative, non-finite, all zero, or mismatched in length.
    #[error("invalid weights: {message}")]
    InvalidWeights { message: String },

    /// More unique samples were requested than there are values.
    #[error(
        "Sample length cannot be longer than the number of unique elements to pick from \
         (requested {requested}, available {available})"
    )]
    SampleTooLarge { requested: usize, available: usize },

    /// `random_number` was called with an unusable digit count.
    #[error("{}", digits_message(*digits, *fix_len))]
    InvalidDigits { digits: i64, fix_len: bool },

    /// A formatter argument had the wrong type or an out-of-range value.
    #[error("invalid argument '{argument}' for formatter '{formatter}': {message}")]
    InvalidArgument {
        formatter: String,
        argument: String,
        message: String,
    },

    /// A dynamic provider name collides with the reserved prefix.
    #[error("Provider name '{name}' cannot start with __ as it would be ignored")]
    InvalidProviderName { name: String },

    /// The unique proxy kept getting values it had already returned.
    #[error("Got duplicated values for '{formatter}' after {attempts} iterations")]
    UniquenessExhausted { formatter: String, attempts: usize },

    /// A generator-level operation was used on a multi-locale facade.
    #[error("Proxying calls to `{operation}` is not implemented in multiple locale mode")]
    UnsupportedInMultiLocale { operation: String },

    /// The optional proxy got a probability outside `(0, 1]`.
    #[error("prob must be between 0 and 1, got {prob}")]
    InvalidProbability { prob: f64 },

    /// Formatters called each other too deeply (usually a template cycle).
    #[error("maximum formatter nesting exceeded while calling '{formatter}'")]
    RecursionLimit { formatter: String },

    /// An include file could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    /// An include file is not a JSON object of string lists.
    #[error("{}: {message}", path.display())]
    IncludeFormat { path: PathBuf, message: String },
}

impl FakerError {
    /// Build an [`FakerError::InvalidArgument`] for `formatter`.
    pub fn invalid_argument(
        formatter: &str,
        argument: &str,
        message: impl Into<String>,
    ) -> Self {
        FakerError::InvalidArgument {
            formatter: formatter.to_string(),
            argument: argument.to_string(),
            message: message.into(),
        }
    }

    /// Returns true when the error comes from the unique proxy running out of
    /// attempts, as opposed to a validation failure.
    pub fn is_exhaustion(&self) -> bool {
        matches!(self, FakerError::UniquenessExhausted { .. })
    }
}

fn locale_suffix(locale: Option<&str>) -> String {
    locale
        .map(|locale| format!(" with locale '{locale}'"))
        .unwrap_or_default()
}

fn suggestion_suffix(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}

fn digits_message(digits: i64, fix_len: bool) -> String {
    if fix_len && digits == 0 {
        "A number of fixed length cannot have less than 1 digit in it".to_string()
    } else {
        format!("The digit parameter must be greater than or equal to 0, got {digits}")
    }
}

/// Compute typo suggestions using Levenshtein distance.
///
/// - distance <= 1 for names <= 3 chars
/// - distance <= 2 for longer names
/// - at most 3 suggestions, closest first
pub fn compute_suggestions<'a>(name: &str, available: impl Iterator<Item = &'a str>) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, candidate.to_string()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort();
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
