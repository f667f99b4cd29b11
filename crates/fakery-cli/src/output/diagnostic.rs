//! Miette diagnostic wrapper for fakery errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use fakery::FakerError;
use miette::Diagnostic;
use thiserror::Error;

/// A miette-compatible diagnostic for a failed generation.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(fakery::error))]
pub struct FakerDiagnostic {
    message: String,

    #[help]
    help: Option<String>,
}

impl FakerDiagnostic {
    /// Create a diagnostic from a library error.
    ///
    /// Typo suggestions move out of the message into the help line.
    pub fn from_error(err: &FakerError) -> Self {
        match err {
            FakerError::UnknownFormatter {
                name,
                locale,
                suggestions,
            } => {
                let bare = FakerError::UnknownFormatter {
                    name: name.clone(),
                    locale: locale.clone(),
                    suggestions: Vec::new(),
                };
                let help = if suggestions.is_empty() {
                    Some("run `fakery` without a formatter to list every formatter".to_string())
                } else {
                    Some(format!("did you mean: {}?", suggestions.join(", ")))
                };
                FakerDiagnostic {
                    message: bare.to_string(),
                    help,
                }
            }
            FakerError::InvalidLocale { .. } => FakerDiagnostic {
                message: err.to_string(),
                help: Some("pass a supported locale with --lang, e.g. en_US or de_DE".to_string()),
            },
            FakerError::IncludeFormat { .. } => FakerDiagnostic {
                message: err.to_string(),
                help: Some(r#"include files map provider names to lists: {"fruit": ["apple"]}"#.to_string()),
            },
            _ => FakerDiagnostic {
                message: err.to_string(),
                help: None,
            },
        }
    }
}

impl From<FakerError> for FakerDiagnostic {
    fn from(err: FakerError) -> Self {
        FakerDiagnostic::from_error(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestions_become_help() {
        let err = FakerError::UnknownFormatter {
            name: "nmae".to_string(),
            locale: Some("en_US".to_string()),
            suggestions: vec!["name".to_string()],
        };
        let diagnostic = FakerDiagnostic::from_error(&err);
        assert_eq!(diagnostic.to_string(), "Unknown formatter 'nmae' with locale 'en_US'");
        assert_eq!(diagnostic.help.as_deref(), Some("did you mean: name?"));
    }
}
