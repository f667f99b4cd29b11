//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use serde::Serialize;

/// Longest example shown before truncation.
const MAX_EXAMPLE_CHARS: usize = 60;

/// One documented formatter.
#[derive(Debug, Serialize)]
pub struct FormatterDoc {
    /// Catalog path of the provider that defines the formatter.
    pub provider: String,
    /// Locale the provider was resolved for, if localized.
    pub locale: Option<String>,
    /// Formatter name.
    pub formatter: String,
    /// Rendered example, or the error the call produced.
    pub example: String,
}

/// Format formatter documentation as a table grouped by provider.
pub fn format_doc_table(docs: &[FormatterDoc]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Provider", "Formatter", "Example"]);

    let mut previous: Option<&str> = None;
    for doc in docs {
        let provider = if previous == Some(doc.provider.as_str()) {
            String::new()
        } else {
            match &doc.locale {
                Some(locale) => format!("{} ({locale})", doc.provider),
                None => doc.provider.clone(),
            }
        };
        previous = Some(doc.provider.as_str());
        table.add_row(vec![provider, doc.formatter.clone(), truncate(&doc.example)]);
    }

    table
}

/// Shorten long examples to one line of at most `MAX_EXAMPLE_CHARS`.
pub fn truncate(example: &str) -> String {
    let one_line = example.replace('\n', "\\n");
    if one_line.chars().count() <= MAX_EXAMPLE_CHARS {
        return one_line;
    }
    let mut short: String = one_line.chars().take(MAX_EXAMPLE_CHARS - 3).collect();
    short.push_str("...");
    short
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_examples() {
        assert_eq!(truncate("Jane Doe"), "Jane Doe");
        assert_eq!(truncate("a\nb"), "a\\nb");
    }

    #[test]
    fn truncate_shortens_long_examples() {
        let long = "x".repeat(200);
        let short = truncate(&long);
        assert_eq!(short.chars().count(), MAX_EXAMPLE_CHARS);
        assert!(short.ends_with("..."));
    }
}
