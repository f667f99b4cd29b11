//! Listing every formatter with an example value.

use fakery::{Faker, Generator};
use miette::IntoDiagnostic;

use crate::output::table::{format_doc_table, FormatterDoc};
use crate::output::FakerDiagnostic;

/// Formatters whose default output is too large to render as an example.
const SKIPPED_EXAMPLES: &[&str] = &["binary"];

/// Document the formatters of the facade's generator.
///
/// Formatters overridden by a later provider are listed under the provider
/// that answers for them.
pub fn run_doc(faker: &Faker, json: bool) -> miette::Result<String> {
    let generator = faker.generator().map_err(FakerDiagnostic::from)?;
    let docs = collect_docs(generator);
    if json {
        serde_json::to_string_pretty(&docs).into_diagnostic()
    } else {
        Ok(format_doc_table(&docs).to_string())
    }
}

fn collect_docs(generator: &Generator) -> Vec<FormatterDoc> {
    let providers: Vec<_> = generator.providers().collect();
    let mut docs = Vec::new();
    // Oldest first, the order the providers were added in.
    for registered in providers.into_iter().rev() {
        let mut names = registered.public_formatters();
        names.sort();
        for name in names {
            let answers = generator
                .formatter_provider(&name)
                .is_some_and(|winner| winner.path == registered.path);
            if answers {
                docs.push(FormatterDoc {
                    provider: registered.path.clone(),
                    locale: registered.locale.clone(),
                    example: example(generator, &name),
                    formatter: name,
                });
            }
        }
    }
    docs
}

fn example(generator: &Generator, name: &str) -> String {
    if SKIPPED_EXAMPLES.contains(&name) {
        return "<bytes>".to_string();
    }
    match generator.fake(name) {
        Ok(value) => value.to_string(),
        Err(e) => format!("<error: {e}>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_answering_formatter_is_listed_once() {
        let faker = Faker::new("en_US").unwrap();
        let generator = faker.generator().unwrap();
        let docs = collect_docs(generator);
        assert_eq!(docs.len(), generator.formatter_names().count());
        assert_eq!(docs.first().map(|doc| doc.provider.as_str()), Some("base"));
        assert!(docs.iter().all(|doc| !doc.example.starts_with("<error")));
    }
}
