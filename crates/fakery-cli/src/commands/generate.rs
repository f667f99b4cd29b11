//! Implementation of the default `fakery [FORMATTER] [ARGS...]` command.

use std::env;
use std::fs::write;
use std::path::PathBuf;

use fakery::factory::{normalize_locale, Catalog, DEFAULT_LOCALE};
use fakery::{Args, Faker, FakerOptions, Value};
use miette::{miette, IntoDiagnostic};
use tracing::debug;

use super::doc::run_doc;
use crate::output::FakerDiagnostic;

/// Arguments for generating values.
#[derive(Debug, clap::Args)]
pub struct GenerateArgs {
    /// Formatter to call (e.g. name, address, words). Lists every formatter
    /// when omitted.
    pub formatter: Option<String>,

    /// Formatter arguments: `name=value` for keywords, bare values for
    /// positionals
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Locale (e.g. en_US, de-DE). Defaults to $LANG when supported
    #[arg(short, long, alias = "locale")]
    pub lang: Option<String>,

    /// Number of values to generate
    #[arg(short, long, default_value_t = 1)]
    pub repeat: usize,

    /// Separator between generated values
    #[arg(short, long, default_value = "\n")]
    pub sep: String,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON files of dynamic providers (`{"name": [values...]}`), repeatable
    #[arg(short, long = "include")]
    pub includes: Vec<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the command: generate values, or document formatters.
pub fn run_generate(args: GenerateArgs) -> miette::Result<i32> {
    let mut catalog = Catalog::builtin();
    let mut includes = Vec::new();
    for path in &args.includes {
        let paths = catalog.load_dynamic_file(path).map_err(FakerDiagnostic::from)?;
        includes.extend(paths);
    }

    let locale = resolve_locale(args.lang.as_deref(), &catalog);
    let options = FakerOptions::builder()
        .locale(locale)
        .includes(includes)
        .catalog(catalog)
        .build();
    let mut faker = Faker::with_options(options).map_err(FakerDiagnostic::from)?;
    if let Some(seed) = args.seed {
        faker.seed_instance(seed);
    }

    let text = match &args.formatter {
        Some(formatter) => {
            let call_args = parse_args(&args.args);
            let values = (0..args.repeat)
                .map(|_| faker.format(formatter, &call_args))
                .collect::<Result<Vec<_>, _>>()
                .map_err(FakerDiagnostic::from)?;
            render_values(&values, &args.sep, args.json)?
        }
        None => run_doc(&faker, args.json)?,
    };

    match &args.output {
        Some(path) => write(path, text)
            .map_err(|e| miette!("Cannot write output file {}: {}", path.display(), e))?,
        None => println!("{}", text),
    }
    Ok(exitcode::OK)
}

/// The requested locale, else `$LANG` when the catalog supports it, else
/// `en_US`.
fn resolve_locale(requested: Option<&str>, catalog: &Catalog) -> String {
    if let Some(locale) = requested {
        return locale.to_string();
    }
    match env::var("LANG") {
        Ok(lang) => {
            let normalized = normalize_locale(&lang);
            if catalog.available_locales().contains(&normalized) {
                normalized
            } else {
                debug!(lang = %lang, "LANG is not a supported locale, using {DEFAULT_LOCALE}");
                DEFAULT_LOCALE.to_string()
            }
        }
        Err(_) => DEFAULT_LOCALE.to_string(),
    }
}

/// Split `name=value` tokens into keywords; everything else is positional.
fn parse_args(tokens: &[String]) -> Args {
    tokens.iter().fold(Args::new(), |args, token| match token.split_once('=') {
        Some((name, value)) if is_identifier(name) => args.kwarg(name, parse_value(value)),
        _ => args.arg(parse_value(token)),
    })
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Interpret a command-line value as an integer, float, bool, or string.
fn parse_value(text: &str) -> Value {
    if let Ok(n) = text.parse::<i64>() {
        Value::from(n)
    } else if let Ok(n) = text.parse::<f64>() {
        Value::from(n)
    } else {
        match text {
            "true" => Value::from(true),
            "false" => Value::from(false),
            _ => Value::from(text),
        }
    }
}

fn render_values(values: &[Value], sep: &str, json: bool) -> miette::Result<String> {
    if json {
        return match values {
            [value] => serde_json::to_string_pretty(value).into_diagnostic(),
            _ => serde_json::to_string_pretty(values).into_diagnostic(),
        };
    }
    let rendered: Vec<String> = values.iter().map(Value::to_string).collect();
    Ok(rendered.join(sep))
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        generate: GenerateArgs,
    }

    #[test]
    fn locale_is_an_alias_for_lang() {
        let cli = TestCli::try_parse_from(["fakery", "--locale", "de_DE", "name"]).unwrap();
        assert_eq!(cli.generate.lang.as_deref(), Some("de_DE"));
        assert_eq!(cli.generate.formatter.as_deref(), Some("name"));

        let cli = TestCli::try_parse_from(["fakery", "-l", "la", "word"]).unwrap();
        assert_eq!(cli.generate.lang.as_deref(), Some("la"));
    }

    #[test]
    fn keyword_and_positional_tokens() {
        let tokens: Vec<String> = ["nb=5", "true", "ext=a=b", "2.5"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let args = parse_args(&tokens);
        assert_eq!(args.keyword("nb"), Some(&Value::from(5)));
        assert_eq!(args.keyword("ext"), Some(&Value::from("a=b")));
        assert_eq!(args.positional(), [Value::from(true), Value::from(2.5)]);
    }

    #[test]
    fn non_identifier_before_equals_is_positional() {
        let args = parse_args(&["a b=c".to_string()]);
        assert!(args.keywords().is_empty());
        assert_eq!(args.positional(), [Value::from("a b=c")]);
    }

    #[test]
    fn explicit_locale_wins() {
        let catalog = Catalog::builtin();
        assert_eq!(resolve_locale(Some("de_DE"), &catalog), "de_DE");
    }

    #[test]
    fn values_join_with_separator() {
        let values = vec![Value::from(1), Value::from("two")];
        assert_eq!(render_values(&values, ", ", false).unwrap(), "1, two");
        assert_eq!(render_values(&values[..1], ", ", true).unwrap(), "1");
    }
}
