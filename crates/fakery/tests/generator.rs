//! Integration tests for formatter dispatch, templates and argument groups.

use std::collections::BTreeMap;

use fakery::providers::DynamicProvider;
use fakery::{Args, Context, FakerError, Generator, Provider, Value, kwargs};

fn fruit_generator() -> Generator {
    let mut generator = Generator::builder().locale("en_US").build();
    let fruit = DynamicProvider::new("fruit", vec!["apple".into(), "pear".into()]).unwrap();
    generator.add_provider(fruit);
    generator
}

/// Echoes its keyword arguments, for checking what templates pass along.
struct EchoProvider;

impl Provider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    fn formatters(&self) -> Vec<&str> {
        vec!["echo", "_hidden", "loop_a", "loop_b"]
    }

    fn call(&self, formatter: &str, ctx: &Context<'_>, args: &Args) -> Result<Value, FakerError> {
        match formatter {
            "echo" => {
                let pairs: Vec<String> = args
                    .keywords()
                    .iter()
                    .map(|(name, value)| format!("{name}={value}"))
                    .collect();
                Ok(pairs.join(",").into())
            }
            "loop_a" => Ok(ctx.parse("{{ loop_b }}")?.into()),
            "loop_b" => Ok(ctx.parse("{{ loop_a }}")?.into()),
            _ => Ok(Value::Null),
        }
    }
}

/// Always answers with a fixed word, to check precedence.
struct FixedProvider(&'static str);

impl Provider for FixedProvider {
    fn name(&self) -> &str {
        self.0
    }

    fn formatters(&self) -> Vec<&str> {
        vec!["fruit"]
    }

    fn call(&self, _formatter: &str, _ctx: &Context<'_>, _args: &Args) -> Result<Value, FakerError> {
        Ok(self.0.into())
    }
}

// =========================================================================
// Dispatch
// =========================================================================

#[test]
fn test_format_calls_registered_formatter() {
    let generator = fruit_generator();
    let value = generator.format("fruit", &Args::new()).unwrap();
    assert!(["apple", "pear"].contains(&value.to_string().as_str()));
}

#[test]
fn test_last_registered_provider_wins() {
    let mut generator = fruit_generator();
    generator.add_provider(FixedProvider("mango"));
    for _ in 0..20 {
        assert_eq!(generator.fake("fruit").unwrap(), Value::from("mango"));
    }
    assert_eq!(generator.formatter_provider("fruit").unwrap().path, "mango");
    let paths: Vec<&str> = generator.providers().map(|p| p.path.as_str()).collect();
    assert_eq!(paths, vec!["mango", "fruit"]);
}

#[test]
fn test_private_formatters_are_not_registered() {
    let mut generator = Generator::new();
    generator.add_provider(EchoProvider);
    assert!(generator.has_formatter("echo"));
    assert!(!generator.has_formatter("_hidden"));
}

#[test]
fn test_provider_lookup_ignores_case() {
    let generator = fruit_generator();
    assert!(generator.provider("FRUIT").is_some());
    assert!(generator.provider("vegetable").is_none());
}

#[test]
fn test_unknown_formatter_names_locale_and_suggestions() {
    let generator = fruit_generator();
    let err = generator.fake("fruti").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"Unknown formatter 'fruti' with locale 'en_US' (did you mean: fruit?)");
}

#[test]
fn test_unknown_formatter_without_locale_or_suggestions() {
    let generator = Generator::new();
    let err = generator.fake("anything").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"Unknown formatter 'anything'");
}

#[test]
fn test_template_cycles_hit_recursion_limit() {
    let mut generator = Generator::new();
    generator.add_provider(EchoProvider);
    let err = generator.fake("loop_a").unwrap_err();
    assert!(matches!(err, FakerError::RecursionLimit { .. }), "{err}");
    // The depth counter unwinds, so later calls work normally.
    assert_eq!(generator.fake("echo").unwrap(), Value::from(""));
}

// =========================================================================
// Templates
// =========================================================================

#[test]
fn test_parse_substitutes_placeholders() {
    let generator = fruit_generator();
    let text = generator.parse("I like {{ fruit }} and {{fruit}}.").unwrap();
    assert!(text.starts_with("I like "));
    assert!(text.ends_with('.'));
    assert!(!text.contains("{{"));
}

#[test]
fn test_parse_does_not_rescan_results() {
    let mut generator = Generator::new();
    let tricky = DynamicProvider::new("tricky", vec!["{{ tricky }}".into()]).unwrap();
    generator.add_provider(tricky);
    assert_eq!(generator.parse("<{{tricky}}>").unwrap(), "<{{ tricky }}>");
}

#[test]
fn test_parse_leaves_literal_text_alone() {
    let generator = Generator::new();
    assert_eq!(generator.parse("no {tokens} here").unwrap(), "no {tokens} here");
}

#[test]
fn test_parse_caches_templates() {
    let generator = fruit_generator();
    generator.parse("{{fruit}}").unwrap();
    generator.parse("{{fruit}}").unwrap();
    generator.parse("{{ fruit }}!").unwrap();
    assert_eq!(generator.template_cache_len(), 2);
    generator.clear_template_cache();
    assert_eq!(generator.template_cache_len(), 0);
}

#[test]
fn test_parse_passes_group_arguments() {
    let mut generator = Generator::new();
    generator.add_provider(EchoProvider);
    generator.set_argument("small", "nb", 3);
    generator.set_argument("small", "unique", true);
    assert_eq!(generator.parse("[{{ echo:small }}]").unwrap(), "[nb=3,unique=true]");
}

#[test]
fn test_parse_with_unknown_group_fails() {
    let mut generator = Generator::new();
    generator.add_provider(EchoProvider);
    let err = generator.parse("{{ echo:missing }}").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"Unknown argument group 'missing'");
}

// =========================================================================
// Argument groups
// =========================================================================

#[test]
fn test_argument_groups_can_be_read_and_removed() {
    let mut generator = Generator::new();
    generator.set_argument("group", "a", 1);
    let mut replacement = BTreeMap::new();
    replacement.insert("b".to_string(), Value::from("two"));
    generator.set_arguments("other", replacement);

    assert_eq!(generator.get_argument("group", "a"), Some(&Value::from(1)));
    assert_eq!(generator.get_arguments("other").map(BTreeMap::len), Some(1));

    assert_eq!(generator.del_argument("group", "a"), Some(Value::from(1)));
    assert_eq!(generator.get_argument("group", "a"), None);
    assert!(generator.del_arguments("other").is_some());
    assert!(generator.get_arguments("other").is_none());
    assert_eq!(generator.del_argument("nope", "x"), None);
}

#[test]
fn test_set_arguments_replaces_whole_group() {
    let mut generator = Generator::new();
    generator.set_argument("group", "a", 1);
    generator.set_arguments("group", BTreeMap::new());
    assert_eq!(generator.get_argument("group", "a"), None);
}

// =========================================================================
// Seeding
// =========================================================================

#[test]
fn test_seeded_instances_repeat_each_other() {
    let mut first = fruit_generator();
    let mut second = fruit_generator();
    first.seed_instance(99);
    second.seed_instance(99);
    let a: Vec<Value> = (0..20).map(|_| first.fake("fruit").unwrap()).collect();
    let b: Vec<Value> = (0..20).map(|_| second.fake("fruit").unwrap()).collect();
    assert_eq!(a, b);
    assert!(first.is_seeded());
    assert!(first.random().is_private());
}

#[test]
fn test_seeding_one_instance_leaves_others_shared() {
    let mut seeded = fruit_generator();
    let other = fruit_generator();
    seeded.seed_instance(1);
    assert!(seeded.random().is_private());
    assert!(!other.random().is_private());
}

#[test]
fn test_reseeding_restarts_sequence() {
    let mut generator = fruit_generator();
    generator.seed_instance(7);
    let first: Vec<Value> = (0..10).map(|_| generator.fake("fruit").unwrap()).collect();
    generator.seed_instance(7);
    let second: Vec<Value> = (0..10).map(|_| generator.fake("fruit").unwrap()).collect();
    assert_eq!(first, second);
}

#[test]
fn test_kwargs_reach_formatters() {
    let mut generator = Generator::new();
    generator.add_provider(EchoProvider);
    let value = generator.format("echo", &kwargs! { "b" => 2, "a" => "x" }).unwrap();
    assert_eq!(value, Value::from("a=x,b=2"));
}
