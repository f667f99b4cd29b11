//! Integration tests for the unique and optional call wrappers.

use std::collections::HashSet;

use fakery::{Args, Context, Faker, FakerError, Provider, Value, kwargs};

/// Reports the keyword names it was called with.
struct KeywordsProvider;

impl Provider for KeywordsProvider {
    fn name(&self) -> &str {
        "keywords"
    }

    fn formatters(&self) -> Vec<&str> {
        vec!["keyword_names"]
    }

    fn call(&self, _formatter: &str, _ctx: &Context<'_>, args: &Args) -> Result<Value, FakerError> {
        let names: Vec<Value> = args.keywords().keys().map(|name| Value::from(name.as_str())).collect();
        Ok(Value::List(names))
    }
}

// =========================================================================
// Unique
// =========================================================================

#[test]
fn test_unique_values_never_repeat() {
    let faker = Faker::new("en_US").unwrap();
    let values: Vec<Value> = (0..50)
        .map(|_| faker.unique().format("random_int", &kwargs! { "min" => 1, "max" => 60 }).unwrap())
        .collect();
    let distinct: HashSet<&Value> = values.iter().collect();
    assert_eq!(distinct.len(), 50);
}

#[test]
fn test_unique_exhaustion() {
    let faker = Faker::new("en_US").unwrap();
    for _ in 0..10 {
        faker.unique().fake("random_digit").unwrap();
    }
    let err = faker.unique().fake("random_digit").unwrap_err();
    assert!(err.is_exhaustion());
    insta::assert_snapshot!(
        err.to_string(),
        @"Got duplicated values for 'random_digit' after 1000 iterations"
    );
}

#[test]
fn test_unique_counts_null_as_a_value() {
    let faker = Faker::new("en_US").unwrap();
    let values: HashSet<Value> = (0..3)
        .map(|_| faker.unique().fake("null_boolean").unwrap())
        .collect();
    assert_eq!(values.len(), 3);
    assert!(values.contains(&Value::Null));
    assert!(faker.unique().fake("null_boolean").is_err());
}

#[test]
fn test_unique_history_is_per_arguments() {
    let faker = Faker::new("en_US").unwrap();
    let low = kwargs! { "min" => 0, "max" => 1 };
    let high = kwargs! { "min" => 2, "max" => 3 };
    for _ in 0..2 {
        faker.unique().format("random_int", &low).unwrap();
        faker.unique().format("random_int", &high).unwrap();
    }
    assert!(faker.unique().format("random_int", &low).is_err());
    assert!(faker.unique().format("random_int", &high).is_err());
}

#[test]
fn test_unique_clear_forgets_history() {
    let faker = Faker::new("en_US").unwrap();
    for _ in 0..10 {
        faker.unique().fake("random_digit").unwrap();
    }
    faker.unique().clear();
    assert!(faker.unique().fake("random_digit").is_ok());
}

#[test]
fn test_unique_validation_errors_are_not_exhaustion() {
    let faker = Faker::new("en_US").unwrap();
    let err = faker
        .unique()
        .format("random_int", &kwargs! { "min" => 5, "max" => 1 })
        .unwrap_err();
    assert!(!err.is_exhaustion());
}

#[test]
fn test_unique_in_multi_locale_mode() {
    let faker = Faker::new(["en_US", "de_DE"]).unwrap();
    let names: HashSet<Value> = (0..20).map(|_| faker.unique().fake("last_name").unwrap()).collect();
    assert_eq!(names.len(), 20);
}

// =========================================================================
// Optional
// =========================================================================

#[test]
fn test_optional_prob_one_always_returns_value() {
    let faker = Faker::new("en_US").unwrap();
    for _ in 0..50 {
        let value = faker.optional().format("last_name", &kwargs! { "prob" => 1.0 }).unwrap();
        assert!(!value.is_null());
    }
}

#[test]
fn test_optional_low_prob_mostly_null() {
    let faker = Faker::new("en_US").unwrap();
    let nulls = (0..200)
        .filter(|_| faker.optional().format("last_name", &kwargs! { "prob" => 0.01 }).unwrap().is_null())
        .count();
    assert!(nulls > 150, "{nulls}");
}

#[test]
fn test_optional_default_prob_mixes_values_and_null() {
    let faker = Faker::new("en_US").unwrap();
    let values: Vec<Value> = (0..200).map(|_| faker.optional().fake("last_name").unwrap()).collect();
    assert!(values.iter().any(Value::is_null));
    assert!(values.iter().any(|value| !value.is_null()));
}

#[test]
fn test_optional_rejects_out_of_range_prob() {
    let faker = Faker::new("en_US").unwrap();
    for prob in [0.0, -0.5, 1.5] {
        let err = faker
            .optional()
            .format("last_name", &kwargs! { "prob" => prob })
            .unwrap_err();
        assert!(matches!(err, FakerError::InvalidProbability { .. }), "{err}");
    }
}

#[test]
fn test_optional_strips_prob_before_calling() {
    let mut faker = Faker::new("en_US").unwrap();
    faker.add_provider(KeywordsProvider).unwrap();
    let value = faker
        .optional()
        .format("keyword_names", &kwargs! { "prob" => 1.0, "other" => 1 })
        .unwrap();
    assert_eq!(value, Value::List(vec![Value::from("other")]));
}

#[test]
fn test_optional_passes_remaining_arguments() {
    let faker = Faker::new("en_US").unwrap();
    let words = faker
        .optional()
        .format("words", &kwargs! { "prob" => 1.0, "nb" => 5 })
        .unwrap();
    assert_eq!(words.as_list().map(<[Value]>::len), Some(5));
}
