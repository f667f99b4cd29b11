//! Integration tests for the multi-locale facade.

use std::collections::BTreeSet;

use fakery::providers::DynamicProvider;
use fakery::{Faker, FakerError, FakerOptions, LocaleSpec, Value};

// =========================================================================
// Construction
// =========================================================================

#[test]
fn test_single_locale_facade() {
    let faker = Faker::new("de-DE").unwrap();
    assert!(!faker.is_multi_locale());
    assert_eq!(faker.locales(), ["de_DE"]);
    assert_eq!(faker.generator().unwrap().locale(), Some("de_DE"));
}

#[test]
fn test_default_facade_uses_en_us() {
    let faker = Faker::with_options(FakerOptions::default()).unwrap();
    assert_eq!(faker.locales(), ["en_US"]);
    assert_eq!(faker.weights(), None);
}

#[test]
fn test_multi_locale_facade() {
    let faker = Faker::new(["en_US", "de_DE"]).unwrap();
    assert!(faker.is_multi_locale());
    assert_eq!(faker.generators().len(), 2);
    assert_eq!(faker.generator_for("de-de").unwrap().locale(), Some("de_DE"));
    assert!(faker.generator_for("la").is_none());
}

#[test]
fn test_weighted_facade_keeps_weights() {
    let faker = Faker::new([("en_US", 1.0), ("de_DE", 3.0)]).unwrap();
    assert_eq!(faker.weights(), Some(&[1.0, 3.0][..]));
}

#[test]
fn test_invalid_weights_are_rejected() {
    let err = Faker::new([("en_US", 1.0), ("de_DE", f64::NAN)]).unwrap_err();
    assert!(matches!(err, FakerError::InvalidWeights { .. }), "{err}");
}

#[test]
fn test_unknown_locale_in_list_is_rejected() {
    let err = Faker::new(LocaleSpec::Many(vec!["en_US".into(), "xx_XX".into()])).unwrap_err();
    assert!(matches!(err, FakerError::InvalidLocale { .. }), "{err}");
}

// =========================================================================
// Generator selection
// =========================================================================

#[test]
fn test_selection_covers_every_implementing_locale() {
    let faker = Faker::new(["en_US", "de_DE"]).unwrap();
    let mut seen = BTreeSet::new();
    for _ in 0..200 {
        let generator = faker.select_generator("name").unwrap();
        seen.insert(generator.locale().unwrap_or_default().to_string());
    }
    assert_eq!(seen.into_iter().collect::<Vec<_>>(), vec!["de_DE", "en_US"]);
}

#[test]
fn test_selection_skips_locales_without_formatter() {
    let faker = Faker::new([("de_DE", 100.0), ("en_US", 1.0)]).unwrap();
    for _ in 0..50 {
        let generator = faker.select_generator("state_abbr").unwrap();
        assert_eq!(generator.locale(), Some("en_US"));
    }
    assert!(faker.fake("suffix").is_ok());
}

#[test]
fn test_weighted_selection_follows_weights() {
    let faker = Faker::new([("en_US", 0.9), ("de_DE", 0.1)]).unwrap();
    let draws = 10_000;
    let american = (0..draws)
        .filter(|_| faker.select_generator("name").unwrap().locale() == Some("en_US"))
        .count();
    let share = american as f64 / f64::from(draws);
    assert!((0.87..=0.93).contains(&share), "en_US share was {share}");
}

#[test]
fn test_selection_is_cached_per_formatter() {
    let faker = Faker::new(["en_US", "de_DE"]).unwrap();
    assert_eq!(faker.selection_cache_len(), 0);
    faker.fake("name").unwrap();
    faker.fake("name").unwrap();
    faker.fake("city").unwrap();
    assert_eq!(faker.selection_cache_len(), 2);
}

#[test]
fn test_unknown_formatter_in_multi_locale_mode() {
    let faker = Faker::new(["en_US", "de_DE"]).unwrap();
    let err = faker.fake("nmae").unwrap_err();
    let FakerError::UnknownFormatter { locale, suggestions, .. } = &err else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(*locale, None);
    assert!(suggestions.contains(&"name".to_string()), "{suggestions:?}");
}

// =========================================================================
// Single-locale operations
// =========================================================================

#[test]
fn test_single_locale_operations_fail_in_multi_locale_mode() {
    let mut faker = Faker::new(["en_US", "de_DE"]).unwrap();
    let err = faker.parse("{{ name }}").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"Proxying calls to `parse` is not implemented in multiple locale mode"
    );
    assert!(faker.random().is_err());
    assert!(faker.generator_mut().is_err());
    let fruit = DynamicProvider::new("fruit", vec!["apple".into()]).unwrap();
    assert!(matches!(
        faker.add_provider(fruit),
        Err(FakerError::UnsupportedInMultiLocale { .. })
    ));
}

#[test]
fn test_add_provider_in_single_locale_mode() {
    let mut faker = Faker::new("en_US").unwrap();
    assert!(faker.fake("fruit").is_err());
    let fruit = DynamicProvider::new("fruit", vec!["apple".into()]).unwrap();
    faker.add_provider(fruit).unwrap();
    assert_eq!(faker.fake("fruit").unwrap(), Value::from("apple"));
    assert_eq!(faker.parse("{{fruit}} pie").unwrap(), "apple pie");
}

#[test]
fn test_argument_groups_through_generator_mut() {
    let mut faker = Faker::new("en_US").unwrap();
    faker.generator_mut().unwrap().set_argument("few", "nb", 2);
    let text = faker.parse("{{ words:few }}").unwrap();
    assert!(text.starts_with('[') && text.ends_with(']'), "{text}");
    assert_eq!(text.matches(", ").count(), 1, "{text}");
}

// =========================================================================
// Seeding
// =========================================================================

#[test]
fn test_seed_instance_repeats_single_locale_output() {
    let mut first = Faker::new("en_US").unwrap();
    let mut second = Faker::new("en_US").unwrap();
    first.seed_instance(2024);
    second.seed_instance(2024);
    for formatter in ["name", "address", "email", "credit_card_number", "phone_number"] {
        assert_eq!(first.fake(formatter).unwrap(), second.fake(formatter).unwrap(), "{formatter}");
    }
}

#[test]
fn test_seed_locale_targets_one_generator() {
    let mut faker = Faker::new(["en_US", "de_DE"]).unwrap();
    faker.seed_locale("de-DE", 5).unwrap();
    assert!(faker.generator_for("de_DE").unwrap().random().is_private());
    assert!(!faker.generator_for("en_US").unwrap().random().is_private());
    assert!(matches!(
        faker.seed_locale("fr_FR", 5),
        Err(FakerError::InvalidLocale { .. })
    ));
}

#[test]
fn test_clone_starts_with_empty_unique_history() {
    let faker = Faker::new("en_US").unwrap();
    for _ in 0..10 {
        faker.unique().fake("random_digit").unwrap();
    }
    let copy = faker.clone();
    assert!(faker.unique().fake("random_digit").is_err());
    assert!(copy.unique().fake("random_digit").is_ok());
}
