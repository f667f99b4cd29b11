//! Integration tests for the built-in providers and the shared helpers.

use std::collections::HashSet;

use fakery::factory::{Catalog, Factory, FactoryOptions};
use fakery::providers::DynamicProvider;
use fakery::{Args, Context, FakerError, Generator, Value, kwargs};

fn seeded(locale: &str, seed: u64) -> Generator {
    let options = FactoryOptions::builder().locale(locale).build();
    let mut generator = Factory::create(&Catalog::builtin(), options).unwrap();
    generator.seed_instance(seed);
    generator
}

fn text(generator: &Generator, name: &str, args: &Args) -> String {
    generator.format(name, args).unwrap().to_string()
}

fn passes_luhn(number: &str) -> bool {
    let total: u32 = number
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(pos, digit)| match (pos % 2, digit * 2) {
            (0, _) => digit,
            (_, doubled) if doubled > 9 => doubled - 9,
            (_, doubled) => doubled,
        })
        .sum();
    total % 10 == 0
}

// =========================================================================
// Shared helpers
// =========================================================================

#[test]
fn test_numerify_placeholders() {
    let generator = seeded("en_US", 1);
    let ctx = Context::new(&generator);
    for _ in 0..50 {
        let out = ctx.numerify("#-%-$");
        let digits: Vec<u32> = out.split('-').map(|d| d.parse().unwrap()).collect();
        assert!(digits[1] >= 1, "{out}");
        assert!(digits[2] >= 2, "{out}");
        let optional = ctx.numerify("a!b@c");
        assert!((3..=5).contains(&optional.len()), "{optional}");
    }
}

#[test]
fn test_lexify_uses_given_letters() {
    let generator = seeded("en_US", 2);
    let ctx = Context::new(&generator);
    let out = ctx.lexify("??-??", "xy");
    assert_eq!(out.len(), 5);
    assert!(out.chars().all(|c| c == 'x' || c == 'y' || c == '-'), "{out}");
}

#[test]
fn test_bothify_and_hexify() {
    let generator = seeded("en_US", 3);
    let ctx = Context::new(&generator);
    let both = ctx.bothify("##??", "Z");
    assert!(both[..2].chars().all(|c| c.is_ascii_digit()), "{both}");
    assert_eq!(&both[2..], "ZZ");

    let hex = ctx.hexify("^^^^^^^^", true);
    assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()), "{hex}");
}

#[test]
fn test_random_int_respects_step() {
    let generator = seeded("en_US", 4);
    let ctx = Context::new(&generator);
    for _ in 0..100 {
        let n = ctx.random_int(10, 20, 5).unwrap();
        assert!([10, 15, 20].contains(&n), "{n}");
    }
    assert!(ctx.random_int(0, 10, 0).is_err());
    assert!(ctx.random_int(10, 0, 1).is_err());
}

#[test]
fn test_random_int_full_range() {
    let generator = seeded("en_US", 4);
    for _ in 0..20 {
        let value = generator
            .format("random_int", &kwargs! { "min" => i64::MIN, "max" => i64::MAX })
            .unwrap();
        assert!(value.as_int().is_some(), "{value}");
    }

    let ctx = Context::new(&generator);
    for _ in 0..20 {
        let n = ctx.random_int(i64::MIN, i64::MAX, 2).unwrap();
        assert_eq!(n.rem_euclid(2), 0, "{n}");
    }
    assert_eq!(ctx.random_int(i64::MAX, i64::MAX, 7).unwrap(), i64::MAX);
}

#[test]
fn test_random_number_digits() {
    let generator = seeded("en_US", 5);
    let ctx = Context::new(&generator);
    for _ in 0..50 {
        let n = ctx.random_number(Some(4), true).unwrap();
        assert!((1000..=9999).contains(&n), "{n}");
        assert!(ctx.random_number(Some(2), false).unwrap() < 100);
    }
    assert_eq!(ctx.random_number(Some(0), false).unwrap(), 0);
}

#[test]
fn test_random_number_rejects_bad_digits() {
    let generator = seeded("en_US", 6);
    let ctx = Context::new(&generator);
    let negative = ctx.random_number(Some(-1), false).unwrap_err();
    insta::assert_snapshot!(
        negative.to_string(),
        @"The digit parameter must be greater than or equal to 0, got -1"
    );
    let zero_fixed = ctx.random_number(Some(0), true).unwrap_err();
    insta::assert_snapshot!(
        zero_fixed.to_string(),
        @"A number of fixed length cannot have less than 1 digit in it"
    );
}

#[test]
fn test_randomize_nb_elements_bounds() {
    let generator = seeded("en_US", 7);
    let ctx = Context::new(&generator);
    for _ in 0..100 {
        let n = ctx.randomize_nb_elements(100, false, false, None, None);
        assert!((60..=140).contains(&n), "{n}");
        assert!(ctx.randomize_nb_elements(100, true, false, None, None) <= 100);
        assert!(ctx.randomize_nb_elements(100, false, true, None, None) >= 100);
        let clamped = ctx.randomize_nb_elements(100, false, false, Some(90), Some(110));
        assert!((90..=110).contains(&clamped), "{clamped}");
    }
    assert_eq!(ctx.randomize_nb_elements(42, true, true, None, None), 42);
}

#[test]
fn test_random_sample_is_distinct() {
    let generator = seeded("en_US", 8);
    let value = generator
        .format("random_sample", &kwargs! { "elements" => vec![Value::from(1), Value::from(2), Value::from(3)], "length" => 3 })
        .unwrap();
    let mut items: Vec<i64> = value.as_list().unwrap().iter().filter_map(Value::as_int).collect();
    items.sort_unstable();
    assert_eq!(items, vec![1, 2, 3]);
}

#[test]
fn test_random_sample_too_large() {
    let generator = seeded("en_US", 9);
    let err = generator
        .format("random_sample", &kwargs! { "length" => 4 })
        .unwrap_err();
    assert!(matches!(err, FakerError::SampleTooLarge { requested: 4, available: 3 }), "{err}");
}

#[test]
fn test_locale_formatter_shape() {
    let generator = seeded("en_US", 10);
    let locale = text(&generator, "locale", &Args::new());
    let (language, territory) = locale.split_once('_').unwrap();
    assert_eq!(language.len(), 2);
    assert_eq!(territory.len(), 2);
}

// =========================================================================
// Dynamic providers
// =========================================================================

#[test]
fn test_dynamic_provider_rejects_reserved_name() {
    let err = DynamicProvider::new("__secret", Vec::new()).unwrap_err();
    assert!(matches!(err, FakerError::InvalidProviderName { .. }));
}

#[test]
fn test_dynamic_provider_empty_list_fails_on_call() {
    let mut generator = Generator::new();
    let mut empty = DynamicProvider::new("empty", Vec::new()).unwrap();
    assert!(empty.is_empty());
    generator.add_provider(empty.clone());
    let err = generator.fake("empty").unwrap_err();
    assert!(err.to_string().contains("Elements should be a list"), "{err}");

    empty.add_element("filled");
    generator.add_provider(empty);
    assert_eq!(generator.fake("empty").unwrap(), Value::from("filled"));
}

#[test]
fn test_weighted_dynamic_provider() {
    let mut generator = Generator::new();
    generator.seed_instance(11);
    let coin = DynamicProvider::weighted(
        "coin",
        vec![(Value::from("heads"), 1000.0), (Value::from("tails"), 0.001)],
    )
    .unwrap();
    generator.add_provider(coin);
    let heads = (0..100)
        .filter(|_| generator.fake("coin").unwrap() == Value::from("heads"))
        .count();
    assert!(heads > 95, "{heads}");
}

// =========================================================================
// Person, address and phone numbers
// =========================================================================

#[test]
fn test_names_have_at_least_two_parts() {
    for locale in ["en_US", "de_DE"] {
        let generator = seeded(locale, 12);
        for _ in 0..20 {
            let name = text(&generator, "name", &Args::new());
            assert!(name.split_whitespace().count() >= 2, "{locale}: {name}");
        }
    }
}

#[test]
fn test_address_spans_lines() {
    let generator = seeded("en_US", 13);
    let address = text(&generator, "address", &Args::new());
    assert!(address.contains('\n'), "{address}");
    assert!(!address.contains("{{"), "{address}");
}

#[test]
fn test_postcode_is_numeric() {
    for locale in ["en_US", "de_DE"] {
        let generator = seeded(locale, 14);
        let postcode = text(&generator, "postcode", &Args::new());
        assert!(postcode.chars().all(|c| c.is_ascii_digit()), "{locale}: {postcode}");
    }
}

#[test]
fn test_phone_number_has_no_placeholders() {
    let generator = seeded("de_DE", 15);
    let number = text(&generator, "phone_number", &Args::new());
    assert!(!number.contains('#'), "{number}");
    assert!(number.chars().any(|c| c.is_ascii_digit()), "{number}");
}

// =========================================================================
// Credit cards
// =========================================================================

#[test]
fn test_credit_card_numbers_pass_luhn() {
    let generator = seeded("en_US", 16);
    for (card_type, length) in [("visa", 16), ("visa13", 13), ("amex", 15), ("mastercard", 16), ("diners", 14)] {
        let number = text(&generator, "credit_card_number", &kwargs! { "card_type" => card_type });
        assert_eq!(number.len(), length, "{card_type}: {number}");
        assert!(passes_luhn(&number), "{card_type}: {number}");
    }
}

#[test]
fn test_unknown_card_type() {
    let generator = seeded("en_US", 17);
    let err = generator
        .format("credit_card_number", &kwargs! { "card_type" => "bogus" })
        .unwrap_err();
    assert!(matches!(err, FakerError::InvalidArgument { .. }), "{err}");
}

#[test]
fn test_credit_card_expire_format() {
    let generator = seeded("en_US", 18);
    let expire = text(&generator, "credit_card_expire", &Args::new());
    let (month, year) = expire.split_once('/').unwrap();
    assert_eq!(month.len(), 2);
    assert_eq!(year.len(), 2);
}

// =========================================================================
// Misc
// =========================================================================

#[test]
fn test_uuid4_is_version_four() {
    let generator = seeded("en_US", 19);
    let uuid = text(&generator, "uuid4", &Args::new());
    assert_eq!(uuid.len(), 36);
    assert_eq!(uuid.chars().nth(14), Some('4'));
}

#[test]
fn test_password_contains_each_class() {
    let generator = seeded("en_US", 20);
    for _ in 0..20 {
        let password = text(&generator, "password", &kwargs! { "length" => 12 });
        assert_eq!(password.chars().count(), 12);
        assert!(password.chars().any(|c| c.is_ascii_digit()), "{password}");
        assert!(password.chars().any(|c| c.is_ascii_uppercase()), "{password}");
        assert!(password.chars().any(|c| c.is_ascii_lowercase()), "{password}");
        assert!(password.chars().any(|c| "!@#$%^&*()_+".contains(c)), "{password}");
    }
}

#[test]
fn test_password_too_short_for_classes() {
    let generator = seeded("en_US", 21);
    let err = generator
        .format("password", &kwargs! { "length" => 3 })
        .unwrap_err();
    assert!(err.to_string().contains("shorter than required characters"), "{err}");
}

#[test]
fn test_binary_length() {
    let generator = seeded("en_US", 22);
    let bytes = generator.format("binary", &kwargs! { "length" => 64 }).unwrap();
    assert_eq!(bytes.as_bytes().map(<[u8]>::len), Some(64));
}

#[test]
fn test_boolean_chance_extremes() {
    let generator = seeded("en_US", 23);
    for _ in 0..50 {
        let always = generator.format("boolean", &kwargs! { "chance_of_getting_true" => 100 }).unwrap();
        let never = generator.format("boolean", &kwargs! { "chance_of_getting_true" => 0 }).unwrap();
        assert_eq!(always, Value::from(true));
        assert_eq!(never, Value::from(false));
    }
}

// =========================================================================
// Dates, internet and lorem
// =========================================================================

#[test]
fn test_date_formats() {
    let generator = seeded("en_US", 24);
    let date = text(&generator, "date", &Args::new());
    assert_eq!(date.len(), 10);
    assert_eq!(date.matches('-').count(), 2);

    let iso = text(&generator, "iso8601", &kwargs! { "sep" => " " });
    assert_eq!(iso.len(), 19);
    assert_eq!(&iso[10..11], " ");

    let epoch = text(&generator, "date", &kwargs! { "end_datetime" => 0 });
    assert_eq!(epoch, "1970-01-01");
}

#[test]
fn test_invalid_date_pattern() {
    let generator = seeded("en_US", 25);
    let err = generator
        .format("date", &kwargs! { "pattern" => "%Q" })
        .unwrap_err();
    assert!(matches!(err, FakerError::InvalidArgument { .. }), "{err}");
}

#[test]
fn test_date_rejects_unrepresentable_end() {
    let generator = seeded("en_US", 25);
    let err = generator
        .format("date", &kwargs! { "end_datetime" => i64::MAX })
        .unwrap_err();
    assert!(matches!(err, FakerError::InvalidArgument { .. }), "{err}");
    assert!(generator.format("unix_time", &kwargs! { "end_datetime" => i64::MAX }).is_ok());
}

#[test]
fn test_safe_email_uses_example_domain() {
    let generator = seeded("en_US", 26);
    for _ in 0..20 {
        let email = text(&generator, "email", &Args::new());
        let (user, domain) = email.split_once('@').unwrap();
        assert!(!user.is_empty());
        assert!(domain.starts_with("example."), "{email}");
        assert!(email.is_ascii(), "{email}");
    }
}

#[test]
fn test_email_in_german_generator_is_ascii() {
    let generator = seeded("de_DE", 27);
    for _ in 0..50 {
        let email = text(&generator, "email", &kwargs! { "safe" => false });
        assert!(email.is_ascii(), "{email}");
        assert!(email.contains('@'), "{email}");
    }
}

#[test]
fn test_url_schemes() {
    let generator = seeded("en_US", 28);
    let url = text(&generator, "url", &Args::new());
    assert!(url.starts_with("http://") || url.starts_with("https://"), "{url}");
    let bare = text(&generator, "url", &kwargs! { "schemes" => Vec::<Value>::new() });
    assert!(!bare.contains("://"), "{bare}");
}

#[test]
fn test_domain_name_levels() {
    let generator = seeded("en_US", 29);
    let domain = text(&generator, "domain_name", &kwargs! { "levels" => 2 });
    assert_eq!(domain.matches('.').count(), 2, "{domain}");
    assert!(generator.format("domain_name", &kwargs! { "levels" => 0 }).is_err());
}

#[test]
fn test_lorem_text_respects_max_chars() {
    let generator = seeded("en_US", 30);
    for max in [5, 24, 99, 300] {
        let out = text(&generator, "text", &kwargs! { "max_nb_chars" => max });
        assert!(out.chars().count() <= max, "{max}: {out}");
        assert!(!out.is_empty());
    }
    assert!(generator.format("text", &kwargs! { "max_nb_chars" => 4 }).is_err());
}

#[test]
fn test_text_with_words_longer_than_max_chars() {
    let generator = seeded("en_US", 30);
    let words = vec![Value::from("supercalifragilistic")];
    let err = generator
        .format("text", &kwargs! { "max_nb_chars" => 10, "ext_word_list" => words })
        .unwrap_err();
    assert!(matches!(err, FakerError::InvalidArgument { .. }), "{err}");
}

#[test]
fn test_sentence_ends_with_period() {
    let generator = seeded("de_DE", 31);
    let sentence = text(&generator, "sentence", &Args::new());
    assert!(sentence.ends_with('.'), "{sentence}");
    assert!(sentence.chars().next().is_some_and(char::is_uppercase), "{sentence}");
}

#[test]
fn test_words_unique() {
    let generator = seeded("en_US", 32);
    let words = generator
        .format("words", &kwargs! { "nb" => 10, "unique" => true })
        .unwrap();
    let list = words.as_list().unwrap();
    let distinct: HashSet<&Value> = list.iter().collect();
    assert_eq!(distinct.len(), 10);
}
