//! Integration tests for the template tokenizer.

use fakery::parser::{Placeholder, Segment, parse_template};

fn placeholder(formatter: &str, group: Option<&str>) -> Segment {
    Segment::Placeholder(Placeholder {
        formatter: formatter.to_string(),
        group: group.map(str::to_string),
    })
}

#[test]
fn test_plain_text_is_one_literal() {
    let template = parse_template("Hello, world!");
    assert!(template.is_literal());
    assert_eq!(template.segments, vec![Segment::Literal("Hello, world!".into())]);
}

#[test]
fn test_empty_template_has_no_segments() {
    assert!(parse_template("").segments.is_empty());
}

#[test]
fn test_single_placeholder() {
    let template = parse_template("{{name}}");
    assert_eq!(template.segments, vec![placeholder("name", None)]);
}

#[test]
fn test_whitespace_inside_braces_is_ignored() {
    let template = parse_template("{{  first_name  }} {{ last_name}}");
    assert_eq!(
        template.segments,
        vec![
            placeholder("first_name", None),
            Segment::Literal(" ".into()),
            placeholder("last_name", None),
        ]
    );
}

#[test]
fn test_placeholder_with_group() {
    let template = parse_template("{{ words:short }}");
    assert_eq!(template.segments, vec![placeholder("words", Some("short"))]);
}

#[test]
fn test_group_allows_space_after_colon() {
    let template = parse_template("{{words: short}}");
    assert_eq!(template.segments, vec![placeholder("words", Some("short"))]);
}

#[test]
fn test_literal_around_placeholders() {
    let template = parse_template("{{building_number}} {{street_name}}\n{{city}}, {{postcode}}");
    let names: Vec<&str> = template.placeholders().map(|p| p.formatter.as_str()).collect();
    assert_eq!(names, vec!["building_number", "street_name", "city", "postcode"]);
    assert_eq!(template.segments.len(), 7);
}

#[test]
fn test_single_braces_stay_literal() {
    let template = parse_template("{name} and {{ name");
    assert!(template.is_literal());
    assert_eq!(template.segments, vec![Segment::Literal("{name} and {{ name".into())]);
}

#[test]
fn test_non_word_name_stays_literal() {
    let template = parse_template("{{ first-name }}");
    assert!(template.is_literal());
}

#[test]
fn test_triple_braces_keep_outer_brace_literal() {
    let template = parse_template("{{{name}}}");
    assert_eq!(
        template.segments,
        vec![
            Segment::Literal("{".into()),
            placeholder("name", None),
            Segment::Literal("}".into()),
        ]
    );
}

#[test]
fn test_adjacent_placeholders() {
    let template = parse_template("{{first_name}}{{city_suffix}}");
    assert_eq!(
        template.segments,
        vec![placeholder("first_name", None), placeholder("city_suffix", None)]
    );
}
