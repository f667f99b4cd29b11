//! Template tokenizer using winnow.
//!
//! Splits a template string into literal text and `{{ name }}` /
//! `{{ name:group }}` placeholders. Names and groups are word characters;
//! whitespace inside the braces is insignificant except between the name and
//! the colon. Anything that does not form a placeholder, including stray
//! braces, stays literal.

use winnow::combinator::{alt, delimited, opt, preceded, repeat};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use super::ast::{Placeholder, Segment, Template};

/// Tokenize a template string.
///
/// Tokenizing never fails: malformed placeholders are literal text.
pub fn parse_template(input: &str) -> Template {
    let mut remaining = input;
    match template(&mut remaining) {
        Ok(t) if remaining.is_empty() => t,
        _ => Template {
            segments: if input.is_empty() {
                Vec::new()
            } else {
                vec![Segment::Literal(input.to_string())]
            },
        },
    }
}

/// Parse a complete template into segments.
fn template(input: &mut &str) -> ModalResult<Template> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(Template {
        segments: merge_literals(segments),
    })
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

/// Parse a single segment (placeholder, literal run, or a lone brace).
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((placeholder, literal_run, literal_char)).parse_next(input)
}

/// Parse a run of text up to the next `{`.
fn literal_run(input: &mut &str) -> ModalResult<Segment> {
    take_while(1.., |c: char| c != '{')
        .map(|s: &str| Segment::Literal(s.to_string()))
        .parse_next(input)
}

/// Consume one character as literal text.
fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    any.map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}

/// Parse `{{ name }}` or `{{ name:group }}`.
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    delimited(
        ("{{", ws),
        (word, opt(preceded((':', ws), word))),
        (ws, "}}"),
    )
    .map(|(formatter, group): (&str, Option<&str>)| {
        Segment::Placeholder(Placeholder {
            formatter: formatter.to_string(),
            group: group.map(str::to_string),
        })
    })
    .parse_next(input)
}

/// Parse optional whitespace.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., char::is_whitespace)
        .void()
        .parse_next(input)
}

/// Parse a word: letters, digits and underscores.
fn word<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., is_word_char).parse_next(input)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
