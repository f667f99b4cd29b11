//! Placeholder text: words, sentences, paragraphs.

mod en_us;
mod la;

use crate::generator::FakerError;
use crate::providers::base::unsupported;
use crate::providers::{Context, Provider};
use crate::types::{Args, Choices, Value};

/// Locales with lorem tables.
pub const LOCALES: &[&str] = &["la", "en_US"];

/// Locale used when the requested one has no table.
pub const DEFAULT_LOCALE: &str = "la";

/// Word tables for one locale.
#[derive(Debug)]
pub struct LoremLocale {
    pub word_list: &'static [&'static str],
    pub word_connector: &'static str,
    pub sentence_punctuation: &'static str,
}

/// Lorem ipsum style text for a locale.
#[derive(Debug, Clone, Copy)]
pub struct LoremProvider {
    data: &'static LoremLocale,
}

impl LoremProvider {
    /// The provider for `locale`, if there is a table for it.
    pub fn for_locale(locale: &str) -> Option<Self> {
        let data = match locale {
            "la" => &la::LA,
            "en_US" => &en_us::EN_US,
            _ => return None,
        };
        Some(Self { data })
    }

    /// One word from `ext_word_list` or the locale's table.
    pub fn word(&self, ctx: &Context<'_>, ext_word_list: Option<&[String]>) -> Result<String, FakerError> {
        Ok(self.words(ctx, 1, ext_word_list, false)?.pop().unwrap_or_default())
    }

    /// `nb` words; distinct when `unique`.
    pub fn words(
        &self,
        ctx: &Context<'_>,
        nb: usize,
        ext_word_list: Option<&[String]>,
        unique: bool,
    ) -> Result<Vec<String>, FakerError> {
        match ext_word_list {
            Some(list) => ctx.random_elements(Choices::uniform(list), Some(nb), unique),
            None => {
                let picked = ctx.random_elements(Choices::uniform(self.data.word_list), Some(nb), unique)?;
                Ok(picked.into_iter().map(str::to_string).collect())
            }
        }
    }

    /// A capitalized sentence of about `nb_words` words.
    pub fn sentence(
        &self,
        ctx: &Context<'_>,
        nb_words: i64,
        variable_nb_words: bool,
        ext_word_list: Option<&[String]>,
    ) -> Result<String, FakerError> {
        if nb_words <= 0 {
            return Ok(String::new());
        }
        let nb_words = if variable_nb_words {
            ctx.randomize_nb_elements(nb_words, false, false, Some(1), None)
        } else {
            nb_words
        };
        let mut words = self.words(ctx, to_count(nb_words), ext_word_list, false)?;
        if let Some(first) = words.first_mut() {
            *first = capitalize(first);
        }
        Ok(words.join(self.data.word_connector) + self.data.sentence_punctuation)
    }

    /// `nb` sentences.
    pub fn sentences(
        &self,
        ctx: &Context<'_>,
        nb: usize,
        ext_word_list: Option<&[String]>,
    ) -> Result<Vec<String>, FakerError> {
        (0..nb)
            .map(|_| self.sentence(ctx, 6, true, ext_word_list))
            .collect()
    }

    /// About `nb_sentences` sentences joined by spaces.
    pub fn paragraph(
        &self,
        ctx: &Context<'_>,
        nb_sentences: i64,
        variable_nb_sentences: bool,
        ext_word_list: Option<&[String]>,
    ) -> Result<String, FakerError> {
        if nb_sentences <= 0 {
            return Ok(String::new());
        }
        let nb_sentences = if variable_nb_sentences {
            ctx.randomize_nb_elements(nb_sentences, false, false, Some(1), None)
        } else {
            nb_sentences
        };
        let sentences = self.sentences(ctx, to_count(nb_sentences), ext_word_list)?;
        Ok(sentences.join(" "))
    }

    /// `nb` paragraphs.
    pub fn paragraphs(
        &self,
        ctx: &Context<'_>,
        nb: usize,
        ext_word_list: Option<&[String]>,
    ) -> Result<Vec<String>, FakerError> {
        (0..nb)
            .map(|_| self.paragraph(ctx, 3, true, ext_word_list))
            .collect()
    }

    /// Text of at most `max_nb_chars` characters.
    ///
    /// Below 25 characters the text is words, below 100 sentences, otherwise
    /// newline separated paragraphs.
    pub fn text(
        &self,
        ctx: &Context<'_>,
        max_nb_chars: usize,
        ext_word_list: Option<&[String]>,
    ) -> Result<String, FakerError> {
        if max_nb_chars < 5 {
            return Err(FakerError::invalid_argument(
                "text",
                "max_nb_chars",
                "text() can only generate text of at least 5 characters",
            ));
        }
        let connector = self.data.word_connector;
        if max_nb_chars < 25 {
            let mut parts = fill_to(max_nb_chars, connector, || self.word(ctx, ext_word_list))?;
            if let Some(first) = parts.first_mut() {
                *first = capitalize(first);
            }
            if let Some(last) = parts.last_mut() {
                last.push_str(self.data.sentence_punctuation);
            }
            Ok(parts.concat())
        } else if max_nb_chars < 100 {
            let parts = fill_to(max_nb_chars, connector, || self.sentence(ctx, 6, true, ext_word_list))?;
            Ok(parts.concat())
        } else {
            let parts = fill_to(max_nb_chars, "\n", || self.paragraph(ctx, 3, true, ext_word_list))?;
            Ok(parts.concat())
        }
    }
}

/// Attempts `text` makes at fitting at least one piece before failing.
const FILL_ATTEMPTS: usize = 100;

/// Keep generating pieces until `max_chars` is reached, then drop the piece
/// that overflowed. Retries from scratch if nothing fits, up to
/// [`FILL_ATTEMPTS`] times.
fn fill_to(
    max_chars: usize,
    separator: &str,
    mut next: impl FnMut() -> Result<String, FakerError>,
) -> Result<Vec<String>, FakerError> {
    for _ in 0..FILL_ATTEMPTS {
        let mut parts: Vec<String> = Vec::new();
        let mut size = 0;
        while size < max_chars {
            let piece = next()?;
            let part = if size == 0 { piece } else { format!("{separator}{piece}") };
            size += part.chars().count();
            parts.push(part);
        }
        parts.pop();
        if !parts.is_empty() {
            return Ok(parts);
        }
    }
    Err(FakerError::invalid_argument(
        "text",
        "max_nb_chars",
        format!("no text of fewer than {max_chars} characters after {FILL_ATTEMPTS} attempts"),
    ))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn to_count(n: i64) -> usize {
    usize::try_from(n).unwrap_or(0)
}

fn word_list_arg(formatter: &str, args: &Args, index: usize) -> Result<Option<Vec<String>>, FakerError> {
    Ok(args
        .list_opt(formatter, index, "ext_word_list")?
        .map(|items| items.iter().map(Value::to_string).collect()))
}

fn string_list(items: Vec<String>) -> Value {
    Value::List(items.into_iter().map(Value::from).collect())
}

impl Provider for LoremProvider {
    fn name(&self) -> &str {
        "lorem"
    }

    fn formatters(&self) -> Vec<&str> {
        vec!["paragraph", "paragraphs", "sentence", "sentences", "text", "word", "words"]
    }

    fn call(&self, formatter: &str, ctx: &Context<'_>, args: &Args) -> Result<Value, FakerError> {
        let value = match formatter {
            "word" => {
                let list = word_list_arg(formatter, args, 0)?;
                self.word(ctx, list.as_deref())?.into()
            }
            "words" => {
                let nb = args.usize_or(formatter, 0, "nb", 3)?;
                let list = word_list_arg(formatter, args, 1)?;
                let unique = args.bool_or(formatter, 2, "unique", false)?;
                string_list(self.words(ctx, nb, list.as_deref(), unique)?)
            }
            "sentence" => {
                let nb_words = args.int_or(formatter, 0, "nb_words", 6)?;
                let variable = args.bool_or(formatter, 1, "variable_nb_words", true)?;
                let list = word_list_arg(formatter, args, 2)?;
                self.sentence(ctx, nb_words, variable, list.as_deref())?.into()
            }
            "sentences" => {
                let nb = args.usize_or(formatter, 0, "nb", 3)?;
                let list = word_list_arg(formatter, args, 1)?;
                string_list(self.sentences(ctx, nb, list.as_deref())?)
            }
            "paragraph" => {
                let nb_sentences = args.int_or(formatter, 0, "nb_sentences", 3)?;
                let variable = args.bool_or(formatter, 1, "variable_nb_sentences", true)?;
                let list = word_list_arg(formatter, args, 2)?;
                self.paragraph(ctx, nb_sentences, variable, list.as_deref())?.into()
            }
            "paragraphs" => {
                let nb = args.usize_or(formatter, 0, "nb", 3)?;
                let list = word_list_arg(formatter, args, 1)?;
                string_list(self.paragraphs(ctx, nb, list.as_deref())?)
            }
            "text" => {
                let max = args.usize_or(formatter, 0, "max_nb_chars", 200)?;
                let list = word_list_arg(formatter, args, 1)?;
                self.text(ctx, max, list.as_deref())?.into()
            }
            _ => return Err(unsupported(self, formatter, ctx)),
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_handles_empty_and_unicode() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("élan"), "Élan");
    }

    #[test]
    fn every_listed_locale_has_a_table() {
        for locale in LOCALES {
            assert!(LoremProvider::for_locale(locale).is_some(), "{locale}");
        }
        assert!(LoremProvider::for_locale("xx_XX").is_none());
    }
}
