//! Low-level helpers shared by every provider, and the provider that exposes
//! them as formatters.

use crate::generator::FakerError;
use crate::providers::{Context, Provider};
use crate::types::{Args, Choices, Value};

/// Default alphabet for [`Context::lexify`].
pub const ASCII_LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const HEX_DIGITS: &str = "0123456789abcdef";

/// Language code -> territories, used by `language_code` and `locale`. The
/// first territory is the one a bare language code expands to.
pub(crate) const LANGUAGE_LOCALE_CODES: &[(&str, &[&str])] = &[
    ("de", &["DE", "AT", "CH", "BE", "LU"]),
    ("en", &["US", "GB", "AU", "CA", "IE", "NZ", "IN", "ZA"]),
    ("es", &["ES", "MX", "AR", "CO", "CL", "PE"]),
    ("fr", &["FR", "BE", "CA", "CH", "LU"]),
    ("it", &["IT", "CH"]),
    ("ja", &["JP"]),
    ("nl", &["NL", "BE"]),
    ("pl", &["PL"]),
    ("pt", &["PT", "BR"]),
    ("ru", &["RU", "UA"]),
    ("sv", &["SE", "FI"]),
    ("zh", &["CN", "TW", "HK", "SG"]),
];

impl Context<'_> {
    /// Integer drawn from `min, min + step, ...` up to and including `max`.
    pub fn random_int(&self, min: i64, max: i64, step: i64) -> Result<i64, FakerError> {
        if step <= 0 {
            return Err(FakerError::invalid_argument(
                "random_int",
                "step",
                format!("must be positive, got {step}"),
            ));
        }
        if min > max {
            return Err(FakerError::invalid_argument(
                "random_int",
                "max",
                format!("empty range {min}..={max}"),
            ));
        }
        if step == 1 {
            return Ok(self.random().int_in(min, max));
        }
        // The span of a full i64 range only fits in i128.
        let span = i128::from(max) - i128::from(min);
        let slots = i64::try_from(span.div_euclid(i128::from(step))).unwrap_or(i64::MAX);
        let offset = i128::from(self.random().int_in(0, slots)) * i128::from(step);
        Ok(i64::try_from(i128::from(min) + offset).unwrap_or(max))
    }

    /// Digit in `0..=9`.
    pub fn random_digit(&self) -> i64 {
        self.random().int_in(0, 9)
    }

    /// Digit in `1..=9`.
    pub fn random_digit_not_null(&self) -> i64 {
        self.random().int_in(1, 9)
    }

    /// Digit in `2..=9`.
    pub fn random_digit_above_two(&self) -> i64 {
        self.random().int_in(2, 9)
    }

    /// Digit in `0..=9` half of the time, nothing otherwise.
    pub fn random_digit_or_empty(&self) -> Option<i64> {
        (self.random().int_in(0, 1) == 1).then(|| self.random().int_in(0, 9))
    }

    /// Digit in `1..=9` half of the time, nothing otherwise.
    pub fn random_digit_not_null_or_empty(&self) -> Option<i64> {
        (self.random().int_in(0, 1) == 1).then(|| self.random().int_in(1, 9))
    }

    /// Number with up to `digits` digits, or exactly `digits` when `fix_len`.
    ///
    /// `digits` defaults to a random value in `1..=9`.
    pub fn random_number(&self, digits: Option<i64>, fix_len: bool) -> Result<i64, FakerError> {
        let digits = digits.unwrap_or_else(|| self.random_digit_not_null());
        if digits < 0 || (fix_len && digits == 0) {
            return Err(FakerError::InvalidDigits { digits, fix_len });
        }
        let exponent = u32::try_from(digits).unwrap_or(u32::MAX);
        let upper = 10_i64.checked_pow(exponent).ok_or_else(|| {
            FakerError::invalid_argument("random_number", "digits", "too many digits for i64")
        })?;
        if fix_len {
            let lower = 10_i64.pow(exponent - 1);
            Ok(self.random().int_in(lower, upper - 1))
        } else {
            Ok(self.random().int_in(0, upper - 1))
        }
    }

    /// One ASCII letter.
    pub fn random_letter(&self) -> char {
        self.random_char(ASCII_LETTERS)
    }

    /// `length` ASCII letters, drawn with replacement.
    pub fn random_letters(&self, length: usize) -> String {
        (0..length).map(|_| self.random_letter()).collect()
    }

    /// One lowercase ASCII letter.
    pub fn random_lowercase_letter(&self) -> char {
        self.random_char(LOWERCASE)
    }

    /// One uppercase ASCII letter.
    pub fn random_uppercase_letter(&self) -> char {
        self.random_char(UPPERCASE)
    }

    fn random_char(&self, alphabet: &str) -> char {
        let letters: Vec<char> = alphabet.chars().collect();
        if letters.is_empty() {
            return '?';
        }
        letters[self.random().index(letters.len())]
    }

    /// Scale `number` by a random percentage in `[60, 140]` and clamp.
    ///
    /// `le` keeps the result at or below `number`, `ge` at or above; with both
    /// set `number` is returned unchanged. `min`/`max` clamp last.
    pub fn randomize_nb_elements(
        &self,
        number: i64,
        le: bool,
        ge: bool,
        min: Option<i64>,
        max: Option<i64>,
    ) -> i64 {
        if le && ge {
            return number;
        }
        let low = if ge { 100 } else { 60 };
        let high = if le { 100 } else { 140 };
        let percent = self.random().int_in(low, high);
        let mut nb = (number as f64 * percent as f64 / 100.0).trunc() as i64;
        if let Some(min) = min {
            nb = nb.max(min);
        }
        if let Some(max) = max {
            nb = nb.min(max);
        }
        nb
    }

    /// Replace placeholder characters with digits.
    ///
    /// - `#`: 0-9
    /// - `%`: 1-9
    /// - `$`: 2-9
    /// - `!`: 0-9 or nothing
    /// - `@`: 1-9 or nothing
    pub fn numerify(&self, text: &str) -> String {
        let text = replace_each(text, '#', || self.random_digit().to_string());
        let text = replace_each(&text, '%', || self.random_digit_not_null().to_string());
        let text = replace_each(&text, '$', || self.random_digit_above_two().to_string());
        let text = replace_each(&text, '!', || {
            self.random_digit_or_empty()
                .map(|d| d.to_string())
                .unwrap_or_default()
        });
        replace_each(&text, '@', || {
            self.random_digit_not_null_or_empty()
                .map(|d| d.to_string())
                .unwrap_or_default()
        })
    }

    /// Replace each `?` with a random character from `letters`.
    pub fn lexify(&self, text: &str, letters: &str) -> String {
        replace_each(text, '?', || self.random_char(letters).to_string())
    }

    /// [`numerify`](Self::numerify) then [`lexify`](Self::lexify).
    pub fn bothify(&self, text: &str, letters: &str) -> String {
        self.lexify(&self.numerify(text), letters)
    }

    /// Replace each `^` with a random hex digit.
    pub fn hexify(&self, text: &str, upper: bool) -> String {
        replace_each(text, '^', || {
            let digit = self.random_char(HEX_DIGITS);
            if upper {
                digit.to_ascii_uppercase().to_string()
            } else {
                digit.to_string()
            }
        })
    }

    /// A two-letter language code such as `de`.
    pub fn language_code(&self) -> Result<&'static str, FakerError> {
        let codes: Vec<&'static str> = LANGUAGE_LOCALE_CODES.iter().map(|(code, _)| *code).collect();
        self.random_element(Choices::uniform(&codes))
    }

    /// A locale string such as `de_AT`.
    pub fn random_locale(&self) -> Result<String, FakerError> {
        let (language, territories) =
            self.random_element(Choices::uniform(LANGUAGE_LOCALE_CODES))?;
        let territory = self.random_element(Choices::uniform(territories))?;
        Ok(format!("{language}_{territory}"))
    }
}

/// Replace every occurrence of `target` with a freshly generated string.
fn replace_each(text: &str, target: char, mut replacement: impl FnMut() -> String) -> String {
    let mut output = String::with_capacity(text.len());
    for c in text.chars() {
        if c == target {
            output.push_str(&replacement());
        } else {
            output.push(c);
        }
    }
    output
}

/// Exposes the shared helpers as formatters.
///
/// Registered first by the factory so every generator has them; locale
/// providers registered later may override any of these names.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseProvider;

const BASE_FORMATTERS: &[&str] = &[
    "bothify",
    "hexify",
    "language_code",
    "lexify",
    "locale",
    "numerify",
    "random_choices",
    "random_digit",
    "random_digit_above_two",
    "random_digit_not_null",
    "random_digit_not_null_or_empty",
    "random_digit_or_empty",
    "random_element",
    "random_elements",
    "random_int",
    "random_letter",
    "random_letters",
    "random_lowercase_letter",
    "random_number",
    "random_sample",
    "random_uppercase_letter",
    "randomize_nb_elements",
];

const DEFAULT_ELEMENTS: &[&str] = &["a", "b", "c"];

impl Provider for BaseProvider {
    fn name(&self) -> &str {
        "base"
    }

    fn formatters(&self) -> Vec<&str> {
        BASE_FORMATTERS.to_vec()
    }

    fn call(&self, formatter: &str, ctx: &Context<'_>, args: &Args) -> Result<Value, FakerError> {
        let value = match formatter {
            "random_int" => {
                let min = args.int_or(formatter, 0, "min", 0)?;
                let max = args.int_or(formatter, 1, "max", 9999)?;
                let step = args.int_or(formatter, 2, "step", 1)?;
                ctx.random_int(min, max, step)?.into()
            }
            "random_digit" => ctx.random_digit().into(),
            "random_digit_not_null" => ctx.random_digit_not_null().into(),
            "random_digit_above_two" => ctx.random_digit_above_two().into(),
            "random_digit_or_empty" => digit_or_empty(ctx.random_digit_or_empty()),
            "random_digit_not_null_or_empty" => {
                digit_or_empty(ctx.random_digit_not_null_or_empty())
            }
            "random_number" => {
                let digits = args.int_opt(formatter, 0, "digits")?;
                let fix_len = args.bool_or(formatter, 1, "fix_len", false)?;
                ctx.random_number(digits, fix_len)?.into()
            }
            "random_letter" => ctx.random_letter().to_string().into(),
            "random_letters" => {
                let length = args.usize_or(formatter, 0, "length", 16)?;
                ctx.random_letters(length).into()
            }
            "random_lowercase_letter" => ctx.random_lowercase_letter().to_string().into(),
            "random_uppercase_letter" => ctx.random_uppercase_letter().to_string().into(),
            "random_element" => {
                let elements = elements_arg(formatter, args)?;
                ctx.random_element(Choices::uniform(&elements))?
            }
            "random_elements" | "random_choices" | "random_sample" => {
                let elements = elements_arg(formatter, args)?;
                let length = args.usize_opt(formatter, 1, "length")?;
                let unique = match formatter {
                    "random_sample" => true,
                    "random_choices" => false,
                    _ => args.bool_or(formatter, 2, "unique", false)?,
                };
                let use_weighting = args.bool_or(formatter, 3, "use_weighting", ctx.use_weighting())?;
                let picked = ctx
                    .with_weighting(use_weighting)
                    .random_elements(Choices::uniform(&elements), length, unique)?;
                Value::List(picked)
            }
            "randomize_nb_elements" => {
                let number = args.int_or(formatter, 0, "number", 10)?;
                let le = args.bool_or(formatter, 1, "le", false)?;
                let ge = args.bool_or(formatter, 2, "ge", false)?;
                let min = args.int_opt(formatter, 3, "min")?;
                let max = args.int_opt(formatter, 4, "max")?;
                ctx.randomize_nb_elements(number, le, ge, min, max).into()
            }
            "numerify" => {
                let text = args.str_opt(formatter, 0, "text")?.unwrap_or("###");
                ctx.numerify(text).into()
            }
            "lexify" => {
                let text = args.str_opt(formatter, 0, "text")?.unwrap_or("????");
                let letters = args.str_opt(formatter, 1, "letters")?.unwrap_or(ASCII_LETTERS);
                ctx.lexify(text, letters).into()
            }
            "bothify" => {
                let text = args.str_opt(formatter, 0, "text")?.unwrap_or("## ??");
                let letters = args.str_opt(formatter, 1, "letters")?.unwrap_or(ASCII_LETTERS);
                ctx.bothify(text, letters).into()
            }
            "hexify" => {
                let text = args.str_opt(formatter, 0, "text")?.unwrap_or("^^^^");
                let upper = args.bool_or(formatter, 1, "upper", false)?;
                ctx.hexify(text, upper).into()
            }
            "language_code" => ctx.language_code()?.into(),
            "locale" => ctx.random_locale()?.into(),
            _ => return Err(unsupported(self, formatter, ctx)),
        };
        Ok(value)
    }
}

fn digit_or_empty(digit: Option<i64>) -> Value {
    digit.map(|d| d.to_string()).unwrap_or_default().into()
}

fn elements_arg(formatter: &str, args: &Args) -> Result<Vec<Value>, FakerError> {
    Ok(match args.list_opt(formatter, 0, "elements")? {
        Some(items) => items.to_vec(),
        None => DEFAULT_ELEMENTS.iter().map(|s| Value::from(*s)).collect(),
    })
}

/// Error for a formatter name a provider was asked for but does not handle.
pub(crate) fn unsupported(provider: &dyn Provider, formatter: &str, ctx: &Context<'_>) -> FakerError {
    FakerError::UnknownFormatter {
        name: format!("{}.{formatter}", provider.name()),
        locale: ctx.locale().map(str::to_string),
        suggestions: Vec::new(),
    }
}
