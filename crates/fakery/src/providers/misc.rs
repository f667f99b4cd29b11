//! Booleans, raw bytes, UUIDs and passwords.

use bon::Builder;
use rand::Rng;
use uuid::Builder as UuidBuilder;

use crate::generator::FakerError;
use crate::providers::base::unsupported;
use crate::providers::{Context, Provider};
use crate::types::{Args, Choices, Value};

const SPECIAL_CHARS: &str = "!@#$%^&*()_+";
const DIGITS: &str = "0123456789";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Character classes and length for [`MiscProvider::password`].
#[derive(Debug, Clone, Builder)]
pub struct PasswordOptions {
    #[builder(default = 10)]
    pub length: usize,
    #[builder(default = true)]
    pub special_chars: bool,
    #[builder(default = true)]
    pub digits: bool,
    #[builder(default = true)]
    pub upper_case: bool,
    #[builder(default = true)]
    pub lower_case: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        PasswordOptions::builder().build()
    }
}

/// Miscellaneous values. Not localized.
#[derive(Debug, Clone, Copy, Default)]
pub struct MiscProvider;

impl MiscProvider {
    /// True with `chance_of_getting_true` percent probability.
    pub fn boolean(&self, ctx: &Context<'_>, chance_of_getting_true: i64) -> bool {
        ctx.random().int_in(1, 100) <= chance_of_getting_true
    }

    /// `None`, `true` or `false` with equal odds.
    pub fn null_boolean(&self, ctx: &Context<'_>) -> Option<bool> {
        match ctx.random().int_in(-1, 1) {
            0 => None,
            n => Some(n > 0),
        }
    }

    /// `length` random bytes.
    ///
    /// Unseeded generators read the thread RNG, which is much faster for
    /// large buffers; seeded ones stay reproducible.
    pub fn binary(&self, ctx: &Context<'_>, length: usize) -> Vec<u8> {
        let mut buf = vec![0u8; length];
        if ctx.generator().is_seeded() {
            ctx.random().fill_bytes(&mut buf);
        } else {
            rand::rng().fill(buf.as_mut_slice());
        }
        buf
    }

    /// A random version 4 UUID.
    pub fn uuid4(&self, ctx: &Context<'_>) -> String {
        let mut bytes = [0u8; 16];
        ctx.random().fill_bytes(&mut bytes);
        UuidBuilder::from_random_bytes(bytes).into_uuid().to_string()
    }

    /// A password with at least one character from each enabled class.
    pub fn password(&self, ctx: &Context<'_>, options: &PasswordOptions) -> Result<String, FakerError> {
        let classes = [
            (options.special_chars, SPECIAL_CHARS),
            (options.digits, DIGITS),
            (options.upper_case, UPPERCASE),
            (options.lower_case, LOWERCASE),
        ];
        let mut alphabet: Vec<char> = Vec::new();
        let mut required: Vec<char> = Vec::new();
        for (enabled, class) in classes {
            if enabled {
                let chars: Vec<char> = class.chars().collect();
                required.push(ctx.random_element(Choices::uniform(&chars))?);
                alphabet.extend(chars);
            }
        }
        if required.len() > options.length {
            return Err(FakerError::invalid_argument(
                "password",
                "length",
                "Required length is shorter than required characters",
            ));
        }
        if alphabet.is_empty() {
            return Err(FakerError::invalid_argument(
                "password",
                "length",
                "at least one character class must be enabled",
            ));
        }

        let mut chars = ctx.random_choices(Choices::uniform(&alphabet), Some(options.length))?;
        if !required.is_empty() {
            let indexes: Vec<usize> = (0..chars.len()).collect();
            let positions = ctx.random_sample(Choices::uniform(&indexes), Some(required.len()))?;
            for (position, token) in positions.into_iter().zip(required) {
                chars[position] = token;
            }
        }
        Ok(chars.into_iter().collect())
    }
}

const FORMATTERS: &[&str] = &["binary", "boolean", "null_boolean", "password", "uuid4"];

impl Provider for MiscProvider {
    fn name(&self) -> &str {
        "misc"
    }

    fn formatters(&self) -> Vec<&str> {
        FORMATTERS.to_vec()
    }

    fn call(&self, formatter: &str, ctx: &Context<'_>, args: &Args) -> Result<Value, FakerError> {
        let value = match formatter {
            "boolean" => {
                let chance = args.int_or(formatter, 0, "chance_of_getting_true", 50)?;
                self.boolean(ctx, chance).into()
            }
            "null_boolean" => self.null_boolean(ctx).into(),
            "binary" => {
                let length = args.usize_or(formatter, 0, "length", 1024 * 1024)?;
                self.binary(ctx, length).into()
            }
            "uuid4" => self.uuid4(ctx).into(),
            "password" => {
                let options = PasswordOptions::builder()
                    .length(args.usize_or(formatter, 0, "length", 10)?)
                    .special_chars(args.bool_or(formatter, 1, "special_chars", true)?)
                    .digits(args.bool_or(formatter, 2, "digits", true)?)
                    .upper_case(args.bool_or(formatter, 3, "upper_case", true)?)
                    .lower_case(args.bool_or(formatter, 4, "lower_case", true)?)
                    .build();
                self.password(ctx, &options)?.into()
            }
            _ => return Err(unsupported(self, formatter, ctx)),
        };
        Ok(value)
    }
}
