//! Credit card numbers with valid Luhn check digits.

use chrono::{Duration, Utc};

use crate::generator::FakerError;
use crate::providers::base::unsupported;
use crate::providers::date_time::format_with;
use crate::providers::{Context, Provider};
use crate::types::{Args, Choices, Value};

/// Locales with credit card tables.
pub const LOCALES: &[&str] = &["en_US"];

/// Locale used when the requested one has no table.
pub const DEFAULT_LOCALE: &str = "en_US";

/// One card brand and number layout.
#[derive(Debug, Clone, Copy)]
pub struct CardType {
    pub key: &'static str,
    pub name: &'static str,
    /// Number prefixes; may contain `numerify` placeholders.
    pub prefixes: &'static [&'static str],
    pub length: usize,
    pub security_code: &'static str,
    pub security_code_length: usize,
}

const CARD_TYPES: &[CardType] = &[
    CardType {
        key: "maestro",
        name: "Maestro",
        prefixes: &["5018", "5020", "5038", "56##", "57##", "58##", "6304", "6759", "6761", "6762", "6763", "0604", "6390"],
        length: 12,
        security_code: "CVV",
        security_code_length: 3,
    },
    CardType {
        key: "mastercard",
        name: "Mastercard",
        prefixes: &["51", "52", "53", "54", "55", "222%"],
        length: 16,
        security_code: "CVV",
        security_code_length: 3,
    },
    CardType {
        key: "visa16",
        name: "VISA 16 digit",
        prefixes: &["4"],
        length: 16,
        security_code: "CVC",
        security_code_length: 3,
    },
    CardType {
        key: "visa13",
        name: "VISA 13 digit",
        prefixes: &["4"],
        length: 13,
        security_code: "CVC",
        security_code_length: 3,
    },
    CardType {
        key: "visa19",
        name: "VISA 19 digit",
        prefixes: &["4"],
        length: 19,
        security_code: "CVC",
        security_code_length: 3,
    },
    CardType {
        key: "amex",
        name: "American Express",
        prefixes: &["34", "37"],
        length: 15,
        security_code: "CID",
        security_code_length: 4,
    },
    CardType {
        key: "discover",
        name: "Discover",
        prefixes: &["6011", "65"],
        length: 16,
        security_code: "CVC",
        security_code_length: 3,
    },
    CardType {
        key: "diners",
        name: "Diners Club / Carte Blanche",
        prefixes: &["300", "301", "302", "303", "304", "305", "36", "38"],
        length: 14,
        security_code: "CVC",
        security_code_length: 3,
    },
    CardType {
        key: "jcb15",
        name: "JCB 15 digit",
        prefixes: &["2131", "1800"],
        length: 15,
        security_code: "CVC",
        security_code_length: 3,
    },
    CardType {
        key: "jcb16",
        name: "JCB 16 digit",
        prefixes: &["3528", "3529", "353#", "354#", "355#", "356#", "357#", "358#"],
        length: 16,
        security_code: "CVC",
        security_code_length: 3,
    },
];

/// Short names accepted for `card_type` besides the exact keys.
const ALIASES: &[(&str, &str)] = &[("visa", "visa16"), ("jcb", "jcb16")];

/// Credit card values.
#[derive(Debug, Clone, Copy)]
pub struct CreditCardProvider {
    card_types: &'static [CardType],
}

impl CreditCardProvider {
    /// The provider for `locale`, if there is a table for it.
    pub fn for_locale(locale: &str) -> Option<Self> {
        match locale {
            "en_US" => Some(Self { card_types: CARD_TYPES }),
            _ => None,
        }
    }

    /// The named card type, or a random one.
    fn card_type(&self, ctx: &Context<'_>, key: Option<&str>) -> Result<CardType, FakerError> {
        let Some(key) = key else {
            return ctx.random_element(Choices::uniform(self.card_types));
        };
        let key = ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .map_or(key, |(_, target)| *target);
        self.card_types
            .iter()
            .find(|card| card.key == key)
            .copied()
            .ok_or_else(|| {
                FakerError::invalid_argument("credit_card", "card_type", format!("unknown card type '{key}'"))
            })
    }

    /// A card number of the right length ending in a Luhn check digit.
    pub fn number(&self, ctx: &Context<'_>, card: &CardType) -> Result<String, FakerError> {
        let prefix = ctx.pick(card.prefixes)?;
        let mut number = ctx.numerify(prefix);
        while number.len() + 1 < card.length {
            number.push_str(&ctx.random_digit().to_string());
        }
        number.push(luhn_check_digit(&number));
        Ok(number)
    }
}

/// The digit that makes `payload` followed by it pass the Luhn check.
fn luhn_check_digit(payload: &str) -> char {
    let total: u32 = payload
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(pos, digit)| {
            if pos % 2 == 0 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum();
    let check = (10 - total % 10) % 10;
    char::from_digit(check, 10).unwrap_or('0')
}

impl Provider for CreditCardProvider {
    fn name(&self) -> &str {
        "credit_card"
    }

    fn formatters(&self) -> Vec<&str> {
        vec![
            "credit_card_expire",
            "credit_card_number",
            "credit_card_provider",
            "credit_card_security_code",
        ]
    }

    fn call(&self, formatter: &str, ctx: &Context<'_>, args: &Args) -> Result<Value, FakerError> {
        let value = match formatter {
            "credit_card_provider" => {
                let key = args.str_opt(formatter, 0, "card_type")?;
                self.card_type(ctx, key)?.name.to_string()
            }
            "credit_card_number" => {
                let key = args.str_opt(formatter, 0, "card_type")?;
                let card = self.card_type(ctx, key)?;
                self.number(ctx, &card)?
            }
            "credit_card_security_code" => {
                let key = args.str_opt(formatter, 0, "card_type")?;
                let card = self.card_type(ctx, key)?;
                ctx.numerify(&"#".repeat(card.security_code_length))
            }
            "credit_card_expire" => {
                let date_format = args.str_opt(formatter, 0, "date_format")?.unwrap_or("%m/%y");
                let days = ctx.random().int_in(0, 3652);
                format_with(formatter, Utc::now() + Duration::days(days), date_format)?
            }
            _ => return Err(unsupported(self, formatter, ctx)),
        };
        Ok(value.into())
    }
}
