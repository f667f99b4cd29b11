//! E-mail addresses, user names, domains, URLs, IP addresses.

use crate::generator::FakerError;
use crate::providers::base::{ASCII_LETTERS, unsupported};
use crate::providers::{Context, Provider};
use crate::types::{Args, Choices, Value};

/// Locales with internet tables.
pub const LOCALES: &[&str] = &["en_US"];

/// Locale used when the requested one has no table.
pub const DEFAULT_LOCALE: &str = "en_US";

/// Internet tables for one locale.
#[derive(Debug)]
pub struct InternetLocale {
    pub user_name_formats: &'static [&'static str],
    pub email_formats: &'static [&'static str],
    pub url_formats: &'static [&'static str],
    pub free_email_domains: Choices<'static, &'static str>,
    pub tlds: Choices<'static, &'static str>,
    pub safe_tlds: &'static [&'static str],
    /// Transliterations applied before stripping what is left outside ASCII.
    pub replacements: &'static [(char, &'static str)],
}

static EN_US: InternetLocale = InternetLocale {
    user_name_formats: &[
        "{{last_name}}.{{first_name}}",
        "{{first_name}}.{{last_name}}",
        "{{first_name}}##",
        "?{{last_name}}",
    ],
    email_formats: &["{{user_name}}@{{domain_name}}", "{{user_name}}@{{free_email_domain}}"],
    url_formats: &["www.{{domain_name}}/", "{{domain_name}}/"],
    free_email_domains: Choices::Weighted(&[("gmail.com", 0.4), ("yahoo.com", 0.3), ("hotmail.com", 0.3)]),
    tlds: Choices::Weighted(&[
        ("com", 0.6),
        ("net", 0.1),
        ("org", 0.1),
        ("info", 0.1),
        ("biz", 0.1),
    ]),
    safe_tlds: &["com", "net", "org"],
    replacements: &[
        ('ä', "ae"),
        ('ö', "oe"),
        ('ü', "ue"),
        ('Ä', "Ae"),
        ('Ö', "Oe"),
        ('Ü', "Ue"),
        ('ß', "ss"),
        ('é', "e"),
        ('è', "e"),
        ('á', "a"),
        ('à', "a"),
        ('ñ', "n"),
        ('ç', "c"),
    ],
};

/// Internet-related values for a locale.
#[derive(Debug, Clone, Copy)]
pub struct InternetProvider {
    data: &'static InternetLocale,
}

impl InternetProvider {
    /// The provider for `locale`, if there is a table for it.
    pub fn for_locale(locale: &str) -> Option<Self> {
        match locale {
            "en_US" => Some(Self { data: &EN_US }),
            _ => None,
        }
    }

    /// Transliterate what the table knows and drop remaining non-ASCII and
    /// whitespace.
    fn to_ascii(&self, text: &str) -> String {
        let mut output = String::with_capacity(text.len());
        for c in text.chars() {
            match self.data.replacements.iter().find(|(from, _)| *from == c) {
                Some((_, to)) => output.push_str(to),
                None if c.is_ascii() && !c.is_ascii_whitespace() && c != '\'' => output.push(c),
                None => {}
            }
        }
        output
    }

    pub fn user_name(&self, ctx: &Context<'_>) -> Result<String, FakerError> {
        let pattern = ctx.parse_one_of(self.data.user_name_formats)?;
        let name = ctx.bothify(&pattern, ASCII_LETTERS).to_lowercase();
        Ok(self.to_ascii(&name))
    }

    pub fn domain_word(&self, ctx: &Context<'_>) -> Result<String, FakerError> {
        let word = ctx.fake("last_name")?.to_lowercase();
        Ok(self.to_ascii(&word))
    }

    pub fn tld(&self, ctx: &Context<'_>) -> Result<String, FakerError> {
        Ok(ctx.random_element(self.data.tlds)?.to_string())
    }

    /// A domain with `levels` labels below the top level.
    pub fn domain_name(&self, ctx: &Context<'_>, levels: i64) -> Result<String, FakerError> {
        if levels < 1 {
            return Err(FakerError::invalid_argument(
                "domain_name",
                "levels",
                "levels must be greater than or equal to 1",
            ));
        }
        let mut labels = Vec::new();
        for _ in 0..levels {
            labels.push(self.domain_word(ctx)?);
        }
        labels.push(self.tld(ctx)?);
        Ok(labels.join("."))
    }

    pub fn free_email_domain(&self, ctx: &Context<'_>) -> Result<String, FakerError> {
        Ok(ctx.random_element(self.data.free_email_domains)?.to_string())
    }

    /// An e-mail address.
    ///
    /// With `domain` the address uses it; otherwise `safe` addresses use an
    /// `example.*` domain and unsafe ones a random e-mail format.
    pub fn email(&self, ctx: &Context<'_>, safe: bool, domain: Option<&str>) -> Result<String, FakerError> {
        match domain {
            Some(domain) => Ok(format!("{}@{domain}", self.user_name(ctx)?)),
            None if safe => {
                let tld = ctx.pick(self.data.safe_tlds)?;
                Ok(format!("{}@example.{tld}", self.user_name(ctx)?))
            }
            None => ctx.parse_one_of(self.data.email_formats),
        }
    }

    /// A URL using one of `schemes`; no scheme prefix when `schemes` is empty.
    pub fn url(&self, ctx: &Context<'_>, schemes: &[String]) -> Result<String, FakerError> {
        let location = ctx.parse_one_of(self.data.url_formats)?;
        if schemes.is_empty() {
            return Ok(location);
        }
        let scheme = ctx.random_element(Choices::uniform(schemes))?;
        Ok(format!("{scheme}://{location}"))
    }

    /// A dotted IPv4 address, optionally as a network in CIDR notation.
    pub fn ipv4(&self, ctx: &Context<'_>, network: bool) -> String {
        let random = ctx.random();
        let address = u32::try_from(random.int_in(0, i64::from(u32::MAX))).unwrap_or(0);
        if network {
            let prefix = u32::try_from(random.int_in(0, 32)).unwrap_or(32);
            let mask = u32::MAX.checked_shl(32 - prefix).unwrap_or(0);
            format!("{}/{prefix}", dotted(address & mask))
        } else {
            dotted(address)
        }
    }
}

fn dotted(address: u32) -> String {
    let [a, b, c, d] = address.to_be_bytes();
    format!("{a}.{b}.{c}.{d}")
}

impl Provider for InternetProvider {
    fn name(&self) -> &str {
        "internet"
    }

    fn formatters(&self) -> Vec<&str> {
        vec![
            "domain_name",
            "domain_word",
            "email",
            "free_email",
            "free_email_domain",
            "ipv4",
            "tld",
            "url",
            "user_name",
        ]
    }

    fn call(&self, formatter: &str, ctx: &Context<'_>, args: &Args) -> Result<Value, FakerError> {
        let value = match formatter {
            "user_name" => self.user_name(ctx)?,
            "domain_word" => self.domain_word(ctx)?,
            "tld" => self.tld(ctx)?,
            "domain_name" => {
                let levels = args.int_or(formatter, 0, "levels", 1)?;
                self.domain_name(ctx, levels)?
            }
            "free_email_domain" => self.free_email_domain(ctx)?,
            "free_email" => format!("{}@{}", self.user_name(ctx)?, self.free_email_domain(ctx)?),
            "email" => {
                let safe = args.bool_or(formatter, 0, "safe", true)?;
                let domain = args.str_opt(formatter, 1, "domain")?;
                self.email(ctx, safe, domain)?
            }
            "url" => {
                let schemes = match args.list_opt(formatter, 0, "schemes")? {
                    Some(items) => items.iter().map(Value::to_string).collect(),
                    None => vec!["http".to_string(), "https".to_string()],
                };
                self.url(ctx, &schemes)?
            }
            "ipv4" => {
                let network = args.bool_or(formatter, 0, "network", false)?;
                self.ipv4(ctx, network)
            }
            _ => return Err(unsupported(self, formatter, ctx)),
        };
        Ok(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_ascii_transliterates_umlauts() {
        let provider = InternetProvider::for_locale("en_US").unwrap();
        assert_eq!(provider.to_ascii("müller straße"), "muellerstrasse");
        assert_eq!(provider.to_ascii("o'neil"), "oneil");
    }

    #[test]
    fn dotted_formats_octets_big_endian() {
        assert_eq!(dotted(0xC0A8_0001), "192.168.0.1");
    }
}
