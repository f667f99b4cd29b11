//! Telephone numbers.

mod de_de;
mod en_us;

use crate::generator::FakerError;
use crate::providers::base::unsupported;
use crate::providers::{Context, Provider};
use crate::types::{Args, Value};

/// Locales with phone number tables.
pub const LOCALES: &[&str] = &["en_US", "de_DE"];

/// Locale used when the requested one has no table.
pub const DEFAULT_LOCALE: &str = "en_US";

/// International calling codes, shared by every locale.
const COUNTRY_CALLING_CODES: &[&str] = &[
    "+1", "+20", "+27", "+30", "+31", "+32", "+33", "+34", "+36", "+39", "+40", "+41", "+43",
    "+44", "+45", "+46", "+47", "+48", "+49", "+51", "+52", "+54", "+55", "+56", "+57", "+61",
    "+64", "+65", "+81", "+82", "+86", "+90", "+91", "+351", "+352", "+353", "+358", "+420",
];

/// Digit masks for one locale.
#[derive(Debug)]
pub struct PhoneNumberLocale {
    pub formats: &'static [&'static str],
    pub msisdn_formats: &'static [&'static str],
}

/// Phone numbers for a locale.
#[derive(Debug, Clone, Copy)]
pub struct PhoneNumberProvider {
    data: &'static PhoneNumberLocale,
}

impl PhoneNumberProvider {
    /// The provider for `locale`, if there is a table for it.
    pub fn for_locale(locale: &str) -> Option<Self> {
        let data = match locale {
            "en_US" => &en_us::EN_US,
            "de_DE" => &de_de::DE_DE,
            _ => return None,
        };
        Some(Self { data })
    }
}

impl Provider for PhoneNumberProvider {
    fn name(&self) -> &str {
        "phone_number"
    }

    fn formatters(&self) -> Vec<&str> {
        vec!["country_calling_code", "msisdn", "phone_number"]
    }

    fn call(&self, formatter: &str, ctx: &Context<'_>, _args: &Args) -> Result<Value, FakerError> {
        let value = match formatter {
            "phone_number" => ctx.numerify(ctx.pick(self.data.formats)?),
            "msisdn" => ctx.numerify(ctx.pick(self.data.msisdn_formats)?),
            "country_calling_code" => ctx.pick(COUNTRY_CALLING_CODES)?.to_string(),
            _ => return Err(unsupported(self, formatter, ctx)),
        };
        Ok(value.into())
    }
}
