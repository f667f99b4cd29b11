//! Personal names.

mod de_de;
mod en_us;

use crate::generator::FakerError;
use crate::providers::base::unsupported;
use crate::providers::{Context, Provider};
use crate::types::{Args, Choices, Value};

/// Locales with person tables.
pub const LOCALES: &[&str] = &["en_US", "de_DE"];

/// Locale used when the requested one has no table.
pub const DEFAULT_LOCALE: &str = "en_US";

type Table = Choices<'static, &'static str>;

/// Name tables for one locale.
///
/// Name formats are templates over the other person formatters. Suffix
/// tables are optional; locales without them have no `suffix*` formatters.
#[derive(Debug)]
pub struct PersonLocale {
    pub formats_male: Table,
    pub formats_female: Table,
    pub first_names_male: Table,
    pub first_names_female: Table,
    pub last_names: Table,
    pub prefixes_male: Table,
    pub prefixes_female: Table,
    pub suffixes_male: Option<Table>,
    pub suffixes_female: Option<Table>,
}

/// Names for a locale.
#[derive(Debug, Clone, Copy)]
pub struct PersonProvider {
    data: &'static PersonLocale,
}

const FORMATTERS: &[&str] = &[
    "first_name",
    "first_name_female",
    "first_name_male",
    "last_name",
    "name",
    "name_female",
    "name_male",
    "prefix",
    "prefix_female",
    "prefix_male",
];

const SUFFIX_FORMATTERS: &[&str] = &["suffix", "suffix_female", "suffix_male"];

impl PersonProvider {
    /// The provider for `locale`, if there is a table for it.
    pub fn for_locale(locale: &str) -> Option<Self> {
        let data = match locale {
            "en_US" => &en_us::EN_US,
            "de_DE" => &de_de::DE_DE,
            _ => return None,
        };
        Some(Self { data })
    }

    fn has_suffixes(&self) -> bool {
        self.data.suffixes_male.is_some() && self.data.suffixes_female.is_some()
    }

    /// Pick the male or female table with equal odds.
    fn either(ctx: &Context<'_>, male: Table, female: Table) -> Table {
        if ctx.random().int_in(0, 1) == 0 { male } else { female }
    }

    fn pick(ctx: &Context<'_>, table: Table) -> Result<String, FakerError> {
        Ok(ctx.random_element(table)?.to_string())
    }

    fn expand(ctx: &Context<'_>, formats: Table) -> Result<String, FakerError> {
        let pattern = ctx.random_element(formats)?;
        ctx.parse(pattern)
    }
}

impl Provider for PersonProvider {
    fn name(&self) -> &str {
        "person"
    }

    fn formatters(&self) -> Vec<&str> {
        let mut names = FORMATTERS.to_vec();
        if self.has_suffixes() {
            names.extend_from_slice(SUFFIX_FORMATTERS);
        }
        names
    }

    fn call(&self, formatter: &str, ctx: &Context<'_>, _args: &Args) -> Result<Value, FakerError> {
        let data = self.data;
        let value = match formatter {
            "name" => Self::expand(ctx, Self::either(ctx, data.formats_male, data.formats_female))?,
            "name_male" => Self::expand(ctx, data.formats_male)?,
            "name_female" => Self::expand(ctx, data.formats_female)?,
            "first_name" => Self::pick(
                ctx,
                Self::either(ctx, data.first_names_male, data.first_names_female),
            )?,
            "first_name_male" => Self::pick(ctx, data.first_names_male)?,
            "first_name_female" => Self::pick(ctx, data.first_names_female)?,
            "last_name" => Self::pick(ctx, data.last_names)?,
            "prefix" => Self::pick(ctx, Self::either(ctx, data.prefixes_male, data.prefixes_female))?,
            "prefix_male" => Self::pick(ctx, data.prefixes_male)?,
            "prefix_female" => Self::pick(ctx, data.prefixes_female)?,
            "suffix" | "suffix_male" | "suffix_female" => {
                let (Some(male), Some(female)) = (data.suffixes_male, data.suffixes_female) else {
                    return Err(unsupported(self, formatter, ctx));
                };
                let table = match formatter {
                    "suffix_male" => male,
                    "suffix_female" => female,
                    _ => Self::either(ctx, male, female),
                };
                Self::pick(ctx, table)?
            }
            _ => return Err(unsupported(self, formatter, ctx)),
        };
        Ok(value.into())
    }
}
