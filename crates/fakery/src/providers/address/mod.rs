//! Postal addresses.

mod de_de;
mod en_us;

use crate::generator::FakerError;
use crate::providers::base::unsupported;
use crate::providers::{Context, Provider};
use crate::types::{Args, Choices, Value};

/// Locales with address tables.
pub const LOCALES: &[&str] = &["en_US", "de_DE"];

/// Locale used when the requested one has no table.
pub const DEFAULT_LOCALE: &str = "en_US";

type Table = Choices<'static, &'static str>;

/// Address tables for one locale.
///
/// `*_formats` tables are templates (expanded with `parse`) or digit masks
/// (expanded with `numerify`). Optional tables add formatters.
#[derive(Debug)]
pub struct AddressLocale {
    pub address_formats: Table,
    pub street_address_formats: Table,
    pub street_name_formats: Table,
    pub street_suffixes: Table,
    pub building_number_formats: Table,
    pub city_formats: Table,
    pub city_suffixes: Table,
    pub postcode_formats: Table,
    pub countries: Table,
    pub states: Table,
    pub states_abbr: Option<Table>,
    pub city_prefixes: Option<Table>,
    pub city_names: Option<Table>,
    pub secondary_address_formats: Option<Table>,
}

/// Addresses for a locale.
#[derive(Debug, Clone, Copy)]
pub struct AddressProvider {
    data: &'static AddressLocale,
}

impl AddressProvider {
    /// The provider for `locale`, if there is a table for it.
    pub fn for_locale(locale: &str) -> Option<Self> {
        let data = match locale {
            "en_US" => &en_us::EN_US,
            "de_DE" => &de_de::DE_DE,
            _ => return None,
        };
        Some(Self { data })
    }

    /// The optional table backing `formatter`, when this locale has one.
    fn optional_table(&self, formatter: &str) -> Option<Table> {
        OPTIONAL_FORMATTERS
            .iter()
            .find(|(name, _)| *name == formatter)
            .and_then(|(_, table)| table(self.data))
    }
}

const FORMATTERS: &[&str] = &[
    "address",
    "building_number",
    "city",
    "city_suffix",
    "country",
    "postcode",
    "state",
    "street_address",
    "street_name",
    "street_suffix",
];

type OptionalTable = fn(&AddressLocale) -> Option<Table>;

const OPTIONAL_FORMATTERS: &[(&str, OptionalTable)] = &[
    ("city_name", |data: &AddressLocale| data.city_names),
    ("city_prefix", |data: &AddressLocale| data.city_prefixes),
    ("secondary_address", |data: &AddressLocale| data.secondary_address_formats),
    ("state_abbr", |data: &AddressLocale| data.states_abbr),
];

fn pick(ctx: &Context<'_>, table: Table) -> Result<String, FakerError> {
    Ok(ctx.random_element(table)?.to_string())
}

fn expand(ctx: &Context<'_>, table: Table) -> Result<String, FakerError> {
    let pattern = ctx.random_element(table)?;
    ctx.parse(pattern)
}

fn numerify(ctx: &Context<'_>, table: Table) -> Result<String, FakerError> {
    let mask = ctx.random_element(table)?;
    Ok(ctx.numerify(mask))
}

impl Provider for AddressProvider {
    fn name(&self) -> &str {
        "address"
    }

    fn formatters(&self) -> Vec<&str> {
        let mut names = FORMATTERS.to_vec();
        names.extend(
            OPTIONAL_FORMATTERS
                .iter()
                .filter(|(_, table)| table(self.data).is_some())
                .map(|(name, _)| *name),
        );
        names
    }

    fn call(&self, formatter: &str, ctx: &Context<'_>, _args: &Args) -> Result<Value, FakerError> {
        let data = self.data;
        let value = match formatter {
            "address" => expand(ctx, data.address_formats)?,
            "street_address" => expand(ctx, data.street_address_formats)?,
            "street_name" => expand(ctx, data.street_name_formats)?,
            "city" => expand(ctx, data.city_formats)?,
            "street_suffix" => pick(ctx, data.street_suffixes)?,
            "city_suffix" => pick(ctx, data.city_suffixes)?,
            "country" => pick(ctx, data.countries)?,
            "state" => pick(ctx, data.states)?,
            "building_number" => numerify(ctx, data.building_number_formats)?,
            "postcode" => numerify(ctx, data.postcode_formats)?,
            "secondary_address" => match data.secondary_address_formats {
                Some(table) => numerify(ctx, table)?,
                None => return Err(unsupported(self, formatter, ctx)),
            },
            _ => match self.optional_table(formatter) {
                Some(table) => pick(ctx, table)?,
                None => return Err(unsupported(self, formatter, ctx)),
            },
        };
        Ok(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_tables_control_formatter_list() {
        let us = AddressProvider::for_locale("en_US").unwrap();
        let de = AddressProvider::for_locale("de_DE").unwrap();
        assert!(us.formatters().contains(&"state_abbr"));
        assert!(!de.formatters().contains(&"state_abbr"));
        assert!(de.formatters().contains(&"city_name"));
    }
}
