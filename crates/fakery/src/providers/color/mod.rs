//! Color names and color codes.

mod de_de;
mod en_us;

use crate::generator::FakerError;
use crate::providers::base::unsupported;
use crate::providers::{Context, Provider};
use crate::types::{Args, Choices, Value};

/// Locales with color tables.
pub const LOCALES: &[&str] = &["en_US", "de_DE"];

/// Locale used when the requested one has no table.
pub const DEFAULT_LOCALE: &str = "en_US";

/// Color tables for one locale.
#[derive(Debug)]
pub struct ColorLocale {
    /// Color name and its hex code.
    pub all_colors: &'static [(&'static str, &'static str)],
    /// Names of the sixteen web-safe colors.
    pub safe_colors: &'static [&'static str],
}

/// Colors for a locale.
#[derive(Debug, Clone, Copy)]
pub struct ColorProvider {
    data: &'static ColorLocale,
}

impl ColorProvider {
    /// The provider for `locale`, if there is a table for it.
    pub fn for_locale(locale: &str) -> Option<Self> {
        let data = match locale {
            "en_US" => &en_us::EN_US,
            "de_DE" => &de_de::DE_DE,
            _ => return None,
        };
        Some(Self { data })
    }

    fn channels(ctx: &Context<'_>) -> String {
        let random = ctx.random();
        let channels: Vec<String> = (0..3).map(|_| random.int_in(0, 255).to_string()).collect();
        channels.join(",")
    }
}

impl Provider for ColorProvider {
    fn name(&self) -> &str {
        "color"
    }

    fn formatters(&self) -> Vec<&str> {
        vec![
            "color_name",
            "hex_color",
            "rgb_color",
            "rgb_css_color",
            "safe_color_name",
            "safe_hex_color",
        ]
    }

    fn call(&self, formatter: &str, ctx: &Context<'_>, _args: &Args) -> Result<Value, FakerError> {
        let value = match formatter {
            "color_name" => {
                let (name, _) = ctx.random_element(Choices::uniform(self.data.all_colors))?;
                name.to_string()
            }
            "safe_color_name" => ctx.pick(self.data.safe_colors)?.to_string(),
            "hex_color" => format!("#{:06x}", ctx.random().int_in(1, 0xff_ffff)),
            "safe_hex_color" => {
                let digits: Vec<char> = format!("{:03x}", ctx.random().int_in(0, 255)).chars().collect();
                digits.iter().fold(String::from("#"), |mut color, digit| {
                    color.push(*digit);
                    color.push(*digit);
                    color
                })
            }
            "rgb_color" => Self::channels(ctx),
            "rgb_css_color" => format!("rgb({})", Self::channels(ctx)),
            _ => return Err(unsupported(self, formatter, ctx)),
        };
        Ok(value.into())
    }
}
