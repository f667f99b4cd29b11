//! Providers built at runtime from a list of values.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde_json::Value as JsonValue;

use crate::generator::FakerError;
use crate::providers::base::unsupported;
use crate::providers::{Context, Provider};
use crate::types::{Args, Choices, Value};

/// A provider with one formatter, named after the provider, that returns a
/// random element of its list.
///
/// # Example
///
/// ```
/// use fakery::Generator;
/// use fakery::providers::DynamicProvider;
///
/// let mut fruit = DynamicProvider::new("fruit", vec!["apple".into()]).unwrap();
/// fruit.add_element("pear");
///
/// let mut generator = Generator::new();
/// generator.add_provider(fruit);
/// assert!(generator.has_formatter("fruit"));
/// ```
#[derive(Debug, Clone)]
pub struct DynamicProvider {
    name: String,
    elements: Elements,
}

#[derive(Debug, Clone)]
enum Elements {
    Uniform(Vec<Value>),
    Weighted(Vec<(Value, f64)>),
}

impl DynamicProvider {
    /// Create a provider drawing uniformly from `elements`.
    ///
    /// Fails if `name` starts with `__`. An empty list is accepted here and
    /// fails when the formatter is called.
    pub fn new(name: impl Into<String>, elements: Vec<Value>) -> Result<Self, FakerError> {
        Ok(Self {
            name: checked_name(name.into())?,
            elements: Elements::Uniform(elements),
        })
    }

    /// Create a provider drawing from `(value, weight)` pairs.
    pub fn weighted(
        name: impl Into<String>,
        elements: Vec<(Value, f64)>,
    ) -> Result<Self, FakerError> {
        Ok(Self {
            name: checked_name(name.into())?,
            elements: Elements::Weighted(elements),
        })
    }

    /// Append an element. Weighted providers give it weight 1.
    pub fn add_element(&mut self, element: impl Into<Value>) {
        match &mut self.elements {
            Elements::Uniform(values) => values.push(element.into()),
            Elements::Weighted(pairs) => pairs.push((element.into(), 1.0)),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        match &self.elements {
            Elements::Uniform(values) => values.len(),
            Elements::Weighted(pairs) => pairs.len(),
        }
    }

    /// Returns true when calling the formatter would fail.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn checked_name(name: String) -> Result<String, FakerError> {
    if name.starts_with("__") {
        return Err(FakerError::InvalidProviderName { name });
    }
    Ok(name)
}

impl Provider for DynamicProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn formatters(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn call(&self, formatter: &str, ctx: &Context<'_>, args: &Args) -> Result<Value, FakerError> {
        if formatter != self.name {
            return Err(unsupported(self, formatter, ctx));
        }
        let use_weighting = args.bool_or(formatter, 0, "use_weighting", ctx.use_weighting())?;
        let ctx = ctx.with_weighting(use_weighting);
        let choices = match &self.elements {
            Elements::Uniform(values) => Choices::uniform(values),
            Elements::Weighted(pairs) => Choices::weighted(pairs),
        };
        if choices.is_empty() {
            return Err(FakerError::invalid_argument(
                formatter,
                "elements",
                "Elements should be a list of values the provider samples from",
            ));
        }
        ctx.random_element(choices)
    }
}

/// Read dynamic providers from a JSON object of `name -> [values]`.
///
/// Providers come back in name order.
pub fn load_file(path: &Path) -> Result<Vec<DynamicProvider>, FakerError> {
    let text = fs::read_to_string(path).map_err(|source| FakerError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_json_str(&text).map_err(|message| FakerError::IncludeFormat {
        path: path.to_path_buf(),
        message,
    })
}

fn from_json_str(text: &str) -> Result<Vec<DynamicProvider>, String> {
    let table: BTreeMap<String, Vec<JsonValue>> = serde_json::from_str(text)
        .map_err(|e| format!("expected an object mapping provider names to lists: {e}"))?;
    table
        .into_iter()
        .map(|(name, values)| {
            let elements = values.into_iter().map(Value::from).collect();
            DynamicProvider::new(name, elements).map_err(|e| e.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_table_becomes_providers_in_name_order() {
        let providers = from_json_str(r#"{"tea": ["green"], "coffee": ["mocha", 3]}"#).unwrap();
        let names: Vec<&str> = providers.iter().map(Provider::name).collect();
        assert_eq!(names, vec!["coffee", "tea"]);
        assert_eq!(providers[0].len(), 2);
    }

    #[test]
    fn json_table_rejects_non_lists() {
        let err = from_json_str(r#"{"tea": "green"}"#).unwrap_err();
        assert!(err.starts_with("expected an object"), "{err}");
    }

    #[test]
    fn reserved_names_are_rejected_from_json() {
        let err = from_json_str(r#"{"__tea": ["green"]}"#).unwrap_err();
        assert!(err.contains("cannot start with __"), "{err}");
    }
}
