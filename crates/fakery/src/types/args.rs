use std::collections::BTreeMap;

use crate::generator::FakerError;
use crate::types::Value;

/// Arguments passed to a formatter call.
///
/// Mirrors a call with positional and keyword arguments. Keyword arguments
/// are kept sorted, so `(formatter, Args)` is a stable identity for a call.
///
/// # Example
///
/// ```
/// use fakery::{Args, Value};
///
/// let words = vec![Value::from("a"), Value::from("b")];
/// let args = Args::new().arg(3).kwarg("ext_word_list", words);
/// assert_eq!(args.positional().len(), 1);
/// assert!(args.keyword("ext_word_list").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Args {
    positional: Vec<Value>,
    keywords: BTreeMap<String, Value>,
}

impl Args {
    /// Create an empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create arguments holding only the given keywords.
    pub fn from_keywords(keywords: BTreeMap<String, Value>) -> Self {
        Self {
            positional: Vec::new(),
            keywords,
        }
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set a keyword argument, replacing any previous value.
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keywords.insert(name.into(), value.into());
        self
    }

    /// Positional arguments in call order.
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// Keyword arguments sorted by name.
    pub fn keywords(&self) -> &BTreeMap<String, Value> {
        &self.keywords
    }

    /// Look up a keyword argument.
    pub fn keyword(&self, name: &str) -> Option<&Value> {
        self.keywords.get(name)
    }

    /// Remove a keyword argument and return it.
    pub fn take_keyword(&mut self, name: &str) -> Option<Value> {
        self.keywords.remove(name)
    }

    /// Returns true when there are no arguments at all.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keywords.is_empty()
    }

    /// Resolve a parameter that may be passed positionally at `index` or by
    /// `name`. The keyword wins when both are present.
    pub fn param(&self, index: usize, name: &str) -> Option<&Value> {
        self.keywords
            .get(name)
            .or_else(|| self.positional.get(index))
    }

    /// Typed accessor returning an integer parameter or `default`.
    pub fn int_or(
        &self,
        formatter: &str,
        index: usize,
        name: &str,
        default: i64,
    ) -> Result<i64, FakerError> {
        self.int_opt(formatter, index, name)
            .map(|value| value.unwrap_or(default))
    }

    /// Typed accessor returning an optional integer parameter.
    ///
    /// `Null` is treated as absent.
    pub fn int_opt(
        &self,
        formatter: &str,
        index: usize,
        name: &str,
    ) -> Result<Option<i64>, FakerError> {
        match self.param(index, name) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Int(n)) => Ok(Some(*n)),
            Some(other) => Err(type_error(formatter, name, "int", other)),
        }
    }

    /// Typed accessor returning a non-negative count parameter or `default`.
    pub fn usize_or(
        &self,
        formatter: &str,
        index: usize,
        name: &str,
        default: usize,
    ) -> Result<usize, FakerError> {
        self.usize_opt(formatter, index, name)
            .map(|value| value.unwrap_or(default))
    }

    /// Typed accessor returning an optional non-negative count parameter.
    pub fn usize_opt(
        &self,
        formatter: &str,
        index: usize,
        name: &str,
    ) -> Result<Option<usize>, FakerError> {
        match self.int_opt(formatter, index, name)? {
            None => Ok(None),
            Some(n) => usize::try_from(n).map(Some).map_err(|_| {
                FakerError::invalid_argument(formatter, name, format!("expected >= 0, got {n}"))
            }),
        }
    }

    /// Typed accessor returning a float parameter (integers widen) or `default`.
    pub fn float_or(
        &self,
        formatter: &str,
        index: usize,
        name: &str,
        default: f64,
    ) -> Result<f64, FakerError> {
        match self.param(index, name) {
            None | Some(Value::Null) => Ok(default),
            Some(value) => value
                .as_float()
                .ok_or_else(|| type_error(formatter, name, "float", value)),
        }
    }

    /// Typed accessor returning a boolean parameter or `default`.
    pub fn bool_or(
        &self,
        formatter: &str,
        index: usize,
        name: &str,
        default: bool,
    ) -> Result<bool, FakerError> {
        match self.param(index, name) {
            None | Some(Value::Null) => Ok(default),
            Some(Value::Bool(b)) => Ok(*b),
            Some(other) => Err(type_error(formatter, name, "bool", other)),
        }
    }

    /// Typed accessor returning an optional string parameter.
    pub fn str_opt(
        &self,
        formatter: &str,
        index: usize,
        name: &str,
    ) -> Result<Option<&str>, FakerError> {
        match self.param(index, name) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Str(s)) => Ok(Some(s)),
            Some(other) => Err(type_error(formatter, name, "string", other)),
        }
    }

    /// Typed accessor returning an optional list parameter.
    pub fn list_opt(
        &self,
        formatter: &str,
        index: usize,
        name: &str,
    ) -> Result<Option<&[Value]>, FakerError> {
        match self.param(index, name) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::List(items)) => Ok(Some(items)),
            Some(other) => Err(type_error(formatter, name, "list", other)),
        }
    }
}

fn type_error(formatter: &str, name: &str, expected: &str, got: &Value) -> FakerError {
    FakerError::invalid_argument(
        formatter,
        name,
        format!("expected {expected}, got {}", got.type_name()),
    )
}

/// Creates an [`Args`] value from keyword pairs.
///
/// Values are converted via `Into<Value>`.
///
/// # Example
///
/// ```
/// use fakery::kwargs;
///
/// let args = kwargs! { "nb_words" => 3, "variable_nb_words" => false };
/// assert_eq!(args.keywords().len(), 2);
/// ```
#[macro_export]
macro_rules! kwargs {
    {} => {
        $crate::Args::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let args = $crate::Args::new();
            $(
                let args = args.kwarg($key, ::std::convert::Into::<$crate::Value>::into($value));
            )+
            args
        }
    };
}
