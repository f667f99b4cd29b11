/// A set of values to sample from, with optional relative weights.
///
/// Both variants borrow ordered slices. Unordered maps are not convertible,
/// since seeded output depends on a stable iteration order.
///
/// # Example
///
/// ```
/// use fakery::Choices;
///
/// const FORMATS: &[(&str, f64)] = &[("{{first_name}} {{last_name}}", 0.9), ("{{last_name}}", 0.1)];
/// let choices = Choices::weighted(FORMATS);
/// assert_eq!(choices.len(), 2);
/// assert!(choices.weights().is_some());
/// ```
#[derive(Debug)]
pub enum Choices<'a, T> {
    /// Every value is equally likely.
    Uniform(&'a [T]),
    /// Each value carries a non-negative relative weight.
    Weighted(&'a [(T, f64)]),
}

impl<T> Clone for Choices<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Choices<'_, T> {}

impl<'a, T> Choices<'a, T> {
    /// Uniform choices over `values`.
    pub fn uniform(values: &'a [T]) -> Self {
        Choices::Uniform(values)
    }

    /// Weighted choices over `(value, weight)` pairs.
    pub fn weighted(pairs: &'a [(T, f64)]) -> Self {
        Choices::Weighted(pairs)
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        match self {
            Choices::Uniform(values) => values.len(),
            Choices::Weighted(pairs) => pairs.len(),
        }
    }

    /// Returns true when there is nothing to choose from.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at `index`.
    pub fn get(&self, index: usize) -> Option<&'a T> {
        match self {
            Choices::Uniform(values) => values.get(index),
            Choices::Weighted(pairs) => pairs.get(index).map(|(value, _)| value),
        }
    }

    /// Values in order, without weights.
    pub fn values(&self) -> Vec<&'a T> {
        match self {
            Choices::Uniform(values) => values.iter().collect(),
            Choices::Weighted(pairs) => pairs.iter().map(|(value, _)| value).collect(),
        }
    }

    /// Weights in order, or `None` for uniform choices.
    pub fn weights(&self) -> Option<Vec<f64>> {
        match self {
            Choices::Uniform(_) => None,
            Choices::Weighted(pairs) => Some(pairs.iter().map(|(_, weight)| *weight).collect()),
        }
    }
}

impl<'a, T> From<&'a [T]> for Choices<'a, T> {
    fn from(values: &'a [T]) -> Self {
        Choices::Uniform(values)
    }
}

impl<'a, T> From<&'a Vec<T>> for Choices<'a, T> {
    fn from(values: &'a Vec<T>) -> Self {
        Choices::Uniform(values)
    }
}
