//! Public AST types for template strings.

/// A tokenized template string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub segments: Vec<Segment>,
}

impl Template {
    /// Returns true when the template has no placeholders.
    pub fn is_literal(&self) -> bool {
        self.segments
            .iter()
            .all(|segment| matches!(segment, Segment::Literal(_)))
    }

    /// Iterate over the placeholders in order.
    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(placeholder) => Some(placeholder),
            Segment::Literal(_) => None,
        })
    }
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, copied to the output unchanged.
    Literal(String),
    /// A `{{ formatter }}` or `{{ formatter:group }}` token.
    Placeholder(Placeholder),
}

/// A formatter reference inside `{{ }}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Formatter to call.
    pub formatter: String,
    /// Argument group supplying keyword arguments, if any.
    pub group: Option<String>,
}
