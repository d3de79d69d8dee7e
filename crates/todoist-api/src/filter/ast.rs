//! Expression tree for filter queries.

use super::error::{FilterError, FilterResult};

/// A filter expression.
///
/// The tree is built by value, so it is always finite and acyclic. `Value`
/// nodes are leaves holding a literal query fragment; the composites own
/// their children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Filter {
    /// A literal query fragment, e.g. `overdue`, `p1` or `@label`.
    Value(String),

    /// Logical NOT of a filter.
    Not(Box<Filter>),

    /// Logical AND of the children, in order.
    ///
    /// Constructing this variant directly with no children is allowed and
    /// renders as `()`. Use [`Filter::all`] to reject that case.
    And(Vec<Filter>),

    /// Logical OR of the children, in order.
    ///
    /// Renders as `()` when empty. Use [`Filter::any`] to reject that case.
    Or(Vec<Filter>),
}

impl Filter {
    /// Creates a value filter from a raw query fragment.
    ///
    /// The text is not validated or escaped.
    pub fn value(text: impl Into<String>) -> Self {
        Filter::Value(text.into())
    }

    /// Creates an AND filter from two filters.
    ///
    /// # Example
    ///
    /// ```
    /// use todoist_api_rs::filter::Filter;
    ///
    /// let filter = Filter::and(Filter::overdue(), Filter::with_label("home"));
    /// assert_eq!(filter.to_query(), "(overdue & @home)");
    /// ```
    pub fn and(left: Filter, right: Filter) -> Self {
        Filter::And(vec![left, right])
    }

    /// Creates an OR filter from two filters.
    ///
    /// # Example
    ///
    /// ```
    /// use todoist_api_rs::filter::Filter;
    ///
    /// let filter = Filter::or(Filter::overdue(), Filter::no_date());
    /// assert_eq!(filter.to_query(), "(overdue | no date)");
    /// ```
    pub fn or(left: Filter, right: Filter) -> Self {
        Filter::Or(vec![left, right])
    }

    /// Creates a NOT filter from another filter.
    ///
    /// # Example
    ///
    /// ```
    /// use todoist_api_rs::filter::Filter;
    ///
    /// let filter = Filter::negate(Filter::no_date());
    /// assert_eq!(filter.to_query(), "!(no date)");
    /// ```
    pub fn negate(inner: Filter) -> Self {
        Filter::Not(Box::new(inner))
    }

    /// Creates an AND filter over any number of filters.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::EmptyComposite`] if `filters` is empty.
    pub fn all(filters: impl IntoIterator<Item = Filter>) -> FilterResult<Self> {
        let children: Vec<Filter> = filters.into_iter().collect();
        if children.is_empty() {
            return Err(FilterError::EmptyComposite { operator: "and" });
        }
        Ok(Filter::And(children))
    }

    /// Creates an OR filter over any number of filters.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::EmptyComposite`] if `filters` is empty.
    pub fn any(filters: impl IntoIterator<Item = Filter>) -> FilterResult<Self> {
        let children: Vec<Filter> = filters.into_iter().collect();
        if children.is_empty() {
            return Err(FilterError::EmptyComposite { operator: "or" });
        }
        Ok(Filter::Or(children))
    }

    /// Returns true if this is a leaf value.
    pub fn is_value(&self) -> bool {
        matches!(self, Filter::Value(_))
    }
}

impl From<&str> for Filter {
    fn from(text: &str) -> Self {
        Filter::value(text)
    }
}

impl From<String> for Filter {
    fn from(text: String) -> Self {
        Filter::Value(text)
    }
}
