//! Rendering of filter trees into query strings.

use std::fmt;

use serde::{Serialize, Serializer};

use super::ast::Filter;

impl Filter {
    /// Compiles the filter into the query string the API understands.
    pub fn to_query(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Value(text) => f.write_str(text),
            Filter::Not(inner) => write!(f, "!({inner})"),
            Filter::And(children) => write_group(f, children, " & "),
            Filter::Or(children) => write_group(f, children, " | "),
        }
    }
}

fn write_group(f: &mut fmt::Formatter<'_>, children: &[Filter], separator: &str) -> fmt::Result {
    f.write_str("(")?;
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        fmt::Display::fmt(child, f)?;
    }
    f.write_str(")")
}

/// Filters serialize as their compiled query string, so they can sit
/// directly in query-parameter structs.
impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
