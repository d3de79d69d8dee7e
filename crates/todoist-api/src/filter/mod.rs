//! Filter expression builder for the Todoist query language.
//!
//! Build a [`Filter`] tree with the helper constructors and combinators,
//! then compile it into the string the `filter` query parameter of the
//! active-tasks endpoint expects.
//!
//! # Rendering
//!
//! - a value renders verbatim (`overdue`, `@home`, `##Work`)
//! - `Not` renders as `!(inner)`
//! - `And` renders as `(a & b & ...)`
//! - `Or` renders as `(a | b | ...)`
//!
//! Every composite is parenthesized, including single-child groups.
//!
//! # Example
//!
//! ```
//! use todoist_api_rs::filter::{Filter, FilterPriority};
//!
//! let filter = Filter::and(
//!     Filter::or(
//!         Filter::priority(FilterPriority::P1),
//!         Filter::priority(FilterPriority::P2),
//!     ),
//!     Filter::negate(Filter::with_label("waiting")),
//! );
//!
//! assert_eq!(filter.to_query(), "((p1 | p2) & !(@waiting))");
//! ```

mod ast;
mod builders;
mod compile;
mod error;

pub use ast::Filter;
pub use builders::FilterPriority;
pub use error::{FilterError, FilterResult};
