//! Request and response types for the Todoist REST API.
//!
//! Field names match the wire format. Optional request fields are omitted
//! from the JSON body when unset.

mod comment;
mod label;
mod project;
mod section;
mod task;

pub use comment::*;
pub use label::*;
pub use project::*;
pub use section::*;
pub use task::*;
