//! Todoist REST API client library
//!
//! Typed access to projects, sections, tasks, comments and labels, plus a
//! builder for the filter query language used when listing tasks.
//!
//! # Quick Start
//!
//! ```no_run
//! use todoist_api_rs::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let client = TodoistClient::new("api-token")?;
//! let query = TaskQuery::new().with_filter(Filter::and(
//!     Filter::overdue(),
//!     Filter::negate(Filter::with_label("waiting")),
//! ));
//! let tasks = client.list_active_tasks(&query).await?;
//! # let _ = tasks;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod color;
pub mod error;
pub mod filter;
pub mod models;
pub mod prelude;
mod rest;
mod retry;
