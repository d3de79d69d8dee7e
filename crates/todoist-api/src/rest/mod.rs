//! Resource endpoints of the REST API, implemented on [`TodoistClient`].
//!
//! Lookups by id return `Ok(None)` when the API answers 404, except
//! [`TodoistClient::get_comment`], which reports it as an error.
//!
//! [`TodoistClient`]: crate::client::TodoistClient

mod comments;
mod labels;
mod projects;
mod sections;
mod tasks;
