//! Output formatting utilities for the tb CLI.
//!
//! Each submodule renders one kind of entity either as a human-readable
//! table or as pretty-printed JSON:
//!
//! - [`tasks`] - task lists and details
//! - [`projects`] - projects (nested by parent) and collaborators
//! - [`sections`], [`labels`], [`comments`] - the remaining resources
//! - [`colors`] - the color table
//! - [`helpers`] - truncation, priority and due-date formatting

mod colors;
mod comments;
pub mod helpers;
mod labels;
mod projects;
mod sections;
mod tasks;

pub use colors::{format_colors_json, format_colors_table};
pub use comments::{format_comments_json, format_comments_table};
pub use labels::{format_labels_json, format_labels_table};
pub use projects::{
    format_collaborators_json, format_collaborators_table, format_project_details,
    format_projects_json, format_projects_table,
};
pub use sections::{format_sections_json, format_sections_table};
pub use tasks::{format_task_details, format_tasks_json, format_tasks_table};
