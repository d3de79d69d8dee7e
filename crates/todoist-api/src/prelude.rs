//! Prelude module for convenient imports.
//!
//! ```
//! use todoist_api_rs::prelude::*;
//! ```

// Client types
pub use crate::client::{TodoistClient, TodoistClientBuilder};

// Error types
pub use crate::error::{ApiError, Error, Result};

// Filter builder
pub use crate::filter::{Filter, FilterError, FilterPriority};

// Colors
pub use crate::color::Color;

// Data models
pub use crate::models::{
    Attachment, Collaborator, Comment, CommentQuery, CommentTarget, CreateComment, CreateLabel,
    CreateProject, CreateSection, CreateTask, Due, Label, Priority, Project, Section, Task,
    TaskFilter, TaskQuery, UpdateComment, UpdateLabel, UpdateProject, UpdateSection, UpdateTask,
};
