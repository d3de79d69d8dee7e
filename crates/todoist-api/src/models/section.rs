//! Section models.

use serde::{Deserialize, Serialize};

/// A section within a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: u64,
    pub project_id: u64,
    #[serde(default)]
    pub order: i32,
    pub name: String,
}

/// Body for creating a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateSection {
    pub name: String,
    pub project_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

impl CreateSection {
    /// Creates a request for a section at the end of `project_id`.
    pub fn new(project_id: u64, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            project_id,
            order: None,
        }
    }
}

/// Body for renaming a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateSection {
    pub name: String,
}
