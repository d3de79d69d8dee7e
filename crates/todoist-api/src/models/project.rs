//! Project and collaborator models.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// A Todoist project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// The unique identifier for the project.
    pub id: u64,

    /// The parent project, for sub-projects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,

    /// Position among siblings.
    #[serde(default)]
    pub order: i32,

    /// Display color.
    pub color: Color,

    /// Project name.
    pub name: String,

    /// Whether the project is shared with collaborators.
    #[serde(default)]
    pub shared: bool,

    /// Whether the project is marked as favorite.
    #[serde(default)]
    pub favorite: bool,

    /// URL to open the project in Todoist.
    #[serde(default)]
    pub url: String,

    /// Number of project comments.
    #[serde(default)]
    pub comment_count: u32,

    /// Identifier shared by all copies of a shared project.
    #[serde(default)]
    pub sync_id: u64,

    /// Set on the user's Inbox.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inbox_project: Option<bool>,

    /// Set on a team's Inbox.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_inbox: Option<bool>,
}

impl Project {
    /// Returns true for the personal or team Inbox.
    pub fn is_inbox(&self) -> bool {
        self.inbox_project.unwrap_or(false) || self.team_inbox.unwrap_or(false)
    }
}

/// Body for creating a project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateProject {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
}

impl CreateProject {
    /// Creates a request for a top-level project with default settings.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent_id: None,
            color: None,
            favorite: None,
        }
    }

    /// Nests the project under `parent_id`.
    pub fn with_parent(mut self, parent_id: u64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Sets the color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Marks the project as favorite.
    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = Some(favorite);
        self
    }
}

/// Body for updating a project. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateProject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
}

/// A user with access to a shared project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaborator {
    pub id: u64,
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_project() {
        let json = r#"{
            "id": 2203306141,
            "color": "charcoal",
            "name": "Shopping List",
            "comment_count": 10,
            "shared": false,
            "favorite": false,
            "sync_id": 0,
            "order": 1,
            "url": "https://todoist.com/showProject?id=2203306141"
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, 2203306141);
        assert_eq!(project.color, Color::Charcoal);
        assert_eq!(project.name, "Shopping List");
        assert_eq!(project.comment_count, 10);
        assert!(project.parent_id.is_none());
        assert!(!project.is_inbox());
    }

    #[test]
    fn test_inbox_detection() {
        let json = r#"{"id": 1, "color": "grey", "name": "Inbox", "inbox_project": true}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert!(project.is_inbox());
    }

    #[test]
    fn test_create_project_skips_unset_fields() {
        let request = CreateProject::new("Groceries");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Groceries"}));

        let request = CreateProject::new("Sub")
            .with_parent(7)
            .with_color(Color::Teal)
            .with_favorite(true);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Sub", "parent_id": 7, "color": "teal", "favorite": true})
        );
    }

    #[test]
    fn test_update_project_default_is_empty_object() {
        let json = serde_json::to_string(&UpdateProject::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
