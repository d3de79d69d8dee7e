//! Comment models.

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// A file attached to a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub file_name: String,
    pub file_type: String,
    pub file_url: String,
    pub resource_type: String,
}

/// A comment on a task or a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,

    /// Set for task comments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<u64>,

    /// Set for project comments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,

    /// When the comment was posted.
    pub posted: DateTime<Utc>,

    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
}

/// What a comment belongs to.
///
/// Serializes as a single `project_id` or `task_id` entry, both as a query
/// parameter and inside a JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentTarget {
    Project(u64),
    Task(u64),
}

/// Selects the comments to list.
pub type CommentQuery = CommentTarget;

impl CommentTarget {
    fn key(&self) -> &'static str {
        match self {
            CommentTarget::Project(_) => "project_id",
            CommentTarget::Task(_) => "task_id",
        }
    }

    fn id(&self) -> u64 {
        match self {
            CommentTarget::Project(id) | CommentTarget::Task(id) => *id,
        }
    }
}

impl Serialize for CommentTarget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key(), &self.id())?;
        map.end()
    }
}

/// Body for creating a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateComment {
    #[serde(flatten)]
    pub target: CommentTarget,

    pub content: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
}

impl CreateComment {
    /// Creates a comment on a task.
    pub fn on_task(task_id: u64, content: impl Into<String>) -> Self {
        Self {
            target: CommentTarget::Task(task_id),
            content: content.into(),
            attachment: None,
        }
    }

    /// Creates a comment on a project.
    pub fn on_project(project_id: u64, content: impl Into<String>) -> Self {
        Self {
            target: CommentTarget::Project(project_id),
            content: content.into(),
            attachment: None,
        }
    }

    /// Attaches a file.
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }
}

/// Body for editing a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateComment {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_task_comment() {
        let json = r#"{
            "id": 2992679862,
            "task_id": 2995104339,
            "posted": "2016-09-22T07:00:00.000000Z",
            "content": "Need one bottle of milk",
            "attachment": {
                "file_name": "File.pdf",
                "file_type": "application/pdf",
                "file_url": "https://cdn-domain.tld/path/to/file.pdf",
                "resource_type": "file"
            }
        }"#;

        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.task_id, Some(2995104339));
        assert!(comment.project_id.is_none());
        assert_eq!(comment.attachment.unwrap().file_name, "File.pdf");
    }

    #[test]
    fn test_query_encodes_single_parameter() {
        assert_eq!(
            serde_urlencoded::to_string(CommentQuery::Project(12)).unwrap(),
            "project_id=12"
        );
        assert_eq!(
            serde_urlencoded::to_string(CommentQuery::Task(34)).unwrap(),
            "task_id=34"
        );
    }

    #[test]
    fn test_create_comment_flattens_target() {
        let request = CreateComment::on_task(2995104339, "Need one bottle of milk");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"task_id": 2995104339u64, "content": "Need one bottle of milk"})
        );

        let request = CreateComment::on_project(7, "Kickoff notes");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"project_id": 7, "content": "Kickoff notes"})
        );
    }
}
