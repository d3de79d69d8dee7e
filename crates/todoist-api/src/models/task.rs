//! Task model and task queries.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::filter::{Filter, FilterPriority};

/// Task priority as used in task payloads, from 1 (normal) to 4 (urgent).
///
/// Note that this is the reverse of the `p1`..`p4` numbering shown in the
/// Todoist UI and used in filter queries.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    /// 1, shown as `p4`.
    #[default]
    Normal = 1,
    /// 2, shown as `p3`.
    Medium = 2,
    /// 3, shown as `p2`.
    High = 3,
    /// 4, shown as `p1`.
    Urgent = 4,
}

/// Error returned for a priority outside 1-4.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid priority: {0} (expected 1-4)")]
pub struct InvalidPriority(pub u8);

impl TryFrom<u8> for Priority {
    type Error = InvalidPriority;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Priority::Normal),
            2 => Ok(Priority::Medium),
            3 => Ok(Priority::High),
            4 => Ok(Priority::Urgent),
            other => Err(InvalidPriority(other)),
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority as u8
    }
}

impl From<Priority> for FilterPriority {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Urgent => FilterPriority::P1,
            Priority::High => FilterPriority::P2,
            Priority::Medium => FilterPriority::P3,
            Priority::Normal => FilterPriority::P4,
        }
    }
}

impl From<FilterPriority> for Priority {
    fn from(priority: FilterPriority) -> Self {
        match priority {
            FilterPriority::P1 => Priority::Urgent,
            FilterPriority::P2 => Priority::High,
            FilterPriority::P3 => Priority::Medium,
            FilterPriority::P4 => Priority::Normal,
        }
    }
}

/// Due date information for a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Due {
    /// Human-readable due date, e.g. "every day".
    pub string: String,

    /// The date in YYYY-MM-DD format.
    pub date: String,

    /// Whether the due date repeats.
    #[serde(default)]
    pub recurring: bool,

    /// RFC3339 datetime, when a time is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,

    /// Timezone of `datetime`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl Due {
    /// Returns the due date as a NaiveDate.
    pub fn as_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// An active task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,

    pub project_id: u64,

    /// Zero when the task is not in a section.
    #[serde(default)]
    pub section_id: u64,

    pub content: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub completed: bool,

    #[serde(default)]
    pub label_ids: Vec<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,

    #[serde(default)]
    pub order: i32,

    #[serde(default)]
    pub priority: Priority,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<Due>,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub comment_count: u32,

    /// The user the task is assigned to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<u64>,

    /// The user who assigned the task. Zero when unassigned.
    #[serde(default)]
    pub assigner: u64,

    /// When the task was created.
    pub created: DateTime<Utc>,
}

impl Task {
    /// Returns true if the task has a due date set.
    pub fn has_due_date(&self) -> bool {
        self.due.is_some()
    }

    /// Returns true if the task is a subtask.
    pub fn is_subtask(&self) -> bool {
        self.parent_id.is_some()
    }

    /// Returns the due date as a NaiveDate if set.
    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due.as_ref().and_then(Due::as_naive_date)
    }
}

/// The `filter` parameter of a task query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TaskFilter {
    /// A query string passed through unchanged.
    Raw(String),
    /// A filter tree, compiled when the query is encoded.
    Expr(Filter),
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskFilter::Raw(raw) => f.write_str(raw),
            TaskFilter::Expr(filter) => fmt::Display::fmt(filter, f),
        }
    }
}

impl From<Filter> for TaskFilter {
    fn from(filter: Filter) -> Self {
        TaskFilter::Expr(filter)
    }
}

impl From<String> for TaskFilter {
    fn from(raw: String) -> Self {
        TaskFilter::Raw(raw)
    }
}

impl From<&str> for TaskFilter {
    fn from(raw: &str) -> Self {
        TaskFilter::Raw(raw.to_string())
    }
}

/// Query parameters for listing active tasks.
///
/// # Example
///
/// ```
/// use todoist_api_rs::filter::Filter;
/// use todoist_api_rs::models::TaskQuery;
///
/// let query = TaskQuery::new()
///     .with_project(42)
///     .with_filter(Filter::and(Filter::overdue(), Filter::with_label("home")));
///
/// assert_eq!(
///     query.to_query_string().unwrap(),
///     "project_id=42&filter=%28overdue+%26+%40home%29"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<TaskFilter>,

    /// Language of a raw filter string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    /// Restrict to these task ids; sent comma-separated.
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "serialize_ids")]
    pub ids: Vec<u64>,
}

impl TaskQuery {
    /// Creates an empty query (all active tasks).
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to a project.
    pub fn with_project(mut self, project_id: u64) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Restricts to a section.
    pub fn with_section(mut self, section_id: u64) -> Self {
        self.section_id = Some(section_id);
        self
    }

    /// Restricts to a label.
    pub fn with_label(mut self, label_id: u64) -> Self {
        self.label_id = Some(label_id);
        self
    }

    /// Sets the filter, either a [`Filter`] tree or a raw string.
    pub fn with_filter(mut self, filter: impl Into<TaskFilter>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Sets the language used to parse the filter.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Restricts to the given task ids.
    pub fn with_ids(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.ids = ids.into_iter().collect();
        self
    }

    /// Encodes the query as a URL query string (without the `?`).
    pub fn to_query_string(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(self)
    }
}

fn serialize_ids<S: Serializer>(ids: &[u64], serializer: S) -> Result<S::Ok, S::Error> {
    let joined = ids
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",");
    serializer.serialize_str(&joined)
}

/// Body for creating a task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTask {
    pub content: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<u64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_string: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_datetime: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_lang: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<u64>,
}

impl CreateTask {
    /// Creates a request with only content; the task lands in the Inbox.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            description: None,
            project_id: None,
            section_id: None,
            parent_id: None,
            order: None,
            label_ids: None,
            priority: None,
            due_string: None,
            due_date: None,
            due_datetime: None,
            due_lang: None,
            assignee: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Places the task in a project.
    pub fn with_project(mut self, project_id: u64) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Places the task in a section.
    pub fn with_section(mut self, section_id: u64) -> Self {
        self.section_id = Some(section_id);
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets a natural-language due date.
    pub fn with_due_string(mut self, due: impl Into<String>) -> Self {
        self.due_string = Some(due.into());
        self
    }

    /// Attaches labels by id.
    pub fn with_labels(mut self, label_ids: Vec<u64>) -> Self {
        self.label_ids = Some(label_ids);
        self
    }
}

/// Body for updating a task. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<u64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_string: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_datetime: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_lang: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<u64>,
}
