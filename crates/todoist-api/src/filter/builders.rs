//! Constructors for the common query fragments.
//!
//! Each helper produces a [`Filter::Value`] whose text matches the token the
//! Todoist query parser expects, byte for byte.

use std::fmt;

use super::ast::Filter;
use super::error::FilterError;

/// Priority as written in filter queries, where `p1` is the most urgent.
///
/// This is the reverse of the numbering used in task payloads; see
/// [`crate::models::Priority`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterPriority {
    /// `p1`, urgent.
    P1,
    /// `p2`.
    P2,
    /// `p3`.
    P3,
    /// `p4`, the default priority.
    P4,
}

impl FilterPriority {
    /// Returns the query token for this priority.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterPriority::P1 => "p1",
            FilterPriority::P2 => "p2",
            FilterPriority::P3 => "p3",
            FilterPriority::P4 => "p4",
        }
    }
}

impl fmt::Display for FilterPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for FilterPriority {
    type Error = FilterError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(FilterPriority::P1),
            2 => Ok(FilterPriority::P2),
            3 => Ok(FilterPriority::P3),
            4 => Ok(FilterPriority::P4),
            _ => Err(FilterError::InvalidPriority { value }),
        }
    }
}

impl Filter {
    // ==================== Text Search ====================

    /// Tasks whose content contains `term`.
    pub fn search(term: impl fmt::Display) -> Self {
        Filter::Value(format!("search: {term}"))
    }

    // ==================== Due Date ====================

    /// Tasks due on `date`. The date is used as the whole fragment.
    pub fn due_on(date: impl Into<String>) -> Self {
        Filter::Value(date.into())
    }

    /// Tasks due before `date`.
    pub fn due_before(date: impl fmt::Display) -> Self {
        Filter::Value(format!("due before: {date}"))
    }

    /// Tasks due after `date`.
    pub fn due_after(date: impl fmt::Display) -> Self {
        Filter::Value(format!("due after: {date}"))
    }

    /// Tasks without a due date.
    pub fn no_date() -> Self {
        Filter::value("no date")
    }

    /// Tasks past their due date.
    pub fn overdue() -> Self {
        Filter::value("overdue")
    }

    // ==================== Created Date ====================

    /// Tasks created on `date`.
    pub fn created_on(date: impl fmt::Display) -> Self {
        Filter::Value(format!("created {date}"))
    }

    /// Tasks created before `date`.
    pub fn created_before(date: impl fmt::Display) -> Self {
        Filter::Value(format!("created before: {date}"))
    }

    /// Tasks created after `date`.
    pub fn created_after(date: impl fmt::Display) -> Self {
        Filter::Value(format!("created after: {date}"))
    }

    // ==================== Priority ====================

    /// Tasks with the given priority.
    pub fn priority(priority: FilterPriority) -> Self {
        Filter::value(priority.as_str())
    }

    /// Tasks without an explicit priority.
    pub fn no_priority() -> Self {
        Filter::value("No priority")
    }

    // ==================== Labels ====================

    /// Tasks carrying `label`.
    pub fn with_label(label: impl fmt::Display) -> Self {
        Filter::Value(format!("@{label}"))
    }

    /// Tasks without any label.
    pub fn no_label() -> Self {
        Filter::value("no labels")
    }

    // ==================== Projects and Sections ====================

    /// Tasks in the project `name` or any of its sub-projects.
    pub fn project(name: impl fmt::Display) -> Self {
        Filter::Value(format!("##{name}"))
    }

    /// Tasks in the project `name` only.
    pub fn project_without_subs(name: impl fmt::Display) -> Self {
        Filter::Value(format!("#{name}"))
    }

    /// Tasks in the section `name`.
    pub fn in_section(name: impl fmt::Display) -> Self {
        Filter::Value(format!("/{name}"))
    }

    // ==================== Collaboration ====================

    /// Tasks assigned to `name`.
    pub fn assigned_to(name: impl fmt::Display) -> Self {
        Filter::Value(format!("assigned to: {name}"))
    }

    /// Tasks assigned by `name`.
    pub fn assigned_by(name: impl fmt::Display) -> Self {
        Filter::Value(format!("assigned by: {name}"))
    }

    /// Tasks assigned to anyone.
    pub fn assigned() -> Self {
        Filter::value("assigned")
    }

    /// Tasks in shared projects.
    pub fn shared() -> Self {
        Filter::value("shared")
    }
}
