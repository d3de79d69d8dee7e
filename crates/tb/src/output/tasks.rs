//! Task output formatting.

use serde::Serialize;
use todoist_api_rs::models::Task;

use super::helpers::{format_due, format_priority, header, truncate_str};

/// JSON output structure for the tasks list command.
#[derive(Serialize)]
pub struct TasksListOutput<'a> {
    /// Compiled filter the listing used, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<&'a str>,
    pub tasks: &'a [Task],
}

/// Formats tasks as JSON.
pub fn format_tasks_json(
    tasks: &[Task],
    filter: Option<&str>,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&TasksListOutput { filter, tasks })
}

/// Formats tasks as a table.
pub fn format_tasks_table(tasks: &[Task], use_colors: bool) -> String {
    if tasks.is_empty() {
        return "No tasks found.\n".to_string();
    }

    let mut output = header(
        &format!("{:<12} {:<4} {:<12} {}", "ID", "Pri", "Due", "Content"),
        use_colors,
    );

    for task in tasks {
        // Pad before coloring so escape codes don't break alignment.
        let priority = format_priority(task.priority, false);
        let priority = if use_colors {
            format!("{}{}", format_priority(task.priority, true), " ".repeat(4 - priority.len()))
        } else {
            format!("{priority:<4}")
        };
        let due = format_due(task.due.as_ref(), false);
        let due = if use_colors {
            let padding = 12usize.saturating_sub(due.chars().count());
            format!("{}{}", format_due(task.due.as_ref(), true), " ".repeat(padding))
        } else {
            format!("{due:<12}")
        };

        output.push_str(&format!(
            "{:<12} {} {} {}\n",
            task.id,
            priority,
            due,
            truncate_str(&task.content, 60)
        ));
    }

    output
}

/// Formats a single task's details as a table.
pub fn format_task_details(task: &Task, use_colors: bool) -> String {
    let mut output = String::new();
    output.push_str(&format!("ID:          {}\n", task.id));
    output.push_str(&format!("Content:     {}\n", task.content));
    if !task.description.is_empty() {
        output.push_str(&format!("Description: {}\n", task.description));
    }
    output.push_str(&format!("Project:     {}\n", task.project_id));
    if task.section_id != 0 {
        output.push_str(&format!("Section:     {}\n", task.section_id));
    }
    if let Some(parent) = task.parent_id {
        output.push_str(&format!("Parent:      {}\n", parent));
    }
    output.push_str(&format!(
        "Priority:    {}\n",
        format_priority(task.priority, use_colors)
    ));
    if let Some(due) = &task.due {
        output.push_str(&format!(
            "Due:         {} ({})\n",
            format_due(Some(due), use_colors),
            due.string
        ));
    }
    if !task.label_ids.is_empty() {
        let ids: Vec<String> = task.label_ids.iter().map(u64::to_string).collect();
        output.push_str(&format!("Labels:      {}\n", ids.join(", ")));
    }
    output.push_str(&format!("Comments:    {}\n", task.comment_count));
    output.push_str(&format!("URL:         {}\n", task.url));
    output
}
