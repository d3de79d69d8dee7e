//! Common helper functions for output formatting.

use chrono::{Local, NaiveDate};
use owo_colors::OwoColorize;
use todoist_api_rs::filter::FilterPriority;
use todoist_api_rs::models::{Due, Priority};

/// Truncates a string to at most `max_len` characters, marking the cut with "...".
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Formats a priority the way the Todoist UI shows it (`p1` is highest).
pub fn format_priority(priority: Priority, use_colors: bool) -> String {
    let label = FilterPriority::from(priority).as_str();

    if !use_colors {
        return label.to_string();
    }
    match priority {
        Priority::Urgent => label.red().to_string(),
        Priority::High => label.yellow().to_string(),
        Priority::Medium => label.blue().to_string(),
        Priority::Normal => label.dimmed().to_string(),
    }
}

/// Formats a due date relative to `today`.
pub fn format_due_on(due: Option<&Due>, today: NaiveDate, use_colors: bool) -> String {
    let Some(due) = due else {
        return String::new();
    };

    let Some(date) = due.as_naive_date() else {
        return due.string.clone();
    };

    let display = match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        days if days < 0 => format!("{} days ago", -days),
        _ => date.format("%b %d").to_string(),
    };

    if use_colors && date < today {
        display.red().to_string()
    } else if use_colors && date == today {
        display.yellow().to_string()
    } else {
        display
    }
}

/// Formats a due date relative to the local date.
pub fn format_due(due: Option<&Due>, use_colors: bool) -> String {
    format_due_on(due, Local::now().date_naive(), use_colors)
}

/// Renders a header line, dimmed when colors are on.
pub fn header(line: &str, use_colors: bool) -> String {
    if use_colors {
        format!("{}\n", line.dimmed())
    } else {
        format!("{line}\n")
    }
}

/// Favorite marker column.
pub fn favorite_marker(favorite: bool, use_colors: bool) -> String {
    match (favorite, use_colors) {
        (true, true) => "★".yellow().to_string(),
        (true, false) => "★".to_string(),
        (false, _) => " ".to_string(),
    }
}
