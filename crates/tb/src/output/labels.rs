//! Label output formatting.

use serde::Serialize;
use todoist_api_rs::models::Label;

use super::helpers::{favorite_marker, header, truncate_str};

/// JSON output structure for the labels list command.
#[derive(Serialize)]
pub struct LabelsListOutput<'a> {
    pub labels: &'a [Label],
}

/// Formats labels as JSON.
pub fn format_labels_json(labels: &[Label]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&LabelsListOutput { labels })
}

/// Formats labels as a table.
pub fn format_labels_table(labels: &[Label], use_colors: bool) -> String {
    if labels.is_empty() {
        return "No labels found.\n".to_string();
    }

    let mut sorted: Vec<&Label> = labels.iter().collect();
    sorted.sort_by_key(|l| l.order);

    let mut output = header(
        &format!("{:<12} {:<4} {:<20} {}", "ID", "Fav", "Name", "Color"),
        use_colors,
    );
    for label in sorted {
        let name = format!("@{}", label.name);
        output.push_str(&format!(
            "{:<12} {:<4} {:<20} {}\n",
            label.id,
            favorite_marker(label.favorite, use_colors),
            truncate_str(&name, 20),
            label.color
        ));
    }
    output
}
