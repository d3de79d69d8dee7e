//! Section output formatting.

use serde::Serialize;
use todoist_api_rs::models::Section;

use super::helpers::{header, truncate_str};

/// JSON output structure for the sections list command.
#[derive(Serialize)]
pub struct SectionsListOutput<'a> {
    pub project_id: u64,
    pub sections: &'a [Section],
}

/// Formats sections as JSON.
pub fn format_sections_json(
    project_id: u64,
    sections: &[Section],
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&SectionsListOutput {
        project_id,
        sections,
    })
}

/// Formats sections as a table, in board order.
pub fn format_sections_table(sections: &[Section], use_colors: bool) -> String {
    if sections.is_empty() {
        return "No sections found.\n".to_string();
    }

    let mut sorted: Vec<&Section> = sections.iter().collect();
    sorted.sort_by_key(|s| s.order);

    let mut output = header(&format!("{:<12} {}", "ID", "Name"), use_colors);
    for section in sorted {
        output.push_str(&format!(
            "{:<12} {}\n",
            section.id,
            truncate_str(&section.name, 40)
        ));
    }
    output
}
