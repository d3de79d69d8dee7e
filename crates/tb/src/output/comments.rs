//! Comment output formatting.

use serde::Serialize;
use todoist_api_rs::models::Comment;

use super::helpers::header;

/// JSON output structure for the comments list command.
#[derive(Serialize)]
pub struct CommentsListOutput<'a> {
    pub comments: &'a [Comment],
}

/// Formats comments as JSON.
pub fn format_comments_json(comments: &[Comment]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&CommentsListOutput { comments })
}

/// Formats comments as a table, oldest first.
pub fn format_comments_table(comments: &[Comment], use_colors: bool) -> String {
    if comments.is_empty() {
        return "No comments found.\n".to_string();
    }

    let mut sorted: Vec<&Comment> = comments.iter().collect();
    sorted.sort_by_key(|c| c.posted);

    let mut output = header(&format!("{:<12} {:<17} {}", "ID", "Posted", "Content"), use_colors);
    for comment in sorted {
        let posted = comment.posted.format("%Y-%m-%d %H:%M").to_string();
        let mut lines = comment.content.lines();
        let first = lines.next().unwrap_or("");
        output.push_str(&format!("{:<12} {:<17} {}\n", comment.id, posted, first));
        for line in lines {
            output.push_str(&format!("{:<30} {}\n", "", line));
        }
        if let Some(attachment) = &comment.attachment {
            output.push_str(&format!(
                "{:<30} [{}] {}\n",
                "", attachment.file_name, attachment.file_url
            ));
        }
    }
    output
}
