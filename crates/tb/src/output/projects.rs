//! Project output formatting.

use serde::Serialize;
use todoist_api_rs::models::{Collaborator, Project};

use super::helpers::{favorite_marker, header, truncate_str};

/// JSON output structure for the projects list command.
#[derive(Serialize)]
pub struct ProjectsListOutput<'a> {
    pub projects: &'a [Project],
}

/// Formats projects as JSON.
pub fn format_projects_json(projects: &[Project]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ProjectsListOutput { projects })
}

/// Formats projects as a table, children indented under their parent.
pub fn format_projects_table(projects: &[Project], use_colors: bool) -> String {
    if projects.is_empty() {
        return "No projects found.\n".to_string();
    }

    let mut output = header(
        &format!("{:<12} {:<4} {:<30} {}", "ID", "Fav", "Name", "Color"),
        use_colors,
    );

    let mut roots: Vec<&Project> = projects
        .iter()
        .filter(|p| {
            p.parent_id
                .map_or(true, |parent| !projects.iter().any(|q| q.id == parent))
        })
        .collect();
    roots.sort_by_key(|p| p.order);

    for root in roots {
        push_project_row(&mut output, projects, root, 0, use_colors);
    }

    output
}

fn push_project_row(
    output: &mut String,
    all: &[Project],
    project: &Project,
    depth: usize,
    use_colors: bool,
) {
    let name = format!("{}{}", "  ".repeat(depth), project.name);
    output.push_str(&format!(
        "{:<12} {:<4} {:<30} {}\n",
        project.id,
        favorite_marker(project.favorite, use_colors),
        truncate_str(&name, 30),
        project.color
    ));

    let mut children: Vec<&Project> = all
        .iter()
        .filter(|p| p.parent_id == Some(project.id))
        .collect();
    children.sort_by_key(|p| p.order);
    for child in children {
        push_project_row(output, all, child, depth + 1, use_colors);
    }
}

/// Formats a single project's details.
pub fn format_project_details(project: &Project) -> String {
    let mut output = String::new();
    output.push_str(&format!("ID:       {}\n", project.id));
    output.push_str(&format!("Name:     {}\n", project.name));
    if let Some(parent) = project.parent_id {
        output.push_str(&format!("Parent:   {}\n", parent));
    }
    output.push_str(&format!(
        "Color:    {} (#{})\n",
        project.color,
        project.color.hex_code()
    ));
    output.push_str(&format!("Favorite: {}\n", project.favorite));
    output.push_str(&format!("Shared:   {}\n", project.shared));
    if project.is_inbox() {
        output.push_str("Inbox:    true\n");
    }
    output.push_str(&format!("Comments: {}\n", project.comment_count));
    output.push_str(&format!("URL:      {}\n", project.url));
    output
}

/// JSON output structure for the collaborators command.
#[derive(Serialize)]
pub struct CollaboratorsOutput<'a> {
    pub project_id: u64,
    pub collaborators: &'a [Collaborator],
}

/// Formats collaborators as JSON.
pub fn format_collaborators_json(
    project_id: u64,
    collaborators: &[Collaborator],
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&CollaboratorsOutput {
        project_id,
        collaborators,
    })
}

/// Formats collaborators as a table.
pub fn format_collaborators_table(collaborators: &[Collaborator], use_colors: bool) -> String {
    if collaborators.is_empty() {
        return "No collaborators found.\n".to_string();
    }

    let mut output = header(&format!("{:<12} {:<24} {}", "ID", "Name", "Email"), use_colors);
    for person in collaborators {
        output.push_str(&format!(
            "{:<12} {:<24} {}\n",
            person.id,
            truncate_str(&person.name, 24),
            person.email
        ));
    }
    output
}
