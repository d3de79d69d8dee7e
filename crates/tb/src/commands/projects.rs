//! Projects command implementation.

use todoist_api_rs::client::TodoistClient;
use todoist_api_rs::color::Color;
use todoist_api_rs::models::CreateProject;

use super::{not_found, CommandContext, Result};
use crate::output::{
    format_collaborators_json, format_collaborators_table, format_project_details,
    format_projects_json, format_projects_table,
};

/// Executes the projects list command.
pub async fn execute_list(ctx: &CommandContext, client: &TodoistClient) -> Result<()> {
    let projects = client.list_projects().await?;

    if ctx.json_output {
        println!("{}", format_projects_json(&projects)?);
    } else if !ctx.quiet {
        print!("{}", format_projects_table(&projects, ctx.use_colors));
    }
    Ok(())
}

/// Executes the projects show command.
pub async fn execute_show(ctx: &CommandContext, client: &TodoistClient, id: u64) -> Result<()> {
    let project = client
        .get_project(id)
        .await?
        .ok_or_else(|| not_found("project", id))?;

    if ctx.json_output {
        ctx.print_json(&project)?;
    } else if !ctx.quiet {
        print!("{}", format_project_details(&project));
    }
    Ok(())
}

/// Options for the projects add command.
#[derive(Debug)]
pub struct ProjectAddOptions {
    pub name: String,
    pub color: Option<Color>,
    pub favorite: bool,
    pub parent_id: Option<u64>,
}

impl ProjectAddOptions {
    /// Builds the create request; `favorite` is only sent when set.
    pub fn to_request(&self) -> CreateProject {
        let mut request = CreateProject::new(self.name.clone());
        if let Some(parent_id) = self.parent_id {
            request = request.with_parent(parent_id);
        }
        if let Some(color) = self.color {
            request = request.with_color(color);
        }
        if self.favorite {
            request = request.with_favorite(true);
        }
        request
    }
}

/// Executes the projects add command.
pub async fn execute_add(
    ctx: &CommandContext,
    client: &TodoistClient,
    opts: &ProjectAddOptions,
) -> Result<()> {
    let project = client.create_project(&opts.to_request()).await?;

    if ctx.json_output {
        ctx.print_json(&project)?;
    } else if !ctx.quiet {
        println!("Created project {}: {}", project.id, project.name);
    }
    Ok(())
}

/// Executes the projects delete command.
pub async fn execute_delete(ctx: &CommandContext, client: &TodoistClient, id: u64) -> Result<()> {
    client.delete_project(id).await?;

    if ctx.json_output {
        ctx.print_json(&serde_json::json!({ "id": id, "status": "deleted" }))?;
    } else if !ctx.quiet {
        println!("Project {id} deleted");
    }
    Ok(())
}

/// Executes the projects collaborators command.
pub async fn execute_collaborators(
    ctx: &CommandContext,
    client: &TodoistClient,
    id: u64,
) -> Result<()> {
    let collaborators = client.project_collaborators(id).await?;

    if ctx.json_output {
        println!("{}", format_collaborators_json(id, &collaborators)?);
    } else if !ctx.quiet {
        print!("{}", format_collaborators_table(&collaborators, ctx.use_colors));
    }
    Ok(())
}
