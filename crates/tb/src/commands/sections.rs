//! Sections command implementation.

use todoist_api_rs::client::TodoistClient;
use todoist_api_rs::models::{CreateSection, UpdateSection};

use super::{CommandContext, Result};
use crate::output::{format_sections_json, format_sections_table};

/// Executes the sections list command.
pub async fn execute_list(
    ctx: &CommandContext,
    client: &TodoistClient,
    project_id: u64,
) -> Result<()> {
    let sections = client.list_sections(project_id).await?;

    if ctx.json_output {
        println!("{}", format_sections_json(project_id, &sections)?);
    } else if !ctx.quiet {
        print!("{}", format_sections_table(&sections, ctx.use_colors));
    }
    Ok(())
}

/// Executes the sections add command.
pub async fn execute_add(
    ctx: &CommandContext,
    client: &TodoistClient,
    project_id: u64,
    name: &str,
) -> Result<()> {
    let section = client
        .create_section(&CreateSection::new(project_id, name))
        .await?;

    if ctx.json_output {
        ctx.print_json(&section)?;
    } else if !ctx.quiet {
        println!("Created section {}: {}", section.id, section.name);
    }
    Ok(())
}

/// Executes the sections rename command.
pub async fn execute_rename(
    ctx: &CommandContext,
    client: &TodoistClient,
    id: u64,
    name: &str,
) -> Result<()> {
    let update = UpdateSection {
        name: name.to_string(),
    };
    client.update_section(id, &update).await?;

    if ctx.json_output {
        ctx.print_json(&serde_json::json!({ "id": id, "name": name, "status": "renamed" }))?;
    } else if !ctx.quiet {
        println!("Section {id} renamed to {name}");
    }
    Ok(())
}

/// Executes the sections delete command.
pub async fn execute_delete(ctx: &CommandContext, client: &TodoistClient, id: u64) -> Result<()> {
    client.delete_section(id).await?;

    if ctx.json_output {
        ctx.print_json(&serde_json::json!({ "id": id, "status": "deleted" }))?;
    } else if !ctx.quiet {
        println!("Section {id} deleted");
    }
    Ok(())
}
