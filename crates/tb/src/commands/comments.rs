//! Comments command implementation.

use todoist_api_rs::client::TodoistClient;
use todoist_api_rs::models::{CommentTarget, CreateComment};

use super::{CommandContext, CommandError, Result};
use crate::cli::CommentTargetArgs;
use crate::output::{format_comments_json, format_comments_table};

/// Resolves the `--project-id`/`--task-id` pair to a single target.
fn comment_target(args: &CommentTargetArgs) -> Result<CommentTarget> {
    match (args.project_id, args.task_id) {
        (Some(id), None) => Ok(CommentTarget::Project(id)),
        (None, Some(id)) => Ok(CommentTarget::Task(id)),
        _ => Err(CommandError::Config(
            "exactly one of --project-id or --task-id is required".to_string(),
        )),
    }
}

/// Executes the comments list command.
pub async fn execute_list(
    ctx: &CommandContext,
    client: &TodoistClient,
    target: &CommentTargetArgs,
) -> Result<()> {
    let comments = client.list_comments(&comment_target(target)?).await?;

    if ctx.json_output {
        println!("{}", format_comments_json(&comments)?);
    } else if !ctx.quiet {
        print!("{}", format_comments_table(&comments, ctx.use_colors));
    }
    Ok(())
}

/// Executes the comments add command.
pub async fn execute_add(
    ctx: &CommandContext,
    client: &TodoistClient,
    target: &CommentTargetArgs,
    content: &str,
) -> Result<()> {
    let request = match comment_target(target)? {
        CommentTarget::Project(id) => CreateComment::on_project(id, content),
        CommentTarget::Task(id) => CreateComment::on_task(id, content),
    };
    let comment = client.create_comment(&request).await?;

    if ctx.json_output {
        ctx.print_json(&comment)?;
    } else if !ctx.quiet {
        println!("Added comment {}", comment.id);
    }
    Ok(())
}

/// Executes the comments delete command.
pub async fn execute_delete(ctx: &CommandContext, client: &TodoistClient, id: u64) -> Result<()> {
    client.delete_comment(id).await?;

    if ctx.json_output {
        ctx.print_json(&serde_json::json!({ "id": id, "status": "deleted" }))?;
    } else if !ctx.quiet {
        println!("Comment {id} deleted");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_from_args() {
        let task = CommentTargetArgs {
            project_id: None,
            task_id: Some(5),
        };
        assert_eq!(comment_target(&task).unwrap(), CommentTarget::Task(5));

        let project = CommentTargetArgs {
            project_id: Some(9),
            task_id: None,
        };
        assert_eq!(
            comment_target(&project).unwrap(),
            CommentTarget::Project(9)
        );

        let neither = CommentTargetArgs {
            project_id: None,
            task_id: None,
        };
        assert!(comment_target(&neither).is_err());
    }
}
