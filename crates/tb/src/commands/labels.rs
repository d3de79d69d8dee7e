//! Labels command implementation.

use todoist_api_rs::client::TodoistClient;
use todoist_api_rs::color::Color;
use todoist_api_rs::models::CreateLabel;

use super::{CommandContext, Result};
use crate::output::{format_labels_json, format_labels_table};

/// Executes the labels list command.
pub async fn execute_list(ctx: &CommandContext, client: &TodoistClient) -> Result<()> {
    let labels = client.list_labels().await?;

    if ctx.json_output {
        println!("{}", format_labels_json(&labels)?);
    } else if !ctx.quiet {
        print!("{}", format_labels_table(&labels, ctx.use_colors));
    }
    Ok(())
}

/// Options for the labels add command.
#[derive(Debug)]
pub struct LabelsAddOptions {
    pub name: String,
    pub color: Option<Color>,
    pub favorite: bool,
}

impl LabelsAddOptions {
    /// Builds the create request.
    pub fn to_request(&self) -> CreateLabel {
        let mut request = CreateLabel::new(self.name.trim_start_matches('@'));
        request.color = self.color;
        if self.favorite {
            request.favorite = Some(true);
        }
        request
    }
}

/// Executes the labels add command.
pub async fn execute_add(
    ctx: &CommandContext,
    client: &TodoistClient,
    opts: &LabelsAddOptions,
) -> Result<()> {
    let label = client.create_label(&opts.to_request()).await?;

    if ctx.json_output {
        ctx.print_json(&label)?;
    } else if !ctx.quiet {
        println!("Created label {}: @{}", label.id, label.name);
    }
    Ok(())
}

/// Executes the labels delete command.
pub async fn execute_delete(ctx: &CommandContext, client: &TodoistClient, id: u64) -> Result<()> {
    client.delete_label(id).await?;

    if ctx.json_output {
        ctx.print_json(&serde_json::json!({ "id": id, "status": "deleted" }))?;
    } else if !ctx.quiet {
        println!("Label {id} deleted");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_strips_at_sign() {
        let opts = LabelsAddOptions {
            name: "@errand".to_string(),
            color: Some(Color::Teal),
            favorite: true,
        };
        let body = serde_json::to_value(opts.to_request()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"name": "errand", "color": "teal", "favorite": true})
        );
    }
}
