//! Tasks command implementation.
//!
//! `tasks list` turns its flags into a single filter expression, so the
//! selection happens server side.

use todoist_api_rs::client::TodoistClient;
use todoist_api_rs::filter::{Filter, FilterPriority};
use todoist_api_rs::models::{CreateTask, Priority, TaskQuery};
use tracing::debug;

use super::{not_found, CommandContext, Result};
use crate::cli::TaskListArgs;
use crate::output::{format_task_details, format_tasks_json, format_tasks_table};

/// Builds the filter selected by the list flags.
///
/// Flags are AND-ed in declaration order. A single flag is used on its own,
/// and no flags at all means no filter. A raw `--filter` is kept verbatim,
/// but parenthesised when combined so its operators stay grouped.
pub fn build_filter(args: &TaskListArgs) -> Result<Option<Filter>> {
    let mut parts = Vec::new();

    if let Some(raw) = &args.filter {
        parts.push(Filter::value(raw.trim()));
    }
    if let Some(term) = &args.search {
        parts.push(Filter::search(term));
    }
    if let Some(project) = &args.project {
        parts.push(Filter::project(project));
    }
    if let Some(project) = &args.project_only {
        parts.push(Filter::project_without_subs(project));
    }
    if let Some(section) = &args.section {
        parts.push(Filter::in_section(section));
    }
    for label in &args.label {
        parts.push(Filter::with_label(label));
    }
    if let Some(priority) = args.priority {
        parts.push(Filter::priority(FilterPriority::try_from(priority)?));
    }
    if args.overdue {
        parts.push(Filter::overdue());
    }
    if args.no_date {
        parts.push(Filter::no_date());
    }
    if let Some(date) = &args.due_before {
        parts.push(Filter::due_before(date));
    }
    if let Some(date) = &args.due_after {
        parts.push(Filter::due_after(date));
    }
    if let Some(person) = &args.assigned_to {
        parts.push(Filter::assigned_to(person));
    }
    for label in &args.not_label {
        parts.push(Filter::negate(Filter::with_label(label)));
    }

    match parts.len() {
        0 => Ok(None),
        1 => Ok(parts.pop()),
        _ => {
            if let (Some(raw), Some(first)) = (&args.filter, parts.first_mut()) {
                *first = Filter::value(format!("({})", raw.trim()));
            }
            Ok(Some(Filter::all(parts)?))
        }
    }
}

/// Prints the compiled filter for `tasks list --print-filter`.
pub fn execute_print_filter(ctx: &CommandContext, args: &TaskListArgs) -> Result<()> {
    let filter = build_filter(args)?.map(|f| f.to_query());

    if ctx.json_output {
        ctx.print_json(&serde_json::json!({ "filter": filter }))?;
    } else if let Some(filter) = filter {
        println!("{filter}");
    }
    Ok(())
}

/// Executes the tasks list command.
pub async fn execute_list(
    ctx: &CommandContext,
    client: &TodoistClient,
    args: &TaskListArgs,
) -> Result<()> {
    let filter = build_filter(args)?;
    let compiled = filter.as_ref().map(Filter::to_query);
    debug!(filter = ?compiled, "listing tasks");

    let mut query = TaskQuery::new();
    if let Some(filter) = filter {
        query = query.with_filter(filter);
    }

    let mut tasks = client.list_active_tasks(&query).await?;
    tasks.sort_by(|a, b| b.priority.cmp(&a.priority).then(a.order.cmp(&b.order)));

    if ctx.json_output {
        println!("{}", format_tasks_json(&tasks, compiled.as_deref())?);
    } else if !ctx.quiet {
        print!("{}", format_tasks_table(&tasks, ctx.use_colors));
    }
    Ok(())
}

/// Options for the tasks add command.
#[derive(Debug, Default)]
pub struct TaskAddOptions {
    pub content: String,
    pub description: Option<String>,
    pub project_id: Option<u64>,
    pub section_id: Option<u64>,
    /// UI priority, 1 (highest) to 4.
    pub priority: Option<u8>,
    pub due: Option<String>,
    pub label_ids: Vec<u64>,
}

impl TaskAddOptions {
    /// Builds the create request.
    pub fn to_request(&self) -> Result<CreateTask> {
        let mut request = CreateTask::new(self.content.clone());
        if let Some(description) = &self.description {
            request = request.with_description(description.clone());
        }
        if let Some(project_id) = self.project_id {
            request = request.with_project(project_id);
        }
        if let Some(section_id) = self.section_id {
            request = request.with_section(section_id);
        }
        if let Some(priority) = self.priority {
            request = request.with_priority(Priority::from(FilterPriority::try_from(priority)?));
        }
        if let Some(due) = &self.due {
            request = request.with_due_string(due.clone());
        }
        if !self.label_ids.is_empty() {
            request = request.with_labels(self.label_ids.clone());
        }
        Ok(request)
    }
}

/// Executes the tasks add command.
pub async fn execute_add(
    ctx: &CommandContext,
    client: &TodoistClient,
    opts: &TaskAddOptions,
) -> Result<()> {
    let task = client.create_task(&opts.to_request()?).await?;

    if ctx.json_output {
        ctx.print_json(&task)?;
    } else if !ctx.quiet {
        println!("Created task {}: {}", task.id, task.content);
    }
    Ok(())
}

/// Executes the tasks show command.
pub async fn execute_show(ctx: &CommandContext, client: &TodoistClient, id: u64) -> Result<()> {
    let task = client
        .get_task(id)
        .await?
        .ok_or_else(|| not_found("task", id))?;

    if ctx.json_output {
        ctx.print_json(&task)?;
    } else if !ctx.quiet {
        print!("{}", format_task_details(&task, ctx.use_colors));
    }
    Ok(())
}

/// Task state changes that take only an ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    Close,
    Reopen,
    Delete,
}

impl TaskAction {
    fn past_tense(self) -> &'static str {
        match self {
            TaskAction::Close => "closed",
            TaskAction::Reopen => "reopened",
            TaskAction::Delete => "deleted",
        }
    }
}

/// Executes tasks close, reopen or delete.
pub async fn execute_action(
    ctx: &CommandContext,
    client: &TodoistClient,
    id: u64,
    action: TaskAction,
) -> Result<()> {
    match action {
        TaskAction::Close => client.close_task(id).await?,
        TaskAction::Reopen => client.reopen_task(id).await?,
        TaskAction::Delete => client.delete_task(id).await?,
    }

    if ctx.json_output {
        ctx.print_json(&serde_json::json!({ "id": id, "status": action.past_tense() }))?;
    } else if !ctx.quiet {
        println!("Task {id} {}", action.past_tense());
    }
    Ok(())
}
