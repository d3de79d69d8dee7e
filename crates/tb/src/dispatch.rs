//! Command dispatch module for routing CLI commands to their handlers.
//!
//! Commands are split by whether they need an API token. Local tools
//! (converters, the HandBrake wrapper, config) never ask for one.

use todoist_api_rs::client::TodoistClient;

use crate::cli::{
    Cli, Commands, CommentsCommands, ConfigCommands, HandbrakeArgs, LabelsCommands,
    ProjectsCommands, SectionsCommands, Shell, TaskListArgs, TasksCommands,
};
use crate::commands::comments;
use crate::commands::labels::LabelsAddOptions;
use crate::commands::projects::ProjectAddOptions;
use crate::commands::tasks::{TaskAction, TaskAddOptions};
use crate::commands::{self, CommandContext, CommandError, Result};

/// Trait for commands that can be executed without authentication.
#[allow(async_fn_in_trait)]
pub trait NoAuthCommand {
    /// Execute the command without requiring an API token.
    async fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Trait for commands that talk to the Todoist API.
#[allow(async_fn_in_trait)]
pub trait AuthCommand {
    /// Execute the command with an authenticated client.
    async fn execute(&self, ctx: &CommandContext, client: &TodoistClient) -> Result<()>;
}

/// Commands that don't require authentication.
pub enum NoAuthDispatch<'a> {
    JsonToYaml,
    YamlToJson,
    Handbrake(&'a HandbrakeArgs),
    PrintFilter(&'a TaskListArgs),
    Colors,
    Config(&'a Option<ConfigCommands>),
    Completions(&'a Shell),
    Help,
}

impl<'a> NoAuthDispatch<'a> {
    /// Try to create a no-auth dispatch from the CLI command.
    /// Returns None if the command requires authentication.
    pub fn try_from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::JsonToYaml) => Some(Self::JsonToYaml),
            Some(Commands::YamlToJson) => Some(Self::YamlToJson),
            Some(Commands::Handbrake(args)) => Some(Self::Handbrake(args)),
            Some(Commands::Tasks {
                command: TasksCommands::List(args),
            }) if args.print_filter => Some(Self::PrintFilter(args)),
            Some(Commands::Colors) => Some(Self::Colors),
            Some(Commands::Config { command }) => Some(Self::Config(command)),
            Some(Commands::Completions { shell }) => Some(Self::Completions(shell)),
            None => Some(Self::Help),
            _ => None,
        }
    }
}

impl NoAuthCommand for NoAuthDispatch<'_> {
    async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::JsonToYaml => commands::convert::execute_json_to_yaml(),
            Self::YamlToJson => commands::convert::execute_yaml_to_json(),
            Self::Handbrake(args) => commands::handbrake::execute(ctx, args).await,
            Self::PrintFilter(args) => commands::tasks::execute_print_filter(ctx, args),
            Self::Colors => commands::colors::execute(ctx),
            Self::Config(command) => dispatch_config(ctx, command),
            Self::Completions(shell) => {
                commands::completions::execute(shell).map_err(CommandError::Io)
            }
            Self::Help => {
                if !ctx.quiet {
                    println!("tb - a small toolbox of command-line utilities");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

/// Dispatch config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Set { key, value }) => {
            let opts = commands::config::ConfigSetOptions {
                key: key.clone(),
                value: value.clone(),
            };
            commands::config::execute_set(ctx, &opts)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
    }
}

/// Commands that require authentication.
pub enum AuthDispatch<'a> {
    Tasks(&'a TasksCommands),
    Projects(&'a Option<ProjectsCommands>),
    Sections(&'a SectionsCommands),
    Labels(&'a Option<LabelsCommands>),
    Comments(&'a CommentsCommands),
}

impl<'a> AuthDispatch<'a> {
    /// Create an auth dispatch from the CLI command.
    /// Returns None for commands handled by [`NoAuthDispatch`].
    pub fn from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Tasks {
                command: TasksCommands::List(args),
            }) if args.print_filter => None,
            Some(Commands::Tasks { command }) => Some(Self::Tasks(command)),
            Some(Commands::Projects { command }) => Some(Self::Projects(command)),
            Some(Commands::Sections { command }) => Some(Self::Sections(command)),
            Some(Commands::Labels { command }) => Some(Self::Labels(command)),
            Some(Commands::Comments { command }) => Some(Self::Comments(command)),
            _ => None,
        }
    }
}

impl AuthCommand for AuthDispatch<'_> {
    async fn execute(&self, ctx: &CommandContext, client: &TodoistClient) -> Result<()> {
        match self {
            Self::Tasks(command) => dispatch_tasks(ctx, client, command).await,
            Self::Projects(command) => dispatch_projects(ctx, client, command).await,
            Self::Sections(command) => dispatch_sections(ctx, client, command).await,
            Self::Labels(command) => dispatch_labels(ctx, client, command).await,
            Self::Comments(command) => dispatch_comments(ctx, client, command).await,
        }
    }
}

async fn dispatch_tasks(
    ctx: &CommandContext,
    client: &TodoistClient,
    command: &TasksCommands,
) -> Result<()> {
    use commands::tasks;

    match command {
        TasksCommands::List(args) => tasks::execute_list(ctx, client, args).await,
        TasksCommands::Add {
            content,
            description,
            project_id,
            section_id,
            priority,
            due,
            label_id,
        } => {
            let opts = TaskAddOptions {
                content: content.clone(),
                description: description.clone(),
                project_id: *project_id,
                section_id: *section_id,
                priority: *priority,
                due: due.clone(),
                label_ids: label_id.clone(),
            };
            tasks::execute_add(ctx, client, &opts).await
        }
        TasksCommands::Show { id } => tasks::execute_show(ctx, client, *id).await,
        TasksCommands::Close { id } => {
            tasks::execute_action(ctx, client, *id, TaskAction::Close).await
        }
        TasksCommands::Reopen { id } => {
            tasks::execute_action(ctx, client, *id, TaskAction::Reopen).await
        }
        TasksCommands::Delete { id } => {
            tasks::execute_action(ctx, client, *id, TaskAction::Delete).await
        }
    }
}

async fn dispatch_projects(
    ctx: &CommandContext,
    client: &TodoistClient,
    command: &Option<ProjectsCommands>,
) -> Result<()> {
    use commands::projects;

    match command {
        Some(ProjectsCommands::List) | None => projects::execute_list(ctx, client).await,
        Some(ProjectsCommands::Show { id }) => projects::execute_show(ctx, client, *id).await,
        Some(ProjectsCommands::Add {
            name,
            color,
            favorite,
            parent_id,
        }) => {
            let opts = ProjectAddOptions {
                name: name.clone(),
                color: *color,
                favorite: *favorite,
                parent_id: *parent_id,
            };
            projects::execute_add(ctx, client, &opts).await
        }
        Some(ProjectsCommands::Delete { id }) => {
            projects::execute_delete(ctx, client, *id).await
        }
        Some(ProjectsCommands::Collaborators { id }) => {
            projects::execute_collaborators(ctx, client, *id).await
        }
    }
}

async fn dispatch_sections(
    ctx: &CommandContext,
    client: &TodoistClient,
    command: &SectionsCommands,
) -> Result<()> {
    use commands::sections;

    match command {
        SectionsCommands::List { project_id } => {
            sections::execute_list(ctx, client, *project_id).await
        }
        SectionsCommands::Add { project_id, name } => {
            sections::execute_add(ctx, client, *project_id, name).await
        }
        SectionsCommands::Rename { id, name } => {
            sections::execute_rename(ctx, client, *id, name).await
        }
        SectionsCommands::Delete { id } => sections::execute_delete(ctx, client, *id).await,
    }
}

async fn dispatch_labels(
    ctx: &CommandContext,
    client: &TodoistClient,
    command: &Option<LabelsCommands>,
) -> Result<()> {
    use commands::labels;

    match command {
        Some(LabelsCommands::List) | None => labels::execute_list(ctx, client).await,
        Some(LabelsCommands::Add {
            name,
            color,
            favorite,
        }) => {
            let opts = LabelsAddOptions {
                name: name.clone(),
                color: *color,
                favorite: *favorite,
            };
            labels::execute_add(ctx, client, &opts).await
        }
        Some(LabelsCommands::Delete { id }) => labels::execute_delete(ctx, client, *id).await,
    }
}

async fn dispatch_comments(
    ctx: &CommandContext,
    client: &TodoistClient,
    command: &CommentsCommands,
) -> Result<()> {
    match command {
        CommentsCommands::List { target } => comments::execute_list(ctx, client, target).await,
        CommentsCommands::Add { target, content } => {
            comments::execute_add(ctx, client, target, content).await
        }
        CommentsCommands::Delete { id } => comments::execute_delete(ctx, client, *id).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_local_commands_need_no_token() {
        for args in [
            &["tb", "json-to-yaml"][..],
            &["tb", "yaml-to-json"],
            &["tb", "hb", "--dry-run"],
            &["tb", "colors"],
            &["tb", "config", "path"],
            &["tb", "completions", "bash"],
            &["tb", "tasks", "list", "--overdue", "--print-filter"],
            &["tb"],
        ] {
            let cli = parse(args);
            assert!(NoAuthDispatch::try_from_cli(&cli).is_some(), "{args:?}");
            assert!(AuthDispatch::from_cli(&cli).is_none(), "{args:?}");
        }
    }

    #[test]
    fn test_print_filter_is_claimed_by_one_dispatcher() {
        let local = parse(&["tb", "tasks", "list", "--priority", "1", "--print-filter"]);
        assert!(matches!(
            NoAuthDispatch::try_from_cli(&local),
            Some(NoAuthDispatch::PrintFilter(_))
        ));
        assert!(AuthDispatch::from_cli(&local).is_none());

        let remote = parse(&["tb", "tasks", "list", "--priority", "1"]);
        assert!(NoAuthDispatch::try_from_cli(&remote).is_none());
        assert!(matches!(
            AuthDispatch::from_cli(&remote),
            Some(AuthDispatch::Tasks(_))
        ));
    }

    #[test]
    fn test_api_commands_need_token() {
        for args in [
            &["tb", "tasks", "list", "--overdue"][..],
            &["tb", "tasks", "close", "7"],
            &["tb", "projects"],
            &["tb", "sections", "list", "3"],
            &["tb", "labels", "add", "home"],
            &["tb", "comments", "list", "--task-id", "9"],
        ] {
            let cli = parse(args);
            assert!(NoAuthDispatch::try_from_cli(&cli).is_none(), "{args:?}");
            assert!(AuthDispatch::from_cli(&cli).is_some(), "{args:?}");
        }
    }
}
