//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the tb CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use todoist_api_rs::color::Color;

/// tb - a small toolbox of command-line utilities
#[derive(Parser, Debug)]
#[command(name = "tb")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Todoist API token (default: from config)
    #[arg(long, global = true, env = "TODOIST_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read JSON from stdin and write it to stdout as YAML
    JsonToYaml,

    /// Read YAML from stdin and write it to stdout as JSON
    YamlToJson,

    /// Pick titles from a disc and transcode them with HandBrakeCLI
    #[command(alias = "hb")]
    Handbrake(HandbrakeArgs),

    /// Manage tasks
    #[command(alias = "t")]
    Tasks {
        #[command(subcommand)]
        command: TasksCommands,
    },

    /// Manage projects
    #[command(alias = "p")]
    Projects {
        #[command(subcommand)]
        command: Option<ProjectsCommands>,
    },

    /// Manage sections
    Sections {
        #[command(subcommand)]
        command: SectionsCommands,
    },

    /// Manage labels
    Labels {
        #[command(subcommand)]
        command: Option<LabelsCommands>,
    },

    /// Manage comments
    Comments {
        #[command(subcommand)]
        command: CommentsCommands,
    },

    /// List the colors accepted for projects and labels
    Colors,

    /// View or edit configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Options for the handbrake command
#[derive(Args, Debug, Clone, Default)]
pub struct HandbrakeArgs {
    /// Disc directory to read from (default: first directory in the media dir)
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Directory holding mounted discs (default: /media/$USER)
    #[arg(long)]
    pub media_dir: Option<PathBuf>,

    /// Directory to write the transcoded files to (default: ~/Videos)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// HandBrakeCLI executable to run
    #[arg(long)]
    pub handbrake_bin: Option<String>,

    /// Print the transcode commands instead of running them
    #[arg(long)]
    pub dry_run: bool,
}

/// Task subcommands
#[derive(Subcommand, Debug)]
pub enum TasksCommands {
    /// List active tasks
    #[command(alias = "ls")]
    List(TaskListArgs),

    /// Add a new task
    Add {
        /// Task content/title
        content: String,

        /// Task description/notes
        #[arg(long)]
        description: Option<String>,

        /// Target project ID (default: Inbox)
        #[arg(long)]
        project_id: Option<u64>,

        /// Target section ID
        #[arg(long)]
        section_id: Option<u64>,

        /// Priority level (1=highest, 4=lowest)
        #[arg(short = 'P', long, value_parser = clap::value_parser!(u8).range(1..=4))]
        priority: Option<u8>,

        /// Due date (natural language or ISO)
        #[arg(short, long)]
        due: Option<String>,

        /// Label ID (repeatable)
        #[arg(long, action = clap::ArgAction::Append)]
        label_id: Vec<u64>,
    },

    /// Show task details
    Show {
        /// Task ID
        id: u64,
    },

    /// Complete a task
    Close {
        /// Task ID
        id: u64,
    },

    /// Reopen a completed task
    Reopen {
        /// Task ID
        id: u64,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: u64,
    },
}

/// Filter flags for the tasks list command.
///
/// Every flag given is AND-ed into a single filter expression, in the
/// order the flags are declared here.
#[derive(Args, Debug, Clone, Default)]
pub struct TaskListArgs {
    /// Raw filter expression (e.g., "today & p1")
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Tasks whose content contains this text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Tasks in this project and its sub-projects
    #[arg(short, long)]
    pub project: Option<String>,

    /// Tasks in this project only, excluding sub-projects
    #[arg(long, conflicts_with = "project")]
    pub project_only: Option<String>,

    /// Tasks in this section
    #[arg(long)]
    pub section: Option<String>,

    /// Tasks with this label (repeatable)
    #[arg(short, long, action = clap::ArgAction::Append)]
    pub label: Vec<String>,

    /// Tasks with this priority (1=highest, 4=lowest)
    #[arg(short = 'P', long, value_parser = clap::value_parser!(u8).range(1..=4))]
    pub priority: Option<u8>,

    /// Only overdue tasks
    #[arg(long)]
    pub overdue: bool,

    /// Only tasks without a due date
    #[arg(long, conflicts_with = "overdue")]
    pub no_date: bool,

    /// Tasks due before this date
    #[arg(long)]
    pub due_before: Option<String>,

    /// Tasks due after this date
    #[arg(long)]
    pub due_after: Option<String>,

    /// Tasks assigned to this person ("me", "others" or a name)
    #[arg(long)]
    pub assigned_to: Option<String>,

    /// Exclude tasks with this label (repeatable)
    #[arg(long, action = clap::ArgAction::Append)]
    pub not_label: Vec<String>,

    /// Print the compiled filter instead of querying the API
    #[arg(long)]
    pub print_filter: bool,
}

/// Project subcommands
#[derive(Subcommand, Debug)]
pub enum ProjectsCommands {
    /// List all projects (default)
    List,

    /// Show project details
    Show {
        /// Project ID
        id: u64,
    },

    /// Create a project
    Add {
        /// Project name
        name: String,

        /// Project color (see `tb colors`)
        #[arg(long)]
        color: Option<Color>,

        /// Mark as favorite
        #[arg(long)]
        favorite: bool,

        /// Parent project ID
        #[arg(long)]
        parent_id: Option<u64>,
    },

    /// Delete a project
    Delete {
        /// Project ID
        id: u64,
    },

    /// List the collaborators of a shared project
    Collaborators {
        /// Project ID
        id: u64,
    },
}

/// Section subcommands
#[derive(Subcommand, Debug)]
pub enum SectionsCommands {
    /// List the sections of a project
    List {
        /// Project ID
        project_id: u64,
    },

    /// Create a section
    Add {
        /// Project ID
        project_id: u64,

        /// Section name
        name: String,
    },

    /// Rename a section
    Rename {
        /// Section ID
        id: u64,

        /// New name
        name: String,
    },

    /// Delete a section
    Delete {
        /// Section ID
        id: u64,
    },
}

/// Label subcommands
#[derive(Subcommand, Debug)]
pub enum LabelsCommands {
    /// List all labels (default)
    List,

    /// Create a label
    Add {
        /// Label name
        name: String,

        /// Label color (see `tb colors`)
        #[arg(long)]
        color: Option<Color>,

        /// Mark as favorite
        #[arg(long)]
        favorite: bool,
    },

    /// Delete a label
    Delete {
        /// Label ID
        id: u64,
    },
}

/// Target of a comment command: exactly one of project or task.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct CommentTargetArgs {
    /// Project ID
    #[arg(long)]
    pub project_id: Option<u64>,

    /// Task ID
    #[arg(long)]
    pub task_id: Option<u64>,
}

/// Comment subcommands
#[derive(Subcommand, Debug)]
pub enum CommentsCommands {
    /// List the comments of a project or task
    List {
        #[command(flatten)]
        target: CommentTargetArgs,
    },

    /// Add a comment to a project or task
    Add {
        #[command(flatten)]
        target: CommentTargetArgs,

        /// Comment text
        content: String,
    },

    /// Delete a comment
    Delete {
        /// Comment ID
        id: u64,
    },
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., output.color)
        key: String,

        /// Configuration value
        value: String,
    },

    /// Print config file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["tb", "--verbose", "colors"]);
        assert!(cli.verbose);
        assert!(!cli.quiet);
        assert!(!cli.json);

        let cli = Cli::parse_from(["tb", "--quiet", "--json", "colors"]);
        assert!(!cli.verbose);
        assert!(cli.quiet);
        assert!(cli.json);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["tb", "-v", "-q", "colors"]).is_err());
    }

    #[test]
    fn test_token_flag() {
        let cli = Cli::parse_from(["tb", "--token", "test-token", "projects"]);
        assert_eq!(cli.token, Some("test-token".to_string()));
    }

    #[test]
    fn test_converters() {
        let cli = Cli::parse_from(["tb", "json-to-yaml"]);
        assert!(matches!(cli.command, Some(Commands::JsonToYaml)));

        let cli = Cli::parse_from(["tb", "yaml-to-json"]);
        assert!(matches!(cli.command, Some(Commands::YamlToJson)));
    }

    #[test]
    fn test_handbrake_options() {
        let cli = Cli::parse_from([
            "tb",
            "handbrake",
            "--source",
            "/media/me/DISC",
            "-o",
            "/tmp/out",
            "--dry-run",
        ]);
        match cli.command {
            Some(Commands::Handbrake(args)) => {
                assert_eq!(args.source, Some(PathBuf::from("/media/me/DISC")));
                assert_eq!(args.output_dir, Some(PathBuf::from("/tmp/out")));
                assert!(args.dry_run);
                assert!(args.handbrake_bin.is_none());
            }
            other => panic!("Expected Handbrake, got {other:?}"),
        }
    }

    #[test]
    fn test_tasks_list_filter_flags() {
        let cli = Cli::parse_from([
            "tb",
            "tasks",
            "list",
            "--label",
            "home",
            "--label",
            "errand",
            "-P",
            "1",
            "--not-label",
            "waiting",
            "--print-filter",
        ]);
        match cli.command {
            Some(Commands::Tasks {
                command: TasksCommands::List(args),
            }) => {
                assert_eq!(args.label, vec!["home", "errand"]);
                assert_eq!(args.priority, Some(1));
                assert_eq!(args.not_label, vec!["waiting"]);
                assert!(args.print_filter);
            }
            other => panic!("Expected tasks list, got {other:?}"),
        }
    }

    #[test]
    fn test_priority_range() {
        assert!(Cli::try_parse_from(["tb", "tasks", "list", "-P", "0"]).is_err());
        assert!(Cli::try_parse_from(["tb", "tasks", "list", "-P", "5"]).is_err());
        assert!(Cli::try_parse_from(["tb", "tasks", "list", "-P", "4"]).is_ok());
    }

    #[test]
    fn test_project_flags_conflict() {
        assert!(Cli::try_parse_from([
            "tb",
            "tasks",
            "list",
            "--project",
            "Work",
            "--project-only",
            "Home"
        ])
        .is_err());
    }

    #[test]
    fn test_comment_target_required() {
        assert!(Cli::try_parse_from(["tb", "comments", "list"]).is_err());
        assert!(Cli::try_parse_from([
            "tb",
            "comments",
            "list",
            "--task-id",
            "1",
            "--project-id",
            "2"
        ])
        .is_err());

        let cli = Cli::parse_from(["tb", "comments", "add", "--task-id", "7", "Looks good"]);
        match cli.command {
            Some(Commands::Comments {
                command: CommentsCommands::Add { target, content },
            }) => {
                assert_eq!(target.task_id, Some(7));
                assert!(target.project_id.is_none());
                assert_eq!(content, "Looks good");
            }
            other => panic!("Expected comments add, got {other:?}"),
        }
    }

    #[test]
    fn test_aliases() {
        let cli = Cli::parse_from(["tb", "t", "ls"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Tasks {
                command: TasksCommands::List(_)
            })
        ));

        let cli = Cli::parse_from(["tb", "hb"]);
        assert!(matches!(cli.command, Some(Commands::Handbrake(_))));
    }

    #[test]
    fn test_color_parsing() {
        let cli = Cli::parse_from(["tb", "labels", "add", "errand", "--color", "lime_green"]);
        match cli.command {
            Some(Commands::Labels {
                command: Some(LabelsCommands::Add { color, .. }),
            }) => assert_eq!(color, Some(Color::LimeGreen)),
            other => panic!("Expected labels add, got {other:?}"),
        }

        assert!(Cli::try_parse_from(["tb", "projects", "add", "X", "--color", "plaid"]).is_err());
    }

    #[test]
    fn test_completions() {
        let cli = Cli::parse_from(["tb", "completions", "zsh"]);
        if let Some(Commands::Completions { shell }) = cli.command {
            assert!(matches!(shell, Shell::Zsh));
        } else {
            panic!("Expected Completions command");
        }
    }
}
