//! Command implementations for the tb CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod colors;
pub mod comments;
pub mod completions;
pub mod config;
pub mod convert;
pub mod handbrake;
pub mod labels;
pub mod projects;
pub mod sections;
pub mod tasks;

use std::io;

use todoist_api_rs::client::TodoistClient;

use crate::cli::Cli;
use crate::handbrake::HandbrakeError;
use config::Config;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Filter construction error.
    #[error("filter error: {0}")]
    Filter(#[from] todoist_api_rs::filter::FilterError),

    /// API error.
    #[error("API error: {0}")]
    Api(#[from] todoist_api_rs::error::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// External process failure.
    #[error("{program} failed: {stderr}")]
    Process {
        /// Program that was run.
        program: String,
        /// Captured standard error.
        stderr: String,
    },

    /// Disc scanning or title selection failure.
    #[error("handbrake error: {0}")]
    Handbrake(#[from] HandbrakeError),
}

impl From<dialoguer::Error> for CommandError {
    fn from(err: dialoguer::Error) -> Self {
        CommandError::Io(io::Error::other(err.to_string()))
    }
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Error for a lookup that came back empty.
pub fn not_found(resource: &str, id: u64) -> CommandError {
    CommandError::Api(todoist_api_rs::error::Error::Api(
        todoist_api_rs::error::ApiError::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        },
    ))
}

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Loaded configuration file (defaults when absent).
    pub config: Config,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments and the loaded config.
    ///
    /// Colors are on unless `--no-color` is passed, `NO_COLOR` is set, or the
    /// config sets `output.color = false`.
    pub fn from_cli(cli: &Cli, config: Config) -> Self {
        let use_colors = !cli.no_color
            && std::env::var_os("NO_COLOR").is_none()
            && config.output.color.unwrap_or(true);

        Self {
            json_output: cli.json,
            use_colors,
            quiet: cli.quiet,
            config,
        }
    }

    /// Builds an API client for `token`, honouring `api_url` from the config.
    pub fn client(&self, token: &str) -> Result<TodoistClient> {
        let client = match &self.config.api_url {
            Some(url) => TodoistClient::with_base_url(token, url)?,
            None => TodoistClient::new(token)?,
        };
        Ok(client)
    }

    /// Prints a JSON value, pretty-printed.
    pub fn print_json<T: serde::Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}
