use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod dispatch;
mod encoding;
mod handbrake;
mod logging;
mod output;

use cli::Cli;
use commands::config::{load_config, Config};
use commands::{CommandContext, CommandError};
use dispatch::{AuthCommand, AuthDispatch, NoAuthCommand, NoAuthDispatch};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                let rendered = serde_json::to_string_pretty(&error_json)
                    .unwrap_or_else(|_| error_json.to_string());
                eprintln!("{rendered}");
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

async fn run(cli: &Cli) -> commands::Result<()> {
    let config = load_config()?;
    let token = resolve_token_optional(cli, &config);
    let ctx = CommandContext::from_cli(cli, config);

    // Local tools and config first; they never need a token.
    if let Some(dispatch) = NoAuthDispatch::try_from_cli(cli) {
        return dispatch.execute(&ctx).await;
    }

    let Some(dispatch) = AuthDispatch::from_cli(cli) else {
        return Ok(());
    };
    let token = token.ok_or_else(|| {
        CommandError::Config(
            "No API token. Pass --token, set TODOIST_TOKEN or run `tb config set token <TOKEN>`"
                .to_string(),
        )
    })?;
    let client = ctx.client(&token)?;
    dispatch.execute(&ctx, &client).await
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Filter(_) => "FILTER_ERROR",
        CommandError::Api(_) => "API_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
        CommandError::Yaml(_) => "YAML_ERROR",
        CommandError::Process { .. } => "PROCESS_ERROR",
        CommandError::Handbrake(_) => "HANDBRAKE_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    match e {
        CommandError::Config(_) => ExitCode::from(5),
        CommandError::Api(api) => ExitCode::from(u8::try_from(api.exit_code()).unwrap_or(2)),
        CommandError::Io(_) => ExitCode::from(3),
        CommandError::Filter(_) | CommandError::Json(_) | CommandError::Yaml(_) => {
            ExitCode::from(1)
        }
        CommandError::Process { .. } | CommandError::Handbrake(_) => ExitCode::from(6),
    }
}

/// Resolves the API token with priority: flag > env > config.
///
/// clap already folds `TODOIST_TOKEN` into `--token`, so `cli.token` covers
/// the first two.
fn resolve_token_optional(cli: &Cli, config: &Config) -> Option<String> {
    cli.token
        .clone()
        .or_else(|| config.token.clone())
        .filter(|token| !token.trim().is_empty())
}
