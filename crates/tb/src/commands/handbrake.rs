//! Handbrake command implementation.

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::info;

use super::{CommandContext, Result};
use crate::cli::HandbrakeArgs;
use crate::handbrake::args::{display_command, scan_args, TranscodeJob, DEFAULT_BINARY};
use crate::handbrake::disc::{default_media_dir, default_output_dir, find_disc};
use crate::handbrake::exec::run_capture;
use crate::handbrake::metadata::parse_scan_output;
use crate::handbrake::{plan_jobs, Prompter, TerminalPrompter};

/// Resolved settings for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandbrakeSettings {
    pub binary: String,
    pub media_dir: PathBuf,
    pub source: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub dry_run: bool,
}

impl HandbrakeSettings {
    /// Merges command-line options over the config file and defaults.
    pub fn resolve(args: &HandbrakeArgs, ctx: &CommandContext) -> Self {
        let config = &ctx.config.handbrake;
        Self {
            binary: args
                .handbrake_bin
                .clone()
                .or_else(|| config.binary.clone())
                .unwrap_or_else(|| DEFAULT_BINARY.to_string()),
            media_dir: args
                .media_dir
                .clone()
                .or_else(|| config.media_dir.clone())
                .unwrap_or_else(default_media_dir),
            source: args.source.clone(),
            output_dir: args
                .output_dir
                .clone()
                .or_else(|| config.output_dir.clone())
                .unwrap_or_else(default_output_dir),
            dry_run: args.dry_run,
        }
    }
}

/// Outcome of one transcode, reported with `--json`.
#[derive(Debug, Serialize)]
struct TranscodeReport<'a> {
    #[serde(flatten)]
    job: &'a TranscodeJob,
    output: PathBuf,
    command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    elapsed_ms: Option<u64>,
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Prints a timestamped progress line unless output is quiet or JSON.
fn status(ctx: &CommandContext, message: &str) {
    if !ctx.quiet && !ctx.json_output {
        println!("{} {}", timestamp(), message);
    }
}

/// Executes the handbrake command with terminal prompts.
pub async fn execute(ctx: &CommandContext, args: &HandbrakeArgs) -> Result<()> {
    let settings = HandbrakeSettings::resolve(args, ctx);
    run(ctx, &settings, &mut TerminalPrompter).await
}

/// Scans the disc, plans the jobs with `prompter` and transcodes them.
pub async fn run(
    ctx: &CommandContext,
    settings: &HandbrakeSettings,
    prompter: &mut dyn Prompter,
) -> Result<()> {
    let source = match &settings.source {
        Some(source) => source.clone(),
        None => find_disc(&settings.media_dir)?,
    };
    info!(source = %source.display(), "using disc");

    status(ctx, "Reading disc metadata");
    let scan = run_capture(&settings.binary, &scan_args(&source)).await?;
    let titles = parse_scan_output(&scan)?;
    status(ctx, &format!("Read disc metadata ({} titles)", titles.len()));

    let jobs = plan_jobs(&titles, prompter)?;

    let mut reports = Vec::with_capacity(jobs.len());
    for job in &jobs {
        reports.push(transcode(ctx, settings, &source, job).await?);
    }

    if ctx.json_output {
        ctx.print_json(&reports)?;
    }
    status(ctx, "Done");

    Ok(())
}

async fn transcode<'a>(
    ctx: &CommandContext,
    settings: &HandbrakeSettings,
    source: &Path,
    job: &'a TranscodeJob,
) -> Result<TranscodeReport<'a>> {
    let args = job.to_args(source, &settings.output_dir);
    let command = display_command(&settings.binary, &args);
    let output = job.output_path(&settings.output_dir);

    if settings.dry_run {
        if !ctx.json_output {
            println!("{command}");
        }
        return Ok(TranscodeReport {
            job,
            output,
            command,
            elapsed_ms: None,
        });
    }

    let start = Instant::now();
    status(ctx, &format!("Transcoding {}", job.name));
    info!(name = %job.name, title = job.title, "transcode started");

    run_capture(&settings.binary, &args).await?;

    let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    status(ctx, &format!("Finished in {elapsed_ms}"));
    info!(name = %job.name, elapsed_ms, "transcode finished");

    Ok(TranscodeReport {
        job,
        output,
        command,
        elapsed_ms: Some(elapsed_ms),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::config::Config;
    use crate::commands::CommandError;
    use crate::handbrake::HandbrakeError;

    fn ctx(config: Config) -> CommandContext {
        CommandContext {
            json_output: false,
            use_colors: false,
            quiet: true,
            config,
        }
    }

    struct NoPrompts;

    impl Prompter for NoPrompts {
        fn select_many(&mut self, _prompt: &str, _items: &[String]) -> Result<Vec<usize>> {
            panic!("no prompt expected")
        }

        fn input(&mut self, _prompt: &str) -> Result<String> {
            panic!("no prompt expected")
        }
    }

    #[test]
    fn test_settings_flags_override_config() {
        let mut config = Config::default();
        config.handbrake.binary = Some("/opt/hb".to_string());
        config.handbrake.output_dir = Some(PathBuf::from("/srv/videos"));
        config.handbrake.media_dir = Some(PathBuf::from("/run/media/me"));

        let args = HandbrakeArgs {
            output_dir: Some(PathBuf::from("/tmp/out")),
            ..Default::default()
        };
        let settings = HandbrakeSettings::resolve(&args, &ctx(config));

        assert_eq!(settings.binary, "/opt/hb");
        assert_eq!(settings.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(settings.media_dir, PathBuf::from("/run/media/me"));
        assert!(settings.source.is_none());
    }

    #[test]
    fn test_settings_defaults() {
        let settings =
            HandbrakeSettings::resolve(&HandbrakeArgs::default(), &ctx(Config::default()));
        assert_eq!(settings.binary, DEFAULT_BINARY);
        assert!(settings.output_dir.ends_with("Videos"));
        assert!(settings.media_dir.starts_with("/media"));
        assert!(!settings.dry_run);
    }

    #[tokio::test]
    async fn test_run_without_disc() {
        let media = tempfile::TempDir::new().unwrap();
        let settings = HandbrakeSettings {
            binary: DEFAULT_BINARY.to_string(),
            media_dir: media.path().to_path_buf(),
            source: None,
            output_dir: media.path().join("out"),
            dry_run: true,
        };

        let err = run(&ctx(Config::default()), &settings, &mut NoPrompts)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CommandError::Handbrake(HandbrakeError::NoDiscFound { .. })
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_with_failing_scanner() {
        let media = tempfile::TempDir::new().unwrap();
        let settings = HandbrakeSettings {
            binary: "false".to_string(),
            media_dir: media.path().to_path_buf(),
            source: Some(media.path().to_path_buf()),
            output_dir: media.path().join("out"),
            dry_run: true,
        };

        let err = run(&ctx(Config::default()), &settings, &mut NoPrompts)
            .await
            .unwrap_err();
        assert!(matches!(err, CommandError::Process { .. }));
    }

    /// Picks the first item of every menu and names outputs "Feature".
    struct FirstChoice;

    impl Prompter for FirstChoice {
        fn select_many(&mut self, _prompt: &str, _items: &[String]) -> Result<Vec<usize>> {
            Ok(vec![0])
        }

        fn input(&mut self, _prompt: &str) -> Result<String> {
            Ok("Feature".to_string())
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_dry_run_scans_but_does_not_transcode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::TempDir::new().unwrap();
        let log = dir.path().join("calls.log");
        let script = dir.path().join("fake-handbrake");
        std::fs::write(
            &script,
            format!(
                r#"#!/bin/sh
echo "$@" >> "{}"
echo 'JSON Title Set: {{"TitleList": [{{"Index": 4, "Name": "MAIN", "Duration": {{"Hours": 0, "Minutes": 30, "Seconds": 0}}, "Geometry": {{"Width": 1920, "Height": 1080}}, "AudioList": [], "SubtitleList": []}}]}}'
echo 'HandBrake has exited.'
"#,
                log.display()
            ),
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let settings = HandbrakeSettings {
            binary: script.display().to_string(),
            media_dir: dir.path().to_path_buf(),
            source: Some(PathBuf::from("/media/me/DISC")),
            output_dir: PathBuf::from("/tmp/out"),
            dry_run: true,
        };

        run(&ctx(Config::default()), &settings, &mut FirstChoice)
            .await
            .unwrap();

        let calls = std::fs::read_to_string(&log).unwrap();
        assert_eq!(calls, "-i /media/me/DISC --json -t 0\n");
    }
}
