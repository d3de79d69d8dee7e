//! `tb config`: the TOML settings file.
//!
//! Holds the API token and defaults for the HandBrake wrapper. Lives at
//! `~/.config/tb/config.toml` unless overridden.

use std::env;
use std::fmt::Display;
use std::fs;
use std::path::PathBuf;

use directories::BaseDirs;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};

use super::{CommandContext, CommandError, Result};

/// Schema version written to new files.
const CONFIG_VERSION: u32 = 1;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "TB_CONFIG";

/// Tokens this short are hidden entirely.
const TOKEN_MASK_MIN_LENGTH: usize = 8;

/// Characters kept visible at each end of a longer token.
const TOKEN_MASK_VISIBLE_CHARS: usize = 4;

/// Keys accepted by `tb config set`.
const SETTABLE_KEYS: &[&str] = &[
    "token",
    "api_url",
    "output.color",
    "handbrake.binary",
    "handbrake.media_dir",
    "handbrake.output_dir",
];

/// Contents of the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Todoist API token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Base URL of the Todoist REST API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub handbrake: HandbrakeConfig,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            token: None,
            api_url: None,
            output: OutputConfig::default(),
            handbrake: HandbrakeConfig::default(),
        }
    }
}

/// `[output]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// `false` turns table colors off.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// `[handbrake]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HandbrakeConfig {
    /// HandBrakeCLI executable name or path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary: Option<String>,

    /// Directory where discs get mounted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_dir: Option<PathBuf>,

    /// Directory transcoded files are written to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

fn config_error(action: &str, err: impl Display) -> CommandError {
    CommandError::Config(format!("cannot {action} config: {err}"))
}

/// Location of the config file.
///
/// `$TB_CONFIG` wins, then `$XDG_CONFIG_HOME/tb/config.toml`, then
/// `~/.config/tb/config.toml` on all platforms.
pub fn get_config_path() -> Result<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }

    let base = match env::var_os("XDG_CONFIG_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => BaseDirs::new()
            .map(|dirs| dirs.home_dir().join(".config"))
            .ok_or_else(|| CommandError::Config("no home directory".to_string()))?,
    };
    Ok(base.join("tb").join("config.toml"))
}

/// Reads the config file; a missing file yields the defaults.
pub fn load_config() -> Result<Config> {
    let path = get_config_path()?;

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let text = fs::read_to_string(&path).map_err(|e| config_error("read", e))?;
    let config = toml::from_str::<Config>(&text).map_err(|e| config_error("parse", e))?;
    Ok(migrate_config(config))
}

/// Brings an older config up to the current schema version.
fn migrate_config(mut config: Config) -> Config {
    // Version 1 is the only schema so far.
    config.version = CONFIG_VERSION;
    config
}

/// Writes the config file, creating its directory. Returns the path.
fn save_config(config: &Config) -> Result<PathBuf> {
    let path = get_config_path()?;

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| config_error("create directory for", e))?;
    }
    let text = toml::to_string_pretty(config).map_err(|e| config_error("serialize", e))?;
    fs::write(&path, text).map_err(|e| config_error("write", e))?;

    Ok(path)
}

/// `key: value` lines for the settings that are set, token masked.
fn settings_lines(config: &Config) -> Vec<String> {
    let mut lines = Vec::new();
    let mut push = |key: &str, value: Option<String>| {
        if let Some(value) = value {
            lines.push(format!("{key} = {value}"));
        }
    };

    push("token", config.token.as_deref().map(mask_token));
    push("api_url", config.api_url.clone());
    push("output.color", config.output.color.map(|c| c.to_string()));
    push("handbrake.binary", config.handbrake.binary.clone());
    push(
        "handbrake.media_dir",
        config.handbrake.media_dir.as_ref().map(|d| d.display().to_string()),
    );
    push(
        "handbrake.output_dir",
        config.handbrake.output_dir.as_ref().map(|d| d.display().to_string()),
    );
    lines
}

/// Executes `tb config show`.
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;
    let exists = path.exists();

    if ctx.json_output {
        let mut shown = ctx.config.clone();
        shown.token = shown.token.as_deref().map(mask_token);
        ctx.print_json(&serde_json::json!({
            "path": path.display().to_string(),
            "exists": exists,
            "config": shown,
        }))?;
        return Ok(());
    }
    if ctx.quiet {
        return Ok(());
    }

    let title = format!("Config file: {}", path.display());
    if ctx.use_colors {
        println!("{}", title.bold());
    } else {
        println!("{title}");
    }

    if !exists {
        println!("Not created yet; `tb config set <key> <value>` writes it.");
        return Ok(());
    }

    let lines = settings_lines(&ctx.config);
    if lines.is_empty() {
        println!("No settings.");
    }
    for line in lines {
        println!("  {line}");
    }
    Ok(())
}

/// Options for the config set command.
pub struct ConfigSetOptions {
    pub key: String,
    pub value: String,
}

/// Applies `key = value` to a config.
fn apply_setting(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "token" => config.token = Some(value.to_string()),
        "api_url" => config.api_url = Some(value.trim_end_matches('/').to_string()),
        "output.color" => config.output.color = Some(parse_bool(value)?),
        "handbrake.binary" => config.handbrake.binary = Some(value.to_string()),
        "handbrake.media_dir" => config.handbrake.media_dir = Some(PathBuf::from(value)),
        "handbrake.output_dir" => config.handbrake.output_dir = Some(PathBuf::from(value)),
        _ => {
            return Err(CommandError::Config(format!(
                "unknown key '{key}' (expected one of: {})",
                SETTABLE_KEYS.join(", ")
            )))
        }
    }
    Ok(())
}

/// Executes `tb config set`. Reloads the file so unrelated keys survive.
pub fn execute_set(ctx: &CommandContext, opts: &ConfigSetOptions) -> Result<()> {
    let mut config = load_config()?;
    apply_setting(&mut config, &opts.key, &opts.value)?;
    let path = save_config(&config)?;

    if ctx.json_output {
        let value = match opts.key.as_str() {
            "token" => mask_token(&opts.value),
            _ => opts.value.clone(),
        };
        ctx.print_json(&serde_json::json!({
            "key": opts.key,
            "value": value,
            "path": path.display().to_string(),
        }))?;
    } else if !ctx.quiet {
        println!("{} saved to {}", opts.key, path.display());
    }
    Ok(())
}

/// Executes `tb config path`.
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;

    if ctx.json_output {
        ctx.print_json(&serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
        }))?;
    } else {
        println!("{}", path.display());
    }
    Ok(())
}

/// Hides all but both ends of a token.
fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= TOKEN_MASK_MIN_LENGTH {
        return "****".to_string();
    }
    let head: String = chars[..TOKEN_MASK_VISIBLE_CHARS].iter().collect();
    let tail: String = chars[chars.len() - TOKEN_MASK_VISIBLE_CHARS..].iter().collect();
    format!("{head}...{tail}")
}

fn parse_bool(s: &str) -> Result<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(CommandError::Config(format!("'{s}' is not a boolean"))),
    }
}
