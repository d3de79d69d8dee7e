//! Tests that run the built `tb` binary.
//!
//! Every run gets its own config file in a temporary directory, so nothing
//! from the developer's environment leaks in.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use serde_json::Value;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn tb_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_tb"))
}

/// Builds a `tb` command isolated from the user's config and token.
fn tb(config_dir: &Path) -> Command {
    let mut cmd = Command::new(tb_binary());
    cmd.env("TB_CONFIG", config_dir.join("config.toml"))
        .env("NO_COLOR", "1")
        .env_remove("TODOIST_TOKEN")
        .env_remove("TB_LOG")
        .env_remove("RUST_LOG");
    cmd
}

fn run_with_stdin(mut cmd: Command, input: &str) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_json_to_yaml() {
    let dir = TempDir::new().unwrap();
    let mut cmd = tb(dir.path());
    cmd.arg("json-to-yaml");

    let output = run_with_stdin(cmd, r#"{"name": "tb", "tags": ["cli"]}"#);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "name: tb\ntags:\n- cli\n");
}

#[test]
fn test_yaml_to_json() {
    let dir = TempDir::new().unwrap();
    let mut cmd = tb(dir.path());
    cmd.arg("yaml-to-json");

    let output = run_with_stdin(cmd, "name: tb\ncount: 3\n");

    assert!(output.status.success());
    let value: Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value, serde_json::json!({"name": "tb", "count": 3}));
}

#[test]
fn test_yaml_to_json_multiple_documents() {
    let dir = TempDir::new().unwrap();
    let mut cmd = tb(dir.path());
    cmd.arg("yaml-to-json");

    let output = run_with_stdin(cmd, "a: 1\n---\nb: 2\n");

    assert!(output.status.success());
    let value: Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value, serde_json::json!([{"a": 1}, {"b": 2}]));
}

#[test]
fn test_invalid_json_exits_with_one() {
    let dir = TempDir::new().unwrap();
    let mut cmd = tb(dir.path());
    cmd.arg("json-to-yaml");

    let output = run_with_stdin(cmd, "{not json");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error: JSON error"));
}

#[test]
fn test_print_filter_needs_no_token() {
    let dir = TempDir::new().unwrap();
    let output = tb(dir.path())
        .args([
            "tasks",
            "list",
            "--label",
            "home",
            "--overdue",
            "--print-filter",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output), "(@home & overdue)\n");
}

#[test]
fn test_print_filter_json() {
    let dir = TempDir::new().unwrap();
    let output = tb(dir.path())
        .args(["--json", "tasks", "list", "-P", "1", "--print-filter"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value, serde_json::json!({"filter": "p1"}));
}

#[test]
fn test_colors_json() {
    let dir = TempDir::new().unwrap();
    let output = tb(dir.path())
        .args(["colors", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    let colors = value.as_array().unwrap();
    assert_eq!(colors.len(), 20);
    assert_eq!(colors[0], serde_json::json!({"name": "berry_red", "hex": "#b8256f"}));
}

#[test]
fn test_api_command_without_token_is_config_error() {
    let dir = TempDir::new().unwrap();
    let output = tb(dir.path())
        .args(["--json", "labels"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(5));
    let value: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(value["error"]["code"], "CONFIG_ERROR");
}

#[test]
fn test_config_set_then_show() {
    let dir = TempDir::new().unwrap();

    let set = tb(dir.path())
        .args(["config", "set", "handbrake.binary", "/opt/HandBrakeCLI"])
        .output()
        .unwrap();
    assert!(set.status.success());

    let show = tb(dir.path())
        .args(["--json", "config", "show"])
        .output()
        .unwrap();
    assert!(show.status.success());
    let value: Value = serde_json::from_slice(&show.stdout).unwrap();
    assert_eq!(value["config"]["handbrake"]["binary"], "/opt/HandBrakeCLI");
}

fn task_json(id: u64, content: &str, priority: u8, order: i32) -> Value {
    serde_json::json!({
        "id": id,
        "project_id": 2203306141u64,
        "section_id": 0,
        "content": content,
        "description": "",
        "completed": false,
        "label_ids": [],
        "order": order,
        "priority": priority,
        "url": format!("https://todoist.com/showTask?id={id}"),
        "comment_count": 0,
        "assigner": 0,
        "created": "2019-12-11T22:36:50.000000Z"
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn test_tasks_list_against_mock_api() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tasks"))
        .and(header("Authorization", "Bearer cli-token"))
        .and(query_param("filter", "(@home & p1)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            task_json(1, "Water plants", 1, 1),
            task_json(2, "Fix sink", 4, 2),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        format!(
            "version = 1\ntoken = \"cli-token\"\napi_url = \"{}\"\n",
            mock_server.uri()
        ),
    )
    .unwrap();

    let mut cmd = tokio::process::Command::from(tb(dir.path()));
    let output = cmd
        .args(["--json", "tasks", "list", "--label", "home", "-P", "1"])
        .output()
        .await
        .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["filter"], "(@home & p1)");
    let ids: Vec<u64> = value["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_u64().unwrap())
        .collect();
    // Highest priority first.
    assert_eq!(ids, vec![2, 1]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_task_show_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tasks/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        format!("version = 1\napi_url = \"{}\"\n", mock_server.uri()),
    )
    .unwrap();
    let mut cmd = tokio::process::Command::from(tb(dir.path()));
    let output = cmd
        .env("TODOIST_TOKEN", "cli-token")
        .args(["tasks", "show", "404"])
        .output()
        .await
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("404"));
}
