//! Basic CLI E2E tests.
//!
//! Each test runs the compiled binary against an isolated data directory
//! so state never leaks between tests or into the user's real store.

use std::process::Command;
use tempfile::TempDir;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(dir: &TempDir, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_kinytimer"))
        .env("KINYTIMER_DATA_DIR", dir.path())
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);
    (stdout, stderr, code)
}

#[test]
fn project_create_and_list() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(
        &dir,
        &[
            "project",
            "create",
            "Test Project",
            "--repo",
            "https://example.com/repo.git",
            "--branch",
            "main",
        ],
    );
    assert_eq!(code, 0, "project create failed");
    assert!(stdout.contains("Project created:"));

    let (stdout, _, code) = run_cli(&dir, &["project", "list"]);
    assert_eq!(code, 0, "project list failed");
    let projects: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let projects = projects.as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["name"], "Test Project");
    assert_eq!(projects[0]["total_secs"], 0);
}

#[test]
fn project_create_rejects_empty_name() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(&dir, &["project", "create", "   "]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn project_select() {
    let dir = TempDir::new().unwrap();
    run_cli(&dir, &["project", "create", "Selectable"]);

    let (stdout, _, _) = run_cli(&dir, &["project", "list"]);
    let projects: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let id = projects[0]["id"].as_str().unwrap();

    let (stdout, _, code) = run_cli(&dir, &["project", "select", id]);
    assert_eq!(code, 0, "project select failed");
    assert!(stdout.contains("ok"));

    let (_, _, code) = run_cli(&dir, &["project", "select", "no-such-id"]);
    assert_eq!(code, 1);
}

#[test]
fn stats_commands_emit_json() {
    let dir = TempDir::new().unwrap();

    let (stdout, _, code) = run_cli(&dir, &["stats", "today"]);
    assert_eq!(code, 0, "stats today failed");
    let today: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(today["sessions"], 0);

    let (stdout, _, code) = run_cli(&dir, &["stats", "all"]);
    assert_eq!(code, 0, "stats all failed");
    let all: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(all["total_sessions"], 0);

    let (stdout, _, code) = run_cli(&dir, &["stats", "projects"]);
    assert_eq!(code, 0, "stats projects failed");
    assert!(serde_json::from_str::<serde_json::Value>(&stdout).unwrap().is_array());

    let (stdout, _, code) = run_cli(&dir, &["stats", "heatmap"]);
    assert_eq!(code, 0, "stats heatmap failed");
    let days: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(days.as_array().unwrap().len(), 365);
}

#[test]
fn settings_get_set_list_reset() {
    let dir = TempDir::new().unwrap();

    let (stdout, _, code) = run_cli(&dir, &["settings", "get", "pomodoro_time"]);
    assert_eq!(code, 0, "settings get failed");
    assert_eq!(stdout.trim(), "25");

    let (_, _, code) = run_cli(&dir, &["settings", "set", "short_break_time", "10"]);
    assert_eq!(code, 0, "settings set failed");
    let (stdout, _, _) = run_cli(&dir, &["settings", "get", "short_break_time"]);
    assert_eq!(stdout.trim(), "10");

    let (_, _, code) = run_cli(&dir, &["settings", "get", "no_such_key"]);
    assert_eq!(code, 1);

    let (stdout, _, code) = run_cli(&dir, &["settings", "list"]);
    assert_eq!(code, 0, "settings list failed");
    let settings: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(settings["short_break_time"], 10);

    let (_, _, code) = run_cli(&dir, &["settings", "reset"]);
    assert_eq!(code, 0, "settings reset failed");
    let (stdout, _, _) = run_cli(&dir, &["settings", "get", "short_break_time"]);
    assert_eq!(stdout.trim(), "5");
}

#[test]
fn export_writes_snapshot() {
    let dir = TempDir::new().unwrap();
    run_cli(&dir, &["project", "create", "Exported"]);

    let out_path = dir.path().join("export.json");
    let (_, _, code) = run_cli(&dir, &["export", "--output", out_path.to_str().unwrap()]);
    assert_eq!(code, 0, "export failed");

    let raw = std::fs::read_to_string(&out_path).unwrap();
    let snapshot: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(snapshot["sessions"].is_array());
    assert_eq!(snapshot["projects"].as_array().unwrap().len(), 1);
    assert_eq!(snapshot["stats"]["total_sessions"], 0);
    assert!(snapshot["exported_at"].is_string());
}
