//! CLI end-to-end tests that invoke the compiled `pathsmith` binary.
//!
//! Every run clears the integration variables, disables colors and empties
//! `PATH` so results never depend on the host's installed CLIs.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

const API_KEY: &str = "dtn_e2e_abcdefghijklmnopqrstuvwxyz";

/// A `pathsmith` command isolated from the host environment, run in `dir`.
fn pathsmith(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("pathsmith").expect("binary should be built");
    cmd.current_dir(dir)
        .env_remove("CONVEX_URL")
        .env_remove("DAYTONA_API_KEY")
        .env_remove("DAYTONA_API_URL")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .env("CLICOLOR", "0")
        .env("PATH", "");
    cmd
}

/// A project directory nested one level down, so `../.env` stays inside the
/// temporary directory.
fn project(temp: &TempDir) -> std::path::PathBuf {
    let dir = temp.path().join("project");
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn create_agents_project(dir: &std::path::Path) {
    let root = dir.join("inkeep-agents/src/default");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("weather.graph.ts"), "export {};\n").unwrap();
    fs::write(root.join("inkeep.config.ts"), "export {};\n").unwrap();
    fs::write(dir.join("inkeep-agents/package.json"), "{}").unwrap();
}

fn mock_tasks(server: &mut mockito::Server, body: serde_json::Value) -> mockito::Mock {
    server
        .mock("POST", "/api/query")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create()
}

#[test]
fn test_help_exits_zero() {
    let temp = TempDir::new().unwrap();
    pathsmith(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("status").and(predicate::str::contains("tasks")));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    pathsmith(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pathsmith"));
}

#[test]
fn test_status_unconfigured_needs_setup() {
    let temp = TempDir::new().unwrap();
    let dir = project(&temp);

    pathsmith(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Convex not configured"))
        .stdout(predicate::str::contains("Inkeep agents not found"))
        .stdout(predicate::str::contains("Daytona API key not found"))
        .stdout(predicate::str::contains(
            "Some tools need additional setup - see messages above",
        ))
        .stdout(predicate::str::contains("SUCCESSFULLY INTEGRATED").not());
}

#[test]
fn test_status_all_ready() {
    let mut server = mockito::Server::new();
    let mock = mock_tasks(
        &mut server,
        json!({
            "status": "success",
            "value": [
                { "text": "Build marketplace UI", "isCompleted": true },
                { "text": "Train negotiation agent", "isCompleted": false }
            ]
        }),
    );

    let temp = TempDir::new().unwrap();
    let dir = project(&temp);
    create_agents_project(&dir);

    pathsmith(&dir)
        .args(["status", "--convex-url", &server.url()])
        .env("DAYTONA_API_KEY", API_KEY)
        .env("DAYTONA_API_URL", "https://app.daytona.io/api")
        .assert()
        .success()
        .stdout(predicate::str::contains("Retrieved 2 tasks"))
        .stdout(predicate::str::contains("✅ 1. Build marketplace UI"))
        .stdout(predicate::str::contains("❌ 2. Train negotiation agent"))
        .stdout(predicate::str::contains("Daytona API Key: dtn_e2e_abcdefghijkl..."))
        .stdout(predicate::str::contains(API_KEY).not())
        .stdout(predicate::str::contains("ALL SPONSOR TOOLS SUCCESSFULLY INTEGRATED!"));

    mock.assert();
}

#[test]
fn test_status_query_error_continues() {
    let mut server = mockito::Server::new();
    let _mock = mock_tasks(
        &mut server,
        json!({ "status": "error", "errorMessage": "Function tasks:get not deployed" }),
    );

    let temp = TempDir::new().unwrap();
    let dir = project(&temp);
    create_agents_project(&dir);

    pathsmith(&dir)
        .args(["status", "--convex-url", &server.url()])
        .env("DAYTONA_API_KEY", API_KEY)
        .assert()
        .success()
        .stdout(predicate::str::contains("Function tasks:get not deployed"))
        .stdout(predicate::str::contains("Inkeep CLI not in PATH"))
        .stdout(predicate::str::contains("Daytona Platform:   ✅ Configured"))
        .stdout(predicate::str::contains("Convex Backend:     ❌ Needs Setup"));
}

#[test]
fn test_status_no_concept() {
    let temp = TempDir::new().unwrap();
    let dir = project(&temp);

    pathsmith(&dir)
        .args(["status", "--no-concept"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PATHSMITH VISION").not())
        .stdout(predicate::str::contains("PATHSMITH SETUP SUMMARY"));
}

#[test]
fn test_status_reads_dotenv_local() {
    let temp = TempDir::new().unwrap();
    let dir = project(&temp);
    fs::write(dir.join(".env.local"), format!("DAYTONA_API_KEY={}\n", API_KEY)).unwrap();

    pathsmith(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Daytona Platform:   ✅ Configured"));
}

#[test]
fn test_status_reads_parent_dotenv() {
    let temp = TempDir::new().unwrap();
    let dir = project(&temp);
    fs::write(
        temp.path().join(".env"),
        "DAYTONA_API_URL=https://parent.example.test/api\n",
    )
    .unwrap();

    pathsmith(&dir)
        .env("DAYTONA_API_KEY", API_KEY)
        .assert()
        .success()
        .stdout(predicate::str::contains("https://parent.example.test/api"));
}

#[test]
fn test_status_reads_dotenv_under_root() {
    let temp = TempDir::new().unwrap();
    let dir = project(&temp);
    fs::write(dir.join(".env.local"), format!("DAYTONA_API_KEY={}\n", API_KEY)).unwrap();

    let elsewhere = temp.path().join("elsewhere");
    fs::create_dir_all(&elsewhere).unwrap();

    pathsmith(&elsewhere)
        .arg("--root")
        .arg(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Daytona Platform:   ✅ Configured"));
}

#[test]
fn test_tasks_requires_convex_url() {
    let temp = TempDir::new().unwrap();
    let dir = project(&temp);

    pathsmith(&dir)
        .arg("tasks")
        .assert()
        .failure()
        .stderr(predicate::str::contains("CONVEX_URL"));
}

#[test]
fn test_tasks_lists_records() {
    let mut server = mockito::Server::new();
    let _mock = mock_tasks(
        &mut server,
        json!({
            "status": "success",
            "value": [
                { "text": "Seed products", "isCompleted": true },
                { "text": "Wire price oracle", "isCompleted": false }
            ]
        }),
    );

    let temp = TempDir::new().unwrap();
    let dir = project(&temp);

    pathsmith(&dir)
        .arg("tasks")
        .env("CONVEX_URL", server.url())
        .assert()
        .success()
        .stdout(predicate::str::contains("1. ✅ Seed products"))
        .stdout(predicate::str::contains("2. ❌ Wire price oracle"))
        .stdout(predicate::str::contains("Total tasks: 2"));
}

#[test]
fn test_tasks_query_error_fails() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/api/query")
        .with_status(500)
        .with_body("internal error")
        .create();

    let temp = TempDir::new().unwrap();
    let dir = project(&temp);

    pathsmith(&dir)
        .arg("tasks")
        .env("CONVEX_URL", server.url())
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP 500"));
}
