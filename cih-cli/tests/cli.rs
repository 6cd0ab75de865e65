//! Runs the `cih` binary against an isolated config environment.

use std::process::{Command, Output};

use tempfile::TempDir;

fn cih(config_home: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cih"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_home.path())
        .env("CIH_PROJECT_CONFIG_DIR", config_home.path().join("project"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run cih")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn render_home_prints_chrome_and_content() {
    let home = TempDir::new().unwrap();
    let output = cih(&home, &["render", "/"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("CIH App"));
    assert!(text.contains("Welcome to CIH App"));
    assert!(text.contains("Built by Your Team."));
}

#[test]
fn render_unknown_path_prints_not_found() {
    let home = TempDir::new().unwrap();
    let output = cih(&home, &["render", "/unknown-xyz", "--width", "80", "--height", "30"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("404 - Not Found"));
    assert_eq!(text.lines().count(), 30);
}

#[test]
fn render_rejects_unknown_theme() {
    let home = TempDir::new().unwrap();
    let output = cih(&home, &["render", "/", "--theme", "neon"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown theme `neon`"), "stderr: {stderr}");
}

#[test]
fn routes_json_lists_fallback_last() {
    let home = TempDir::new().unwrap();
    let output = cih(&home, &["routes", "--json"]);

    assert!(output.status.success());
    let routes: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let routes = routes.as_array().unwrap();
    assert_eq!(routes.len(), 4);
    assert_eq!(routes[3]["page"], "not_found");
}

#[test]
fn config_show_applies_project_layer() {
    let home = TempDir::new().unwrap();
    let project = home.path().join("project");
    std::fs::create_dir_all(&project).unwrap();
    std::fs::write(
        project.join("config.toml"),
        "[render]\nwidth = 72\n",
    )
    .unwrap();

    let output = cih(&home, &["config", "show"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("width = 72"), "stdout: {text}");
    assert!(text.contains("theme = \"cih\""), "stdout: {text}");
}
