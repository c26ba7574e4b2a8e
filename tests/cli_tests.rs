#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Runs the compiled `standardize` and `standardize-lint` binaries

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn templates() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates")
}

fn standardize(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_standardize"))
        .current_dir(dir)
        .env_remove("STANDARDIZE_TEMPLATES")
        .arg("--templates")
        .arg(templates())
        .args(args)
        .output()
        .expect("run standardize")
}

fn lint(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_standardize-lint"))
        .args(args)
        .output()
        .expect("run standardize-lint")
}

#[test]
fn test_cli_generates_from_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("user.yaml"), "domain: user\n").unwrap();

    let output = standardize(dir.path(), &["--config", "user.yaml"]);
    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✅ Generated"));
    assert!(dir
        .path()
        .join("internal/repository/user/user_repository.go")
        .exists());
    assert!(dir.path().join("internal/di/user/di.go").exists());
}

#[test]
fn test_cli_legacy_mode_with_output_root() {
    let dir = TempDir::new().unwrap();
    let output = standardize(
        dir.path(),
        &["--domain", "billing", "--name", "Invoice", "--output", "gen", "entity", "model"],
    );
    assert!(output.status.success(), "{output:?}");
    assert!(dir.path().join("gen/internal/core/entity/billing/invoice.go").exists());
    assert!(dir.path().join("gen/internal/core/models/billing/invoice.go").exists());
    assert!(!dir.path().join("gen/internal/repository").exists());
}

#[test]
fn test_cli_validate_only() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("user.yaml"), "domain: user\n").unwrap();

    let output = standardize(dir.path(), &["--config", "user.yaml", "--validate"]);
    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration is valid"));
    assert!(stdout.contains("Table: users"));
    assert!(!dir.path().join("internal").exists());
}

#[test]
fn test_cli_reports_invalid_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.yaml"), "description: no domain\n").unwrap();

    let output = standardize(dir.path(), &["--config", "bad.yaml"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("domain"), "{stderr}");
    assert!(!dir.path().join("internal").exists());
}

#[test]
fn test_cli_rejects_unknown_legacy_command() {
    let dir = TempDir::new().unwrap();
    let output = standardize(
        dir.path(),
        &["--domain", "user", "--name", "User", "entity", "service"],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown command: service"));
    assert!(!dir.path().join("internal").exists());
}

#[test]
fn test_lint_shipped_templates_exit_zero() {
    let output = lint(&["--path", templates().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0), "{output:?}");
    assert!(String::from_utf8_lossy(&output.stdout).contains("No naming issues found"));
}

#[test]
fn test_lint_errors_exit_one_with_json() {
    let dir = TempDir::new().unwrap();
    let entity_dir = dir.path().join("internal/core/entity");
    fs::create_dir_all(&entity_dir).unwrap();
    fs::write(
        entity_dir.join("entity.go.tmpl"),
        "// @entity-template\npackage {{ Domain }}\n",
    )
    .unwrap();

    let output = lint(&["--path", dir.path().to_str().unwrap(), "--format", "json"]);
    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["summary"]["errors"], 5);
    assert!(report["results"]
        .as_array()
        .unwrap()
        .iter()
        .all(|r| r["rule"] == "missing-file"));
}

#[test]
fn test_lint_missing_path_exits_one() {
    let dir = TempDir::new().unwrap();
    let output = lint(&["--path", dir.path().join("absent").to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to lint"));
    assert!(output.stdout.is_empty());
}
