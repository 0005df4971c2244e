//! Integration tests that run the CLI binary.

use std::path::Path;

fn bin(home: &Path) -> std::process::Command {
    // CARGO_BIN_EXE_<name> uses the binary target name; hyphens require concat! for env!()
    let bin = env!(concat!("CARGO_BIN_EXE_advisor", "-", "chat"));
    let mut cmd = std::process::Command::new(bin);
    cmd.env_remove("MISTRAL_API_KEY")
        .env_remove("ADVISOR_BASE_URL")
        .env_remove("ADVISOR_MODEL")
        .env_remove("ADVISOR_TIMEOUT_SECS")
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_CACHE_HOME", home.join("cache"))
        // Run from temp dir so dotenv() won't load .env from project root
        .current_dir(home);
    cmd
}

#[test]
fn cli_help_succeeds_and_outputs_usage() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(tmp.path())
        .arg("--help")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--prompt"), "expected usage text in output");
    assert!(stdout.contains("MISTRAL_API_KEY"));
}

#[test]
fn cli_version_succeeds() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(tmp.path())
        .arg("--version")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("advisor-chat"));
}

#[test]
fn cli_prompt_without_api_key_exits_with_error() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(tmp.path())
        .arg("-p")
        .arg("hello")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        !output.status.success(),
        "expected failure when MISTRAL_API_KEY is not set"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("MISTRAL_API_KEY"),
        "stderr should name the missing variable: {}",
        stderr
    );
}

#[test]
fn cli_rejects_invalid_timeout() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(tmp.path())
        .env("ADVISOR_TIMEOUT_SECS", "soon")
        .arg("-p")
        .arg("hello")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ADVISOR_TIMEOUT_SECS"), "stderr: {}", stderr);
}

#[test]
fn cli_config_reports_missing_key() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(tmp.path())
        .arg("config")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("mistral-large-latest"), "stdout: {}", stdout);
}
