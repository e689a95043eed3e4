//! Integration tests for the store-devtools binary.

use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_cli(home: &Path, args: &[&str]) -> Output {
    run_cli_with_env(home, &[], args)
}

fn run_cli_with_env(home: &Path, envs: &[(&str, &str)], args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_store-devtools");
    Command::new(bin)
        .env("HOME", home.as_os_str())
        .env("XDG_CONFIG_HOME", home.join("config").as_os_str())
        .env_remove("STORE_DEVTOOLS_LOG")
        .env_remove("STORE_DEVTOOLS_LOG_FORMAT")
        .env_remove("STORE_DEVTOOLS_ENV")
        .envs(envs.iter().copied())
        .args(args)
        .output()
        .unwrap()
}

fn write_workspace_settings(workspace: &Path, content: &str) {
    let config_dir = workspace.join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("devtools.toml"), content).unwrap();
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout should be JSON ({}): {}",
            e,
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

#[test]
fn test_prints_defaults_for_empty_workspace() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = temp_dir.path().join("ws");
    fs::create_dir_all(&workspace).unwrap();

    let output = run_cli(
        temp_dir.path(),
        &["--workspace", workspace.to_str().unwrap()],
    );
    assert!(
        output.status.success(),
        "store-devtools should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json = stdout_json(&output);
    assert_eq!(json["maxAge"], Value::Bool(false));
    assert_eq!(json["name"], "NgRx Store DevTools");
    assert_eq!(json["traceLimit"], 75);
    assert_eq!(json["features"]["import"], "custom");
    assert_eq!(json["features"]["reorder"], true);
}

#[test]
fn test_log_only_flag_restricts_features() {
    let temp_dir = TempDir::new().unwrap();
    let settings_file = temp_dir.path().join("devtools.toml");
    fs::write(
        &settings_file,
        "[options]\nname = \"Cart\"\n\n[options.features]\njump = true\n",
    )
    .unwrap();

    let output = run_cli(
        temp_dir.path(),
        &[
            "--config",
            settings_file.to_str().unwrap(),
            "--log-only",
            "--compact",
        ],
    );
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["name"], "Cart");
    assert_eq!(json["logOnly"], true);
    assert_eq!(
        json["features"],
        serde_json::json!({"pause": true, "export": true, "test": true})
    );
}

#[test]
fn test_validate_rejects_invalid_configuration() {
    let temp_dir = TempDir::new().unwrap();
    let settings_file = temp_dir.path().join("devtools.toml");
    fs::write(&settings_file, "[options]\nmax_age = 1\n").unwrap();

    let config_arg = settings_file.to_str().unwrap();

    // Without --validate the value is printed as given.
    let output = run_cli(temp_dir.path(), &["--config", config_arg]);
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["maxAge"], 1);

    let output = run_cli(temp_dir.path(), &["--config", config_arg, "--validate"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("maxAge must be greater than 1"),
        "unexpected stderr: {}",
        stderr
    );
}

#[test]
fn test_missing_config_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let absent = temp_dir.path().join("absent.toml");

    let output = run_cli(temp_dir.path(), &["--config", absent.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Settings file not found"));
}

#[test]
fn test_toml_output() {
    let temp_dir = TempDir::new().unwrap();
    let settings_file = temp_dir.path().join("devtools.toml");
    fs::write(&settings_file, "[options]\nserialize = true\n").unwrap();

    let output = run_cli(
        temp_dir.path(),
        &["--config", settings_file.to_str().unwrap(), "--format", "toml"],
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("serialize = true"));
    assert!(stdout.contains("[features]"));
}

#[test]
fn test_missing_global_settings_warning_is_logged() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = temp_dir.path().join("ws");
    fs::create_dir_all(&workspace).unwrap();

    let output = run_cli(
        temp_dir.path(),
        &["--workspace", workspace.to_str().unwrap()],
    );
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Global devtools settings not found"),
        "missing global settings should be reported: {}",
        stderr
    );
    // stderr is a pipe here, so no color codes.
    assert!(!stderr.contains('\u{1b}'), "unexpected ANSI codes: {:?}", stderr);
}

#[test]
fn test_environment_overrides_workspace_file() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = temp_dir.path().join("ws");
    write_workspace_settings(
        &workspace,
        "[options]\nmax_age = 50\ntrace_limit = 10\n\n[options.features]\nlock = true\n",
    );

    let output = run_cli_with_env(
        temp_dir.path(),
        &[
            ("STORE_DEVTOOLS_OPTIONS__MAX_AGE", "25"),
            ("STORE_DEVTOOLS_OPTIONS__TRACE_LIMIT", "30"),
            ("STORE_DEVTOOLS_OPTIONS__FEATURES__LOCK", "false"),
            ("STORE_DEVTOOLS_OPTIONS__FEATURES__IMPORT", "custom"),
        ],
        &["--workspace", workspace.to_str().unwrap(), "--compact"],
    );
    assert!(
        output.status.success(),
        "stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json = stdout_json(&output);
    assert_eq!(json["maxAge"], 25);
    assert_eq!(json["traceLimit"], 30);
    assert_eq!(json["features"]["lock"], false);
    assert_eq!(json["features"]["import"], "custom");
    assert_eq!(json["features"]["pause"], true);
}

#[test]
fn test_log_env_overrides_configured_level() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = temp_dir.path().join("ws");
    write_workspace_settings(&workspace, "[logging]\nlevel = \"error\"\n");
    let workspace_arg = workspace.to_str().unwrap();

    // The configured level hides warnings and debug events.
    let output = run_cli(temp_dir.path(), &["--workspace", workspace_arg]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("Global devtools settings not found"), "{}", stderr);

    let output = run_cli_with_env(
        temp_dir.path(),
        &[("STORE_DEVTOOLS_LOG", "debug")],
        &["--workspace", workspace_arg],
    );
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Devtools settings loaded"), "{}", stderr);
    assert!(stderr.contains("Devtools options normalized"), "{}", stderr);
}

#[test]
fn test_log_env_off_silences_output() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = temp_dir.path().join("ws");
    fs::create_dir_all(&workspace).unwrap();

    let output = run_cli_with_env(
        temp_dir.path(),
        &[("STORE_DEVTOOLS_LOG", "off")],
        &["--workspace", workspace.to_str().unwrap()],
    );
    assert!(output.status.success());
    assert!(
        output.stderr.is_empty(),
        "expected no logs: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(stdout_json(&output)["traceLimit"], 75);
}
