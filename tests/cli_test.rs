//! Integration tests for the envtier binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const PARAM: &str = "/platform/account/env";

fn setup_params(value: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("params.env"),
        format!("# local parameters\n{}={}\n", PARAM, value),
    )
    .unwrap();
    temp
}

fn envtier() -> Command {
    let mut cmd = Command::new(cargo_bin("envtier"));
    for var in [
        "SSM_PARAM_NAME",
        "ENVTIER_STORE_TIMEOUT_MS",
        "ENVTIER_SSM_ENDPOINT",
        "ENVTIER_SSM_DECRYPT",
        "ENVTIER_LOG_FORMAT",
        "AWS_LAMBDA_FUNCTION_NAME",
        "RUST_LOG",
        "CLICOLOR_FORCE",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = envtier();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("invoke"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = envtier();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_resolve_prints_tier() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_params("development");
    let mut cmd = envtier();
    cmd.current_dir(temp.path());
    cmd.args(["resolve", "--param", PARAM, "--params-file", "params.env"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("development"))
        .stdout(predicate::str::contains("Replica count: 1"));
    Ok(())
}

#[test]
fn cli_resolve_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_params("\"PRODuction \"");
    let mut cmd = envtier();
    cmd.current_dir(temp.path());
    cmd.args([
        "resolve",
        "--param",
        PARAM,
        "--params-file",
        "params.env",
        "--json",
    ]);
    let output = cmd.assert().success().get_output().stdout.clone();

    let value: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(
        value,
        serde_json::json!({ "Environment": "production", "ReplicaCount": 2 })
    );
    Ok(())
}

#[test]
fn cli_resolve_reads_param_name_from_env() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_params("staging");
    let mut cmd = envtier();
    cmd.current_dir(temp.path());
    cmd.env("SSM_PARAM_NAME", PARAM);
    cmd.args(["resolve", "--params-file", "params.env"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("staging"))
        .stdout(predicate::str::contains("Replica count: 2"));
    Ok(())
}

#[test]
fn cli_resolve_invalid_environment_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_params("sandbox");
    let mut cmd = envtier();
    cmd.current_dir(temp.path());
    cmd.args(["resolve", "--param", PARAM, "--params-file", "params.env"]);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid environment 'sandbox'"));
    Ok(())
}

#[test]
fn cli_resolve_missing_parameter_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_params("staging");
    let mut cmd = envtier();
    cmd.current_dir(temp.path());
    cmd.args(["resolve", "--param", "/other", "--params-file", "params.env"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Parameter '/other' not found"));
    Ok(())
}

#[test]
fn cli_resolve_without_param_name_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_params("staging");
    let mut cmd = envtier();
    cmd.current_dir(temp.path());
    cmd.args(["resolve", "--params-file", "params.env"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("SSM_PARAM_NAME is not set"));
    Ok(())
}

#[test]
fn cli_invoke_create_event() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_params("staging");
    fs::write(temp.path().join("event.json"), r#"{"RequestType": "Create"}"#)?;

    let mut cmd = envtier();
    cmd.current_dir(temp.path());
    cmd.args([
        "invoke",
        "--event",
        "event.json",
        "--param",
        PARAM,
        "--params-file",
        "params.env",
    ]);
    let output = cmd.assert().success().get_output().stdout.clone();

    let value: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(value["PhysicalResourceId"], "/platform/account/env:staging");
    assert_eq!(value["Data"]["Environment"], "staging");
    assert_eq!(value["Data"]["ReplicaCount"], 2);
    Ok(())
}

#[test]
fn cli_invoke_delete_event_from_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_params("sandbox");

    let mut cmd = envtier();
    cmd.current_dir(temp.path());
    cmd.args([
        "invoke",
        "--event",
        "-",
        "--param",
        PARAM,
        "--params-file",
        "params.env",
    ]);
    cmd.write_stdin(r#"{"RequestType": "Delete"}"#);
    let output = cmd.assert().success().get_output().stdout.clone();

    let value: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(
        value,
        serde_json::json!({ "PhysicalResourceId": "env", "Data": {} })
    );
    Ok(())
}

#[test]
fn cli_invoke_rejects_malformed_event() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_params("staging");
    fs::write(temp.path().join("event.json"), r#"{"RequestType": "Restart"}"#)?;

    let mut cmd = envtier();
    cmd.current_dir(temp.path());
    cmd.args([
        "invoke",
        "--event",
        "event.json",
        "--param",
        PARAM,
        "--params-file",
        "params.env",
    ]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid event"));
    Ok(())
}

#[test]
fn cli_serve_without_param_name_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = envtier();
    cmd.arg("serve");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("SSM_PARAM_NAME"));
    Ok(())
}

#[test]
fn cli_bad_setting_fails_early() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_params("staging");
    let mut cmd = envtier();
    cmd.current_dir(temp.path());
    cmd.env("ENVTIER_STORE_TIMEOUT_MS", "soon");
    cmd.args(["resolve", "--param", PARAM, "--params-file", "params.env"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("ENVTIER_STORE_TIMEOUT_MS"));
    Ok(())
}

#[test]
fn cli_completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = envtier();
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("envtier"));
    Ok(())
}

#[test]
fn cli_invalid_command_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = envtier();
    cmd.arg("invalid-command");
    cmd.assert().failure();
    Ok(())
}

#[test]
fn cli_debug_flag_accepted() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_params("production");
    let mut cmd = envtier();
    cmd.current_dir(temp.path());
    cmd.args(["--debug", "resolve", "--param", PARAM, "--params-file", "params.env"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("production"));
    Ok(())
}
