//! Integration tests for the envsync binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A command rooted in `temp` with HOME pointed there so no user config leaks in.
fn envsync(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("envsync"));
    cmd.current_dir(temp.path())
        .env("HOME", temp.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn setup_project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join(".envsync");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.yml"), config).unwrap();
    temp
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("envsync"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("dashboard"))
        .stdout(predicate::str::contains("--build"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("envsync"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_rejects_unknown_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("envsync"));
    cmd.arg("deploy");
    cmd.assert().failure();
    Ok(())
}

#[test]
fn default_scan_writes_reports_and_dockerfile() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    envsync(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("JSON report saved to"))
        .stdout(predicate::str::contains("HTML report saved to"))
        .stdout(predicate::str::contains("Dockerfile generated"));

    let json = fs::read_to_string(temp.path().join("envsync_report.json"))?;
    let report: serde_json::Value = serde_json::from_str(&json)?;
    for key in ["os", "python", "java", "node", "conflicts"] {
        assert!(report.get(key).is_some(), "missing {key}");
    }
    assert!(json.contains("\n    \"os\""));

    let html = fs::read_to_string(temp.path().join("envsync_report.html"))?;
    assert!(html.contains("EnvSync Report"));

    let dockerfile = fs::read_to_string(temp.path().join("Dockerfile"))?;
    assert!(dockerfile.starts_with("# Auto-generated by EnvSync"));
    Ok(())
}

#[test]
fn scan_subcommand_honors_project_flag() -> Result<(), Box<dyn std::error::Error>> {
    let cwd = TempDir::new()?;
    let project = TempDir::new()?;

    envsync(&cwd)
        .args(["scan", "--project"])
        .arg(project.path())
        .assert()
        .success();

    assert!(project.path().join("envsync_report.json").exists());
    assert!(!cwd.path().join("envsync_report.json").exists());
    Ok(())
}

#[test]
fn scan_reports_missing_requirement() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(
        temp.path().join("requirements.txt"),
        "envsync-surely-not-installed==0.0.1\n",
    )?;

    envsync(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "envsync-surely-not-installed missing (required 0.0.1)",
        ));

    let json = fs::read_to_string(temp.path().join("envsync_report.json"))?;
    assert!(json.contains("envsync-surely-not-installed"));
    Ok(())
}

#[test]
fn scan_flags_competing_lockfiles() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("package-lock.json"), "{}")?;
    fs::write(temp.path().join("yarn.lock"), "")?;

    envsync(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Multiple Node.js lockfiles detected"));
    Ok(())
}

#[test]
fn reports_follow_configured_output_dir() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("reports:\n  output_dir: out\n");

    envsync(&temp).assert().success();

    assert!(temp.path().join("out/envsync_report.json").exists());
    assert!(temp.path().join("out/envsync_report.html").exists());
    Ok(())
}

#[test]
fn malformed_pom_fails_scan() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(
        temp.path().join("pom.xml"),
        "<project><dependencies></project>",
    )?;

    envsync(&temp)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error"));
    assert!(!temp.path().join("envsync_report.json").exists());
    Ok(())
}

#[test]
fn invalid_config_exits_with_2() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("dashboard:\n  port: 0\n");

    envsync(&temp)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error"));
    Ok(())
}

#[test]
fn config_flag_overrides_project_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("dashboard:\n  port: 0\n");
    let other = temp.path().join("other.yml");
    fs::write(&other, "dashboard:\n  port: 8088\n")?;

    envsync(&temp)
        .arg("config")
        .arg("--config")
        .arg(&other)
        .assert()
        .success()
        .stdout(predicate::str::contains("port: 8088"));
    Ok(())
}

#[test]
fn config_shows_defaults_without_files() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    envsync(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("No config files found"))
        .stdout(predicate::str::contains("port: 5000"));
    Ok(())
}

#[test]
fn config_json_output_parses() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("docker:\n  image_tag: demo:latest\n");

    let output = envsync(&temp).args(["config", "--json"]).output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let start = stdout.find('{').ok_or("no JSON in output")?;
    let config: serde_json::Value = serde_json::from_str(stdout[start..].trim())?;
    assert_eq!(config["docker"]["image_tag"], "demo:latest");
    Ok(())
}

#[test]
fn config_schema_prints_json_schema() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("dashboard:\n  port: 0\n");

    envsync(&temp)
        .args(["config", "--schema"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"dashboard\""))
        .stdout(predicate::str::contains("\"properties\""));
    Ok(())
}

#[test]
fn dockerfile_command_writes_only_dockerfile() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("docker:\n  base_image: ubuntu:24.04\n");

    envsync(&temp)
        .arg("dockerfile")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dockerfile generated"));

    let dockerfile = fs::read_to_string(temp.path().join("Dockerfile"))?;
    assert!(dockerfile.contains("FROM ubuntu:24.04"));
    assert!(!temp.path().join("envsync_report.json").exists());
    Ok(())
}

#[test]
fn quiet_scan_prints_results_only() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    envsync(&temp)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("JSON report saved to"))
        .stdout(predicate::str::contains("System:").not())
        .stdout(predicate::str::contains("Scanning environment").not());

    assert!(temp.path().join("envsync_report.json").exists());
    Ok(())
}

#[test]
fn completions_generates_bash_script() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("envsync"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("envsync"));
    Ok(())
}
