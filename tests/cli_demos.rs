#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn patternz_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("patternz").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--no-wait")
        .arg("--config-dir")
        .arg(config_dir.path());
    cmd
}

#[test]
fn test_customers_demo() {
    let temp = TempDir::new().unwrap();
    patternz_cmd(&temp)
        .arg("customers")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Jim Jones\nSamual Jackson\nAllen Good\nLisa Giolani\nHenry Velasquez\n",
        ))
        .stdout(predicate::str::contains("Customer Group: Chicago"))
        .stdout(predicate::str::contains(" Henry Velasquez\n------------------------"));
}

#[test]
fn test_customers_group_flag() {
    let temp = TempDir::new().unwrap();
    patternz_cmd(&temp)
        .args(["customers", "--group", "Boston"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Customer Group: Boston"));
}

#[test]
fn test_vehicles_demo_order() {
    let temp = TempDir::new().unwrap();
    let assert = patternz_cmd(&temp).arg("vehicles").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let order: Vec<usize> = ["Scooter", "Car", "MotorCycle", "Bus"]
        .iter()
        .map(|t| stdout.find(&format!("Vehicle Type: {}\n", t)).unwrap())
        .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]));
    assert!(stdout.contains(" Engine : 2500 cc"));
}

#[test]
fn test_vehicles_only() {
    let temp = TempDir::new().unwrap();
    patternz_cmd(&temp)
        .args(["vehicles", "--only", "bus"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vehicle Type: Bus"))
        .stdout(predicate::str::contains(" #Doors : 2"))
        .stdout(predicate::str::contains("Car").not());
}

#[test]
fn test_no_subcommand_runs_customers_then_vehicles() {
    let temp = TempDir::new().unwrap();
    let assert = patternz_cmd(&temp).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let customers = stdout.find("Customer Group: Chicago").unwrap();
    let vehicles = stdout.find("Vehicle Type: Scooter").unwrap();
    assert!(customers < vehicles);
    assert!(stdout.starts_with("Jim Jones\n"));
}

#[test]
fn test_empty_vehicles_config_assembles_defaults() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.json"), r#"{"vehicles":[]}"#).unwrap();
    patternz_cmd(&temp)
        .arg("vehicles")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vehicle Type: Scooter"))
        .stdout(predicate::str::contains("Vehicle Type: Bus"));
}

#[test]
fn test_config_set_changes_demo() {
    let temp = TempDir::new().unwrap();
    patternz_cmd(&temp)
        .args(["config", "group", "Denver"])
        .assert()
        .success()
        .stdout(predicate::str::contains("group set to Denver"));

    patternz_cmd(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("group = Denver"))
        .stdout(predicate::str::contains("pause = true"));

    patternz_cmd(&temp)
        .arg("customers")
        .assert()
        .success()
        .stdout(predicate::str::contains("Customer Group: Denver"));
}

#[test]
fn test_corrupt_config_fails() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.json"), "{ not json").unwrap();
    patternz_cmd(&temp)
        .arg("customers")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: Serialization error"));
}
