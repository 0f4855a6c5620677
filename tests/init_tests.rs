//! Integration tests for init and config commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_workspace, storekeep_cmd, storekeep_in};

#[test]
fn test_init_creates_config_and_data_files() {
    let temp = TempDir::new().unwrap();

    storekeep_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized storekeep workspace"))
        .stdout(predicate::str::contains("Seeded starter data"));

    assert!(temp.path().join(".storekeep/config.toml").exists());
    for file in [
        "hospital_data.json",
        "inventory_data.json",
        "finance_data.json",
        "atm_data.json",
        "library_data.json",
    ] {
        assert!(temp.path().join(file).exists(), "{} missing", file);
    }

    let inventory = fs::read_to_string(temp.path().join("inventory_data.json")).unwrap();
    assert!(inventory.contains("Laptop Pro"));
    assert!(inventory.contains("\n    \"products\""));
}

#[test]
fn test_init_empty_writes_skeletons() {
    let temp = TempDir::new().unwrap();

    storekeep_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--empty")
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded").not());

    storekeep_in(temp.path())
        .args(["hospital", "doctors"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No doctors are currently registered"));
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    init_workspace(temp.path(), false);

    storekeep_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_config_get_default_file() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path(), true);

    storekeep_in(temp.path())
        .args(["config", "files.inventory"])
        .assert()
        .success()
        .stdout("inventory_data.json\n");
}

#[test]
fn test_config_set_then_get() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path(), true);

    storekeep_in(temp.path())
        .args(["config", "weather.max_retries", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set weather.max_retries = 5"));

    storekeep_in(temp.path())
        .args(["config", "weather.max_retries"])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn test_config_list_shows_every_key() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path(), true);

    storekeep_in(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("created = "))
        .stdout(predicate::str::contains("files.atm = atm_data.json"))
        .stdout(predicate::str::contains("weather.initial_delay_ms = 1000"));
}

#[test]
fn test_config_created_is_read_only() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path(), true);

    storekeep_in(temp.path())
        .args(["config", "created", "2020-01-01T00:00:00Z"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("read-only"));
}

#[test]
fn test_config_unknown_key_fails() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path(), true);

    storekeep_in(temp.path())
        .args(["config", "files.unknown"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_commands_find_workspace_from_subdirectory() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path(), false);
    let nested = temp.path().join("a/b");
    fs::create_dir_all(&nested).unwrap();

    storekeep_in(&nested)
        .args(["library", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Great Gatsby"));
}

#[test]
fn test_root_env_points_at_workspace() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    init_workspace(temp.path(), false);

    storekeep_in(elsewhere.path())
        .env("STOREKEEP_ROOT", temp.path())
        .args(["inventory", "stock"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wireless Mouse"));
}

#[test]
fn test_outside_workspace_fails_with_suggestion() {
    let temp = TempDir::new().unwrap();

    storekeep_in(temp.path())
        .args(["finance", "summary"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("storekeep init"));
}
