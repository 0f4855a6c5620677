#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn storekeep_cmd() -> Command {
    let mut cmd = Command::cargo_bin("storekeep").unwrap();
    cmd.env_remove("STOREKEEP_ROOT");
    cmd.env_remove("STOREKEEP_LOG");
    cmd
}

/// Command running inside `dir`
pub fn storekeep_in(dir: &Path) -> Command {
    let mut cmd = storekeep_cmd();
    cmd.current_dir(dir);
    cmd
}

/// Initialize a workspace at `dir`, optionally without starter data
pub fn init_workspace(dir: &Path, empty: bool) {
    let mut cmd = storekeep_cmd();
    cmd.arg("init").arg(dir);
    if empty {
        cmd.arg("--empty");
    }
    cmd.assert().success();
}
