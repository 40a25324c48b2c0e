#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn moodlog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodlog").unwrap();
    cmd.env_remove("MOODLOG_ROOT");
    cmd.env_remove("MOODLOG_LOG");
    cmd
}

/// Initialize a journal in `dir`
pub fn init_journal(dir: &Path) {
    moodlog_cmd().arg("init").arg(dir).assert().success();
}

/// Record an entry at a fixed timestamp
pub fn add_at(dir: &Path, emotion: &str, at: &str, note: &str) {
    moodlog_cmd()
        .current_dir(dir)
        .args(["add", emotion, "--at", at, "--note", note])
        .assert()
        .success();
}
