//! Integration tests for weekly statistics and the challenge

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{add_at, init_journal, moodlog_cmd};

fn journal_with_week() -> TempDir {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    add_at(temp.path(), "happy", "2024-06-10T09:00:00", "");
    add_at(temp.path(), "sad", "2024-06-10T21:00:00", "");
    add_at(temp.path(), "very_happy", "2024-06-12T12:00:00", "");
    // Previous week, must not be counted
    add_at(temp.path(), "happy", "2024-06-09T23:59:59", "");
    temp
}

#[test]
fn test_week_counts_and_calendar() {
    let temp = journal_with_week();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["week", "2024-06-13"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Week 2024-06-10 ~ 2024-06-16"))
        .stdout(predicate::str::contains("Emotion counts (3 entries)"))
        .stdout(predicate::str::contains("Mon 06/10  😢 Sad"))
        .stdout(predicate::str::contains("Tue 06/11  -"))
        .stdout(predicate::str::contains("Wed 06/12  😊 Very good"))
        .stdout(predicate::str::contains("Challenge: 2 / 3 positive entries"))
        .stdout(predicate::str::contains("Keep going!"));

    assert!(!temp.path().join(".moodlog/session.toml").exists());
}

#[test]
fn test_week_accepts_weekday_words() {
    let temp = journal_with_week();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["week", "last", "monday"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Week "));

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["week", "someday"])
        .assert()
        .code(3);
}

#[test]
fn test_challenge_announced_once_per_week() {
    let temp = journal_with_week();
    add_at(temp.path(), "happy", "2024-06-16T10:00:00", "");

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["week", "2024-06-13"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Challenge: 3 / 3 positive entries"))
        .stdout(predicate::str::contains("Congratulations"));

    let session = fs::read_to_string(temp.path().join(".moodlog/session.toml")).unwrap();
    assert!(session.contains("announced_weeks = [\"2024-06-10\"]"));

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["week", "2024-06-13"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already completed"))
        .stdout(predicate::str::contains("Congratulations").not());

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["challenge", "--reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Challenge reset"));

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["week", "2024-06-13"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Congratulations"));
}

#[test]
fn test_lower_goal_completes_challenge() {
    let temp = journal_with_week();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["config", "goal", "2"])
        .assert()
        .success();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["week", "2024-06-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Challenge: 2 / 2 positive entries"))
        .stdout(predicate::str::contains("Congratulations"));
}

#[test]
fn test_viewing_other_weeks_keeps_earlier_announcement() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    moodlog_cmd()
        .current_dir(temp.path())
        .args(["config", "goal", "1"])
        .assert()
        .success();
    add_at(temp.path(), "happy", "2024-06-11T09:00:00", "");
    add_at(temp.path(), "happy", "2024-06-18T09:00:00", "");

    for (day, expected) in [
        ("2024-06-12", "Congratulations"),
        ("2024-06-19", "Congratulations"),
        ("2024-06-12", "already completed"),
        ("2024-06-19", "already completed"),
    ] {
        moodlog_cmd()
            .current_dir(temp.path())
            .args(["week", day])
            .assert()
            .success()
            .stdout(predicate::str::contains(expected));
    }
}

#[test]
fn test_week_at_calendar_end_is_rejected() {
    let temp = journal_with_week();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["week", "+262142-12-31"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid time reference"));

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["export", "summary", "+262142-12-31"])
        .assert()
        .code(3);
}

#[test]
fn test_challenge_without_reset_is_usage_error() {
    let temp = journal_with_week();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("challenge")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--reset"));
}
