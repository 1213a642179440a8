use predicates::prelude::*;
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

use test_helpers::base_whispers_command;

#[test]
#[serial]
fn test_cli_exit_immediately() {
    let temp_dir = tempdir().unwrap();

    base_whispers_command(temp_dir.path())
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Whispers - A Personal Archive"))
        .stdout(predicate::str::contains("Exiting Whispers. Your words are preserved."));

    assert!(temp_dir.path().join("whispers.db").exists());
}

#[test]
#[serial]
fn test_cli_entries_survive_between_runs() {
    let temp_dir = tempdir().unwrap();

    base_whispers_command(temp_dir.path())
        .write_stdin("1\nHello world\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry saved successfully."));

    base_whispers_command(temp_dir.path())
        .write_stdin("3\nworld\n2\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("--- 1 Entry Found ---"))
        .stdout(predicate::str::contains("--- Random Entry ---"))
        .stdout(predicate::str::contains("Hello world"));
}

#[test]
#[serial]
fn test_cli_invalid_choice_then_exit() {
    let temp_dir = tempdir().unwrap();

    base_whispers_command(temp_dir.path())
        .write_stdin("9\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice. Please select 1-4."));
}

#[test]
#[serial]
fn test_cli_closed_stdin_exits_cleanly() {
    let temp_dir = tempdir().unwrap();

    base_whispers_command(temp_dir.path())
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found."))
        .stdout(predicate::str::contains("Exiting Whispers."));
}

#[test]
#[serial]
fn test_cli_unavailable_archive_fails() {
    let temp_dir = tempdir().unwrap();
    // A directory where the archive file should be cannot be opened as a database.
    fs::create_dir(temp_dir.path().join("whispers.db")).unwrap();

    base_whispers_command(temp_dir.path())
        .write_stdin("4\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Archive unavailable at whispers.db"))
        .stderr(predicate::str::contains("StorageUnavailable").not());
}

#[test]
#[serial]
fn test_cli_logs_stay_off_stdout() {
    let temp_dir = tempdir().unwrap();

    base_whispers_command(temp_dir.path())
        .env("RUST_LOG", "debug")
        .write_stdin("1\nlogged\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting whispers").not())
        .stderr(predicate::str::contains("Starting whispers"));
}
