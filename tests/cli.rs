//! CLI Integration Tests
//!
//! Exercises the one-shot subcommands end to end through the compiled
//! binary, the same surface a package-manager smoke test asserts.

use assert_cmd::Command;
use predicates::prelude::*;

fn alltz() -> Command {
    Command::cargo_bin("alltz").expect("binary builds")
}

#[test]
fn version_prints_crate_version() {
    alltz()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn list_contains_major_cities() {
    alltz()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tokyo"))
        .stdout(predicate::str::contains("London"))
        .stdout(predicate::str::contains("Asia/Tokyo"));
}

#[test]
fn time_reports_the_requested_city() {
    alltz()
        .args(["time", "Tokyo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tokyo"))
        .stdout(predicate::str::contains("UTC+9"));
}

#[test]
fn time_accepts_aliases() {
    alltz()
        .args(["time", "NYC"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New York"));
}

#[test]
fn time_accepts_multi_word_cities() {
    alltz()
        .args(["time", "New", "York"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New York"));
}

#[test]
fn zone_reports_dst_details() {
    alltz()
        .args(["zone", "London"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Europe/London"))
        .stdout(predicate::str::contains("observes dst:  yes"));
}

#[test]
fn zone_for_fixed_offset_zone_has_no_transition() {
    alltz()
        .args(["zone", "Tokyo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("observes dst:  no"))
        .stdout(predicate::str::contains("none within a year"));
}

#[test]
fn unknown_city_fails_with_message() {
    alltz()
        .args(["time", "Atlantis"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Atlantis"));
}
