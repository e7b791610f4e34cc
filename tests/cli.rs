// ABOUTME: Integration tests for the kcloud CLI commands.
// ABOUTME: Validates the pre-execution paths; no test here reaches the network.

use assert_cmd::Command;
use predicates::prelude::*;

/// Binary invocation with the ambient KraftCloud environment scrubbed.
fn kcloud_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("kcloud"));
    cmd.env_remove("KRAFTCLOUD_METRO")
        .env_remove("KRAFTCLOUD_USER")
        .env_remove("KRAFTCLOUD_TOKEN")
        .env_remove("KRAFTCLOUD_CONFIG");
    cmd
}

#[test]
fn rm_without_target_fails() {
    kcloud_cmd()
        .args(["img", "rm", "--metro", "fra0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "either specify an image name, or use the --all flag",
        ));
}

#[test]
fn rm_without_metro_fails() {
    kcloud_cmd()
        .args(["img", "rm", "my-image"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("kraftcloud metro is unset"));
}

#[test]
fn rm_all_without_metro_fails() {
    kcloud_cmd()
        .args(["img", "rm", "--all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("kraftcloud metro is unset"));
}

#[test]
fn rm_reads_metro_from_environment() {
    // Passes validation via the env fallback, then fails on credential
    // resolution (pointed at a config file that does not exist).
    kcloud_cmd()
        .args(["img", "rm", "my-image"])
        .env("KRAFTCLOUD_METRO", "was1")
        .env("KRAFTCLOUD_CONFIG", "/nonexistent/kraftcloud.yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not retrieve credentials"));
}

#[test]
fn rm_is_available_under_its_aliases() {
    for alias in ["delete", "del", "remove"] {
        kcloud_cmd()
            .args(["img", alias, "--metro", "fra0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains(
                "either specify an image name, or use the --all flag",
            ));
    }
}

#[test]
fn ls_without_metro_fails() {
    kcloud_cmd()
        .args(["img", "ls"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("kraftcloud metro is unset"));
}

#[test]
fn img_help_shows_commands() {
    kcloud_cmd()
        .args(["img", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rm"))
        .stdout(predicate::str::contains("ls"));
}
