#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn roll_scores() -> Command {
    let mut cmd = Command::cargo_bin("roll-scores").unwrap();
    cmd.env_remove("ROLL_METHOD")
        .env_remove("ROLL_VALIDATOR")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_six_labelled_scores() {
    let output = roll_scores().args(["--seed", "7"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 6);
    for (line, label) in lines.iter().zip(["STR", "DEX", "CON", "INT", "WIS", "CHA"]) {
        assert!(line.starts_with(label), "{line}");
    }
}

#[test]
fn same_seed_same_output() {
    let args = ["--seed", "42", "-m", "heroic", "-v", "gill-two"];
    let first = roll_scores().args(args).output().unwrap();
    let second = roll_scores().args(args).output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn plain_output_has_no_labels_or_dice() {
    roll_scores()
        .args(["--seed", "3", "-m", "classic", "--no-order", "--no-dice"])
        .assert()
        .success()
        .stdout(predicate::str::contains(":").not())
        .stdout(predicate::str::contains("[").not());
}

#[test]
fn method_from_environment() {
    roll_scores()
        .env("ROLL_METHOD", "3d6")
        .args(["--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(").count(6));
}

#[test]
fn unknown_method_is_rejected() {
    roll_scores()
        .args(["-m", "d20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown dice method"));
}

#[test]
fn unknown_validator_is_reported() {
    roll_scores()
        .args(["-v", "colvile"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown validator: colvile"));
}

#[test]
fn impossible_validator_gives_up() {
    roll_scores()
        .args(["-v", "at-least(1, 19)", "--max-attempts", "50", "--seed", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("rejected 50 candidate sets"));
}

#[test]
fn list_shows_methods_and_validators() {
    roll_scores()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("4d6k3"))
        .stdout(predicate::str::contains("gill-two"))
        .stdout(predicate::str::contains("sfc -> strict-filthy-casual"));
}

#[test]
fn count_rolls_several_characters() {
    let output = roll_scores().args(["-n", "3", "--seed", "9"]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(stdout.lines().filter(|line| line.starts_with("STR")).count(), 3);
}
