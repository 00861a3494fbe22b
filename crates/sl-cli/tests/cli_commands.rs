//! Integration tests for the `securelogin` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn securelogin() -> Command {
    Command::cargo_bin("securelogin").unwrap()
}

fn walkthrough_input() -> String {
    let mut input = String::from("me@example.com\n");
    for _ in 0..10 {
        input.push_str("1\n");
    }
    input.push_str("I agree\nn\n");
    input
}

#[test]
fn help_lists_commands() {
    securelogin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("questions"))
        .stdout(predicate::str::contains("play"));
}

#[test]
fn questions_prints_classic_lineup() {
    securelogin()
        .arg("questions")
        .assert()
        .success()
        .stdout(predicate::str::contains("What was the name of your first pet?"))
        .stdout(predicate::str::contains("10 questions (classic lineup)"));
}

#[test]
fn questions_with_seed() {
    securelogin()
        .args(["questions", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10 questions (seed 7)"))
        .stdout(predicate::str::contains("[PET_NAME]").not());
}

#[test]
fn play_walks_to_the_final_screen() {
    securelogin()
        .args(["play", "--fast", "--quip-seed", "3"])
        .write_stdin(walkthrough_input())
        .assert()
        .success()
        .stdout(predicate::str::contains("Searching for your account..."))
        .stdout(predicate::str::contains("Question 10 of 10"))
        .stdout(predicate::str::contains("Finalizing your verification..."))
        .stdout(predicate::str::contains("never had an account here"));
}

#[test]
fn play_substitutes_pet_name() {
    let mut input = String::from("me@example.com\nBiscuit\n");
    for _ in 0..4 {
        input.push_str("1\n");
    }
    input.push_str("quit\n");

    securelogin()
        .args(["play", "--fast"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Biscuit"))
        .stdout(predicate::str::contains("[PET_NAME]").not());
}

#[test]
fn play_requires_email() {
    securelogin()
        .args(["play", "--fast"])
        .write_stdin("\n\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("please enter your email address"));
}

#[test]
fn unknown_command_fails() {
    securelogin().arg("hack").assert().failure();
}

#[test]
fn bad_port_is_rejected() {
    securelogin()
        .args(["serve", "--port", "not-a-port"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
