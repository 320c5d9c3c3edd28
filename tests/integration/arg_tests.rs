//! These tests are mostly here just to ensure that invalid results will be
//! caught when passing arguments.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{no_cfg_zmem_command, zmem_command};

#[test]
fn test_help() {
    zmem_command(&["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tool Options"))
        .stdout(predicate::str::contains("--zonememstat"));
}

#[test]
fn test_version() {
    zmem_command(&["-V"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_arg() {
    no_cfg_zmem_command()
        .arg("--kstat")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_relative_tool_path() {
    no_cfg_zmem_command()
        .arg("--zonename")
        .arg("zonename")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--zonename' was set with an invalid value",
        ));
}

#[test]
fn test_swap_is_not_implemented() {
    no_cfg_zmem_command()
        .arg("--swap")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not implemented"));
}
