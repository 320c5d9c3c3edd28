//! These tests are for testing some invalid config-file-specific options.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::zmem_command;

#[test]
fn test_toml_mismatch_type() {
    zmem_command(&["-C", "./tests/invalid_configs/toml_mismatch_type.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid type"));
}

#[test]
fn test_unknown_tool() {
    zmem_command(&["-C", "./tests/invalid_configs/unknown_tool.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown field"));
}

/// This test isn't really needed as this is technically covered by TOML spec.
/// However, I feel like it's worth checking anyways - not like it takes long.
#[test]
fn test_duplicate_flag() {
    zmem_command(&["-C", "./tests/invalid_configs/duplicate_flag.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate key"));
}

#[test]
fn test_relative_tool_path() {
    zmem_command(&["-C", "./tests/invalid_configs/relative_tool_path.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'tools.prtconf' was set with an invalid value",
        ));
}

#[test]
fn test_missing_config_file() {
    zmem_command(&["-C", "./tests/invalid_configs/does_not_exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not read the config file"));
}
