//! Tests config files that should parse fine.

use std::fs;

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{fake_tool, zmem_command};

#[test]
fn test_empty() {
    zmem_command(&["-C", "./tests/valid_configs/empty_config.toml", "--swap"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not implemented"))
        .stderr(predicate::str::contains("Configuration file error").not());
}

/// Points at the default tool locations, which only exist on zone hosts.
#[cfg(not(any(target_os = "illumos", target_os = "solaris")))]
#[test]
fn test_all_set() {
    zmem_command(&["-C", "./tests/valid_configs/all_set.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not find '/usr/bin/zonename'"));
}

#[test]
fn test_tools_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let zonename = fake_tool(dir.path(), "zonename", "echo global");
    let prtconf = fake_tool(dir.path(), "prtconf", "echo 'Memory size: 32768 Megabytes'");

    let config_path = dir.path().join("zonemem.toml");
    fs::write(
        &config_path,
        format!(
            "[flags]\njson = true\n\n[tools]\nzonename = {:?}\nprtconf = {:?}\n",
            zonename.display().to_string(),
            prtconf.display().to_string(),
        ),
    )
    .unwrap();

    zmem_command(&["-C", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""total": 32768"#));
}
