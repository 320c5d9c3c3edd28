use std::{
    env,
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
    process::Command,
};

/// Returns a canonical path if the path exists, otherwise the path as given.
pub fn abs_path(path: &str) -> OsString {
    let path = Path::new(path);

    if path.exists() {
        path.canonicalize().unwrap().into_os_string()
    } else {
        // We are going to trust that the path given is valid...
        path.to_owned().into_os_string()
    }
}

/// Returns a runner if the tests are being run through a target runner, e.g. when
/// cross-compiling for an illumos target and running under emulation.
fn target_runner() -> Option<String> {
    env::vars().find_map(|(k, v)| {
        (k.starts_with("CARGO_TARGET_") && k.ends_with("_RUNNER") && !v.is_empty()).then_some(v)
    })
}

const ZMEM_EXE_PATH: &str = env!("CARGO_BIN_EXE_zmem");
const DEFAULT_CFG: [&str; 2] = ["-C", "./tests/valid_configs/empty_config.toml"];

/// Returns the [`Command`] of a binary invocation of zmem, with the given args.
pub fn zmem_command(args: &[&str]) -> Command {
    let mut cmd = match target_runner() {
        None => Command::new(ZMEM_EXE_PATH),
        Some(runner) => {
            let mut parts = runner.split_ascii_whitespace();
            let mut cmd = Command::new(parts.next().unwrap());
            cmd.args(parts);
            cmd.arg(ZMEM_EXE_PATH);
            cmd
        }
    };

    let mut prev = "";
    for arg in args.iter() {
        if prev == "-C" {
            // This is the config file; make sure we set it to absolute path!
            cmd.arg(abs_path(arg));
        } else {
            cmd.arg(arg);
        }

        prev = arg;
    }

    cmd
}

/// Returns the [`Command`] of a binary invocation of zmem with the default, empty
/// config file.
pub fn no_cfg_zmem_command() -> Command {
    zmem_command(&DEFAULT_CFG)
}

/// Writes an executable shell script standing in for a system tool.
#[cfg(unix)]
pub fn fake_tool(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

    path
}
