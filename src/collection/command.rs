//! Running external tools.
//!
//! Collection on some platforms has to shell out to system utilities, so this
//! is split behind [`CommandRunner`] to let tests hand back fixture output
//! instead of depending on the host's tools.

use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use crate::collection::error::{CollectionError, CollectionResult};

/// Something that can locate and run external tools.
pub trait CommandRunner {
    /// Checks that the tool at `path` exists and can be run, returning the
    /// path to invoke.
    fn find_tool(&self, path: &Path) -> CollectionResult<PathBuf>;

    /// Runs `tool` with `args` and returns whatever it wrote to stdout.
    fn run(&self, tool: &Path, args: &[&str]) -> CollectionResult<Vec<u8>>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn find_tool(&self, path: &Path) -> CollectionResult<PathBuf> {
        (**self).find_tool(path)
    }

    fn run(&self, tool: &Path, args: &[&str]) -> CollectionResult<Vec<u8>> {
        (**self).run(tool, args)
    }
}

/// A [`CommandRunner`] that spawns real child processes and blocks until they
/// finish.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn find_tool(&self, path: &Path) -> CollectionResult<PathBuf> {
        let metadata = fs::metadata(path).map_err(|_| CollectionError::tool_not_found(path))?;

        if !metadata.is_file() || !is_executable(&metadata) {
            return Err(CollectionError::tool_not_found(path));
        }

        Ok(path.to_path_buf())
    }

    fn run(&self, tool: &Path, args: &[&str]) -> CollectionResult<Vec<u8>> {
        log::debug!("running {} {args:?}", tool.display());

        let output = Command::new(tool)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|err| CollectionError::spawn(tool, err))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();

            let reason = if stderr.is_empty() {
                format!("exited with {}", output.status)
            } else {
                format!("exited with {}: {stderr}", output.status)
            };

            return Err(CollectionError::execution(tool, reason));
        }

        Ok(output.stdout)
    }
}

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        fn is_executable(metadata: &fs::Metadata) -> bool {
            use std::os::unix::fs::PermissionsExt;

            metadata.permissions().mode() & 0o111 != 0
        }
    } else {
        fn is_executable(_metadata: &fs::Metadata) -> bool {
            true
        }
    }
}
