use std::env;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

use crate::error::{Error, Result};

pub const SHELL_OVERRIDE_ENV: &str = "REPOHOP_SHELL";
pub const SHELL_ENV: &str = "SHELL";
pub const DEFAULT_SHELL: &str = "sh";

/// The shell to spawn: the override variable wins, then the login shell,
/// then a bare `sh`.
pub fn shell_executable() -> String {
    shell_from(env::var(SHELL_OVERRIDE_ENV).ok(), env::var(SHELL_ENV).ok())
}

fn shell_from(override_shell: Option<String>, login_shell: Option<String>) -> String {
    override_shell
        .or(login_shell)
        .unwrap_or_else(|| DEFAULT_SHELL.to_string())
}

/// Spawns `shell` in `dir` with the caller's stdio attached and waits for
/// it. The shell's own exit code is handed back; only a failure to launch
/// it at all is an error.
pub fn run_in(dir: &Path, shell: &str) -> Result<i32> {
    debug!("Spawning {} in {}", shell, dir.display());
    let exit = Command::new(shell)
        .current_dir(dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| Error::ShellLaunch {
            shell: shell.to_string(),
            source,
        })?;
    Ok(exit.code().unwrap_or(1))
}
