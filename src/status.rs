use std::cell::Cell;

use tracing::warn;

/// Run-wide error bookkeeping. Non-fatal errors get printed as they happen
/// and leave a mark that forces a failing exit code even when every later
/// step succeeds.
#[derive(Debug, Default)]
pub struct Status {
    error_occurred: Cell<bool>,
}

impl Status {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prints the error to stderr and remembers that one occurred.
    pub fn report(&self, err: anyhow::Error) {
        warn!("{:#}", err);
        eprintln!("Error: {:#}", err);
        self.error_occurred.set(true);
    }

    pub fn error_occurred(&self) -> bool {
        self.error_occurred.get()
    }

    /// Folds the spawned shell's exit code with the recorded-error mark.
    /// A non-zero shell code wins; otherwise any recorded error turns the
    /// nominal success into a failure.
    pub fn exit_code(&self, shell_code: i32) -> i32 {
        if shell_code != 0 {
            shell_code
        } else if self.error_occurred.get() {
            1
        } else {
            0
        }
    }
}
