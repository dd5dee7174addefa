//! Process runner errors.

use std::path::PathBuf;

/// Failures of the runner itself.
///
/// A command the shell cannot find or execute is not an error here: the
/// shell reports it on the inherited stderr and exits nonzero, and that
/// status is returned like any other.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Failed to start shell '{}': {source}", .shell.display())]
    Spawn {
        shell: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to wait for child process: {0}")]
    Wait(#[source] std::io::Error),
}
