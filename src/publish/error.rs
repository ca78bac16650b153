// Failure of an external container-tool invocation.

use std::fmt;
use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Which of the two sequential steps was running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Build,
    Push,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Build => f.write_str("build"),
            Step::Push => f.write_str("push"),
        }
    }
}

/// The only error class a run can end with: the external tool either
/// exited non-zero or could not be started. The tool's own output is the
/// diagnostic; nothing is added beyond the step and status.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("{container_cli} {step} failed with status: {status}")]
    ToolFailed {
        step: Step,
        container_cli: String,
        status: ExitStatus,
    },

    #[error("Failed to execute {container_cli} {step}")]
    Spawn {
        step: Step,
        container_cli: String,
        #[source]
        source: io::Error,
    },
}

impl PublishError {
    /// Exit code to propagate: the failing tool's own code when it has
    /// one, otherwise 1 (killed by a signal, or never started).
    pub fn exit_code(&self) -> u8 {
        match self {
            PublishError::ToolFailed { status, .. } => status
                .code()
                .and_then(|code| u8::try_from(code).ok())
                .unwrap_or(1),
            PublishError::Spawn { .. } => 1,
        }
    }
}
