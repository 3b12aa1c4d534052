use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;
use tracing::{debug, info};

use super::types::ContainerCommand;

#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("failed to start `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` failed with {status}")]
    Failed { program: String, status: ExitStatus },
}

impl InvokeError {
    /// The child's exit code, when it exited on its own with one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            InvokeError::Spawn { .. } => None,
            InvokeError::Failed { status, .. } => status.code(),
        }
    }
}

/// Run the engine and block until it exits.
///
/// stdin, stdout and stderr are inherited, so the child's output reaches the
/// terminal unbuffered and in the order it was written. The merged variables
/// are layered over the inherited environment of the child only.
pub fn invoke(cmd: &ContainerCommand) -> Result<(), InvokeError> {
    info!(command = %cmd.display(), "launching");

    let status = Command::new(&cmd.program)
        .args(&cmd.args)
        .envs(cmd.env.iter())
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| InvokeError::Spawn {
            program: cmd.program.clone(),
            source,
        })?;

    debug!(%status, "engine exited");
    if !status.success() {
        return Err(InvokeError::Failed {
            program: cmd.program.clone(),
            status,
        });
    }
    Ok(())
}
