//! Crate-level error type and exit code mapping.

use thiserror::Error;

use crate::config::ConfigError;
use crate::docker::InvokeError;
use crate::env::EnvError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to locate the running executable")]
    ExecutablePath(#[source] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Env(#[from] EnvError),

    #[error(transparent)]
    Invoke(#[from] InvokeError),
}

impl Error {
    /// Process exit status for this failure: 1 for setup errors, the
    /// engine's own code when it exited non-zero with one, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Invoke(err) => match err.exit_code() {
                Some(code) if (1..=255).contains(&code) => code as u8,
                _ => 1,
            },
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn config_errors_exit_one() {
        let err = Error::from(ConfigError::NotFound {
            path: PathBuf::from("/nope.yml"),
        });
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "could not find config file at /nope.yml");
    }

    #[test]
    fn malformed_env_exits_one() {
        let err = Error::from(EnvError::MalformedEnvArg {
            token: "FOO".into(),
        });
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn spawn_failure_exits_one() {
        let err = Error::from(InvokeError::Spawn {
            program: "docker".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
        assert_eq!(err.exit_code(), 1);
    }
}
