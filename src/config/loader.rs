use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::types::Parameters;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not find config file at {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Read and deserialize the config file at `path`.
///
/// Sequences keep their declaration order. Entries are not validated here;
/// blank mounts and variables are dropped later, when they are used.
pub fn load(path: &Path) -> Result<Parameters, ConfigError> {
    // A failing stat counts as missing, same as a directory or socket.
    let is_file = std::fs::metadata(path).map(|m| m.is_file()).unwrap_or(false);
    if !is_file {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if contents.trim().is_empty() {
        debug!(path = %path.display(), "config file is empty, using defaults");
        return Ok(Parameters::default());
    }

    let params: Parameters =
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(
        path = %path.display(),
        volumes = params.volumes.len(),
        environment = params.env.len(),
        "loaded config"
    );
    Ok(params)
}
