//! Control flow for one launch: locate and load the config, merge the
//! environment, assemble the engine arguments, run the engine.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::{self, DefaultPathProvider, Parameters};
use crate::docker::{self, ContainerCommand};
use crate::env;
use crate::error::{Error, Result};

/// What the command line asked for, independent of how it was parsed.
#[derive(Debug, Clone, Default)]
pub struct LaunchRequest {
    pub config: Option<PathBuf>,
    pub env: Vec<String>,
    pub call: Vec<String>,
}

impl From<crate::cli::Args> for LaunchRequest {
    fn from(args: crate::cli::Args) -> Self {
        Self {
            config: args.config,
            env: args.env,
            call: args.call,
        }
    }
}

/// Build the command without running it.
pub fn plan(params: &Parameters, request: &LaunchRequest) -> Result<ContainerCommand> {
    let env = env::merge(params, &request.env)?;
    let args = docker::assemble(params, &request.call);
    Ok(ContainerCommand {
        program: params.engine.clone(),
        args,
        env,
    })
}

/// Load the config for `request`, using `provider` for the default location.
pub fn load_config(
    request: &LaunchRequest,
    provider: &dyn DefaultPathProvider,
) -> Result<Parameters> {
    let path = config::resolve(request.config.as_deref(), provider).map_err(Error::ExecutablePath)?;
    info!(path = %path.display(), "config path");
    Ok(config::load(&path)?)
}

/// Resolve, load, merge, assemble, and run. Blocks until the engine exits.
pub fn launch(request: &LaunchRequest, provider: &dyn DefaultPathProvider) -> Result<()> {
    let params = load_config(request, provider)?;
    let cmd = plan(&params, request)?;
    debug!(variables = cmd.env.len(), arguments = cmd.args.len(), "assembled command");
    docker::invoke(&cmd)?;
    Ok(())
}

/// Shorthand for [`launch`] with an explicit config file.
pub fn launch_with_config(path: &Path, env: Vec<String>, call: Vec<String>) -> Result<()> {
    let request = LaunchRequest {
        config: Some(path.to_path_buf()),
        env,
        call,
    };
    launch(&request, &config::ExecutableDir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, EnvPair, FixedDir, Volume};

    fn sample_params() -> Parameters {
        Parameters {
            volumes: vec![Volume {
                local: "/a".into(),
                container: "/b".into(),
                rw: None,
            }],
            env: vec![EnvPair {
                key: "A".into(),
                value: "1".into(),
            }],
            ..Parameters::default()
        }
    }

    #[test]
    fn plan_combines_env_and_args() {
        let request = LaunchRequest {
            env: vec!["A=2".into()],
            call: vec!["build".into(), "all".into()],
            ..LaunchRequest::default()
        };
        let cmd = plan(&sample_params(), &request).unwrap();
        assert_eq!(cmd.program, "docker");
        assert_eq!(cmd.env.get("A"), Some("2"));
        assert_eq!(cmd.args.first().map(String::as_str), Some("run"));
        assert_eq!(cmd.args.last().map(String::as_str), Some("build all"));
        // Environment is not passed as engine flags.
        assert!(!cmd.args.iter().any(|a| a == "-e"));
    }

    #[test]
    fn plan_rejects_malformed_override() {
        let request = LaunchRequest {
            env: vec!["FOO".into()],
            ..LaunchRequest::default()
        };
        assert!(matches!(
            plan(&sample_params(), &request),
            Err(Error::Env(_))
        ));
    }

    #[test]
    fn default_config_comes_from_provider() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("dockerops.yml"),
            "volumes:\n  - local: /a\n    container: /b\n",
        )
        .unwrap();
        let provider = FixedDir(dir.path().to_path_buf());
        let params = load_config(&LaunchRequest::default(), &provider).unwrap();
        assert_eq!(params.volumes.len(), 1);
    }

    #[test]
    fn missing_config_stops_before_launch() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FixedDir(dir.path().to_path_buf());
        let err = launch(&LaunchRequest::default(), &provider).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::NotFound { .. })));
        assert_eq!(err.exit_code(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn engine_from_config_is_invoked() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ops.yml");
        std::fs::write(&path, "engine: \"false\"\n").unwrap();
        let err = launch_with_config(&path, Vec::new(), Vec::new()).unwrap_err();
        assert!(matches!(err, Error::Invoke(_)));
        assert_eq!(err.exit_code(), 1);
    }
}
