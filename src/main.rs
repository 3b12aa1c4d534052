use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use dockerops::cli::Args;
use dockerops::config::ExecutableDir;
use dockerops::{LaunchRequest, launch};

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(args: Args) -> Result<()> {
    let request = LaunchRequest::from(args);
    launch(&request, &ExecutableDir)?;
    Ok(())
}

/// `RUST_LOG` wins; otherwise `-v` switches from warnings to debug output.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "dockerops=debug" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<dockerops::Error>()
        .map(dockerops::Error::exit_code)
        .unwrap_or(1)
}
