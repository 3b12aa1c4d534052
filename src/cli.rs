//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "dockerops")]
#[command(version, about = "Run a container with mounts and environment from dockerops.yml", long_about = None)]
pub struct Args {
    /// Config path; defaults to dockerops.yml next to the executable
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Environment override, repeatable; one occurrence may hold several comma-separated pairs
    #[arg(short = 'e', long = "env", value_name = "KEY=VALUE[,KEY=VALUE...]")]
    pub env: Vec<String>,

    /// Verbose diagnostics
    #[arg(short, long)]
    pub verbose: bool,

    /// Command passed to the container, joined with single spaces
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "CALL")]
    pub call: Vec<String>,
}
