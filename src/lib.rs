//! Launch a container engine with bind mounts and environment variables
//! declared in `dockerops.yml`, plus per-invocation `-e` overrides.

pub mod cli;
pub mod config;
pub mod docker;
pub mod env;
pub mod error;
pub mod launcher;

pub use error::{Error, Result};
pub use launcher::{LaunchRequest, launch};
