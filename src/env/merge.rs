use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::config::Parameters;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvError {
    #[error("malformed environment override `{token}`: expected KEY=VALUE")]
    MalformedEnvArg { token: String },
}

/// Where a variable assignment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvSource {
    File,
    Cli,
}

impl EnvSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvSource::File => "file",
            EnvSource::Cli => "cli",
        }
    }
}

impl fmt::Display for EnvSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variables the child runs with, on top of the inherited environment.
///
/// `vars` holds the final value per key. `assignments` keeps every write in
/// the order it happened, including ones later overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedEnvironment {
    vars: BTreeMap<String, String>,
    assignments: Vec<(EnvSource, String, String)>,
}

impl MergedEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing any earlier value.
    pub fn set(&mut self, source: EnvSource, key: &str, value: &str) {
        debug!(%source, key, value, "set environment variable");
        self.vars.insert(key.to_string(), value.to_string());
        self.assignments
            .push((source, key.to_string(), value.to_string()));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn assignments(&self) -> &[(EnvSource, String, String)] {
        &self.assignments
    }
}

/// Split raw `-e` occurrences into `(key, value)` pairs, in command-line order.
///
/// Each occurrence may hold several comma-separated `KEY=VALUE` tokens. The
/// value is everything after the first `=`, so `A=b=c` sets `A` to `b=c`.
/// Blank tokens left by stray commas are ignored.
pub fn parse_overrides<S: AsRef<str>>(values: &[S]) -> Result<Vec<(String, String)>, EnvError> {
    let mut pairs = Vec::new();
    for value in values {
        let value: &str = value.as_ref();
        for token in value.split(',') {
            if token.trim().is_empty() {
                continue;
            }
            let Some((key, val)) = token.split_once('=') else {
                return Err(EnvError::MalformedEnvArg {
                    token: token.to_string(),
                });
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(EnvError::MalformedEnvArg {
                    token: token.to_string(),
                });
            }
            pairs.push((key.to_string(), val.trim().to_string()));
        }
    }
    Ok(pairs)
}

/// Fold file variables, then CLI overrides, into one environment.
///
/// Later writes win: the file beats the inherited environment, the CLI beats
/// the file, and a later CLI token beats an earlier one.
pub fn merge<S: AsRef<str>>(
    params: &Parameters,
    overrides: &[S],
) -> Result<MergedEnvironment, EnvError> {
    // Parse first so a bad token leaves nothing half-applied.
    let cli = parse_overrides(overrides)?;

    let mut merged = MergedEnvironment::new();
    for pair in &params.env {
        match pair.entry() {
            Some((key, value)) => merged.set(EnvSource::File, key, value),
            None => debug!(key = %pair.key, "skipping blank environment entry"),
        }
    }
    for (key, value) in &cli {
        merged.set(EnvSource::Cli, key, value);
    }
    Ok(merged)
}
