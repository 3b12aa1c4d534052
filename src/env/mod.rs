// Environment merge: file-defined variables overlaid by `-e` overrides.

mod merge;

pub use merge::{EnvError, EnvSource, MergedEnvironment, merge, parse_overrides};
