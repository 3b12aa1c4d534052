// Container engine invocation: argument assembly and the blocking child run.

pub mod args;
pub mod run;
pub mod types;

pub use args::{assemble, mount_value};
pub use run::{InvokeError, invoke};
pub use types::ContainerCommand;
