// Config file model, lookup, and loading.

mod loader;
mod path;
mod types;

pub use loader::{ConfigError, load};
pub use path::{CONFIG_FILE_NAME, DefaultPathProvider, ExecutableDir, FixedDir, clean, resolve};
pub use types::{DEFAULT_ENGINE, DEFAULT_IMAGE, DEFAULT_PLATFORM, EnvPair, Parameters, Volume};
