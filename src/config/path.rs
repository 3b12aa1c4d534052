use std::path::{Component, Path, PathBuf};

/// File looked up next to the running executable when `-c` is not given.
pub const CONFIG_FILE_NAME: &str = "dockerops.yml";

/// Supplies the directory holding the default config file.
pub trait DefaultPathProvider {
    fn config_dir(&self) -> std::io::Result<PathBuf>;
}

/// Directory of the running executable.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecutableDir;

impl DefaultPathProvider for ExecutableDir {
    fn config_dir(&self) -> std::io::Result<PathBuf> {
        let exe = std::env::current_exe()?;
        Ok(exe
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")))
    }
}

/// A fixed directory, for tests and embedding.
#[derive(Debug, Clone)]
pub struct FixedDir(pub PathBuf);

impl DefaultPathProvider for FixedDir {
    fn config_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.0.clone())
    }
}

/// Pick the config path: the explicit one, or `dockerops.yml` in the
/// provider's directory. The result is lexically cleaned.
pub fn resolve(
    explicit: Option<&Path>,
    provider: &dyn DefaultPathProvider,
) -> std::io::Result<PathBuf> {
    let path = match explicit {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => provider.config_dir()?.join(CONFIG_FILE_NAME),
    };
    Ok(clean(&path))
}

/// Lexical cleanup: drop `.` segments and fold `..` into its parent.
/// Leading `..` on a relative path is kept.
pub fn clean(path: &Path) -> PathBuf {
    let mut out: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}
