use crate::env::MergedEnvironment;

/// One engine invocation. `args` is passed verbatim to `program`; `env` is
/// applied on top of the environment the child inherits.
#[derive(Debug, Clone)]
pub struct ContainerCommand {
    pub program: String,
    pub args: Vec<String>,
    pub env: MergedEnvironment,
}

impl ContainerCommand {
    /// Shell-quoted rendering, for diagnostics only.
    pub fn display(&self) -> String {
        let mut words = Vec::with_capacity(self.args.len() + 1);
        words.push(self.program.as_str());
        words.extend(self.args.iter().map(String::as_str));
        shell_words::join(words)
    }
}
