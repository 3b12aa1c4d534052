use tracing::debug;

use crate::config::{Parameters, Volume};

/// `--mount` value for a bind mount. `None` when either path is blank.
pub fn mount_value(volume: &Volume) -> Option<String> {
    let (local, container) = volume.paths()?;
    let mut value = format!("type=bind,source={local},target={container}");
    if volume.rw == Some(false) {
        value.push_str(",readonly");
    }
    Some(value)
}

/// Build the engine argument list:
/// `run --platform <platform> [--mount <value>]... <image> "<call joined>"`.
///
/// The call tokens are joined with single spaces into one argument so the
/// image entrypoint receives them as a single string. Environment variables
/// are not emitted here; they travel through the child's environment.
pub fn assemble<S: AsRef<str>>(params: &Parameters, call: &[S]) -> Vec<String> {
    let mut args = Vec::with_capacity(params.volumes.len() * 2 + 5);
    args.extend([
        "run".to_string(),
        "--platform".to_string(),
        params.platform.clone(),
    ]);

    for volume in &params.volumes {
        match mount_value(volume) {
            Some(value) => {
                args.push("--mount".to_string());
                args.push(value);
            }
            None => debug!(
                local = %volume.local,
                container = %volume.container,
                "skipping volume with blank path"
            ),
        }
    }

    let call: Vec<&str> = call.iter().map(|token| token.as_ref()).collect();
    args.push(params.image.clone());
    args.push(call.join(" "));
    args
}
