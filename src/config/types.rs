use serde::Deserialize;

pub const DEFAULT_ENGINE: &str = "docker";
pub const DEFAULT_IMAGE: &str = "nanos:latest";
pub const DEFAULT_PLATFORM: &str = "linux/amd64";

/// One bind mount from the host into the container.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct Volume {
    pub local: String,
    pub container: String,
    /// `Some(false)` mounts read-only. Absent means the engine default.
    pub rw: Option<bool>,
}

impl Volume {
    /// Trimmed `(local, container)`, or `None` when either side is blank.
    pub fn paths(&self) -> Option<(&str, &str)> {
        let local = self.local.trim();
        let container = self.container.trim();
        if local.is_empty() || container.is_empty() {
            return None;
        }
        Some((local, container))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct EnvPair {
    pub key: String,
    pub value: String,
}

impl EnvPair {
    /// Trimmed `(key, value)`, or `None` when either side is blank.
    pub fn entry(&self) -> Option<(&str, &str)> {
        let key = self.key.trim();
        let value = self.value.trim();
        if key.is_empty() || value.is_empty() {
            return None;
        }
        Some((key, value))
    }
}

/// Everything read from `dockerops.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Parameters {
    pub volumes: Vec<Volume>,
    #[serde(rename = "environment")]
    pub env: Vec<EnvPair>,
    pub engine: String,
    pub image: String,
    pub platform: String,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            volumes: Vec::new(),
            env: Vec::new(),
            engine: DEFAULT_ENGINE.to_string(),
            image: DEFAULT_IMAGE.to_string(),
            platform: DEFAULT_PLATFORM.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn volume(local: &str, container: &str) -> Volume {
        Volume {
            local: local.into(),
            container: container.into(),
            rw: None,
        }
    }

    #[test]
    fn volume_paths_are_trimmed() {
        assert_eq!(volume("  /a ", "\t/b").paths(), Some(("/a", "/b")));
    }

    #[test]
    fn blank_volume_side_is_rejected() {
        assert_eq!(volume("   ", "/b").paths(), None);
        assert_eq!(volume("/a", "").paths(), None);
    }

    #[test]
    fn blank_env_value_is_rejected() {
        let pair = EnvPair {
            key: "HOME".into(),
            value: "  ".into(),
        };
        assert_eq!(pair.entry(), None);
    }

    #[test]
    fn defaults_match_nanos_image() {
        let params = Parameters::default();
        assert_eq!(params.engine, "docker");
        assert_eq!(params.image, "nanos:latest");
        assert_eq!(params.platform, "linux/amd64");
    }
}
