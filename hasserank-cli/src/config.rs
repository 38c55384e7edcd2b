/// Config file loading and creation for the hasserank CLI.
///
/// Config lives at ~/.config/hasserank/config.toml.
/// All fields are optional — CLI args override config values.
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::bail;

#[derive(Deserialize, Default)]
pub struct HasserankConfig {
    /// Max comparisons shown per prompt.
    pub limit: Option<usize>,
    /// Directory holding persisted session files.
    pub data_dir: Option<String>,
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# hasserank configuration
# All values here can be overridden by CLI flags.

# Max comparisons shown per prompt
# limit = 5

# Directory for persisted session files (default: current directory)
# data_dir = \"~/.local/share/hasserank\"
";

/// Returns the default config path: ~/.config/hasserank/config.toml
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| bail("cannot locate config: HOME is not set"));
    [home.as_str(), ".config", "hasserank", "config.toml"].iter().collect()
}

/// Load config from a file path. A missing file is fine (all defaults);
/// an unreadable or unparseable one is not.
pub fn load_config(path: &Path) -> HasserankConfig {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return HasserankConfig::default(),
        Err(e) => bail(format!("Cannot read config {}: {e}", path.display())),
    };
    toml::from_str(&content)
        .unwrap_or_else(|e| bail(format!("Bad TOML in {}: {e}", path.display())))
}

/// Create the default config file. Refuses to clobber an existing one.
pub fn create_default_config() -> PathBuf {
    let path = config_path();

    if path.exists() {
        bail(format!("Refusing to overwrite existing config at {}", path.display()));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| bail(format!("Cannot create {}: {e}", parent.display())));
    }
    std::fs::write(&path, DEFAULT_CONFIG_TEMPLATE)
        .unwrap_or_else(|e| bail(format!("Cannot write {}: {e}", path.display())));

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config(&dir.path().join("nope.toml"));
        assert!(cfg.limit.is_none());
        assert!(cfg.data_dir.is_none());
    }

    #[test]
    fn test_load_config_parses_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "limit = 3\ndata_dir = \"/tmp/sessions\"\n").unwrap();

        let cfg = load_config(&path);
        assert_eq!(cfg.limit, Some(3));
        assert_eq!(cfg.data_dir.as_deref(), Some("/tmp/sessions"));
    }

    #[test]
    fn test_default_template_is_valid_toml() {
        let cfg: HasserankConfig = toml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert!(cfg.limit.is_none(), "template must only carry commented-out values");
    }
}
