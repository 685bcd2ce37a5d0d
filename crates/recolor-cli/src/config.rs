//! CLI configuration.

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV: &str = "RECOLOR_CONFIG";

/// CLI configuration loaded from file, with built-in defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Largest vertex count drawn by `stress`, and the default for `generate`.
    pub max_vertices: usize,
    /// Default edge probability for generated instances.
    pub edge_probability: f64,
    /// Default number of batch workers (None = one per core).
    pub workers: Option<usize>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            max_vertices: 1000,
            edge_probability: 0.5,
            workers: None,
        }
    }
}

impl CliConfig {
    /// Loads configuration from `$RECOLOR_CONFIG`, else
    /// `~/.recolor/config.json` if it exists, else defaults.
    pub fn load() -> anyhow::Result<Self> {
        match Self::locate() {
            Some(path) => Self::from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a JSON file.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    fn locate() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        let home = std::env::var_os("HOME")?;
        let path = PathBuf::from(home).join(".recolor").join("config.json");
        path.exists().then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "max_vertices": 42 }}"#).unwrap();

        let config = CliConfig::from_path(file.path()).unwrap();
        assert_eq!(config.max_vertices, 42);
        assert_eq!(config.edge_probability, 0.5);
        assert_eq!(config.workers, None);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "max_vertex": 42 }}"#).unwrap();
        assert!(CliConfig::from_path(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(CliConfig::from_path(&dir.path().join("nope.json")).is_err());
    }
}
