//! Run configuration, loaded from a TOML file with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::store::DEFAULT_TARGET_GRAPH;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyncConfig {
    /// Base IRI under which all minted resources live. Must end in / or #.
    pub base_namespace: String,
    /// Directory containing the export files.
    pub data_dir: PathBuf,
    /// Directory where baselines are kept.
    pub graph_dir: PathBuf,
    /// SPARQL Update API endpoint.
    pub endpoint: String,
    pub email: String,
    pub password: String,
    /// Named graph updates are applied to.
    pub target_graph: String,
    /// Maximum statements per update request.
    pub batch_size: usize,
    /// Label for the top-level institution resource.
    pub institution: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            base_namespace: "http://vivo.example.edu/individual/".to_string(),
            data_dir: PathBuf::from("data"),
            graph_dir: PathBuf::from("graph"),
            endpoint: "http://localhost:8080/vivo/api/sparqlUpdate".to_string(),
            email: "vivo_root@example.edu".to_string(),
            password: "password".to_string(),
            target_graph: DEFAULT_TARGET_GRAPH.to_string(),
            batch_size: 10_000,
            institution: "Example University".to_string(),
        }
    }
}

impl SyncConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Defaults when no config file is given; a named file must exist.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vitagraph.toml");
        let mut f = fs::File::create(&path).unwrap();
        writeln!(
            f,
            "base_namespace = \"http://vivo.school.edu/individual/\"\nbatch_size = 500"
        )
        .unwrap();

        let config = SyncConfig::load(&path).unwrap();
        assert_eq!(config.base_namespace, "http://vivo.school.edu/individual/");
        assert_eq!(config.batch_size, 500);
        assert_eq!(config.target_graph, DEFAULT_TARGET_GRAPH);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vitagraph.toml");
        fs::write(&path, "base_nmespace = \"oops\"\n").unwrap();
        assert!(matches!(
            SyncConfig::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            SyncConfig::load(Path::new("/nonexistent/vitagraph.toml")),
            Err(ConfigError::Io { .. })
        ));
    }
}
