//! Baseline persistence: the last graph pushed for each dataset.
//!
//! Baselines are Turtle files named `<dataset>-<YYYYmmddHHMMSS>.ttl` in a
//! single directory. The timestamp suffix orders runs lexicographically, so
//! the latest baseline is simply the greatest matching filename. A baseline
//! is written only after the store accepted the diff; a failed run leaves
//! the previous baseline in place and the next run retries the same diff.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::debug;

use crate::error::BaselineError;
use crate::graph::Graph;
use crate::vocab::Namespaces;

pub struct BaselineStore {
    dir: PathBuf,
    namespaces: Namespaces,
}

impl BaselineStore {
    pub fn new(dir: impl Into<PathBuf>, namespaces: Namespaces) -> Self {
        Self {
            dir: dir.into(),
            namespaces,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn io_err(&self, path: &Path, source: std::io::Error) -> BaselineError {
        BaselineError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    /// True for `<dataset>-<digits>.ttl`, and nothing else. The digit check
    /// keeps `grants` from matching `grants-extra` baselines.
    fn matches(dataset: &str, file_name: &str) -> bool {
        file_name
            .strip_prefix(dataset)
            .and_then(|rest| rest.strip_prefix('-'))
            .and_then(|rest| rest.strip_suffix(".ttl"))
            .is_some_and(|stamp| !stamp.is_empty() && stamp.bytes().all(|b| b.is_ascii_digit()))
    }

    /// The path of the most recent baseline for a dataset, if any.
    pub fn latest_path(&self, dataset: &str) -> Result<Option<PathBuf>, BaselineError> {
        if !self.dir.exists() {
            return Ok(None);
        }
        let entries = fs::read_dir(&self.dir).map_err(|e| self.io_err(&self.dir, e))?;
        let mut latest: Option<String> = None;
        for entry in entries {
            let entry = entry.map_err(|e| self.io_err(&self.dir, e))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if Self::matches(dataset, &name) && latest.as_deref() < Some(name.as_str()) {
                latest = Some(name);
            }
        }
        Ok(latest.map(|name| self.dir.join(name)))
    }

    /// Load the most recent baseline, or an empty graph's worth of `None`
    /// when the dataset has never been pushed.
    pub fn load_latest(&self, dataset: &str) -> Result<Option<Graph>, BaselineError> {
        let Some(path) = self.latest_path(dataset)? else {
            return Ok(None);
        };
        let turtle = fs::read_to_string(&path).map_err(|e| self.io_err(&path, e))?;
        let graph = Graph::from_turtle(&turtle)?;
        debug!(dataset, path = %path.display(), statements = graph.len(), "baseline loaded");
        Ok(Some(graph))
    }

    /// Write a new timestamped baseline for a dataset.
    pub fn save(&self, dataset: &str, graph: &Graph) -> Result<PathBuf, BaselineError> {
        fs::create_dir_all(&self.dir).map_err(|e| self.io_err(&self.dir, e))?;
        let stamp = Local::now().format("%Y%m%d%H%M%S");
        let path = self.dir.join(format!("{dataset}-{stamp}.ttl"));
        let turtle = graph.to_turtle(&self.namespaces)?;
        fs::write(&path, turtle).map_err(|e| self.io_err(&path, e))?;
        debug!(dataset, path = %path.display(), statements = graph.len(), "baseline saved");
        Ok(path)
    }
}
