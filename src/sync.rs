//! The incremental sync driver: load, diff, push, persist.

use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::baseline::BaselineStore;
use crate::diff::GraphDiff;
use crate::error::VitaResult;
use crate::graph::Graph;
use crate::mapper::DatasetMapper;
use crate::store::TripleStore;

#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Diff against an empty baseline, re-asserting the whole dataset.
    pub full_reload: bool,
    /// Compute the diff but do not contact the store.
    pub skip_push: bool,
    /// Do not write a new baseline after pushing.
    pub skip_persist: bool,
    /// Maximum statements per update request.
    pub batch_size: usize,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            full_reload: false,
            skip_push: false,
            skip_persist: false,
            batch_size: 10_000,
        }
    }
}

/// What one dataset run did.
#[derive(Debug, Serialize)]
pub struct SyncReport {
    pub dataset: String,
    pub common: usize,
    pub added: usize,
    pub deleted: usize,
    /// The baseline written for this run, when persistence was not skipped.
    pub baseline: Option<PathBuf>,
}

pub struct SyncDriver<'a> {
    baselines: &'a BaselineStore,
    store: &'a dyn TripleStore,
    options: SyncOptions,
}

impl<'a> SyncDriver<'a> {
    pub fn new(
        baselines: &'a BaselineStore,
        store: &'a dyn TripleStore,
        options: SyncOptions,
    ) -> Self {
        Self {
            baselines,
            store,
            options,
        }
    }

    /// Run one dataset end to end.
    ///
    /// `Ok(None)` means the source yielded nothing; the store and the
    /// baseline are both left exactly as they were. The baseline is written
    /// only after every push batch succeeded, so a failed push leaves the
    /// previous baseline to be re-diffed on the next run.
    pub fn run(&self, mapper: &DatasetMapper) -> VitaResult<Option<SyncReport>> {
        let dataset = mapper.name().to_string();
        let Some(current) = mapper.load()? else {
            return Ok(None);
        };

        let previous = if self.options.full_reload {
            Graph::new()
        } else {
            self.baselines.load_latest(&dataset)?.unwrap_or_default()
        };

        let diff = GraphDiff::compute(&previous, &current);
        info!(
            dataset,
            common = diff.common.len(),
            to_add = diff.to_add.len(),
            to_delete = diff.to_delete.len(),
            "diff computed"
        );

        if !self.options.skip_push {
            for chunk in diff.to_delete.split(self.options.batch_size) {
                self.store.delete(&chunk)?;
            }
            for chunk in diff.to_add.split(self.options.batch_size) {
                self.store.insert(&chunk)?;
            }
        }

        let baseline = if self.options.skip_persist || self.options.skip_push {
            None
        } else {
            Some(self.baselines.save(&dataset, &current)?)
        };

        Ok(Some(SyncReport {
            dataset,
            common: diff.common.len(),
            added: diff.to_add.len(),
            deleted: diff.to_delete.len(),
            baseline,
        }))
    }
}
