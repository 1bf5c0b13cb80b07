//! Dataset mapping: records in, a merged entity graph out.
//!
//! A mapper owns a record source, a pipeline of field transforms, an
//! optional record filter and limit, and a builder that turns each accepted
//! record into entities. Loading produces the union of every entity graph
//! plus any seed graphs, or nothing at all when the source yields no
//! accepted records.

use tracing::{debug, warn};

use crate::entity::GraphEmittable;
use crate::error::{EntityError, VitaResult};
use crate::graph::Graph;
use crate::source::{Record, RecordSource};

/// A declarative per-record field rewrite, applied in order before the
/// filter and the builder see the record.
pub enum FieldTransform {
    /// Rename a field, overwriting any existing value of the target.
    Rename { from: String, to: String },
    /// Strip a prefix from a field's value, when present.
    StripPrefix { field: String, prefix: String },
    /// Fill a field with a value when it is absent.
    Default { field: String, value: String },
    /// Remove a field.
    Drop { field: String },
}

impl FieldTransform {
    pub fn rename(from: &str, to: &str) -> Self {
        FieldTransform::Rename {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub fn strip_prefix(field: &str, prefix: &str) -> Self {
        FieldTransform::StripPrefix {
            field: field.to_string(),
            prefix: prefix.to_string(),
        }
    }

    pub fn default_value(field: &str, value: &str) -> Self {
        FieldTransform::Default {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub fn drop(field: &str) -> Self {
        FieldTransform::Drop {
            field: field.to_string(),
        }
    }

    fn apply(&self, record: &mut Record) {
        match self {
            FieldTransform::Rename { from, to } => record.rename(from, to),
            FieldTransform::StripPrefix { field, prefix } => {
                if let Some(stripped) = record
                    .get(field)
                    .and_then(|v| v.strip_prefix(prefix.as_str()))
                    .map(str::to_string)
                {
                    record.set(field, &stripped);
                }
            }
            FieldTransform::Default { field, value } => {
                if record.get(field).is_none() {
                    record.set(field, value);
                }
            }
            FieldTransform::Drop { field } => {
                record.remove(field);
            }
        }
    }
}

pub type EntityBuilder =
    Box<dyn Fn(&Record) -> Result<Vec<Box<dyn GraphEmittable>>, EntityError>>;

pub struct DatasetMapper {
    name: String,
    source: Box<dyn RecordSource>,
    transforms: Vec<FieldTransform>,
    filter: Option<Box<dyn Fn(&Record) -> bool>>,
    limit: Option<usize>,
    seeds: Vec<Graph>,
    builder: EntityBuilder,
}

impl DatasetMapper {
    pub fn new(
        name: &str,
        source: impl RecordSource + 'static,
        builder: EntityBuilder,
    ) -> Self {
        Self {
            name: name.to_string(),
            source: Box::new(source),
            transforms: Vec::new(),
            filter: None,
            limit: None,
            seeds: Vec::new(),
            builder,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transform(mut self, transform: FieldTransform) -> Self {
        self.transforms.push(transform);
        self
    }

    pub fn filter(mut self, filter: impl Fn(&Record) -> bool + 'static) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Cap the number of accepted records; filtered records do not count.
    pub fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// A graph merged into the output whenever the dataset is non-empty.
    pub fn seed(mut self, graph: Graph) -> Self {
        self.seeds.push(graph);
        self
    }

    /// Read the source and build the dataset graph.
    ///
    /// `Ok(None)` means the source yielded no accepted records; callers must
    /// treat that as "no data this run", not as "everything was deleted".
    /// A record the builder rejects is logged and skipped, not fatal.
    pub fn load(&self) -> VitaResult<Option<Graph>> {
        let mut graph = Graph::new();
        let mut accepted = 0usize;
        for record in self.source.records()? {
            if self.limit.is_some_and(|limit| accepted >= limit) {
                debug!(dataset = %self.name, limit = accepted, "record limit reached");
                break;
            }
            let mut record = record?;
            for transform in &self.transforms {
                transform.apply(&mut record);
            }
            if let Some(filter) = &self.filter {
                if !filter(&record) {
                    continue;
                }
            }
            match (self.builder)(&record) {
                Ok(entities) => {
                    for entity in entities {
                        graph.merge(entity.to_graph());
                    }
                }
                Err(e) => {
                    warn!(dataset = %self.name, error = %e, "skipping record");
                    continue;
                }
            }
            accepted += 1;
        }
        if accepted == 0 {
            warn!(dataset = %self.name, "dataset produced no records, leaving baseline untouched");
            return Ok(None);
        }
        for seed in &self.seeds {
            graph.merge(seed.clone());
        }
        debug!(dataset = %self.name, records = accepted, statements = graph.len(), "dataset loaded");
        Ok(Some(graph))
    }
}
