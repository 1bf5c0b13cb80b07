//! vitagraph: maps institutional faculty-activity exports to RDF and keeps
//! a VIVO triple store in sync with them incrementally.
//!
//! Each dataset run loads an export file, builds an entity graph with
//! deterministic URIs, diffs it against the last pushed baseline, pushes
//! only the delta through SPARQL Update, and persists the new baseline.

pub mod baseline;
pub mod config;
pub mod datasets;
pub mod date;
pub mod diff;
pub mod entity;
pub mod error;
pub mod graph;
pub mod ident;
pub mod mapper;
pub mod source;
pub mod store;
pub mod sync;
pub mod vocab;

pub use baseline::BaselineStore;
pub use config::SyncConfig;
pub use datasets::{DatasetCatalog, DatasetGroup};
pub use diff::GraphDiff;
pub use error::{VitaError, VitaResult};
pub use graph::Graph;
pub use ident::IdResolver;
pub use mapper::DatasetMapper;
pub use store::{MemoryStore, SparqlUpdateStore, TripleStore};
pub use sync::{SyncDriver, SyncOptions, SyncReport};
pub use vocab::Namespaces;
