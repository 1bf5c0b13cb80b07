//! Triple store backends: where diffed statements get pushed.

use std::sync::Mutex;

use tracing::debug;

use crate::error::StoreError;
use crate::graph::Graph;

/// The VIVO default knowledge base graph.
pub const DEFAULT_TARGET_GRAPH: &str = "http://vitro.mannlib.cornell.edu/default/vitro-kb-2";

/// A destination for statement-level inserts and deletes.
pub trait TripleStore {
    fn insert(&self, graph: &Graph) -> Result<(), StoreError>;
    fn delete(&self, graph: &Graph) -> Result<(), StoreError>;
}

/// A VIVO SPARQL Update API client.
///
/// The API authenticates with form-encoded root credentials alongside the
/// update itself. Statements are wrapped in `INSERT DATA`/`DELETE DATA`
/// against a named target graph, serialized as N-Triples so no prefix
/// preamble is needed.
pub struct SparqlUpdateStore {
    endpoint: String,
    email: String,
    password: String,
    target_graph: String,
    agent: ureq::Agent,
}

impl SparqlUpdateStore {
    pub fn new(endpoint: &str, email: &str, password: &str, target_graph: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            target_graph: target_graph.to_string(),
            agent: ureq::Agent::new(),
        }
    }

    fn update(&self, operation: &str, graph: &Graph) -> Result<(), StoreError> {
        if graph.is_empty() {
            return Ok(());
        }
        let update = format!(
            "{operation} DATA {{ GRAPH <{}> {{\n{}}} }}",
            self.target_graph,
            graph.to_ntriples()
        );
        debug!(endpoint = %self.endpoint, operation, statements = graph.len(), "sparql update");
        let response = self
            .agent
            .post(&self.endpoint)
            .send_form(&[
                ("email", self.email.as_str()),
                ("password", self.password.as_str()),
                ("update", update.as_str()),
            ])
            .map_err(|e| match e {
                ureq::Error::Status(status, _) => StoreError::Rejected { status },
                ureq::Error::Transport(t) => StoreError::Http {
                    message: t.to_string(),
                },
            })?;
        let status = response.status();
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(StoreError::Rejected { status })
        }
    }
}

impl TripleStore for SparqlUpdateStore {
    fn insert(&self, graph: &Graph) -> Result<(), StoreError> {
        self.update("INSERT", graph)
    }

    fn delete(&self, graph: &Graph) -> Result<(), StoreError> {
        self.update("DELETE", graph)
    }
}

/// An in-memory store for dry runs and tests.
#[derive(Default)]
pub struct MemoryStore {
    contents: Mutex<Graph>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Graph {
        self.contents.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl TripleStore for MemoryStore {
    fn insert(&self, graph: &Graph) -> Result<(), StoreError> {
        self.contents
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .merge(graph.clone());
        Ok(())
    }

    fn delete(&self, graph: &Graph) -> Result<(), StoreError> {
        let mut contents = self.contents.lock().unwrap_or_else(|e| e.into_inner());
        for triple in graph.iter() {
            contents.remove(triple);
        }
        Ok(())
    }
}
