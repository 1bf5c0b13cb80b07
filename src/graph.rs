//! In-memory statement sets.
//!
//! A [`Graph`] is a set of RDF triples: no duplicates, order irrelevant for
//! equality. Serialization iterates in canonical (N-Triples text) order so
//! successive runs over unchanged data produce byte-identical files, which is
//! what the baseline differ depends on.

use std::collections::HashSet;

use oxigraph::io::{RdfFormat, RdfParser, RdfSerializer};
use oxigraph::model::{GraphNameRef, NamedNode, Subject, Term, Triple};

use crate::error::GraphError;
use crate::vocab::Namespaces;

/// A set of statements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    statements: HashSet<Triple>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a statement. Returns false if it was already present.
    pub fn insert(&mut self, statement: Triple) -> bool {
        self.statements.insert(statement)
    }

    /// Build and insert a statement from its parts.
    pub fn add(&mut self, subject: impl Into<Subject>, predicate: impl Into<NamedNode>, object: impl Into<Term>) {
        self.insert(Triple::new(subject, predicate, object));
    }

    /// Remove a statement. Returns true if it was present.
    pub fn remove(&mut self, statement: &Triple) -> bool {
        self.statements.remove(statement)
    }

    pub fn contains(&self, statement: &Triple) -> bool {
        self.statements.contains(statement)
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.statements.iter()
    }

    /// Union in another graph. Duplicate statements collapse.
    pub fn merge(&mut self, other: Graph) {
        self.statements.extend(other.statements);
    }

    /// Statements in `self` but not in `other`.
    pub fn difference(&self, other: &Graph) -> Graph {
        self.statements
            .difference(&other.statements)
            .cloned()
            .collect()
    }

    /// Statements in both graphs.
    pub fn intersection(&self, other: &Graph) -> Graph {
        self.statements
            .intersection(&other.statements)
            .cloned()
            .collect()
    }

    /// Statements in canonical order (sorted by N-Triples text).
    pub fn sorted(&self) -> Vec<&Triple> {
        let mut statements: Vec<&Triple> = self.statements.iter().collect();
        statements.sort_by_cached_key(|t| t.to_string());
        statements
    }

    /// Split into chunks of at most `max` statements, in canonical order.
    ///
    /// Cut points are arbitrary; chunks carry no semantic grouping. An empty
    /// graph yields no chunks.
    pub fn split(&self, max: usize) -> Vec<Graph> {
        let mut chunks = Vec::new();
        let mut current = Graph::new();
        for statement in self.sorted() {
            current.insert(statement.clone());
            if current.len() == max {
                chunks.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            chunks.push(current);
        }
        chunks
    }

    /// Serialize as Turtle with the given prefix bindings, statements in
    /// canonical order.
    pub fn to_turtle(&self, namespaces: &Namespaces) -> Result<String, GraphError> {
        let mut serializer = RdfSerializer::from_format(RdfFormat::Turtle);
        for (prefix, iri) in namespaces.iter() {
            serializer = serializer
                .with_prefix(prefix, iri)
                .map_err(|_| GraphError::Prefix {
                    prefix: prefix.to_string(),
                    iri: iri.to_string(),
                })?;
        }
        let mut writer = serializer.for_writer(Vec::new());
        for statement in self.sorted() {
            writer
                .serialize_quad(statement.as_ref().in_graph(GraphNameRef::DefaultGraph))
                .map_err(|e| GraphError::Serialize {
                    message: e.to_string(),
                })?;
        }
        let bytes = writer.finish().map_err(|e| GraphError::Serialize {
            message: e.to_string(),
        })?;
        String::from_utf8(bytes).map_err(|e| GraphError::Serialize {
            message: e.to_string(),
        })
    }

    /// Render as N-Triples statement lines in canonical order.
    pub fn to_ntriples(&self) -> String {
        let mut out = String::new();
        for statement in self.sorted() {
            out.push_str(&statement.to_string());
            out.push_str(" .\n");
        }
        out
    }

    /// Parse a Turtle document back into a graph.
    pub fn from_turtle(data: &str) -> Result<Self, GraphError> {
        let mut graph = Graph::new();
        let parser = RdfParser::from_format(RdfFormat::Turtle);
        for quad in parser.for_reader(data.as_bytes()) {
            let quad = quad.map_err(|e| GraphError::Parse {
                message: e.to_string(),
            })?;
            graph.insert(Triple::from(quad));
        }
        Ok(graph)
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Self {
            statements: iter.into_iter().collect(),
        }
    }
}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        self.statements.extend(iter);
    }
}

impl IntoIterator for Graph {
    type Item = Triple;
    type IntoIter = std::collections::hash_set::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.into_iter()
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::collections::hash_set::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab;
    use oxigraph::model::NamedNode;

    fn statement(n: u32) -> Triple {
        Triple::new(
            NamedNode::new_unchecked(format!("http://example.org/s{n}")),
            vocab::rdfs::LABEL.into_owned(),
            oxigraph::model::Literal::new_simple_literal(format!("label {n}")),
        )
    }

    #[test]
    fn duplicate_insert_collapses() {
        let mut g = Graph::new();
        assert!(g.insert(statement(1)));
        assert!(!g.insert(statement(1)));
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn merge_is_set_union() {
        let mut a: Graph = [statement(1), statement(2)].into_iter().collect();
        let b: Graph = [statement(2), statement(3)].into_iter().collect();
        a.merge(b);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn split_respects_bound_and_covers_all() {
        let g: Graph = (0..10).map(statement).collect();
        let chunks = g.split(4);
        assert_eq!(chunks.len(), 3);
        assert!(chunks.iter().all(|c| c.len() <= 4));
        let total: usize = chunks.iter().map(Graph::len).sum();
        assert_eq!(total, 10);
    }

    #[test]
    fn split_of_empty_graph_is_empty() {
        assert!(Graph::new().split(100).is_empty());
    }

    #[test]
    fn turtle_round_trip_preserves_statements() {
        let g: Graph = (0..5).map(statement).collect();
        let turtle = g.to_turtle(&Namespaces::standard()).unwrap();
        let parsed = Graph::from_turtle(&turtle).unwrap();
        assert_eq!(g, parsed);
    }

    #[test]
    fn serialization_is_canonical() {
        // Same statements inserted in different orders serialize identically.
        let a: Graph = (0..20).map(statement).collect();
        let b: Graph = (0..20).rev().map(statement).collect();
        let ns = Namespaces::standard();
        assert_eq!(a.to_turtle(&ns).unwrap(), b.to_turtle(&ns).unwrap());
        assert_eq!(a.to_ntriples(), b.to_ntriples());
    }

    #[test]
    fn ntriples_lines_are_terminated() {
        let g: Graph = [statement(1)].into_iter().collect();
        let nt = g.to_ntriples();
        assert!(nt.ends_with(" .\n"));
        assert!(nt.contains("<http://example.org/s1>"));
    }
}
