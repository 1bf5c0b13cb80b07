//! Organizations: the institution, its colleges and departments, and
//! external bodies (publishers, funders, professional societies).

use oxigraph::model::{Literal, NamedNode, NamedNodeRef};

use crate::entity::GraphEmittable;
use crate::graph::Graph;
use crate::ident::IdResolver;
use crate::vocab;

/// The asserted organization class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrgKind {
    /// Generic external organization.
    Organization,
    University,
    College,
    AcademicDepartment,
    Department,
}

impl OrgKind {
    fn class(self) -> NamedNodeRef<'static> {
        match self {
            OrgKind::Organization => vocab::foaf::ORGANIZATION,
            OrgKind::University => vocab::vivo::UNIVERSITY,
            OrgKind::College => vocab::vivo::COLLEGE,
            OrgKind::AcademicDepartment => vocab::vivo::ACADEMIC_DEPARTMENT,
            OrgKind::Department => vocab::vivo::DEPARTMENT,
        }
    }
}

/// An organization, deduplicated across source rows by name.
///
/// Key: the name alone, so the same body referenced from many records
/// collapses to one resource regardless of which dataset mentions it first.
#[derive(Debug, Clone)]
pub struct Organization {
    uri: NamedNode,
    name: String,
    kind: OrgKind,
    /// Marks units of the institution itself, as opposed to external bodies.
    internal: bool,
    pub part_of: Option<NamedNode>,
}

impl Organization {
    pub fn new(resolver: &IdResolver, name: &str, kind: OrgKind, internal: bool) -> Self {
        Self {
            uri: resolver.hashed("org", &[Some(name)]),
            name: name.to_string(),
            kind,
            internal,
            part_of: None,
        }
    }

    /// Generic external organization, the common case for nested references.
    pub fn external(resolver: &IdResolver, name: &str) -> Self {
        Self::new(resolver, name, OrgKind::Organization, false)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl GraphEmittable for Organization {
    fn uri(&self) -> &NamedNode {
        &self.uri
    }

    fn to_graph(&self) -> Graph {
        let mut graph = Graph::new();
        graph.add(self.uri.clone(), vocab::rdf::TYPE, self.kind.class());
        if self.internal {
            graph.add(
                self.uri.clone(),
                vocab::rdf::TYPE,
                vocab::local::INSTITUTIONAL_INTERNAL,
            );
        }
        graph.add(
            self.uri.clone(),
            vocab::rdfs::LABEL,
            Literal::new_simple_literal(&self.name),
        );
        if let Some(parent) = &self.part_of {
            graph.add(self.uri.clone(), vocab::obo::PART_OF, parent.clone());
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> IdResolver {
        IdResolver::new("http://vivo.example.edu/individual/").unwrap()
    }

    #[test]
    fn same_name_same_uri_across_kinds_is_not_assumed() {
        // The key is the name alone; kind is descriptive.
        let r = resolver();
        let a = Organization::new(&r, "Chemistry", OrgKind::AcademicDepartment, true);
        let b = Organization::external(&r, "Chemistry");
        assert_eq!(a.uri(), b.uri());
    }

    #[test]
    fn external_org_is_foaf_organization() {
        let g = Organization::external(&resolver(), "Acme Press").to_graph();
        assert!(g.iter().any(|t| t.object == vocab::foaf::ORGANIZATION.into()));
        assert!(!g
            .iter()
            .any(|t| t.object == vocab::local::INSTITUTIONAL_INTERNAL.into()));
    }

    #[test]
    fn internal_unit_carries_local_class_and_parent() {
        let r = resolver();
        let university = Organization::new(&r, "Example University", OrgKind::University, true);
        let mut college =
            Organization::new(&r, "College of Arts and Sciences", OrgKind::College, true);
        college.part_of = Some(university.uri().clone());

        let g = college.to_graph();
        assert!(g.iter().any(|t| t.object == vocab::vivo::COLLEGE.into()));
        assert!(g
            .iter()
            .any(|t| t.object == vocab::local::INSTITUTIONAL_INTERNAL.into()));
        assert!(g.iter().any(|t| {
            t.predicate == vocab::obo::PART_OF.into_owned()
                && t.object == university.uri().clone().into()
        }));
    }
}
