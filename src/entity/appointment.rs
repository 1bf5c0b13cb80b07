//! Faculty appointments: time-boxed positions relating a person to a unit.

use oxigraph::model::{Literal, NamedNode, NamedNodeRef};

use crate::date::{add_interval, add_term_date};
use crate::entity::GraphEmittable;
use crate::graph::Graph;
use crate::ident::{suffixed, IdResolver};
use crate::vocab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentKind {
    /// A faculty position in a department or college.
    Academic,
    /// An administrative position (dean, chair, director).
    Admin,
}

impl AppointmentKind {
    fn class(self) -> NamedNodeRef<'static> {
        match self {
            AppointmentKind::Academic => vocab::vivo::FACULTY_POSITION,
            AppointmentKind::Admin => vocab::vivo::FACULTY_ADMIN_POSITION,
        }
    }
}

/// Key: (person, organization, rank, title, start term, end term) — two
/// stints in the same rank at the same unit over different terms are
/// distinct appointments.
#[derive(Debug, Clone)]
pub struct Appointment {
    uri: NamedNode,
    kind: AppointmentKind,
    person: NamedNode,
    organization: NamedNode,
    rank: String,
    title: Option<String>,
    start_term: Option<String>,
    end_term: Option<String>,
}

impl Appointment {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        resolver: &IdResolver,
        kind: AppointmentKind,
        person: &NamedNode,
        organization: &NamedNode,
        rank: &str,
        title: Option<&str>,
        start_term: Option<&str>,
        end_term: Option<&str>,
    ) -> Self {
        let uri = resolver.hashed(
            "apt",
            &[
                Some(person.as_str()),
                Some(organization.as_str()),
                Some(rank),
                title,
                start_term,
                end_term,
            ],
        );
        Self {
            uri,
            kind,
            person: person.clone(),
            organization: organization.clone(),
            rank: rank.to_string(),
            title: title.map(str::to_string),
            start_term: start_term.map(str::to_string),
            end_term: end_term.map(str::to_string),
        }
    }
}

impl GraphEmittable for Appointment {
    fn uri(&self) -> &NamedNode {
        &self.uri
    }

    fn to_graph(&self) -> Graph {
        let mut graph = Graph::new();

        graph.add(self.uri.clone(), vocab::rdf::TYPE, self.kind.class());
        // Title when present, rank otherwise.
        graph.add(
            self.uri.clone(),
            vocab::rdfs::LABEL,
            Literal::new_simple_literal(self.title.as_deref().unwrap_or(&self.rank)),
        );
        graph.add(self.person.clone(), vocab::vivo::RELATED_BY, self.uri.clone());
        graph.add(
            self.organization.clone(),
            vocab::vivo::RELATED_BY,
            self.uri.clone(),
        );

        let interval_uri = suffixed(&self.uri, "-interval");
        let start_uri = suffixed(&interval_uri, "-start");
        let end_uri = suffixed(&interval_uri, "-end");
        let start = add_term_date(&mut graph, &start_uri, self.start_term.as_deref());
        let end = add_term_date(&mut graph, &end_uri, self.end_term.as_deref());
        add_interval(
            &mut graph,
            &interval_uri,
            &self.uri,
            start.then_some(&start_uri),
            end.then_some(&end_uri),
        );

        graph
    }
}
