//! Degree and non-degree education history.

use oxigraph::model::{Literal, NamedNode};

use crate::date::{add_interval, add_term_date};
use crate::entity::GraphEmittable;
use crate::graph::Graph;
use crate::ident::{suffixed, IdResolver};
use crate::vocab;

/// An awarded degree.
///
/// Key: (person, institution, degree name). The degree itself (e.g. "PhD")
/// is a shared resource keyed by name alone, while the award and its
/// educational process belong to the person.
#[derive(Debug, Clone)]
pub struct DegreeEducation {
    uri: NamedNode,
    degree_uri: NamedNode,
    person: NamedNode,
    organization: NamedNode,
    degree_name: String,
    pub program: Option<String>,
    pub major: Option<String>,
    pub start_term: Option<String>,
    pub end_term: Option<String>,
}

impl DegreeEducation {
    pub fn new(
        resolver: &IdResolver,
        person: &NamedNode,
        organization: &NamedNode,
        degree_name: &str,
    ) -> Self {
        Self {
            uri: resolver.hashed(
                "awdgre",
                &[
                    Some(person.as_str()),
                    Some(organization.as_str()),
                    Some(degree_name),
                ],
            ),
            degree_uri: resolver.hashed("dgre", &[Some(degree_name)]),
            person: person.clone(),
            organization: organization.clone(),
            degree_name: degree_name.to_string(),
            program: None,
            major: None,
            start_term: None,
            end_term: None,
        }
    }
}

impl GraphEmittable for DegreeEducation {
    fn uri(&self) -> &NamedNode {
        &self.uri
    }

    fn to_graph(&self) -> Graph {
        let mut graph = Graph::new();

        graph.add(self.uri.clone(), vocab::rdf::TYPE, vocab::vivo::AWARDED_DEGREE);
        graph.add(
            self.uri.clone(),
            vocab::rdfs::LABEL,
            Literal::new_simple_literal(&self.degree_name),
        );
        graph.add(
            self.uri.clone(),
            vocab::vivo::ASSIGNED_BY,
            self.organization.clone(),
        );

        graph.add(
            self.degree_uri.clone(),
            vocab::rdf::TYPE,
            vocab::vivo::ACADEMIC_DEGREE,
        );
        graph.add(
            self.degree_uri.clone(),
            vocab::rdfs::LABEL,
            Literal::new_simple_literal(format!("{} degree", self.degree_name)),
        );
        graph.add(self.uri.clone(), vocab::vivo::RELATES, self.degree_uri.clone());
        graph.add(self.uri.clone(), vocab::vivo::RELATES, self.person.clone());

        // The award is the output of an educational process involving the
        // person and the institution.
        let process_uri = suffixed(&self.uri, "-process");
        graph.add(
            process_uri.clone(),
            vocab::rdf::TYPE,
            vocab::vivo::EDUCATIONAL_PROCESS,
        );
        graph.add(self.uri.clone(), vocab::obo::OUTPUT_OF, process_uri.clone());
        graph.add(
            process_uri.clone(),
            vocab::obo::HAS_PARTICIPANT,
            self.organization.clone(),
        );
        graph.add(
            process_uri.clone(),
            vocab::obo::HAS_PARTICIPANT,
            self.person.clone(),
        );
        if let Some(field) = self.major.as_deref().or(self.program.as_deref()) {
            graph.add(
                process_uri.clone(),
                vocab::vivo::MAJOR_FIELD,
                Literal::new_simple_literal(field),
            );
        }

        let interval_uri = suffixed(&process_uri, "-interval");
        let start_uri = suffixed(&interval_uri, "-start");
        let end_uri = suffixed(&interval_uri, "-end");
        let start = add_term_date(&mut graph, &start_uri, self.start_term.as_deref());
        let end = add_term_date(&mut graph, &end_uri, self.end_term.as_deref());
        add_interval(
            &mut graph,
            &interval_uri,
            &process_uri,
            start.then_some(&start_uri),
            end.then_some(&end_uri),
        );

        graph
    }
}

/// Training without a degree: postdocs, residencies, fellowships.
///
/// Key: (person, institution, degree, program). The feed cannot distinguish
/// the varieties, so everything is asserted as postdoctoral training with
/// the degree or program as supplemental information.
#[derive(Debug, Clone)]
pub struct NonDegreeEducation {
    uri: NamedNode,
    person: NamedNode,
    organization: NamedNode,
    degree: Option<String>,
    program: Option<String>,
    pub start_term: Option<String>,
    pub end_term: Option<String>,
}

impl NonDegreeEducation {
    pub fn new(
        resolver: &IdResolver,
        person: &NamedNode,
        organization: &NamedNode,
        degree: Option<&str>,
        program: Option<&str>,
    ) -> Self {
        Self {
            uri: resolver.hashed(
                "nondgre",
                &[
                    Some(person.as_str()),
                    Some(organization.as_str()),
                    degree,
                    program,
                ],
            ),
            person: person.clone(),
            organization: organization.clone(),
            degree: degree.map(str::to_string),
            program: program.map(str::to_string),
            start_term: None,
            end_term: None,
        }
    }
}

impl GraphEmittable for NonDegreeEducation {
    fn uri(&self) -> &NamedNode {
        &self.uri
    }

    fn to_graph(&self) -> Graph {
        let mut graph = Graph::new();

        graph.add(
            self.uri.clone(),
            vocab::rdf::TYPE,
            vocab::vivo::POSTDOCTORAL_TRAINING,
        );
        if let Some(info) = self.degree.as_deref().or(self.program.as_deref()) {
            graph.add(
                self.uri.clone(),
                vocab::vivo::SUPPLEMENTAL_INFORMATION,
                Literal::new_simple_literal(info),
            );
        }
        graph.add(
            self.uri.clone(),
            vocab::obo::HAS_PARTICIPANT,
            self.organization.clone(),
        );
        graph.add(
            self.uri.clone(),
            vocab::obo::HAS_PARTICIPANT,
            self.person.clone(),
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
