//! Teaching: a person's teacher role in a course offering.

use oxigraph::model::{Literal, NamedNode};

use crate::date::{add_interval, add_term_date};
use crate::entity::GraphEmittable;
use crate::graph::Graph;
use crate::ident::{suffixed, IdResolver};
use crate::vocab;

/// A teacher role realized in a course.
///
/// Key: (person, course id, subject id, start term) — the same course taught
/// in different terms is a new role. The course itself is shared, keyed by
/// (course id, subject id).
#[derive(Debug, Clone)]
pub struct Course {
    uri: NamedNode,
    course_uri: NamedNode,
    person: NamedNode,
    course_id: String,
    subject_id: String,
    start_term: Option<String>,
    pub end_term: Option<String>,
}

impl Course {
    pub fn new(
        resolver: &IdResolver,
        person: &NamedNode,
        course_id: &str,
        subject_id: &str,
        start_term: Option<&str>,
    ) -> Self {
        Self {
            uri: resolver.hashed(
                "tch",
                &[
                    Some(person.as_str()),
                    Some(course_id),
                    Some(subject_id),
                    start_term,
                ],
            ),
            course_uri: resolver.hashed("crs", &[Some(course_id), Some(subject_id)]),
            person: person.clone(),
            course_id: course_id.to_string(),
            subject_id: subject_id.to_string(),
            start_term: start_term.map(str::to_string),
            end_term: None,
        }
    }

    /// "SUBJ 1234"
    pub fn course_label(&self) -> String {
        format!("{} {}", self.subject_id, self.course_id)
    }
}

impl GraphEmittable for Course {
    fn uri(&self) -> &NamedNode {
        &self.uri
    }

    fn to_graph(&self) -> Graph {
        let mut graph = Graph::new();

        graph.add(self.uri.clone(), vocab::rdf::TYPE, vocab::vivo::TEACHER_ROLE);
        graph.add(self.uri.clone(), vocab::obo::INHERES_IN, self.person.clone());

        graph.add(self.course_uri.clone(), vocab::rdf::TYPE, vocab::vivo::COURSE);
        graph.add(
            self.course_uri.clone(),
            vocab::rdfs::LABEL,
            Literal::new_simple_literal(self.course_label()),
        );
        graph.add(
            self.uri.clone(),
            vocab::obo::REALIZED_IN,
            self.course_uri.clone(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::person::person_uri;

    fn resolver() -> IdResolver {
        IdResolver::new("http://vivo.example.edu/individual/").unwrap()
    }

    #[test]
    fn course_is_shared_across_teachers_and_terms() {
        let r = resolver();
        let a = Course::new(&r, &person_uri(&r, "1000123"), "2151", "CHEM", Some("Fall 2019"));
        let b = Course::new(
            &r,
            &person_uri(&r, "1000456"),
            "2151",
            "CHEM",
            Some("Spring 2020"),
        );
        assert_ne!(a.uri(), b.uri());
        assert_eq!(a.course_uri, b.course_uri);
    }

    #[test]
    fn role_is_realized_in_labeled_course() {
        let r = resolver();
        let c = Course::new(&r, &person_uri(&r, "1000123"), "2151", "CHEM", None);
        let g = c.to_graph();
        assert!(g.iter().any(|t| {
            t.predicate == vocab::obo::REALIZED_IN.into_owned()
                && t.object == c.course_uri.clone().into()
        }));
        assert!(g
            .iter()
            .any(|t| t.object == Literal::new_simple_literal("CHEM 2151").into()));
    }

    #[test]
    fn term_interval_follows_the_term_grammar() {
        let r = resolver();
        let mut c = Course::new(
            &r,
            &person_uri(&r, "1000123"),
            "2151",
            "CHEM",
            Some("Fall 2019"),
        );
        c.end_term = Some("Fall 2019".into());
        let g = c.to_graph();
        assert!(g
            .iter()
            .any(|t| t.predicate == vocab::vivo::INTERVAL_START.into_owned()));
        assert!(g
            .iter()
            .any(|t| t.predicate == vocab::vivo::INTERVAL_END.into_owned()));
    }
}
