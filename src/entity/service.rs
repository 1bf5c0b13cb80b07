//! Professional service: memberships, editorial and review work, honors,
//! and invited presentations.

use oxigraph::model::{Literal, NamedNode};
use tracing::warn;

use crate::date::{add_date, add_interval};
use crate::entity::GraphEmittable;
use crate::graph::Graph;
use crate::ident::{suffixed, IdResolver};
use crate::vocab;

/// Position codes are descriptive, not structural: an unrecognized code
/// degrades to the raw code as the label instead of rejecting the record.
fn position_label<'a>(table: &[(&str, &'a str)], code: &'a str) -> &'a str {
    match table.iter().find(|(c, _)| *c == code) {
        Some((_, label)) => label,
        None => {
            warn!(code, "unrecognized position code, using it as the label");
            code
        }
    }
}

const MEMBERSHIP_POSITIONS: &[(&str, &str)] = &[
    ("OUTREACH_POSITION_CD16", "Member"),
    ("OUTREACH_POSITION_CD17", "President"),
    ("OUTREACH_POSITION_CD18", "Secretary"),
    ("OUTREACH_POSITION_CD19", "Treasurer"),
    ("OUTREACH_POSITION_CD20", "Vice-President"),
    ("OUTREACH_POSITION_CD21", "Senior Member"),
    ("OUTREACH_POSITION_CD22", "Other"),
];

const REVIEWER_POSITIONS: &[(&str, &str)] = &[
    ("OUTREACH_POSITION_CD1", "Editor"),
    ("OUTREACH_POSITION_CD2", "Co-Editor"),
    ("OUTREACH_POSITION_CD3", "Associate Editor"),
    ("OUTREACH_POSITION_CD4", "Editorial Board"),
    ("OUTREACH_POSITION_CD5", "Reviewer"),
    ("OUTREACH_POSITION_CD6", "Special Issue Editor"),
    ("OUTREACH_POSITION_CD7", "Area Editor"),
    ("OUTREACH_POSITION_CD8", "Other"),
    ("OUTREACH_POSITION_CD9", "Referee"),
    ("OUTREACH_POSITION_CD10", "Member"),
    ("OUTREACH_POSITION_CD11", "Chair"),
    ("OUTREACH_POSITION_CD12", "Co-Chair"),
    ("OUTREACH_POSITION_CD22", "Other"),
];

/// A service provider role in a professional organization.
///
/// Key: (person, organization, position code, start/end year and month).
/// The dates are identifying: two stints of the same position in the same
/// organization in different years are distinct roles.
#[derive(Debug, Clone)]
pub struct Membership {
    uri: NamedNode,
    person: NamedNode,
    organization: NamedNode,
    position_code: String,
    start_year: Option<i32>,
    start_month: Option<u32>,
    end_year: Option<i32>,
    end_month: Option<u32>,
}

impl Membership {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        resolver: &IdResolver,
        person: &NamedNode,
        organization: &NamedNode,
        position_code: &str,
        start_year: Option<i32>,
        start_month: Option<u32>,
        end_year: Option<i32>,
        end_month: Option<u32>,
    ) -> Self {
        let key_dates = [
            start_year.map(|y| y.to_string()),
            start_month.map(|m| m.to_string()),
            end_year.map(|y| y.to_string()),
            end_month.map(|m| m.to_string()),
        ];
        Self {
            uri: resolver.hashed(
                "memb",
                &[
                    Some(person.as_str()),
                    Some(organization.as_str()),
                    Some(position_code),
                    key_dates[0].as_deref(),
                    key_dates[1].as_deref(),
                    key_dates[2].as_deref(),
                    key_dates[3].as_deref(),
                ],
            ),
            person: person.clone(),
            organization: organization.clone(),
            position_code: position_code.to_string(),
            start_year,
            start_month,
            end_year,
            end_month,
        }
    }
}

impl GraphEmittable for Membership {
    fn uri(&self) -> &NamedNode {
        &self.uri
    }

    fn to_graph(&self) -> Graph {
        let mut graph = Graph::new();

        graph.add(
            self.uri.clone(),
            vocab::rdf::TYPE,
            vocab::obo::SERVICE_PROVIDER_ROLE,
        );
        graph.add(
            self.uri.clone(),
            vocab::rdfs::LABEL,
            Literal::new_simple_literal(position_label(
                MEMBERSHIP_POSITIONS,
                &self.position_code,
            )),
        );
        graph.add(
            self.uri.clone(),
            vocab::vivo::ROLE_CONTRIBUTES_TO,
            self.organization.clone(),
        );
        graph.add(self.uri.clone(), vocab::obo::INHERES_IN, self.person.clone());

        let interval_uri = suffixed(&self.uri, "-interval");
        let start_uri = suffixed(&interval_uri, "-start");
        let end_uri = suffixed(&interval_uri, "-end");
        let start = add_date(
            &mut graph,
            &start_uri,
            self.start_year,
            self.start_month,
            None,
            None,
        );
        let end = add_date(&mut graph, &end_uri, self.end_year, self.end_month, None, None);
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

/// Editorial and review service for a venue.
///
/// Key: (person, venue name, position code, start/end year and month). The
/// venue is asserted as a journal keyed by name alone, though not all of
/// them are journals.
#[derive(Debug, Clone)]
pub struct Reviewership {
    uri: NamedNode,
    journal_uri: NamedNode,
    person: NamedNode,
    venue_name: String,
    position_code: String,
    start_year: Option<i32>,
    start_month: Option<u32>,
    end_year: Option<i32>,
    end_month: Option<u32>,
}

impl Reviewership {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        resolver: &IdResolver,
        person: &NamedNode,
        venue_name: &str,
        position_code: &str,
        start_year: Option<i32>,
        start_month: Option<u32>,
        end_year: Option<i32>,
        end_month: Option<u32>,
    ) -> Self {
        let key_dates = [
            start_year.map(|y| y.to_string()),
            start_month.map(|m| m.to_string()),
            end_year.map(|y| y.to_string()),
            end_month.map(|m| m.to_string()),
        ];
        Self {
            uri: resolver.hashed(
                "rev",
                &[
                    Some(person.as_str()),
                    Some(venue_name),
                    Some(position_code),
                    key_dates[0].as_deref(),
                    key_dates[1].as_deref(),
                    key_dates[2].as_deref(),
                    key_dates[3].as_deref(),
                ],
            ),
            journal_uri: resolver.hashed("jrnl", &[Some(venue_name)]),
            person: person.clone(),
            venue_name: venue_name.to_string(),
            position_code: position_code.to_string(),
            start_year,
            start_month,
            end_year,
            end_month,
        }
    }
}

impl GraphEmittable for Reviewership {
    fn uri(&self) -> &NamedNode {
        &self.uri
    }

    fn to_graph(&self) -> Graph {
        let mut graph = Graph::new();

        graph.add(self.uri.clone(), vocab::rdf::TYPE, vocab::vivo::REVIEWER_ROLE);
        graph.add(
            self.uri.clone(),
            vocab::rdfs::LABEL,
            Literal::new_simple_literal(position_label(REVIEWER_POSITIONS, &self.position_code)),
        );

        graph.add(
            self.journal_uri.clone(),
            vocab::rdf::TYPE,
            vocab::bibo::JOURNAL,
        );
        graph.add(
            self.journal_uri.clone(),
            vocab::rdfs::LABEL,
            Literal::new_simple_literal(&self.venue_name),
        );
        graph.add(
            self.uri.clone(),
            vocab::vivo::ROLE_CONTRIBUTES_TO,
            self.journal_uri.clone(),
        );
        graph.add(self.uri.clone(), vocab::obo::INHERES_IN, self.person.clone());

        let interval_uri = suffixed(&self.uri, "-interval");
        let start_uri = suffixed(&interval_uri, "-start");
        let end_uri = suffixed(&interval_uri, "-end");
        let start = add_date(
            &mut graph,
            &start_uri,
            self.start_year,
            self.start_month,
            None,
            None,
        );
        let end = add_date(&mut graph, &end_uri, self.end_year, self.end_month, None, None);
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

/// Receipt of an honor or award.
///
/// Key: (person, title). The award itself is shared, keyed by title.
#[derive(Debug, Clone)]
pub struct Award {
    uri: NamedNode,
    award_uri: NamedNode,
    person: NamedNode,
    title: String,
    pub assigned_by: Option<NamedNode>,
    pub year: Option<i32>,
    pub month: Option<u32>,
}

impl Award {
    pub fn new(resolver: &IdResolver, person: &NamedNode, title: &str) -> Self {
        Self {
            uri: resolver.hashed("awdrec", &[Some(person.as_str()), Some(title)]),
            award_uri: resolver.hashed("awd", &[Some(title)]),
            person: person.clone(),
            title: title.to_string(),
            assigned_by: None,
            year: None,
            month: None,
        }
    }
}

impl GraphEmittable for Award {
    fn uri(&self) -> &NamedNode {
        &self.uri
    }

    fn to_graph(&self) -> Graph {
        let mut graph = Graph::new();

        graph.add(self.uri.clone(), vocab::rdf::TYPE, vocab::vivo::AWARD_RECEIPT);
        graph.add(
            self.uri.clone(),
            vocab::rdfs::LABEL,
            Literal::new_simple_literal(format!("Awarded {}", self.title)),
        );
        if let Some(org) = &self.assigned_by {
            graph.add(self.uri.clone(), vocab::vivo::ASSIGNED_BY, org.clone());
        }
        graph.add(self.uri.clone(), vocab::vivo::RELATES, self.person.clone());

        graph.add(self.award_uri.clone(), vocab::rdf::TYPE, vocab::vivo::AWARD);
        graph.add(
            self.award_uri.clone(),
            vocab::rdfs::LABEL,
            Literal::new_simple_literal(&self.title),
        );
        graph.add(self.uri.clone(), vocab::vivo::RELATES, self.award_uri.clone());

        // The date link is asserted even when the date itself cannot be.
        let date_uri = suffixed(&self.uri, "-date");
        graph.add(self.uri.clone(), vocab::vivo::DATE_TIME_VALUE, date_uri.clone());
        add_date(&mut graph, &date_uri, self.year, self.month, None, None);

        graph
    }
}

/// A presenter role realized in a presentation at a conference.
///
/// Key: (person, title, event name, year and month). The presentation is
/// shared by title, the conference by name; the date keeps repeat deliveries
/// of the same talk distinct.
#[derive(Debug, Clone)]
pub struct Presentation {
    uri: NamedNode,
    presentation_uri: NamedNode,
    conference_uri: NamedNode,
    person: NamedNode,
    title: String,
    event_name: String,
    year: Option<i32>,
    month: Option<u32>,
}

impl Presentation {
    pub fn new(
        resolver: &IdResolver,
        person: &NamedNode,
        title: &str,
        event_name: &str,
        year: Option<i32>,
        month: Option<u32>,
    ) -> Self {
        let key_dates = [year.map(|y| y.to_string()), month.map(|m| m.to_string())];
        Self {
            uri: resolver.hashed(
                "presr",
                &[
                    Some(person.as_str()),
                    Some(title),
                    Some(event_name),
                    key_dates[0].as_deref(),
                    key_dates[1].as_deref(),
                ],
            ),
            presentation_uri: resolver.hashed("pres", &[Some(title)]),
            conference_uri: resolver.hashed("conf", &[Some(event_name)]),
            person: person.clone(),
            title: title.to_string(),
            event_name: event_name.to_string(),
            year,
            month,
        }
    }
}

impl GraphEmittable for Presentation {
    fn uri(&self) -> &NamedNode {
        &self.uri
    }

    fn to_graph(&self) -> Graph {
        let mut graph = Graph::new();

        graph.add(self.uri.clone(), vocab::rdf::TYPE, vocab::vivo::PRESENTER_ROLE);

        graph.add(
            self.presentation_uri.clone(),
            vocab::rdf::TYPE,
            vocab::vivo::PRESENTATION,
        );
        graph.add(
            self.presentation_uri.clone(),
            vocab::rdfs::LABEL,
            Literal::new_simple_literal(&self.title),
        );
        graph.add(
            self.uri.clone(),
            vocab::obo::REALIZED_IN,
            self.presentation_uri.clone(),
        );

        graph.add(
            self.conference_uri.clone(),
            vocab::rdf::TYPE,
            vocab::bibo::CONFERENCE,
        );
        graph.add(
            self.conference_uri.clone(),
            vocab::rdfs::LABEL,
            Literal::new_simple_literal(&self.event_name),
        );
        graph.add(
            self.presentation_uri.clone(),
            vocab::obo::PART_OF,
            self.conference_uri.clone(),
        );

        graph.add(self.uri.clone(), vocab::obo::INHERES_IN, self.person.clone());

        // Start only; the feed has no end date for presentations.
        let interval_uri = suffixed(&self.uri, "-interval");
        let start_uri = suffixed(&interval_uri, "-start");
        let start = add_date(&mut graph, &start_uri, self.year, self.month, None, None);
        add_interval(
            &mut graph,
            &interval_uri,
            &self.uri,
            start.then_some(&start_uri),
            None,
        );

        graph
    }
}
