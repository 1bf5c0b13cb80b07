//! Scholarly documents and patents.
//!
//! One generic [`Document`] shape specialized by [`DocumentKind`], a closed
//! tagged variant carrying per-kind configuration: the asserted class, the
//! venue relation (publication venue, publisher, distributor, or none), and
//! for conference-linked kinds the presented-at event class.

use oxigraph::model::{Literal, NamedNode, NamedNodeRef};

use crate::date::add_date;
use crate::entity::GraphEmittable;
use crate::graph::Graph;
use crate::ident::{suffixed, IdResolver};
use crate::vocab;

/// How a document relates to the place it appeared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VenueRelation {
    /// No venue relation for this kind.
    None,
    /// `hasPublicationVenue` to a venue resource of the given class.
    PublicationVenue(NamedNodeRef<'static>),
    /// `publisher` to an organization reference.
    Publisher,
    /// `distributor` to an organization reference.
    Distributor,
}

/// The closed set of document subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Generic,
    Book,
    Article,
    AcademicArticle,
    ArticleAbstract,
    Review,
    /// Entry in a dictionary or encyclopedia.
    ReferenceEntry,
    Letter,
    Chapter,
    Report,
    ConferencePaper,
    ConferencePoster,
    ConferenceAbstract,
    /// Written testimony presented at a hearing.
    Testimony,
}

impl DocumentKind {
    /// The RDF class asserted for this kind.
    pub fn class(self) -> NamedNodeRef<'static> {
        match self {
            DocumentKind::Generic | DocumentKind::Testimony => vocab::bibo::DOCUMENT,
            DocumentKind::Book => vocab::bibo::BOOK,
            DocumentKind::Article | DocumentKind::ReferenceEntry => vocab::bibo::ARTICLE,
            DocumentKind::AcademicArticle => vocab::bibo::ACADEMIC_ARTICLE,
            DocumentKind::ArticleAbstract | DocumentKind::ConferenceAbstract => {
                vocab::vivo::ABSTRACT
            }
            DocumentKind::Review => vocab::vivo::REVIEW,
            DocumentKind::Letter => vocab::bibo::LETTER,
            DocumentKind::Chapter => vocab::bibo::CHAPTER,
            DocumentKind::Report => vocab::bibo::REPORT,
            DocumentKind::ConferencePaper => vocab::vivo::CONFERENCE_PAPER,
            DocumentKind::ConferencePoster => vocab::vivo::CONFERENCE_POSTER,
        }
    }

    fn venue_relation(self) -> VenueRelation {
        match self {
            DocumentKind::Book => VenueRelation::Publisher,
            DocumentKind::Report => VenueRelation::Distributor,
            DocumentKind::Article => VenueRelation::PublicationVenue(vocab::bibo::PERIODICAL),
            DocumentKind::AcademicArticle
            | DocumentKind::ArticleAbstract
            | DocumentKind::Review
            | DocumentKind::Letter => VenueRelation::PublicationVenue(vocab::bibo::JOURNAL),
            DocumentKind::ReferenceEntry => {
                VenueRelation::PublicationVenue(vocab::bibo::REFERENCE_SOURCE)
            }
            DocumentKind::Chapter => VenueRelation::PublicationVenue(vocab::bibo::BOOK),
            DocumentKind::Generic
            | DocumentKind::ConferencePaper
            | DocumentKind::ConferencePoster
            | DocumentKind::ConferenceAbstract
            | DocumentKind::Testimony => VenueRelation::None,
        }
    }

    /// The class of the presented-at event, for kinds that are delivered at
    /// one.
    fn event_class(self) -> Option<NamedNodeRef<'static>> {
        match self {
            DocumentKind::ConferencePaper
            | DocumentKind::ConferencePoster
            | DocumentKind::ConferenceAbstract => Some(vocab::bibo::CONFERENCE),
            DocumentKind::Testimony => Some(vocab::bibo::HEARING),
            _ => None,
        }
    }
}

/// Key: (person, title, asserted class) — the same title by the same author
/// as both an article and a chapter yields two documents.
#[derive(Debug, Clone)]
pub struct Document {
    uri: NamedNode,
    kind: DocumentKind,
    person: NamedNode,
    title: String,
    resolver: IdResolver,
    pub start_year: Option<i32>,
    pub start_month: Option<u32>,
    /// Publication venue name, for kinds with a publication-venue relation.
    pub venue: Option<String>,
    /// Publisher organization reference (books).
    pub publisher: Option<NamedNode>,
    /// Distributor organization reference (reports).
    pub distributor: Option<NamedNode>,
    /// Name of the event this was presented at (conference kinds, testimony).
    pub event: Option<String>,
}

impl Document {
    pub fn new(resolver: &IdResolver, kind: DocumentKind, person: &NamedNode, title: &str) -> Self {
        let uri = resolver.hashed(
            "doc",
            &[Some(person.as_str()), Some(title), Some(kind.class().as_str())],
        );
        Self {
            uri,
            kind,
            person: person.clone(),
            title: title.to_string(),
            resolver: resolver.clone(),
            start_year: None,
            start_month: None,
            venue: None,
            publisher: None,
            distributor: None,
            event: None,
        }
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }
}

impl GraphEmittable for Document {
    fn uri(&self) -> &NamedNode {
        &self.uri
    }

    fn to_graph(&self) -> Graph {
        let mut graph = Graph::new();

        graph.add(self.uri.clone(), vocab::rdf::TYPE, self.kind.class());
        graph.add(
            self.uri.clone(),
            vocab::rdfs::LABEL,
            Literal::new_simple_literal(&self.title),
        );

        // Author linked through an Authorship context resource.
        let authorship_uri = suffixed(&self.uri, "-auth");
        graph.add(
            authorship_uri.clone(),
            vocab::rdf::TYPE,
            vocab::vivo::AUTHORSHIP,
        );
        graph.add(authorship_uri.clone(), vocab::vivo::RELATES, self.uri.clone());
        graph.add(authorship_uri, vocab::vivo::RELATES, self.person.clone());

        // The date resource is always linked; its value triples appear only
        // when the date parses.
        let date_uri = suffixed(&self.uri, "-date");
        graph.add(self.uri.clone(), vocab::vivo::DATE_TIME_VALUE, date_uri.clone());
        add_date(
            &mut graph,
            &date_uri,
            self.start_year,
            self.start_month,
            None,
            None,
        );

        match self.kind.venue_relation() {
            VenueRelation::PublicationVenue(venue_class) => {
                if let Some(venue) = &self.venue {
                    let venue_uri = self
                        .resolver
                        .hashed("jrnl", &[Some(venue_class.as_str()), Some(venue)]);
                    graph.add(venue_uri.clone(), vocab::rdf::TYPE, venue_class);
                    graph.add(
                        venue_uri.clone(),
                        vocab::rdfs::LABEL,
                        Literal::new_simple_literal(venue),
                    );
                    graph.add(
                        self.uri.clone(),
                        vocab::vivo::HAS_PUBLICATION_VENUE,
                        venue_uri,
                    );
                }
            }
            VenueRelation::Publisher => {
                if let Some(publisher) = &self.publisher {
                    graph.add(self.uri.clone(), vocab::vivo::PUBLISHER, publisher.clone());
                }
            }
            VenueRelation::Distributor => {
                if let Some(distributor) = &self.distributor {
                    graph.add(
                        self.uri.clone(),
                        vocab::bibo::DISTRIBUTOR,
                        distributor.clone(),
                    );
                }
            }
            VenueRelation::None => {}
        }

        if let (Some(event_class), Some(event)) = (self.kind.event_class(), &self.event) {
            let event_uri = self.resolver.hashed("conf", &[Some(event.as_str())]);
            graph.add(event_uri.clone(), vocab::rdf::TYPE, event_class);
            graph.add(
                event_uri.clone(),
                vocab::rdfs::LABEL,
                Literal::new_simple_literal(event),
            );
            graph.add(self.uri.clone(), vocab::bibo::PRESENTED_AT, event_uri);
        }

        graph
    }
}

/// Key: (person, title). The assignee relation is direct, not mediated by an
/// authorship resource.
#[derive(Debug, Clone)]
pub struct Patent {
    uri: NamedNode,
    person: NamedNode,
    title: String,
    pub patent_number: Option<String>,
    pub start_year: Option<i32>,
    pub start_month: Option<u32>,
}

impl Patent {
    pub fn new(resolver: &IdResolver, person: &NamedNode, title: &str) -> Self {
        Self {
            uri: resolver.hashed("pat", &[Some(person.as_str()), Some(title)]),
            person: person.clone(),
            title: title.to_string(),
            patent_number: None,
            start_year: None,
            start_month: None,
        }
    }
}

impl GraphEmittable for Patent {
    fn uri(&self) -> &NamedNode {
        &self.uri
    }

    fn to_graph(&self) -> Graph {
        let mut graph = Graph::new();
        graph.add(self.uri.clone(), vocab::rdf::TYPE, vocab::bibo::PATENT);
        graph.add(self.uri.clone(), vocab::vivo::ASSIGNEE, self.person.clone());
        graph.add(
            self.uri.clone(),
            vocab::rdfs::LABEL,
            Literal::new_simple_literal(&self.title),
        );
        if let Some(number) = &self.patent_number {
            graph.add(
                self.uri.clone(),
                vocab::vivo::PATENT_NUMBER,
                Literal::new_simple_literal(number),
            );
        }
        let date_uri = suffixed(&self.uri, "-date");
        graph.add(self.uri.clone(), vocab::vivo::DATE_TIME_VALUE, date_uri.clone());
        add_date(
            &mut graph,
            &date_uri,
            self.start_year,
            self.start_month,
            None,
            None,
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

    fn doc(kind: DocumentKind) -> Document {
        let r = resolver();
        Document::new(&r, kind, &person_uri(&r, "1000123"), "On Things")
    }

    #[test]
    fn subtype_is_part_of_the_key() {
        assert_ne!(
            doc(DocumentKind::Article).uri(),
            doc(DocumentKind::Chapter).uri()
        );
    }

    #[test]
    fn minimal_document_emits_class_label_authorship_and_date_link() {
        let g = doc(DocumentKind::Generic).to_graph();
        assert!(g.iter().any(|t| t.object == vocab::bibo::DOCUMENT.into()));
        assert!(g.iter().any(|t| t.object == vocab::vivo::AUTHORSHIP.into()));
        // Date link present even though no date value triples are.
        assert!(g
            .iter()
            .any(|t| t.predicate == vocab::vivo::DATE_TIME_VALUE.into_owned()));
        assert!(!g
            .iter()
            .any(|t| t.predicate == vocab::vivo::DATE_TIME_PRECISION.into_owned()));
    }

    #[test]
    fn academic_article_venue_is_a_journal() {
        let mut d = doc(DocumentKind::AcademicArticle);
        d.venue = Some("Journal of Things".into());
        let g = d.to_graph();
        assert!(g.iter().any(|t| t.object == vocab::bibo::JOURNAL.into()));
        assert!(g
            .iter()
            .any(|t| t.predicate == vocab::vivo::HAS_PUBLICATION_VENUE.into_owned()));
    }

    #[test]
    fn venue_class_distinguishes_venue_resources() {
        let mut article = doc(DocumentKind::AcademicArticle);
        article.venue = Some("Things".into());
        let mut entry = doc(DocumentKind::ReferenceEntry);
        entry.venue = Some("Things".into());

        let journal_venues: Vec<_> = article
            .to_graph()
            .iter()
            .filter(|t| t.predicate == vocab::vivo::HAS_PUBLICATION_VENUE.into_owned())
            .map(|t| t.object.clone())
            .collect();
        let reference_venues: Vec<_> = entry
            .to_graph()
            .iter()
            .filter(|t| t.predicate == vocab::vivo::HAS_PUBLICATION_VENUE.into_owned())
            .map(|t| t.object.clone())
            .collect();
        assert_ne!(journal_venues, reference_venues);
    }

    #[test]
    fn book_venue_is_a_publisher_reference() {
        let r = resolver();
        let mut d = doc(DocumentKind::Book);
        let press = r.hashed("org", &[Some("Acme Press")]);
        d.publisher = Some(press.clone());
        // A venue name is ignored for kinds without a publication-venue
        // relation.
        d.venue = Some("ignored".into());
        let g = d.to_graph();
        assert!(g.iter().any(|t| {
            t.predicate == vocab::vivo::PUBLISHER.into_owned() && t.object == press.clone().into()
        }));
        assert!(!g
            .iter()
            .any(|t| t.predicate == vocab::vivo::HAS_PUBLICATION_VENUE.into_owned()));
    }

    #[test]
    fn conference_paper_is_presented_at_a_conference() {
        let mut d = doc(DocumentKind::ConferencePaper);
        d.event = Some("Annual Meeting".into());
        let g = d.to_graph();
        assert!(g.iter().any(|t| t.object == vocab::bibo::CONFERENCE.into()));
        assert!(g
            .iter()
            .any(|t| t.predicate == vocab::bibo::PRESENTED_AT.into_owned()));
    }

    #[test]
    fn testimony_is_presented_at_a_hearing() {
        let mut d = doc(DocumentKind::Testimony);
        d.event = Some("Senate Committee on Things".into());
        let g = d.to_graph();
        assert!(g.iter().any(|t| t.object == vocab::bibo::HEARING.into()));
        assert!(g.iter().any(|t| t.object == vocab::bibo::DOCUMENT.into()));
    }

    #[test]
    fn patent_relates_assignee_directly() {
        let r = resolver();
        let person = person_uri(&r, "1000123");
        let mut p = Patent::new(&r, &person, "Widget");
        p.patent_number = Some("9876543".into());
        let g = p.to_graph();
        assert!(g.iter().any(|t| {
            t.predicate == vocab::vivo::ASSIGNEE.into_owned() && t.object == person.clone().into()
        }));
        assert!(!g.iter().any(|t| t.object == vocab::vivo::AUTHORSHIP.into()));
        assert!(g
            .iter()
            .any(|t| t.predicate == vocab::vivo::PATENT_NUMBER.into_owned()));
    }
}
