//! Ontology vocabularies used by the entity model.
//!
//! Constant [`NamedNodeRef`] tables per namespace, plus [`Namespaces`], the
//! explicit prefix map handed to the baseline serializer. The prefix map is a
//! plain value passed where it is needed; nothing here is process-global.

use oxigraph::model::NamedNodeRef;

/// RDF syntax namespace.
pub mod rdf {
    use super::NamedNodeRef;

    pub const TYPE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
}

/// RDF Schema namespace.
pub mod rdfs {
    use super::NamedNodeRef;

    pub const LABEL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2000/01/rdf-schema#label");
}

/// XML Schema datatypes.
pub mod xsd {
    use super::NamedNodeRef;

    pub const DATE_TIME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2001/XMLSchema#dateTime");
}

/// FOAF namespace.
pub mod foaf {
    use super::NamedNodeRef;

    pub const ORGANIZATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://xmlns.com/foaf/0.1/Organization");
}

/// SKOS namespace.
pub mod skos {
    use super::NamedNodeRef;

    pub const CONCEPT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#Concept");
}

/// vCard ontology namespace.
pub mod vcard {
    use super::NamedNodeRef;

    const NS: &str = "http://www.w3.org/2006/vcard/ns#";

    macro_rules! term {
        ($name:ident, $local:literal) => {
            pub const $name: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(concat!(
                "http://www.w3.org/2006/vcard/ns#",
                $local
            ));
        };
    }

    term!(INDIVIDUAL, "Individual");
    term!(NAME, "Name");
    term!(EMAIL, "Email");
    term!(TELEPHONE, "Telephone");
    term!(ADDRESS, "Address");
    term!(WORK, "Work");
    term!(VOICE, "Voice");
    term!(FAX, "Fax");
    term!(HAS_NAME, "hasName");
    term!(HAS_EMAIL, "hasEmail");
    term!(HAS_TELEPHONE, "hasTelephone");
    term!(HAS_ADDRESS, "hasAddress");
    term!(GIVEN_NAME, "givenName");
    term!(MIDDLE_NAME, "middleName");
    term!(FAMILY_NAME, "familyName");
    term!(EMAIL_VALUE, "email");
    term!(TELEPHONE_VALUE, "telephone");
    term!(STREET_ADDRESS, "streetAddress");
    term!(LOCALITY, "locality");
    term!(REGION, "region");
    term!(POSTAL_CODE, "postalCode");
    term!(COUNTRY, "country");

    /// Namespace IRI, for the prefix map.
    pub const IRI: &str = NS;
}

/// OBO Foundry relations and classes (opaque numeric IRIs; names say what we
/// use them for).
pub mod obo {
    use super::NamedNodeRef;

    macro_rules! term {
        ($name:ident, $local:literal) => {
            pub const $name: NamedNodeRef<'_> =
                NamedNodeRef::new_unchecked(concat!("http://purl.obolibrary.org/obo/", $local));
        };
    }

    /// ARG_2000029 — contact information for.
    term!(CONTACT_INFO_FOR, "ARG_2000029");
    /// BFO_0000050 — part of.
    term!(PART_OF, "BFO_0000050");
    /// BFO_0000054 — realized in.
    term!(REALIZED_IN, "BFO_0000054");
    /// BFO_0000023 — role (the bare role class).
    term!(ROLE, "BFO_0000023");
    /// RO_0000052 — inheres in.
    term!(INHERES_IN, "RO_0000052");
    /// RO_0000057 — has participant.
    term!(HAS_PARTICIPANT, "RO_0000057");
    /// RO_0001015 — location of.
    term!(LOCATION_OF, "RO_0001015");
    /// RO_0002353 — output of.
    term!(OUTPUT_OF, "RO_0002353");
    /// ERO_0000012 — service provider role.
    term!(SERVICE_PROVIDER_ROLE, "ERO_0000012");

    pub const IRI: &str = "http://purl.obolibrary.org/obo/";
}

/// Bibliographic ontology namespace.
pub mod bibo {
    use super::NamedNodeRef;

    macro_rules! term {
        ($name:ident, $local:literal) => {
            pub const $name: NamedNodeRef<'_> =
                NamedNodeRef::new_unchecked(concat!("http://purl.org/ontology/bibo/", $local));
        };
    }

    term!(DOCUMENT, "Document");
    term!(BOOK, "Book");
    term!(ARTICLE, "Article");
    term!(ACADEMIC_ARTICLE, "AcademicArticle");
    term!(CHAPTER, "Chapter");
    term!(LETTER, "Letter");
    term!(REPORT, "Report");
    term!(PATENT, "Patent");
    term!(JOURNAL, "Journal");
    term!(PERIODICAL, "Periodical");
    term!(REFERENCE_SOURCE, "ReferenceSource");
    term!(CONFERENCE, "Conference");
    term!(HEARING, "Hearing");
    term!(DISTRIBUTOR, "distributor");
    term!(PRESENTED_AT, "presentedAt");

    pub const IRI: &str = "http://purl.org/ontology/bibo/";
}

/// VIVO core ontology namespace.
pub mod vivo {
    use super::NamedNodeRef;

    macro_rules! term {
        ($name:ident, $local:literal) => {
            pub const $name: NamedNodeRef<'_> =
                NamedNodeRef::new_unchecked(concat!("http://vivoweb.org/ontology/core#", $local));
        };
    }

    // People and organizations
    term!(FACULTY_MEMBER, "FacultyMember");
    term!(OVERVIEW, "overview");
    term!(HAS_RESEARCH_AREA, "hasResearchArea");
    term!(UNIVERSITY, "University");
    term!(COLLEGE, "College");
    term!(ACADEMIC_DEPARTMENT, "AcademicDepartment");
    term!(DEPARTMENT, "Department");
    term!(BUILDING, "Building");
    term!(ROOM, "Room");

    // Relationships
    term!(RELATED_BY, "relatedBy");
    term!(RELATES, "relates");
    term!(ASSIGNED_BY, "assignedBy");
    term!(ROLE_CONTRIBUTES_TO, "roleContributesTo");

    // Positions
    term!(FACULTY_POSITION, "FacultyPosition");
    term!(FACULTY_ADMIN_POSITION, "FacultyAdministrativePosition");

    // Dates
    term!(DATE_TIME_VALUE_CLASS, "DateTimeValue");
    term!(DATE_TIME_INTERVAL, "DateTimeInterval");
    term!(DATE_TIME_VALUE, "dateTimeValue");
    term!(HAS_DATE_TIME_INTERVAL, "dateTimeInterval");
    term!(DATE_TIME_PRECISION, "dateTimePrecision");
    term!(YEAR_PRECISION, "yearPrecision");
    term!(YEAR_MONTH_PRECISION, "yearMonthPrecision");
    term!(YEAR_MONTH_DAY_PRECISION, "yearMonthDayPrecision");
    term!(DATE_TIME, "dateTime");
    term!(INTERVAL_START, "start");
    term!(INTERVAL_END, "end");

    // Scholarship
    term!(AUTHORSHIP, "Authorship");
    term!(HAS_PUBLICATION_VENUE, "hasPublicationVenue");
    term!(PUBLISHER, "publisher");
    term!(ABSTRACT, "Abstract");
    term!(REVIEW, "Review");
    term!(CONFERENCE_PAPER, "ConferencePaper");
    term!(CONFERENCE_POSTER, "ConferencePoster");
    term!(ASSIGNEE, "assignee");
    term!(PATENT_NUMBER, "patentNumber");

    // Grants
    term!(GRANT, "Grant");
    term!(PRINCIPAL_INVESTIGATOR_ROLE, "PrincipalInvestigatorRole");
    term!(CO_PRINCIPAL_INVESTIGATOR_ROLE, "CoPrincipalInvestigatorRole");
    term!(RESEARCHER_ROLE, "ResearcherRole");
    term!(TOTAL_AWARD_AMOUNT, "totalAwardAmount");

    // Education
    term!(AWARDED_DEGREE, "AwardedDegree");
    term!(ACADEMIC_DEGREE, "AcademicDegree");
    term!(EDUCATIONAL_PROCESS, "EducationalProcess");
    term!(MAJOR_FIELD, "majorField");
    term!(POSTDOCTORAL_TRAINING, "PostdoctoralTraining");
    term!(SUPPLEMENTAL_INFORMATION, "supplementalInformation");

    // Teaching and service
    term!(TEACHER_ROLE, "TeacherRole");
    term!(COURSE, "Course");
    term!(AWARD_RECEIPT, "AwardReceipt");
    term!(AWARD, "Award");
    term!(REVIEWER_ROLE, "ReviewerRole");
    term!(PRESENTER_ROLE, "PresenterRole");
    term!(PRESENTATION, "Presentation");

    pub const IRI: &str = "http://vivoweb.org/ontology/core#";
}

/// Lingvoj language ontology, for language expertise.
pub mod lingvoj {
    use super::NamedNodeRef;

    pub const LINGVO: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.lingvoj.org/ontology#Lingvo");
    pub const EXPERT_UNDERSTANDING: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.lingvoj.org/ontology#expertUnderstanding");

    pub const IRI: &str = "http://www.lingvoj.org/ontology#";
}

/// Local extension ontology (institution-specific classes and properties).
pub mod local {
    use super::NamedNodeRef;

    pub const HOME_DEPT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://vivo.example.edu/ontology/local#homeDept");
    pub const INSTITUTIONAL_INTERNAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://vivo.example.edu/ontology/local#InstitutionalInternal");

    pub const IRI: &str = "http://vivo.example.edu/ontology/local#";
}

/// Prefix map handed to the graph serializer.
///
/// An explicit value rather than a module-global table, so independent dataset
/// runs can carry different maps.
#[derive(Debug, Clone)]
pub struct Namespaces {
    bindings: Vec<(String, String)>,
}

impl Namespaces {
    /// The standard binding set for baseline files.
    pub fn standard() -> Self {
        Self {
            bindings: vec![
                ("vivo".into(), vivo::IRI.into()),
                ("bibo".into(), bibo::IRI.into()),
                ("vcard".into(), vcard::IRI.into()),
                ("obo".into(), obo::IRI.into()),
                ("foaf".into(), "http://xmlns.com/foaf/0.1/".into()),
                ("skos".into(), "http://www.w3.org/2004/02/skos/core#".into()),
                ("lingvoj".into(), lingvoj::IRI.into()),
                ("local".into(), local::IRI.into()),
            ],
        }
    }

    /// An empty map (N-Triples-style output, no prefixes).
    pub fn none() -> Self {
        Self { bindings: vec![] }
    }

    /// Add or replace a binding.
    pub fn bind(&mut self, prefix: impl Into<String>, iri: impl Into<String>) {
        let prefix = prefix.into();
        self.bindings.retain(|(p, _)| *p != prefix);
        self.bindings.push((prefix, iri.into()));
    }

    /// Iterate over `(prefix, iri)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings.iter().map(|(p, i)| (p.as_str(), i.as_str()))
    }
}
