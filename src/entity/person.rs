//! People, their contact cards, and the facilities that house them.

use oxigraph::model::{Literal, NamedNode};

use crate::entity::GraphEmittable;
use crate::graph::Graph;
use crate::ident::IdResolver;
use crate::vocab;

/// Join the non-empty items with a single space.
fn join_nonempty<'a>(items: impl IntoIterator<Item = Option<&'a str>>) -> String {
    let mut joined = String::new();
    for item in items.into_iter().flatten() {
        if item.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push(' ');
        }
        joined.push_str(item);
    }
    joined
}

/// Normalize a phone number to `xxx-xxx-xxxx`, or drop it if it does not
/// have ten digits once separators are removed.
pub fn format_phone(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(|c| !matches!(c, '-' | ' ')).collect();
    if digits.len() == 10 {
        Some(format!("{}-{}-{}", &digits[0..3], &digits[3..6], &digits[6..]))
    } else {
        None
    }
}

/// Language codes the faculty feed uses for known languages.
///
/// Descriptive like the position-code tables, but an unknown code is
/// dropped rather than echoed: the codes are institutional shorthand with
/// no value as a label.
const LANGUAGE_CODES: &[(&str, &str)] = &[
    ("ARAB", "Arabic"),
    ("BENG", "Bengali"),
    ("CHIN", "Chinese"),
    ("FREN", "French"),
    ("GERM", "German"),
    ("HIND", "Hindi/Urdu"),
    ("ITAL", "Italian"),
    ("JAPN", "Japanese"),
    ("KREN", "Korean"),
    ("MAND", "Mandarin"),
    ("PORT", "Portuguese"),
    ("PUNJ", "Punjabi"),
    ("RUSS", "Russian"),
    ("SPAN", "Spanish"),
];

/// The URI a person record resolves to, without building the full entity.
///
/// Stub references (an appointment's person, an authorship's person) only
/// need the URI.
pub fn person_uri(resolver: &IdResolver, person_id: &str) -> NamedNode {
    resolver.hashed("per", &[Some(person_id)])
}

/// A faculty member.
///
/// Key: the institution-assigned person identifier. The contact-card block is
/// emitted only when `emit_contact` is set, so datasets that merely reference
/// a person do not fabricate empty vcards.
#[derive(Debug, Clone)]
pub struct Person {
    uri: NamedNode,
    person_id: String,
    resolver: IdResolver,
    pub emit_contact: bool,
    pub given_name: Option<String>,
    pub middle_name: Option<String>,
    pub family_name: Option<String>,
    pub overview: Option<String>,
    pub research_statement: Option<String>,
    pub home_department: Option<NamedNode>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    /// Comma-separated language codes; unmapped codes are dropped.
    pub languages_known: Option<String>,
    /// Comma-separated language names, asserted verbatim.
    pub languages_other: Option<String>,
    /// Facility housing this person's office, if known.
    pub facility: Option<NamedNode>,
}

impl Person {
    pub fn new(resolver: &IdResolver, person_id: &str) -> Self {
        Self::with_uri(resolver, person_id, person_uri(resolver, person_id))
    }

    /// Alternative scheme: the bare identifier as the URI local name.
    ///
    /// For deployments whose store was loaded with direct person URIs; the
    /// scheme must stay fixed per deployment or diffing against the existing
    /// baseline breaks.
    pub fn with_direct_id(resolver: &IdResolver, person_id: &str) -> Self {
        Self::with_uri(resolver, person_id, resolver.direct(person_id))
    }

    fn with_uri(resolver: &IdResolver, person_id: &str, uri: NamedNode) -> Self {
        Self {
            uri,
            person_id: person_id.to_string(),
            resolver: resolver.clone(),
            emit_contact: false,
            given_name: None,
            middle_name: None,
            family_name: None,
            overview: None,
            research_statement: None,
            home_department: None,
            email: None,
            phone: None,
            fax: None,
            street_address: None,
            city: None,
            state: None,
            postal_code: None,
            country: None,
            languages_known: None,
            languages_other: None,
            facility: None,
        }
    }

    pub fn person_id(&self) -> &str {
        &self.person_id
    }

    /// Name in display order: "Given Middle Family".
    pub fn display_name(&self) -> String {
        join_nonempty([
            self.given_name.as_deref(),
            self.middle_name.as_deref(),
            self.family_name.as_deref(),
        ])
    }

    /// Name in directory order: "Family, Given Middle".
    pub fn directory_name(&self) -> String {
        let rest = join_nonempty([self.given_name.as_deref(), self.middle_name.as_deref()]);
        match self.family_name.as_deref().filter(|f| !f.is_empty()) {
            Some(family) if !rest.is_empty() => format!("{family}, {rest}"),
            Some(family) => family.to_string(),
            None => rest,
        }
    }

    /// Research areas split out of the free-text statement.
    ///
    /// Split on `;` first; a statement without semicolons splits on `,`
    /// instead. Each area's label is capitalized.
    fn research_areas(&self) -> Vec<&str> {
        let Some(statement) = self.research_statement.as_deref() else {
            return Vec::new();
        };
        let mut areas: Vec<&str> = statement.split(';').map(str::trim).collect();
        if areas.len() == 1 {
            areas = statement.split(',').map(str::trim).collect();
        }
        areas.into_iter().filter(|a| !a.is_empty()).collect()
    }

    /// Languages the person is expert in: mapped codes plus verbatim names.
    fn languages(&self) -> Vec<&str> {
        let mut languages = Vec::new();
        if let Some(known) = self.languages_known.as_deref() {
            for code in known.split(',').map(str::trim) {
                if let Some((_, name)) = LANGUAGE_CODES.iter().find(|(c, _)| *c == code) {
                    languages.push(*name);
                }
            }
        }
        if let Some(other) = self.languages_other.as_deref() {
            languages.extend(other.split(',').map(str::trim).filter(|l| !l.is_empty()));
        }
        languages
    }

    fn contact_block(&self, graph: &mut Graph) {
        let vcard_uri = self.resolver.direct(&format!("{}-vcard", self.person_id));
        graph.add(vcard_uri.clone(), vocab::rdf::TYPE, vocab::vcard::INDIVIDUAL);
        graph.add(
            vcard_uri.clone(),
            vocab::obo::CONTACT_INFO_FOR,
            self.uri.clone(),
        );

        let name_uri = self.resolver.direct(&format!("{}-vcard-name", self.person_id));
        graph.add(name_uri.clone(), vocab::rdf::TYPE, vocab::vcard::NAME);
        graph.add(vcard_uri.clone(), vocab::vcard::HAS_NAME, name_uri.clone());
        if let Some(given) = &self.given_name {
            graph.add(
                name_uri.clone(),
                vocab::vcard::GIVEN_NAME,
                Literal::new_simple_literal(given),
            );
        }
        if let Some(middle) = &self.middle_name {
            graph.add(
                name_uri.clone(),
                vocab::vcard::MIDDLE_NAME,
                Literal::new_simple_literal(middle),
            );
        }
        if let Some(family) = &self.family_name {
            graph.add(
                name_uri.clone(),
                vocab::vcard::FAMILY_NAME,
                Literal::new_simple_literal(family),
            );
        }

        if let Some(email) = &self.email {
            let email_uri = self.resolver.direct(&format!("{}-vcard-email", self.person_id));
            graph.add(email_uri.clone(), vocab::rdf::TYPE, vocab::vcard::EMAIL);
            graph.add(email_uri.clone(), vocab::rdf::TYPE, vocab::vcard::WORK);
            graph.add(vcard_uri.clone(), vocab::vcard::HAS_EMAIL, email_uri.clone());
            graph.add(
                email_uri,
                vocab::vcard::EMAIL_VALUE,
                Literal::new_simple_literal(email),
            );
        }

        if let Some(phone) = &self.phone {
            let phone_uri = self.resolver.direct(&format!("{}-vcard-phone", self.person_id));
            graph.add(phone_uri.clone(), vocab::rdf::TYPE, vocab::vcard::TELEPHONE);
            graph.add(phone_uri.clone(), vocab::rdf::TYPE, vocab::vcard::WORK);
            graph.add(phone_uri.clone(), vocab::rdf::TYPE, vocab::vcard::VOICE);
            graph.add(
                vcard_uri.clone(),
                vocab::vcard::HAS_TELEPHONE,
                phone_uri.clone(),
            );
            graph.add(
                phone_uri,
                vocab::vcard::TELEPHONE_VALUE,
                Literal::new_simple_literal(phone),
            );
        }

        if let Some(fax) = &self.fax {
            let fax_uri = self.resolver.direct(&format!("{}-vcard-fax", self.person_id));
            graph.add(fax_uri.clone(), vocab::rdf::TYPE, vocab::vcard::TELEPHONE);
            graph.add(fax_uri.clone(), vocab::rdf::TYPE, vocab::vcard::WORK);
            graph.add(fax_uri.clone(), vocab::rdf::TYPE, vocab::vcard::FAX);
            graph.add(
                vcard_uri.clone(),
                vocab::vcard::HAS_TELEPHONE,
                fax_uri.clone(),
            );
            graph.add(
                fax_uri,
                vocab::vcard::TELEPHONE_VALUE,
                Literal::new_simple_literal(fax),
            );
        }

        // A usable address needs at least street, city, and postal code.
        if let (Some(street), Some(city), Some(postal)) = (
            self.street_address.as_deref(),
            self.city.as_deref(),
            self.postal_code.as_deref(),
        ) {
            let address_uri = self
                .resolver
                .direct(&format!("{}-vcard-address", self.person_id));
            graph.add(address_uri.clone(), vocab::rdf::TYPE, vocab::vcard::ADDRESS);
            graph.add(address_uri.clone(), vocab::rdf::TYPE, vocab::vcard::WORK);
            graph.add(vcard_uri, vocab::vcard::HAS_ADDRESS, address_uri.clone());
            graph.add(
                address_uri.clone(),
                vocab::vcard::STREET_ADDRESS,
                Literal::new_simple_literal(street),
            );
            graph.add(
                address_uri.clone(),
                vocab::vcard::LOCALITY,
                Literal::new_simple_literal(city),
            );
            if let Some(state) = &self.state {
                graph.add(
                    address_uri.clone(),
                    vocab::vcard::REGION,
                    Literal::new_simple_literal(state),
                );
            }
            graph.add(
                address_uri.clone(),
                vocab::vcard::POSTAL_CODE,
                Literal::new_simple_literal(postal),
            );
            graph.add(
                address_uri,
                vocab::vcard::COUNTRY,
                Literal::new_simple_literal(self.country.as_deref().unwrap_or("USA")),
            );
        }
    }
}

impl GraphEmittable for Person {
    fn uri(&self) -> &NamedNode {
        &self.uri
    }

    fn to_graph(&self) -> Graph {
        let mut graph = Graph::new();

        graph.add(self.uri.clone(), vocab::rdf::TYPE, vocab::vivo::FACULTY_MEMBER);
        let display_name = self.display_name();
        if !display_name.is_empty() {
            graph.add(
                self.uri.clone(),
                vocab::rdfs::LABEL,
                Literal::new_simple_literal(display_name),
            );
        }
        if let Some(overview) = &self.overview {
            graph.add(
                self.uri.clone(),
                vocab::vivo::OVERVIEW,
                Literal::new_simple_literal(overview),
            );
        }

        for area in self.research_areas() {
            let area_uri = self.resolver.hashed("resarea", &[Some(area)]);
            let mut chars = area.chars();
            let label = match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => continue,
            };
            graph.add(area_uri.clone(), vocab::rdf::TYPE, vocab::skos::CONCEPT);
            graph.add(
                area_uri.clone(),
                vocab::rdfs::LABEL,
                Literal::new_simple_literal(label),
            );
            graph.add(self.uri.clone(), vocab::vivo::HAS_RESEARCH_AREA, area_uri);
        }

        for language in self.languages() {
            let language_uri = self.resolver.hashed("lang", &[Some(language)]);
            graph.add(language_uri.clone(), vocab::rdf::TYPE, vocab::lingvoj::LINGVO);
            graph.add(
                language_uri.clone(),
                vocab::rdfs::LABEL,
                Literal::new_simple_literal(language),
            );
            graph.add(
                self.uri.clone(),
                vocab::lingvoj::EXPERT_UNDERSTANDING,
                language_uri,
            );
        }

        if let Some(department) = &self.home_department {
            graph.add(self.uri.clone(), vocab::local::HOME_DEPT, department.clone());
        }

        if self.emit_contact {
            self.contact_block(&mut graph);
        }

        if let Some(facility) = &self.facility {
            graph.add(facility.clone(), vocab::obo::LOCATION_OF, self.uri.clone());
        }

        graph
    }
}

/// A building, or a room within one.
///
/// Key: (building name, optional room number). Without a room the facility
/// URI is the building's own.
#[derive(Debug, Clone)]
pub struct Facility {
    uri: NamedNode,
    building_uri: NamedNode,
    building_name: String,
    room_number: Option<String>,
}

impl Facility {
    pub fn new(resolver: &IdResolver, building_name: &str, room_number: Option<&str>) -> Self {
        Self {
            uri: resolver.hashed("site", &[Some(building_name), room_number]),
            building_uri: resolver.hashed("site", &[Some(building_name)]),
            building_name: building_name.to_string(),
            room_number: room_number.map(str::to_string),
        }
    }
}

impl GraphEmittable for Facility {
    fn uri(&self) -> &NamedNode {
        &self.uri
    }

    fn to_graph(&self) -> Graph {
        let mut graph = Graph::new();
        graph.add(
            self.building_uri.clone(),
            vocab::rdf::TYPE,
            vocab::vivo::BUILDING,
        );
        graph.add(
            self.building_uri.clone(),
            vocab::rdfs::LABEL,
            Literal::new_simple_literal(&self.building_name),
        );
        if let Some(room) = &self.room_number {
            graph.add(self.uri.clone(), vocab::rdf::TYPE, vocab::vivo::ROOM);
            graph.add(
                self.uri.clone(),
                vocab::obo::PART_OF,
                self.building_uri.clone(),
            );
            graph.add(
                self.uri.clone(),
                vocab::rdfs::LABEL,
                Literal::new_simple_literal(format!("{} {}", self.building_name, room)),
            );
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxigraph::model::Term;

    fn resolver() -> IdResolver {
        IdResolver::new("http://vivo.example.edu/individual/").unwrap()
    }

    fn labels(graph: &Graph) -> Vec<String> {
        graph
            .iter()
            .filter_map(|t| match &t.object {
                Term::Literal(l) => Some(l.value().to_string()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn bare_person_emits_type_only() {
        let p = Person::new(&resolver(), "1000123");
        let g = p.to_graph();
        assert_eq!(g.len(), 1);
        assert!(g.iter().any(|t| t.object == vocab::vivo::FACULTY_MEMBER.into()));
    }

    #[test]
    fn name_orderings_derive_from_same_fields() {
        let mut p = Person::new(&resolver(), "1000123");
        p.given_name = Some("Ada".into());
        p.middle_name = Some("King".into());
        p.family_name = Some("Lovelace".into());
        assert_eq!(p.display_name(), "Ada King Lovelace");
        assert_eq!(p.directory_name(), "Lovelace, Ada King");

        p.middle_name = None;
        assert_eq!(p.display_name(), "Ada Lovelace");
        assert_eq!(p.directory_name(), "Lovelace, Ada");

        p.given_name = None;
        assert_eq!(p.directory_name(), "Lovelace");
    }

    #[test]
    fn contact_block_only_when_requested() {
        let mut p = Person::new(&resolver(), "1000123");
        p.email = Some("alovelace@example.edu".into());
        assert!(!p.to_graph().iter().any(|t| {
            t.object == vocab::vcard::INDIVIDUAL.into()
        }));

        p.emit_contact = true;
        let g = p.to_graph();
        assert!(g.iter().any(|t| t.object == vocab::vcard::INDIVIDUAL.into()));
        assert!(labels(&g).contains(&"alovelace@example.edu".to_string()));
    }

    #[test]
    fn address_requires_street_city_postal() {
        let mut p = Person::new(&resolver(), "1000123");
        p.emit_contact = true;
        p.street_address = Some("2121 I St NW".into());
        p.city = Some("Washington".into());
        // No postal code: no address vcard.
        assert!(!p.to_graph().iter().any(|t| t.object == vocab::vcard::ADDRESS.into()));

        p.postal_code = Some("20052".into());
        let g = p.to_graph();
        assert!(g.iter().any(|t| t.object == vocab::vcard::ADDRESS.into()));
        // Country defaults when unset.
        assert!(labels(&g).contains(&"USA".to_string()));
    }

    #[test]
    fn research_statement_splits_on_semicolon_then_comma() {
        let mut p = Person::new(&resolver(), "1000123");
        p.research_statement = Some("machine learning; graph theory".into());
        let g = p.to_graph();
        let labels = labels(&g);
        assert!(labels.contains(&"Machine learning".to_string()));
        assert!(labels.contains(&"Graph theory".to_string()));

        p.research_statement = Some("algebra, topology".into());
        let labels = labels_of(&p);
        assert!(labels.contains(&"Algebra".to_string()));
        assert!(labels.contains(&"Topology".to_string()));
    }

    fn labels_of(p: &Person) -> Vec<String> {
        labels(&p.to_graph())
    }

    #[test]
    fn language_codes_map_and_unknown_codes_drop() {
        let mut p = Person::new(&resolver(), "1000123");
        p.languages_known = Some("FREN, XXXX,GERM".into());
        p.languages_other = Some("Welsh".into());
        let g = p.to_graph();
        let labels = labels(&g);
        assert!(labels.contains(&"French".to_string()));
        assert!(labels.contains(&"German".to_string()));
        assert!(labels.contains(&"Welsh".to_string()));
        assert!(!labels.contains(&"XXXX".to_string()));
        assert!(g
            .iter()
            .any(|t| t.predicate == vocab::lingvoj::EXPERT_UNDERSTANDING.into_owned()));
    }

    #[test]
    fn facility_without_room_is_just_the_building() {
        let r = resolver();
        let f = Facility::new(&r, "Science Hall", None);
        assert_eq!(f.uri(), &r.hashed("site", &[Some("Science Hall")]));
        let g = f.to_graph();
        assert_eq!(g.len(), 2);
        assert!(!g.iter().any(|t| t.object == vocab::vivo::ROOM.into()));
    }

    #[test]
    fn facility_with_room_is_part_of_building() {
        let r = resolver();
        let f = Facility::new(&r, "Science Hall", Some("301"));
        let g = f.to_graph();
        assert!(g.iter().any(|t| t.object == vocab::vivo::ROOM.into()));
        assert!(labels(&g).contains(&"Science Hall 301".to_string()));
    }

    #[test]
    fn phone_formatting() {
        assert_eq!(format_phone("202 994 1000"), Some("202-994-1000".into()));
        assert_eq!(format_phone("202-994-1000"), Some("202-994-1000".into()));
        assert_eq!(format_phone("994-1000"), None);
    }
}
