//! Sponsored research grants and the investigator roles they relate.

use oxigraph::model::{Literal, NamedNode, NamedNodeRef};

use crate::date::{add_date, add_interval};
use crate::entity::GraphEmittable;
use crate::error::EntityError;
use crate::graph::Graph;
use crate::ident::{suffixed, IdResolver};
use crate::vocab;

/// Controlled vocabulary for a person's role on a grant.
///
/// The role code is structural: an unmapped code rejects the record outright
/// rather than degrading, unlike the descriptive membership/reviewer position
/// codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantRole {
    PrincipalInvestigator,
    CoPrincipalInvestigator,
    Researcher,
    Other,
}

impl GrantRole {
    pub fn from_code(code: &str) -> Result<Self, EntityError> {
        match code {
            "PI" => Ok(GrantRole::PrincipalInvestigator),
            "Co-PI" => Ok(GrantRole::CoPrincipalInvestigator),
            "Member" => Ok(GrantRole::Researcher),
            "Other" => Ok(GrantRole::Other),
            _ => Err(EntityError::UnmappedCode {
                vocabulary: "grant role".to_string(),
                code: code.to_string(),
            }),
        }
    }

    /// The canonical code, used in the identifying key.
    pub fn code(self) -> &'static str {
        match self {
            GrantRole::PrincipalInvestigator => "PI",
            GrantRole::CoPrincipalInvestigator => "Co-PI",
            GrantRole::Researcher => "Member",
            GrantRole::Other => "Other",
        }
    }

    fn class(self) -> NamedNodeRef<'static> {
        match self {
            GrantRole::PrincipalInvestigator => vocab::vivo::PRINCIPAL_INVESTIGATOR_ROLE,
            GrantRole::CoPrincipalInvestigator => vocab::vivo::CO_PRINCIPAL_INVESTIGATOR_ROLE,
            GrantRole::Researcher => vocab::vivo::RESEARCHER_ROLE,
            // No specific VIVO class; assert the bare role.
            GrantRole::Other => vocab::obo::ROLE,
        }
    }
}

/// Normalize a free-text amount to a grouped whole-dollar currency string.
///
/// A cents fraction is dropped, every other non-digit character is stripped,
/// and the remainder is regrouped: "$1,234.00 approx" becomes "$1,234". An
/// amount with no digits at all is absent.
pub fn normalize_amount(raw: &str) -> Option<String> {
    // Truncate at a decimal fraction (digit '.' digit) so cents do not get
    // folded into the dollar figure.
    let bytes = raw.as_bytes();
    let whole = bytes
        .windows(3)
        .position(|w| w[0].is_ascii_digit() && w[1] == b'.' && w[2].is_ascii_digit())
        .map_or(raw, |i| &raw[..i + 1]);
    let digits: String = whole.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    let value: u128 = digits.parse().ok()?;
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    Some(format!("${grouped}"))
}

/// Key: (person, title, role code, contribution start year, start month).
/// The start year/month disambiguate repeated awards of the same title but
/// are not stored as attributes; the emitted interval uses the award dates.
#[derive(Debug, Clone)]
pub struct Grant {
    uri: NamedNode,
    person: NamedNode,
    title: String,
    role: GrantRole,
    pub award_amount: Option<String>,
    pub awarded_by: Option<NamedNode>,
    pub award_start_year: Option<i32>,
    pub award_start_month: Option<u32>,
    pub award_start_day: Option<u32>,
    pub award_end_year: Option<i32>,
    pub award_end_month: Option<u32>,
    pub award_end_day: Option<u32>,
}

impl Grant {
    pub fn new(
        resolver: &IdResolver,
        person: &NamedNode,
        title: &str,
        role_code: &str,
        start_year: Option<i32>,
        start_month: Option<u32>,
    ) -> Result<Self, EntityError> {
        let role = GrantRole::from_code(role_code)?;
        let start_year = start_year.map(|y| y.to_string());
        let start_month = start_month.map(|m| m.to_string());
        let uri = resolver.hashed(
            "grant",
            &[
                Some(person.as_str()),
                Some(title),
                Some(role.code()),
                start_year.as_deref(),
                start_month.as_deref(),
            ],
        );
        Ok(Self {
            uri,
            person: person.clone(),
            title: title.to_string(),
            role,
            award_amount: None,
            awarded_by: None,
            award_start_year: None,
            award_start_month: None,
            award_start_day: None,
            award_end_year: None,
            award_end_month: None,
            award_end_day: None,
        })
    }

    pub fn role(&self) -> GrantRole {
        self.role
    }
}

impl GraphEmittable for Grant {
    fn uri(&self) -> &NamedNode {
        &self.uri
    }

    fn to_graph(&self) -> Graph {
        let mut graph = Graph::new();

        graph.add(self.uri.clone(), vocab::rdf::TYPE, vocab::vivo::GRANT);
        graph.add(self.uri.clone(), vocab::vivo::RELATES, self.person.clone());
        graph.add(
            self.uri.clone(),
            vocab::rdfs::LABEL,
            Literal::new_simple_literal(&self.title),
        );

        let role_uri = suffixed(&self.uri, "-role");
        graph.add(role_uri.clone(), vocab::rdf::TYPE, self.role.class());
        graph.add(role_uri.clone(), vocab::obo::INHERES_IN, self.person.clone());
        graph.add(role_uri, vocab::vivo::RELATED_BY, self.uri.clone());

        let interval_uri = suffixed(&self.uri, "-interval");
        let start_uri = suffixed(&interval_uri, "-start");
        let end_uri = suffixed(&interval_uri, "-end");
        let start = add_date(
            &mut graph,
            &start_uri,
            self.award_start_year,
            self.award_start_month,
            self.award_start_day,
            None,
        );
        let end = add_date(
            &mut graph,
            &end_uri,
            self.award_end_year,
            self.award_end_month,
            self.award_end_day,
            None,
        );
        add_interval(
            &mut graph,
            &interval_uri,
            &self.uri,
            start.then_some(&start_uri),
            end.then_some(&end_uri),
        );

        if let Some(amount) = self.award_amount.as_deref().and_then(normalize_amount) {
            graph.add(
                self.uri.clone(),
                vocab::vivo::TOTAL_AWARD_AMOUNT,
                Literal::new_simple_literal(amount),
            );
        }

        if let Some(funder) = &self.awarded_by {
            graph.add(self.uri.clone(), vocab::vivo::ASSIGNED_BY, funder.clone());
        }

        graph
    }
}
