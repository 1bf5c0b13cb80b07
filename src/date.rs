//! Date, academic-term, and interval emission.
//!
//! Dates are emitted at the most granular precision the source provides:
//! year, year-month, or year-month-day. A day without a month cannot yield
//! day precision and degrades to year precision. Year 1900 is filtered
//! outright; it is the spreadsheet epoch default and never a real value in
//! these feeds.

use std::sync::LazyLock;

use oxigraph::model::{Literal, NamedNode};
use regex::Regex;

use crate::graph::Graph;
use crate::vocab;

/// Month names, January first.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Name for a 1-based month number.
pub fn month_name(month: u32) -> Option<&'static str> {
    (1..=12)
        .contains(&month)
        .then(|| MONTHS[month as usize - 1])
}

/// 1-based month number for a month name or numeric string.
pub fn month_number(value: &str) -> Option<u32> {
    if let Ok(n) = value.parse::<u32>() {
        return (1..=12).contains(&n).then_some(n);
    }
    MONTHS
        .iter()
        .position(|m| *m == value)
        .map(|i| i as u32 + 1)
}

static TERM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(Spring|Summer|Fall) (\d{4})").expect("valid pattern"));

/// Representative month for an academic season.
fn season_month(season: &str) -> Option<u32> {
    match season {
        "Spring" => Some(1),
        "Summer" => Some(5),
        "Fall" => Some(8),
        _ => None,
    }
}

/// Emit a `DateTimeValue` resource at the most granular precision available.
///
/// Returns true if any triples were added. The label is the explicit label
/// when given, else the most granular rendering ("March 15, 2020",
/// "March 2020", "2020").
pub fn add_date(
    graph: &mut Graph,
    date_uri: &NamedNode,
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
    label: Option<&str>,
) -> bool {
    let Some(year) = year else {
        return false;
    };
    // Spreadsheet epoch garbage.
    if year == 1900 {
        return false;
    }

    graph.add(
        date_uri.clone(),
        vocab::rdf::TYPE,
        vocab::vivo::DATE_TIME_VALUE_CLASS,
    );

    let month_with_name = month.and_then(|m| month_name(m).map(|name| (m, name)));
    let (precision, date_time, default_label) = match (month_with_name, day) {
        (Some((month, name)), Some(day)) => (
            vocab::vivo::YEAR_MONTH_DAY_PRECISION,
            format!("{year}-{month:02}-{day:02}T00:00:00"),
            format!("{name} {day}, {year}"),
        ),
        (Some((month, name)), None) => (
            vocab::vivo::YEAR_MONTH_PRECISION,
            format!("{year}-{month:02}-01T00:00:00"),
            format!("{name} {year}"),
        ),
        // A day without a month cannot be placed; degrade to year precision.
        _ => (
            vocab::vivo::YEAR_PRECISION,
            format!("{year}-01-01T00:00:00"),
            year.to_string(),
        ),
    };

    graph.add(date_uri.clone(), vocab::vivo::DATE_TIME_PRECISION, precision);
    graph.add(
        date_uri.clone(),
        vocab::vivo::DATE_TIME,
        Literal::new_typed_literal(date_time, vocab::xsd::DATE_TIME),
    );
    graph.add(
        date_uri.clone(),
        vocab::rdfs::LABEL,
        Literal::new_simple_literal(label.unwrap_or(&default_label)),
    );
    true
}

/// Emit a date from an academic-term string such as "Spring 2012".
///
/// Seasons map to representative months (Spring 1, Summer 5, Fall 8) and the
/// raw term string becomes the label. An unparseable term adds nothing and
/// returns false.
pub fn add_term_date(graph: &mut Graph, date_uri: &NamedNode, term: Option<&str>) -> bool {
    let Some(term) = term else {
        return false;
    };
    let Some(captures) = TERM_RE.captures(term) else {
        return false;
    };
    let month = season_month(&captures[1]);
    let year: i32 = captures[2].parse().expect("four digits");
    add_date(graph, date_uri, Some(year), month, None, Some(term))
}

/// Emit a `DateTimeInterval` linking a subject to start/end date resources.
///
/// Pass an endpoint URI only if its date was actually emitted. With neither
/// endpoint, no interval resource and no subject link appear at all.
pub fn add_interval(
    graph: &mut Graph,
    interval_uri: &NamedNode,
    subject: &NamedNode,
    start: Option<&NamedNode>,
    end: Option<&NamedNode>,
) {
    if start.is_none() && end.is_none() {
        return;
    }
    graph.add(
        interval_uri.clone(),
        vocab::rdf::TYPE,
        vocab::vivo::DATE_TIME_INTERVAL,
    );
    graph.add(
        subject.clone(),
        vocab::vivo::HAS_DATE_TIME_INTERVAL,
        interval_uri.clone(),
    );
    if let Some(start) = start {
        graph.add(interval_uri.clone(), vocab::vivo::INTERVAL_START, start.clone());
    }
    if let Some(end) = end {
        graph.add(interval_uri.clone(), vocab::vivo::INTERVAL_END, end.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxigraph::model::{Term, Triple};

    fn date_uri() -> NamedNode {
        NamedNode::new_unchecked("http://example.org/d1")
    }

    fn literal_objects(graph: &Graph) -> Vec<String> {
        graph
            .iter()
            .filter_map(|t| match &t.object {
                Term::Literal(l) => Some(l.value().to_string()),
                _ => None,
            })
            .collect()
    }

    fn has_object(graph: &Graph, object: impl Into<Term>) -> bool {
        let object = object.into();
        graph.iter().any(|t| t.object == object)
    }

    #[test]
    fn year_only_yields_year_precision() {
        let mut g = Graph::new();
        assert!(add_date(&mut g, &date_uri(), Some(2020), None, None, None));
        assert!(has_object(&g, vocab::vivo::YEAR_PRECISION));
        assert!(literal_objects(&g).contains(&"2020-01-01T00:00:00".to_string()));
        assert!(literal_objects(&g).contains(&"2020".to_string()));
    }

    #[test]
    fn year_month_yields_year_month_precision() {
        let mut g = Graph::new();
        assert!(add_date(&mut g, &date_uri(), Some(2020), Some(3), None, None));
        assert!(has_object(&g, vocab::vivo::YEAR_MONTH_PRECISION));
        assert!(literal_objects(&g).contains(&"2020-03-01T00:00:00".to_string()));
        assert!(literal_objects(&g).contains(&"March 2020".to_string()));
    }

    #[test]
    fn full_date_yields_day_precision() {
        let mut g = Graph::new();
        assert!(add_date(&mut g, &date_uri(), Some(2020), Some(3), Some(15), None));
        assert!(has_object(&g, vocab::vivo::YEAR_MONTH_DAY_PRECISION));
        assert!(literal_objects(&g).contains(&"2020-03-15T00:00:00".to_string()));
        assert!(literal_objects(&g).contains(&"March 15, 2020".to_string()));
    }

    #[test]
    fn day_without_month_degrades_to_year_precision() {
        let mut g = Graph::new();
        assert!(add_date(&mut g, &date_uri(), Some(2020), None, Some(15), None));
        assert!(has_object(&g, vocab::vivo::YEAR_PRECISION));
        assert!(!literal_objects(&g).iter().any(|l| l.contains("-15T")));
    }

    #[test]
    fn year_1900_is_filtered() {
        let mut g = Graph::new();
        assert!(!add_date(&mut g, &date_uri(), Some(1900), Some(6), Some(1), None));
        assert!(g.is_empty());
    }

    #[test]
    fn explicit_label_wins() {
        let mut g = Graph::new();
        add_date(&mut g, &date_uri(), Some(2019), Some(1), None, Some("Spring 2019"));
        assert!(literal_objects(&g).contains(&"Spring 2019".to_string()));
        assert!(!literal_objects(&g).contains(&"January 2019".to_string()));
    }

    #[test]
    fn spring_term_parses_to_january() {
        let mut g = Graph::new();
        assert!(add_term_date(&mut g, &date_uri(), Some("Spring 2019")));
        assert!(literal_objects(&g).contains(&"2019-01-01T00:00:00".to_string()));
        assert!(literal_objects(&g).contains(&"Spring 2019".to_string()));
    }

    #[test]
    fn fall_term_parses_to_august() {
        let mut g = Graph::new();
        assert!(add_term_date(&mut g, &date_uri(), Some("Fall 2020")));
        assert!(literal_objects(&g).contains(&"2020-08-01T00:00:00".to_string()));
    }

    #[test]
    fn unparseable_term_adds_nothing() {
        let mut g = Graph::new();
        assert!(!add_term_date(&mut g, &date_uri(), Some("TBD")));
        assert!(!add_term_date(&mut g, &date_uri(), Some("Winter 2020")));
        assert!(!add_term_date(&mut g, &date_uri(), None));
        assert!(g.is_empty());
    }

    #[test]
    fn interval_without_endpoints_is_omitted() {
        let mut g = Graph::new();
        let interval = NamedNode::new_unchecked("http://example.org/i1");
        let subject = NamedNode::new_unchecked("http://example.org/s1");
        add_interval(&mut g, &interval, &subject, None, None);
        assert!(g.is_empty());
    }

    #[test]
    fn interval_with_start_only() {
        let mut g = Graph::new();
        let interval = NamedNode::new_unchecked("http://example.org/i1");
        let subject = NamedNode::new_unchecked("http://example.org/s1");
        let start = date_uri();
        add_interval(&mut g, &interval, &subject, Some(&start), None);
        assert!(g.contains(&Triple::new(
            subject,
            vocab::vivo::HAS_DATE_TIME_INTERVAL.into_owned(),
            interval.clone(),
        )));
        assert!(g.contains(&Triple::new(
            interval.clone(),
            vocab::vivo::INTERVAL_START.into_owned(),
            start,
        )));
        assert!(!g.iter().any(|t| t.predicate == vocab::vivo::INTERVAL_END.into_owned()));
    }

    #[test]
    fn month_helpers_round_trip() {
        assert_eq!(month_name(3), Some("March"));
        assert_eq!(month_number("March"), Some(3));
        assert_eq!(month_number("3"), Some(3));
        assert_eq!(month_number("13"), None);
        assert_eq!(month_number("Frimaire"), None);
    }
}
