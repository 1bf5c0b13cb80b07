//! The entity model: typed domain records that render themselves as graphs.
//!
//! Every entity computes its URI once at construction from a stable function
//! of its identifying fields (see [`crate::ident`]); descriptive fields are
//! optional attributes set afterwards, and absent attributes emit no triples.
//! `to_graph` is pure: no I/O, no mutation, safe to call repeatedly.

use oxigraph::model::NamedNode;

use crate::graph::Graph;

pub mod appointment;
pub mod course;
pub mod document;
pub mod education;
pub mod grant;
pub mod org;
pub mod person;
pub mod service;

pub use appointment::{Appointment, AppointmentKind};
pub use course::Course;
pub use document::{Document, DocumentKind, Patent};
pub use education::{DegreeEducation, NonDegreeEducation};
pub use grant::{Grant, GrantRole};
pub use org::{OrgKind, Organization};
pub use person::{Facility, Person};
pub use service::{Award, Membership, Presentation, Reviewership};

/// Capability of rendering oneself as a subgraph of statements.
///
/// The mapper accumulates run graphs exclusively through this trait; anything
/// it should emit (main entities, nested organizations, seed entities) must
/// implement it.
pub trait GraphEmittable {
    /// The entity's stable URI.
    fn uri(&self) -> &NamedNode;

    /// Render this entity's subgraph. Pure; no side effects.
    fn to_graph(&self) -> Graph;
}
