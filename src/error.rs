//! Rich diagnostic error types for vitagraph.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes, help text, and source chains so operators know exactly
//! which dataset run went wrong and how to fix it.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for vitagraph.
///
/// Each variant wraps a subsystem-specific error, preserving the full diagnostic
/// chain (error codes, help text, source spans) through to the operator.
#[derive(Debug, Error, Diagnostic)]
pub enum VitaError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Entity(#[from] EntityError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Baseline(#[from] BaselineError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

// ---------------------------------------------------------------------------
// Record source errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum SourceError {
    #[error("source file not found: {path}")]
    #[diagnostic(
        code(vita::source::missing),
        help(
            "The export file for this dataset does not exist. Check the data \
             directory and the dataset name; the run for this dataset is aborted \
             without touching its baseline."
        )
    )]
    Missing { path: String },

    #[error("I/O error reading {path}: {source}")]
    #[diagnostic(
        code(vita::source::io),
        help("Check file permissions and that the export was fully transferred.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed delimited text in {path}: {message}")]
    #[diagnostic(
        code(vita::source::delimited),
        help(
            "The delimited export could not be parsed. Verify the delimiter \
             and that the first row is a header row."
        )
    )]
    Delimited { path: String, message: String },

    #[error("malformed export XML in {path}: {message}")]
    #[diagnostic(
        code(vita::source::xml),
        help(
            "The relational-export XML could not be parsed. The expected shape \
             is <row> elements containing <field name=\"...\"> children, with \
             xsi:nil marking absent values."
        )
    )]
    Xml { path: String, message: String },
}

// ---------------------------------------------------------------------------
// Entity model errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum EntityError {
    #[error("unmapped {vocabulary} code: {code}")]
    #[diagnostic(
        code(vita::entity::unmapped_code),
        help(
            "The code is not in the controlled vocabulary for this field. \
             For structural codes (grant role) the record is rejected; extend \
             the vocabulary table if the code is legitimate."
        )
    )]
    UnmappedCode { vocabulary: String, code: String },

    #[error("record is missing required field: {field}")]
    #[diagnostic(
        code(vita::entity::missing_field),
        help(
            "The record lacks a field the entity constructor requires. \
             Check the field mappings for this dataset against the export schema."
        )
    )]
    MissingField { field: String },
}

// ---------------------------------------------------------------------------
// Graph serialization errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum GraphError {
    #[error("graph serialization failed: {message}")]
    #[diagnostic(
        code(vita::graph::serialize),
        help("Check that the output directory exists and is writable.")
    )]
    Serialize { message: String },

    #[error("graph parse failed: {message}")]
    #[diagnostic(
        code(vita::graph::parse),
        help(
            "The serialized graph could not be parsed back. The file may be \
             truncated or written by an incompatible version; re-run with \
             --full-reload to rebuild the baseline from source."
        )
    )]
    Parse { message: String },

    #[error("invalid namespace IRI for prefix {prefix}: {iri}")]
    #[diagnostic(
        code(vita::graph::prefix),
        help("Namespace IRIs must be absolute IRIs ending in / or #.")
    )]
    Prefix { prefix: String, iri: String },
}

// ---------------------------------------------------------------------------
// Baseline persistence errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum BaselineError {
    #[error("I/O error on baseline {path}: {source}")]
    #[diagnostic(
        code(vita::baseline::io),
        help(
            "A baseline file could not be read or written. Check the graph \
             directory permissions; the previous baseline is left untouched."
        )
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Graph(#[from] GraphError),
}

// ---------------------------------------------------------------------------
// Triple store errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum StoreError {
    #[error("store request failed: {message}")]
    #[diagnostic(
        code(vita::store::http),
        help(
            "The SPARQL Update request could not be sent. Check the endpoint \
             URL and network reachability; the baseline is not updated, so a \
             re-run will retry the same diff."
        )
    )]
    Http { message: String },

    #[error("store rejected update: HTTP {status}")]
    #[diagnostic(
        code(vita::store::rejected),
        help(
            "The endpoint returned a failure status. Check the update \
             credentials and that the target graph is writable."
        )
    )]
    Rejected { status: u16 },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Graph(#[from] GraphError),
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    #[diagnostic(
        code(vita::config::io),
        help("Pass --config with a valid path, or omit it to use defaults.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {message}")]
    #[diagnostic(
        code(vita::config::parse),
        help("The config must be valid TOML. {message}")
    )]
    Parse { path: String, message: String },

    #[error("invalid base namespace: {iri}")]
    #[diagnostic(
        code(vita::config::namespace),
        help("The base namespace must be an absolute IRI ending in / or #.")
    )]
    Namespace { iri: String },
}

/// Convenience alias for functions returning vitagraph results.
pub type VitaResult<T> = std::result::Result<T, VitaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_error_converts_to_vita_error() {
        let err = SourceError::Missing {
            path: "data/fis_faculty.xml".into(),
        };
        let vita: VitaError = err.into();
        assert!(matches!(vita, VitaError::Source(SourceError::Missing { .. })));
    }

    #[test]
    fn graph_error_chains_through_baseline() {
        let err = GraphError::Parse {
            message: "truncated".into(),
        };
        let baseline: BaselineError = err.into();
        assert!(matches!(
            baseline,
            BaselineError::Graph(GraphError::Parse { .. })
        ));
    }

    #[test]
    fn error_display_messages_are_descriptive() {
        let err = EntityError::UnmappedCode {
            vocabulary: "grant role".into(),
            code: "ROLE_CD9".into(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("grant role"));
        assert!(msg.contains("ROLE_CD9"));
    }
}
