//! Error types for the CBR rates client.
//!
//! A single enum covers the whole pipeline: transport failures, encoding
//! normalization failures, structural decode failures, and report-date
//! parsing failures. Every stage propagates its error unchanged to the
//! caller; there is no retry or partial-result path.

use thiserror::Error;

/// Main error type for the CBR rates library.
#[derive(Debug, Error)]
pub enum CbrError {
    /// HTTP request failed or returned a non-success status.
    #[error("HTTP request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Response body contained byte sequences invalid for its encoding.
    #[error("Malformed {encoding} byte sequence in response body")]
    Encoding {
        /// Name of the encoding the body was expected to be in.
        encoding: &'static str,
    },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Missing required XML attribute.
    #[error("Missing required attribute '{attribute}' on <{element}>")]
    MissingAttribute {
        attribute: &'static str,
        element: String,
    },

    /// Missing required XML child element.
    #[error("Missing required element <{element}> in {context}")]
    MissingElement {
        element: &'static str,
        context: String,
    },

    /// A field value could not be parsed as its declared type, or violated
    /// a model invariant.
    #[error("Invalid value '{value}' for <{field}>: {reason}")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// The report date matched neither `DD.MM.YYYY` nor `DD/MM/YYYY`.
    #[error("Unrecognized report date '{0}', expected DD.MM.YYYY or DD/MM/YYYY")]
    DateParse(String),
}

/// Result type alias for CBR rates operations.
pub type Result<T> = std::result::Result<T, CbrError>;
