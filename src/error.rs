//! Error types for `limeport`

use thiserror::Error;

/// The error type for `limeport` operations.
///
/// Only structurally fatal conditions become errors. Missing optional
/// fields, unresolved foreign-key references, and unknown type codes or
/// attribute keys are recovered locally during ingestion and assembly.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Tabular Export Errors ====================
    /// The tab-separated export is missing a required header column.
    #[error("missing required column: {0}")]
    MissingColumn(&'static str),

    /// Tab-separated row parsing error.
    #[error("TSV parse error: {0}")]
    Tsv(#[from] csv::Error),

    // ==================== LSS Archive Errors ====================
    /// XML parsing error.
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    // ==================== Output Errors ====================
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for `limeport` operations.
pub type Result<T> = std::result::Result<T, Error>;
