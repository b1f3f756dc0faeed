//! Error types for crmdeck.
//!
//! Derivation and view assembly never fail; an empty result is a normal
//! outcome. Errors only arise at the edges: building a record store from
//! untrusted input, reading files, and validating configuration.

use thiserror::Error;

use crate::record::RecordId;

/// Record-level invariant violations found while building a store.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Duplicate {collection} id: {id}")]
    DuplicateId {
        collection: &'static str,
        id: RecordId,
    },

    #[error("Required field '{field}' is empty on {collection} {id}")]
    EmptyField {
        collection: &'static str,
        field: &'static str,
        id: RecordId,
    },

    #[error("Probability {value} is out of range [0, 100] on opportunity {id}")]
    ProbabilityOutOfRange {
        value: u8,
        id: RecordId,
    },

    #[error("Unknown {kind} label '{label}'")]
    UnknownLabel {
        kind: &'static str,
        label: String,
    },

    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        value: String,
    },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        reason: String,
    },

    #[error("Summed {field} of all {collection} records exceeds {max}")]
    AmountOverflow {
        collection: &'static str,
        field: &'static str,
        max: u64,
    },
}

/// Failures while reading or decoding a store or a configuration file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode {what}: {source}")]
    Encode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level error type for crmdeck.
#[derive(Debug, Error)]
pub enum CrmError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Load error: {0}")]
    Load(#[from] LoadError),
}

impl CrmError {
    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a load error.
    #[must_use]
    pub const fn is_load(&self) -> bool {
        matches!(self, Self::Load(_))
    }
}

/// Result type alias for crmdeck operations.
pub type CrmResult<T> = Result<T, CrmError>;
