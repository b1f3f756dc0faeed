//! Record types held by the store.
//!
//! Records are plain data. Relations between them are by display name
//! (`Opportunity::account_name`, `Task::related_to`), not by id.

mod account;
mod opportunity;
mod task;

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

pub use account::Account;
pub use opportunity::Opportunity;
pub use task::Task;

/// Stable identifier for a record.
///
/// Fixture ids are derived from a collection name and a key, so the same
/// sample data always carries the same ids.
///
/// # Examples
///
/// ```
/// use crmdeck::RecordId;
///
/// let a = RecordId::from_key("account", "acme");
/// let b = RecordId::from_key("account", "acme");
/// assert_eq!(a, b);
/// assert_ne!(a, RecordId::from_key("task", "acme"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Creates a new random id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Derives a deterministic id from a collection name and a key.
    #[must_use]
    pub fn from_key(collection: &str, key: &str) -> Self {
        let name = format!("crmdeck:{collection}:{key}");
        Self(Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()))
    }

    /// Creates an id from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Creates a nil id (for testing or sentinel values).
    #[must_use]
    pub const fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for RecordId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Parses an ISO-8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `ValidationError::InvalidDate` if the string is not a valid date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate {
        value: value.to_string(),
    })
}

/// Fields a free-text query is matched against.
///
/// Each record type names a fixed set of searchable fields; the query
/// matches if any one of them contains it, ignoring case.
pub trait Searchable {
    /// The searchable fields, in no particular order.
    fn search_fields(&self) -> [&str; 3];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_key_is_deterministic_and_namespaced() {
        let a = RecordId::from_key("opportunity", "opp-1");
        assert_eq!(a, RecordId::from_key("opportunity", "opp-1"));
        assert_ne!(a, RecordId::from_key("opportunity", "opp-2"));
        assert_ne!(a, RecordId::from_key("task", "opp-1"));
    }

    #[test]
    fn record_id_serializes_as_bare_uuid() {
        let id = RecordId::nil();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00000000-0000-0000-0000-000000000000\"");
    }

    #[test]
    fn parse_date_accepts_iso_and_rejects_garbage() {
        assert_eq!(
            parse_date("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(matches!(
            parse_date("2023-02-29"),
            Err(ValidationError::InvalidDate { .. })
        ));
        assert!(parse_date("02/01/2024").is_err());
    }
}
