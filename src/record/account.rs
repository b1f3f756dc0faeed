//! Account records: companies tracked for a business relationship.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{RecordId, Searchable};
use crate::category::{AccountStatus, AccountType};
use crate::error::ValidationError;

/// A company or organization record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Stable record id.
    pub id: RecordId,
    /// Company name.
    pub name: String,
    /// Free-text industry label.
    pub industry: String,
    /// Relationship status.
    pub status: AccountStatus,
    /// Customer or lead.
    #[serde(rename = "type")]
    pub account_type: AccountType,
    /// Sales rep who owns the account.
    pub owner: String,
    /// Annual revenue in whole currency units.
    pub annual_revenue: u64,
    /// Contact email. Not searchable.
    pub email: String,
    /// Date of the most recent touchpoint.
    pub last_activity: NaiveDate,
}

impl Account {
    /// Checks the record-level invariants.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if the name is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                collection: "account",
                field: "name",
                id: self.id,
            });
        }
        Ok(())
    }
}

impl Searchable for Account {
    fn search_fields(&self) -> [&str; 3] {
        [self.name.as_str(), self.industry.as_str(), self.owner.as_str()]
    }
}
