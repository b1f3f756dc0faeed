//! Opportunity records: prospective deals moving through the pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{RecordId, Searchable};
use crate::category::{Stage, Tone};
use crate::error::ValidationError;

/// A sales deal with an amount, a stage and a close probability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    /// Stable record id.
    pub id: RecordId,
    /// Deal name.
    pub name: String,
    /// Display name of the account this deal belongs to.
    pub account_name: String,
    /// Pipeline stage.
    pub stage: Stage,
    /// Deal size in whole currency units.
    pub amount: u64,
    /// Close probability, 0 to 100.
    pub probability: u8,
    /// Expected or actual close date.
    pub close_date: NaiveDate,
    /// Sales rep who owns the deal.
    pub owner: String,
    /// Free-text notes. Not searchable.
    #[serde(default)]
    pub description: String,
}

impl Opportunity {
    /// Returns true while the deal is still in the active pipeline.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !self.stage.is_terminal()
    }

    /// Tone of the probability bar shown in the opportunities table.
    #[must_use]
    pub const fn probability_tone(&self) -> Tone {
        Tone::for_probability(self.probability)
    }

    /// Checks the record-level invariants.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or the probability exceeds 100.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                collection: "opportunity",
                field: "name",
                id: self.id,
            });
        }
        if self.probability > 100 {
            return Err(ValidationError::ProbabilityOutOfRange {
                value: self.probability,
                id: self.id,
            });
        }
        Ok(())
    }
}

impl Searchable for Opportunity {
    fn search_fields(&self) -> [&str; 3] {
        [self.name.as_str(), self.account_name.as_str(), self.owner.as_str()]
    }
}
