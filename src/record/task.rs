//! Task records: follow-up activities linked to an account or opportunity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{RecordId, Searchable};
use crate::category::{Priority, RelatedType, TaskStatus};
use crate::error::ValidationError;

/// A follow-up activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable record id.
    pub id: RecordId,
    /// Short title shown in lists.
    pub subject: String,
    /// Display name of the related account or opportunity.
    pub related_to: String,
    /// What kind of record `related_to` names.
    pub related_type: RelatedType,
    /// Progress of the task.
    pub status: TaskStatus,
    /// Urgency.
    pub priority: Priority,
    /// Day the task is due.
    pub due_date: NaiveDate,
    /// Person the task is assigned to.
    pub owner: String,
    /// Free-text notes. Not searchable.
    #[serde(default)]
    pub description: String,
}

impl Task {
    /// Returns true unless the task is completed.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.status.is_open()
    }

    /// A task is overdue when it is still open and its due date is on or
    /// before `today`. The due date stands for the start of that day, so a
    /// task due today is already overdue.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.is_open() && self.due_date <= today
    }

    /// Checks the record-level invariants.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if the subject is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.subject.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                collection: "task",
                field: "subject",
                id: self.id,
            });
        }
        Ok(())
    }
}

impl Searchable for Task {
    fn search_fields(&self) -> [&str; 3] {
        [self.subject.as_str(), self.related_to.as_str(), self.owner.as_str()]
    }
}
