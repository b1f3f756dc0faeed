//! Free-text and field filtering.
//!
//! A record passes when it matches the query (an empty query matches
//! everything) and every constrained field filter. Output order is input
//! order; filtering never reorders.

use std::str::FromStr;

use crate::category::{AccountStatus, AccountType, Priority, Stage, TaskStatus};
use crate::record::{Account, Opportunity, Searchable, Task};

/// Constraint on a single enumerated field.
///
/// `Any` places no constraint. `Unmatched` holds a label that names no value
/// of the enumeration; it matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldFilter<T> {
    /// No constraint.
    Any,
    /// Matches records whose field equals the value.
    Is(T),
    /// A label naming no known value.
    Unmatched(String),
}

impl<T> Default for FieldFilter<T> {
    fn default() -> Self {
        Self::Any
    }
}

impl<T: Copy + PartialEq> FieldFilter<T> {
    /// Returns true if `value` satisfies the constraint.
    #[must_use]
    pub fn admits(&self, value: T) -> bool {
        match self {
            Self::Any => true,
            Self::Is(wanted) => *wanted == value,
            Self::Unmatched(_) => false,
        }
    }

    /// Returns true if this filter places no constraint.
    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl<T: FromStr> FieldFilter<T> {
    /// Builds a filter from a raw label supplied at a string boundary.
    ///
    /// Labels that do not parse become `Unmatched` rather than an error.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        label
            .parse::<T>()
            .map_or_else(|_| Self::Unmatched(label.to_string()), Self::Is)
    }
}

impl<T> From<T> for FieldFilter<T> {
    fn from(value: T) -> Self {
        Self::Is(value)
    }
}

/// Per-record-type set of field filters.
pub trait RecordFilter<R> {
    /// Returns true if `record` satisfies every constrained field.
    fn admits(&self, record: &R) -> bool;
}

/// Field filters for the accounts table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccountFilters {
    /// Relationship status.
    pub status: FieldFilter<AccountStatus>,
    /// Customer or lead.
    pub account_type: FieldFilter<AccountType>,
}

impl RecordFilter<Account> for AccountFilters {
    fn admits(&self, record: &Account) -> bool {
        self.status.admits(record.status) && self.account_type.admits(record.account_type)
    }
}

/// Field filters for the opportunities table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OpportunityFilters {
    /// Pipeline stage.
    pub stage: FieldFilter<Stage>,
}

impl RecordFilter<Opportunity> for OpportunityFilters {
    fn admits(&self, record: &Opportunity) -> bool {
        self.stage.admits(record.stage)
    }
}

/// Field filters for the tasks table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskFilters {
    /// Task progress.
    pub status: FieldFilter<TaskStatus>,
    /// Task urgency.
    pub priority: FieldFilter<Priority>,
}

impl RecordFilter<Task> for TaskFilters {
    fn admits(&self, record: &Task) -> bool {
        self.status.admits(record.status) && self.priority.admits(record.priority)
    }
}

/// A case-insensitive substring query, lowered once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Lowers `raw` for matching. The query is not trimmed.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.to_lowercase(),
        }
    }

    /// Returns true if the query matches every record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Returns true if any searchable field of `record` contains the query.
    #[must_use]
    pub fn matches<R: Searchable>(&self, record: &R) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// Returns the records matching `query` and `filters`, in input order.
///
/// # Examples
///
/// ```
/// use crmdeck::{filter_records, AccountFilters, RecordStore};
///
/// let store = RecordStore::sample();
/// let hits = filter_records(store.accounts(), "ACME", &AccountFilters::default());
/// assert!(hits.iter().all(|a| a.name.to_lowercase().contains("acme")
///     || a.industry.to_lowercase().contains("acme")
///     || a.owner.to_lowercase().contains("acme")));
/// ```
pub fn filter_records<'a, R, F>(
    records: impl IntoIterator<Item = &'a R>,
    query: &str,
    filters: &F,
) -> Vec<&'a R>
where
    R: Searchable + 'a,
    F: RecordFilter<R>,
{
    let query = SearchQuery::new(query);
    records
        .into_iter()
        .filter(|record| query.matches(*record) && filters.admits(*record))
        .collect()
}
