//! The record store.
//!
//! Three ordered collections, fixed once built. Insertion order is
//! preserved; every stable sort and tie-break falls back to it. The
//! store only hands out shared slices.

mod sample;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CrmResult, LoadError, ValidationError};
use crate::record::{Account, Opportunity, RecordId, Task};

/// Immutable collections of accounts, opportunities and tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordStore {
    accounts: Vec<Account>,
    opportunities: Vec<Opportunity>,
    tasks: Vec<Task>,
}

/// On-disk shape of a store. Missing collections are empty.
#[derive(Debug, Default, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    accounts: Vec<Account>,
    #[serde(default)]
    opportunities: Vec<Opportunity>,
    #[serde(default)]
    tasks: Vec<Task>,
}

impl RecordStore {
    /// Starts an empty builder.
    #[must_use]
    pub fn builder() -> RecordStoreBuilder {
        RecordStoreBuilder::default()
    }

    /// The built-in sample dataset.
    #[must_use]
    pub fn sample() -> Self {
        sample::build()
    }

    /// Accounts in insertion order.
    #[must_use]
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Opportunities in insertion order.
    #[must_use]
    pub fn opportunities(&self) -> &[Opportunity] {
        &self.opportunities
    }

    /// Tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Decodes and validates a store from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Decode` for malformed JSON, unknown enumeration
    /// labels or bad dates, and a `ValidationError` when a record breaks a
    /// store invariant.
    pub fn from_json(json: &str) -> CrmResult<Self> {
        let doc: StoreDocument = serde_json::from_str(json).map_err(|source| LoadError::Decode {
            what: "record store",
            source,
        })?;

        let store = Self::builder()
            .accounts(doc.accounts)
            .opportunities(doc.opportunities)
            .tasks(doc.tasks)
            .build()?;

        tracing::info!(
            accounts = store.accounts.len(),
            opportunities = store.opportunities.len(),
            tasks = store.tasks.len(),
            "loaded record store"
        );
        Ok(store)
    }

    /// Reads a store from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Io` if the file cannot be read, otherwise the
    /// errors of [`RecordStore::from_json`].
    pub fn load(path: impl AsRef<Path>) -> CrmResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Encodes the store as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Encode` if serialization fails.
    pub fn to_json(&self) -> CrmResult<String> {
        serde_json::to_string_pretty(self).map_err(|source| {
            LoadError::Encode {
                what: "record store",
                source,
            }
            .into()
        })
    }
}

/// Collects records and checks store invariants once, on `build`.
#[derive(Debug, Default)]
pub struct RecordStoreBuilder {
    accounts: Vec<Account>,
    opportunities: Vec<Opportunity>,
    tasks: Vec<Task>,
}

impl RecordStoreBuilder {
    /// Appends one account.
    #[must_use]
    pub fn account(mut self, account: Account) -> Self {
        self.accounts.push(account);
        self
    }

    /// Appends accounts in iteration order.
    #[must_use]
    pub fn accounts(mut self, accounts: impl IntoIterator<Item = Account>) -> Self {
        self.accounts.extend(accounts);
        self
    }

    /// Appends one opportunity.
    #[must_use]
    pub fn opportunity(mut self, opportunity: Opportunity) -> Self {
        self.opportunities.push(opportunity);
        self
    }

    /// Appends opportunities in iteration order.
    #[must_use]
    pub fn opportunities(mut self, opportunities: impl IntoIterator<Item = Opportunity>) -> Self {
        self.opportunities.extend(opportunities);
        self
    }

    /// Appends one task.
    #[must_use]
    pub fn task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Appends tasks in iteration order.
    #[must_use]
    pub fn tasks(mut self, tasks: impl IntoIterator<Item = Task>) -> Self {
        self.tasks.extend(tasks);
        self
    }

    /// Validates every record and freezes the collections.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found: a duplicate id within a
    /// collection, a record failing its own checks, or opportunity amounts
    /// whose sum does not fit in a `u64`.
    pub fn build(self) -> Result<RecordStore, ValidationError> {
        ensure_unique("account", self.accounts.iter().map(|a| a.id))?;
        ensure_unique("opportunity", self.opportunities.iter().map(|o| o.id))?;
        ensure_unique("task", self.tasks.iter().map(|t| t.id))?;
        ensure_summable("opportunity", "amount", self.opportunities.iter().map(|o| o.amount))?;

        for account in &self.accounts {
            account.validate()?;
        }
        for opportunity in &self.opportunities {
            opportunity.validate()?;
        }
        for task in &self.tasks {
            task.validate()?;
        }

        Ok(RecordStore {
            accounts: self.accounts,
            opportunities: self.opportunities,
            tasks: self.tasks,
        })
    }
}

/// Every amount aggregate is a sum over a subset of the collection, so a
/// collection total that fits bounds them all.
fn ensure_summable(
    collection: &'static str,
    field: &'static str,
    mut amounts: impl Iterator<Item = u64>,
) -> Result<(), ValidationError> {
    amounts
        .try_fold(0u64, u64::checked_add)
        .map(|_| ())
        .ok_or(ValidationError::AmountOverflow {
            collection,
            field,
            max: u64::MAX,
        })
}

fn ensure_unique(
    collection: &'static str,
    ids: impl Iterator<Item = RecordId>,
) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ValidationError::DuplicateId { collection, id });
        }
    }
    Ok(())
}
