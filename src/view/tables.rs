//! Accounts, opportunities and tasks tabs.

use chrono::NaiveDate;
use serde::Serialize;

use crate::derive::{
    compute_task_counters, filter_records, sort_by_amount_descending, sort_by_due_date_ascending,
    summarize_opportunities, AccountFilters, OpportunityFilters, OpportunitySummary, TaskCounters,
    TaskFilters,
};
use crate::record::{Account, Opportunity, Task};
use crate::store::RecordStore;

/// Filtered rows plus the "showing X of Y" counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableModel<'a, R> {
    /// Matching records, in table order.
    pub rows: Vec<&'a R>,
    /// Number of rows that matched.
    pub matched: usize,
    /// Number of records before filtering.
    pub total: usize,
}

impl<'a, R> TableModel<'a, R> {
    fn new(rows: Vec<&'a R>, total: usize) -> Self {
        Self {
            matched: rows.len(),
            rows,
            total,
        }
    }
}

/// Opportunities table plus the pipeline banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpportunitiesModel<'a> {
    /// Filtered rows sorted by amount, largest first.
    #[serde(flatten)]
    pub table: TableModel<'a, Opportunity>,
    /// Computed over the filtered rows, not the whole store.
    pub summary: OpportunitySummary,
}

/// A task row with its derived overdue flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow<'a> {
    /// The underlying task.
    #[serde(flatten)]
    pub task: &'a Task,
    /// Past due and not completed.
    pub overdue: bool,
}

/// Tasks table plus status counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TasksModel<'a> {
    /// Matching tasks sorted by due date.
    pub rows: Vec<TaskRow<'a>>,
    /// Number of rows that matched.
    pub matched: usize,
    /// Number of records before filtering.
    pub total: usize,
    /// Computed over every task in the store, unaffected by the filters.
    pub counters: TaskCounters,
}

/// Accounts in store order.
#[must_use]
pub fn assemble_accounts<'a>(
    store: &'a RecordStore,
    query: &str,
    filters: &AccountFilters,
) -> TableModel<'a, Account> {
    let rows = filter_records(store.accounts(), query, filters);
    TableModel::new(rows, store.accounts().len())
}

/// Opportunities, largest amount first.
#[must_use]
pub fn assemble_opportunities<'a>(
    store: &'a RecordStore,
    query: &str,
    filters: &OpportunityFilters,
) -> OpportunitiesModel<'a> {
    let rows = sort_by_amount_descending(filter_records(store.opportunities(), query, filters));
    let summary = summarize_opportunities(rows.iter().copied());
    OpportunitiesModel {
        table: TableModel::new(rows, store.opportunities().len()),
        summary,
    }
}

/// Tasks, earliest due date first.
#[must_use]
pub fn assemble_tasks<'a>(
    store: &'a RecordStore,
    query: &str,
    filters: &TaskFilters,
    today: NaiveDate,
) -> TasksModel<'a> {
    let rows: Vec<TaskRow<'a>> = sort_by_due_date_ascending(filter_records(store.tasks(), query, filters))
        .into_iter()
        .map(|task| TaskRow {
            task,
            overdue: task.is_overdue(today),
        })
        .collect();

    TasksModel {
        matched: rows.len(),
        rows,
        total: store.tasks().len(),
        counters: compute_task_counters(store.tasks()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::category::{AccountType, Priority, Stage, TaskStatus};
    use crate::derive::FieldFilter;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 22).unwrap()
    }

    #[test]
    fn accounts_filtered_by_type() {
        let store = RecordStore::sample();
        let filters = AccountFilters {
            account_type: FieldFilter::Is(AccountType::Lead),
            ..AccountFilters::default()
        };
        let model = assemble_accounts(&store, "", &filters);
        assert_eq!(model.matched, 3);
        assert_eq!(model.total, 8);
        let names: Vec<&str> = model.rows.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Initech Solutions", "Stark Logistics", "Cyberdyne Analytics"]);
    }

    #[test]
    fn opportunities_sorted_and_summarized_over_filtered_rows() {
        let store = RecordStore::sample();
        let model = assemble_opportunities(&store, "acme", &OpportunityFilters::default());
        let names: Vec<&str> = model.table.rows.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Acme Platform Expansion", "Acme Security Add-on"]);
        assert_eq!(model.table.matched, 2);
        assert_eq!(model.table.total, 10);
        assert_eq!(
            model.summary,
            OpportunitySummary {
                pipeline_total: 305_000,
                open_count: 2,
                won_count: 0,
            }
        );
    }

    #[test]
    fn opportunities_by_terminal_stage_have_no_pipeline() {
        let store = RecordStore::sample();
        let filters = OpportunityFilters {
            stage: FieldFilter::Is(Stage::ClosedWon),
        };
        let model = assemble_opportunities(&store, "", &filters);
        assert_eq!(model.table.matched, 2);
        assert_eq!(model.summary.pipeline_total, 0);
        assert_eq!(model.summary.won_count, 2);
    }

    #[test]
    fn tasks_sorted_with_overdue_flags_and_global_counters() {
        let store = RecordStore::sample();
        let filters = TaskFilters {
            priority: FieldFilter::Is(Priority::High),
            status: FieldFilter::Any,
        };
        let model = assemble_tasks(&store, "", &filters, today());
        let rows: Vec<(&str, bool)> = model
            .rows
            .iter()
            .map(|r| (r.task.subject.as_str(), r.overdue))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Prepare pricing proposal", true),
                ("Follow up on contract terms", true),
                ("Schedule ERP demo", true),
            ]
        );
        assert_eq!(model.matched, 3);
        assert_eq!(model.total, 10);
        assert_eq!(model.counters.total, 10);
    }

    #[test]
    fn completed_tasks_are_never_overdue() {
        let store = RecordStore::sample();
        let filters = TaskFilters {
            status: FieldFilter::Is(TaskStatus::Completed),
            priority: FieldFilter::Any,
        };
        let far_future = NaiveDate::from_ymd_opt(2099, 1, 1).unwrap();
        let model = assemble_tasks(&store, "", &filters, far_future);
        assert_eq!(model.matched, 3);
        assert!(model.rows.iter().all(|r| !r.overdue));
    }
}
