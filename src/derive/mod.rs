//! The derivation layer.
//!
//! Pure functions over record collections: filtering, stable sorts,
//! zero-filled aggregates and short ranked lists. Nothing here mutates a
//! record or fails; empty input produces empty or zero output.

mod aggregate;
mod filter;
mod rank;
mod sort;

pub use aggregate::{
    aggregate_by_stage, aggregate_by_status, compute_pipeline_total, compute_task_counters,
    compute_won_revenue, count_accounts_with_status, count_open_opportunities, count_pending_tasks,
    count_won_opportunities, summarize_opportunities, OpportunitySummary, StageTotal, StatusCount,
    TaskCounters,
};
pub use filter::{
    filter_records, AccountFilters, FieldFilter, OpportunityFilters, RecordFilter, SearchQuery,
    TaskFilters,
};
pub use rank::{overdue_tasks, top_open_opportunities, upcoming_open_tasks};
pub use sort::{sort_by_amount_descending, sort_by_due_date_ascending};
