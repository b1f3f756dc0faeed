//! Aggregates feeding charts and stat tiles.
//!
//! Per-category aggregates are zero-filled: every requested category yields
//! an entry, in the caller's order, even when nothing falls into it.

use serde::Serialize;

use crate::category::{AccountStatus, Priority, Stage, TaskStatus};
use crate::record::{Account, Opportunity, Task};

/// Count and summed amount of the opportunities in one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTotal {
    /// Stage this entry covers.
    pub stage: Stage,
    /// Opportunities in the stage.
    pub count: usize,
    /// Summed amount of those opportunities.
    pub total_amount: u64,
}

/// Number of accounts with one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    /// Status this entry covers.
    pub status: AccountStatus,
    /// Accounts with the status.
    pub count: usize,
}

/// Task tallies shown above the tasks table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCounters {
    /// Every task.
    pub total: usize,
    /// Tasks marked Completed.
    pub completed: usize,
    /// Tasks marked In Progress.
    pub in_progress: usize,
    /// Tasks marked Not Started.
    pub not_started: usize,
    /// High priority and not completed.
    pub high_priority_open: usize,
}

/// Pipeline banner over a set of opportunities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunitySummary {
    /// Summed amount of open opportunities.
    pub pipeline_total: u64,
    /// Opportunities not in a closed stage.
    pub open_count: usize,
    /// Opportunities in Closed Won.
    pub won_count: usize,
}

/// Groups opportunities by stage, one entry per stage in `stages`.
pub fn aggregate_by_stage<'a>(
    opportunities: impl IntoIterator<Item = &'a Opportunity>,
    stages: &[Stage],
) -> Vec<StageTotal> {
    let mut out: Vec<StageTotal> = stages
        .iter()
        .map(|&stage| StageTotal {
            stage,
            count: 0,
            total_amount: 0,
        })
        .collect();

    for opp in opportunities {
        for entry in out.iter_mut().filter(|e| e.stage == opp.stage) {
            entry.count += 1;
            entry.total_amount = entry.total_amount.saturating_add(opp.amount);
        }
    }
    out
}

/// Counts accounts by status, one entry per status in `statuses`.
pub fn aggregate_by_status<'a>(
    accounts: impl IntoIterator<Item = &'a Account>,
    statuses: &[AccountStatus],
) -> Vec<StatusCount> {
    let mut out: Vec<StatusCount> = statuses
        .iter()
        .map(|&status| StatusCount { status, count: 0 })
        .collect();

    for account in accounts {
        for entry in out.iter_mut().filter(|e| e.status == account.status) {
            entry.count += 1;
        }
    }
    out
}

/// Sum of amounts over opportunities not in a terminal stage.
///
/// Saturates at `u64::MAX`. A built [`RecordStore`](crate::RecordStore)
/// never gets there.
pub fn compute_pipeline_total<'a>(opportunities: impl IntoIterator<Item = &'a Opportunity>) -> u64 {
    sum_amounts(opportunities.into_iter().filter(|o| o.is_open()))
}

/// Sum of amounts over `Closed Won` opportunities. Saturates at `u64::MAX`.
pub fn compute_won_revenue<'a>(opportunities: impl IntoIterator<Item = &'a Opportunity>) -> u64 {
    sum_amounts(
        opportunities
            .into_iter()
            .filter(|o| o.stage == Stage::ClosedWon),
    )
}

fn sum_amounts<'a>(opportunities: impl Iterator<Item = &'a Opportunity>) -> u64 {
    opportunities.fold(0, |acc, o| acc.saturating_add(o.amount))
}

/// Counts tasks by status, plus open high-priority tasks.
pub fn compute_task_counters<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> TaskCounters {
    tasks.into_iter().fold(TaskCounters::default(), |mut acc, task| {
        acc.total += 1;
        match task.status {
            TaskStatus::Completed => acc.completed += 1,
            TaskStatus::InProgress => acc.in_progress += 1,
            TaskStatus::NotStarted => acc.not_started += 1,
        }
        if task.priority == Priority::High && task.is_open() {
            acc.high_priority_open += 1;
        }
        acc
    })
}

/// Open pipeline total and open/won counts over `opportunities`.
pub fn summarize_opportunities<'a>(
    opportunities: impl IntoIterator<Item = &'a Opportunity>,
) -> OpportunitySummary {
    opportunities
        .into_iter()
        .fold(OpportunitySummary::default(), |mut acc, opp| {
            if opp.is_open() {
                acc.pipeline_total = acc.pipeline_total.saturating_add(opp.amount);
                acc.open_count += 1;
            } else if opp.stage == Stage::ClosedWon {
                acc.won_count += 1;
            }
            acc
        })
}

/// Number of opportunities not in a closed stage.
pub fn count_open_opportunities<'a>(opportunities: impl IntoIterator<Item = &'a Opportunity>) -> usize {
    opportunities.into_iter().filter(|o| o.is_open()).count()
}

/// Number of opportunities in Closed Won.
pub fn count_won_opportunities<'a>(opportunities: impl IntoIterator<Item = &'a Opportunity>) -> usize {
    opportunities
        .into_iter()
        .filter(|o| o.stage == Stage::ClosedWon)
        .count()
}

/// Number of tasks that are not completed.
pub fn count_pending_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> usize {
    tasks.into_iter().filter(|t| t.is_open()).count()
}

/// Number of accounts with exactly `status`.
pub fn count_accounts_with_status<'a>(
    accounts: impl IntoIterator<Item = &'a Account>,
    status: AccountStatus,
) -> usize {
    accounts.into_iter().filter(|a| a.status == status).count()
}
