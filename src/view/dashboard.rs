//! The dashboard tab: stat tiles, two chart series and two short lists.
//!
//! Always computed over the whole store; the search box and table filters
//! do not apply here.

use serde::Serialize;

use super::RenderContext;
use crate::category::{AccountStatus, Stage, Tone};
use crate::derive::{
    aggregate_by_stage, aggregate_by_status, compute_pipeline_total, compute_won_revenue,
    count_accounts_with_status, count_open_opportunities, count_pending_tasks,
    count_won_opportunities, top_open_opportunities, upcoming_open_tasks,
};
use crate::format::{format_change, format_currency};
use crate::record::{Opportunity, Task};
use crate::store::RecordStore;

/// Which metric a stat tile shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKey {
    /// Every account.
    TotalAccounts,
    /// Opportunities not in a closed stage.
    ActiveOpportunities,
    /// Summed amount of open opportunities.
    PipelineValue,
    /// Tasks not completed.
    PendingTasks,
}

impl StatKey {
    /// Tile heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::TotalAccounts => "Total Accounts",
            Self::ActiveOpportunities => "Active Opportunities",
            Self::PipelineValue => "Pipeline Value",
            Self::PendingTasks => "Pending Tasks",
        }
    }
}

/// One headline metric tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatTile {
    /// Metric this tile shows.
    pub key: StatKey,
    /// Human title for the tile.
    pub title: &'static str,
    /// Raw figure.
    pub value: u64,
    /// `value` formatted for display (currency for the pipeline tile).
    pub display: String,
    /// Change from last month, in percent.
    pub change_percent: i32,
    /// Change rendered for display.
    pub change_display: String,
}

impl StatTile {
    fn new(key: StatKey, value: u64, display: String, change_percent: i32) -> Self {
        Self {
            key,
            title: key.title(),
            value,
            display,
            change_percent,
            change_display: format_change(change_percent),
        }
    }

    fn count(key: StatKey, count: usize, change_percent: i32) -> Self {
        let value = count as u64;
        Self::new(key, value, value.to_string(), change_percent)
    }
}

/// One bar of the pipeline-by-stage chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageBar {
    /// Stage this bar covers.
    pub stage: Stage,
    /// Number of opportunities in the stage.
    pub count: usize,
    /// Summed amount across the stage.
    pub amount: u64,
    /// Hex fill colour.
    pub color: &'static str,
}

/// One slice of the account status pie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSlice {
    /// Status this slice covers.
    pub status: AccountStatus,
    /// Number of accounts with the status.
    pub count: usize,
    /// Hex fill colour.
    pub color: &'static str,
}

/// Secondary figures alongside the stat tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Accounts with Active status.
    pub active_accounts: usize,
    /// Opportunities in every stage.
    pub total_opportunities: usize,
    /// Opportunities in Closed Won.
    pub won_deals: usize,
    /// Summed Closed Won amount.
    pub won_revenue: u64,
}

/// Everything the overview tab renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardModel<'a> {
    /// Four tiles: accounts, active opportunities, pipeline value, pending tasks.
    pub stats: Vec<StatTile>,
    /// One bar per stage, in stage order.
    pub stage_series: Vec<StageBar>,
    /// One pie slice per account status.
    pub status_series: Vec<StatusSlice>,
    /// Largest open opportunities.
    pub top_opportunities: Vec<&'a Opportunity>,
    /// Soonest-due open tasks.
    pub upcoming_tasks: Vec<&'a Task>,
    /// Secondary figures.
    pub summary: DashboardSummary,
}

/// Builds the overview tab from the whole store. Query and filters never apply here.
#[must_use]
pub fn assemble_dashboard<'a>(store: &'a RecordStore, ctx: &RenderContext) -> DashboardModel<'a> {
    let changes = ctx.config.stat_changes;
    let opportunities = store.opportunities();
    let pipeline = compute_pipeline_total(opportunities);

    let stats = vec![
        StatTile::count(StatKey::TotalAccounts, store.accounts().len(), changes.accounts),
        StatTile::count(
            StatKey::ActiveOpportunities,
            count_open_opportunities(opportunities),
            changes.active_opportunities,
        ),
        StatTile::new(
            StatKey::PipelineValue,
            pipeline,
            format_currency(pipeline),
            changes.pipeline_value,
        ),
        StatTile::count(
            StatKey::PendingTasks,
            count_pending_tasks(store.tasks()),
            changes.pending_tasks,
        ),
    ];

    let stage_series = aggregate_by_stage(opportunities, &Stage::ALL)
        .into_iter()
        .map(|t| StageBar {
            stage: t.stage,
            count: t.count,
            amount: t.total_amount,
            color: t.stage.tone().hex(),
        })
        .collect();

    let status_series = aggregate_by_status(store.accounts(), &AccountStatus::ALL)
        .into_iter()
        .enumerate()
        .map(|(i, c)| StatusSlice {
            status: c.status,
            count: c.count,
            color: Tone::pie(i).hex(),
        })
        .collect();

    DashboardModel {
        stats,
        stage_series,
        status_series,
        top_opportunities: top_open_opportunities(opportunities, ctx.config.top_opportunities),
        upcoming_tasks: upcoming_open_tasks(store.tasks(), ctx.config.upcoming_tasks),
        summary: DashboardSummary {
            active_accounts: count_accounts_with_status(store.accounts(), AccountStatus::Active),
            total_opportunities: opportunities.len(),
            won_deals: count_won_opportunities(opportunities),
            won_revenue: compute_won_revenue(opportunities),
        },
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    fn ctx() -> RenderContext {
        RenderContext::new(NaiveDate::from_ymd_opt(2024, 1, 22).unwrap())
    }

    #[test]
    fn stat_tiles_over_sample() {
        let store = RecordStore::sample();
        let model = assemble_dashboard(&store, &ctx());
        let tiles: Vec<(StatKey, &str, &str)> = model
            .stats
            .iter()
            .map(|t| (t.key, t.display.as_str(), t.change_display.as_str()))
            .collect();
        assert_eq!(
            tiles,
            vec![
                (StatKey::TotalAccounts, "8", "+12% from last month"),
                (StatKey::ActiveOpportunities, "7", "+8% from last month"),
                (StatKey::PipelineValue, "$1,015,000", "+15% from last month"),
                (StatKey::PendingTasks, "7", "-5% from last month"),
            ]
        );
        assert_eq!(model.stats[2].value, 1_015_000);
    }

    #[test]
    fn chart_series_cover_every_category() {
        let store = RecordStore::sample();
        let model = assemble_dashboard(&store, &ctx());
        assert_eq!(model.stage_series.len(), Stage::ALL.len());
        assert_eq!(model.stage_series[5].stage, Stage::ClosedLost);
        assert_eq!(model.stage_series[5].amount, 80_000);
        assert_eq!(model.stage_series[5].color, "#ea001e");

        let slices: Vec<(AccountStatus, usize, &str)> = model
            .status_series
            .iter()
            .map(|s| (s.status, s.count, s.color))
            .collect();
        assert_eq!(
            slices,
            vec![
                (AccountStatus::Active, 4, "#2e844a"),
                (AccountStatus::Prospect, 3, "#0176d3"),
                (AccountStatus::Inactive, 1, "#ea001e"),
            ]
        );
    }

    #[test]
    fn panels_respect_configured_sizes() {
        let store = RecordStore::sample();
        let mut ctx = ctx();
        assert_eq!(assemble_dashboard(&store, &ctx).top_opportunities.len(), 4);
        assert_eq!(assemble_dashboard(&store, &ctx).upcoming_tasks.len(), 4);

        ctx.config.top_opportunities = 2;
        ctx.config.upcoming_tasks = 0;
        let model = assemble_dashboard(&store, &ctx);
        assert_eq!(model.top_opportunities.len(), 2);
        assert!(model.upcoming_tasks.is_empty());
    }

    #[test]
    fn summary_over_sample() {
        let store = RecordStore::sample();
        let model = assemble_dashboard(&store, &ctx());
        assert_eq!(
            model.summary,
            DashboardSummary {
                active_accounts: 4,
                total_opportunities: 10,
                won_deals: 2,
                won_revenue: 210_000,
            }
        );
    }

    #[test]
    fn empty_store_yields_zeroed_dashboard() {
        let store = RecordStore::default();
        let model = assemble_dashboard(&store, &ctx());
        assert!(model.stats.iter().all(|t| t.value == 0));
        assert_eq!(model.stats[2].display, "$0");
        assert!(model.stage_series.iter().all(|b| b.count == 0 && b.amount == 0));
        assert_eq!(model.status_series.len(), 3);
        assert!(model.top_opportunities.is_empty());
        assert!(model.upcoming_tasks.is_empty());
    }
}
