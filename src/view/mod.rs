//! View assembly.
//!
//! Turns a record store plus caller-owned criteria into the exact shape a
//! presentation layer renders for one tab. The presentation layer keeps the
//! session state (active tab, query, per-tab filters) and calls [`render`]
//! again whenever any of it changes.

mod dashboard;
mod tables;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::DashboardConfig;
use crate::derive::{AccountFilters, OpportunityFilters, TaskFilters};
use crate::error::ValidationError;
use crate::store::RecordStore;

pub use dashboard::{
    assemble_dashboard, DashboardModel, DashboardSummary, StageBar, StatKey, StatTile, StatusSlice,
};
pub use tables::{
    assemble_accounts, assemble_opportunities, assemble_tasks, OpportunitiesModel, TableModel,
    TaskRow, TasksModel,
};

/// The four dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Overview with stat tiles, charts and short lists.
    #[default]
    Dashboard,
    /// Accounts table.
    Accounts,
    /// Opportunities table with pipeline summary.
    Opportunities,
    /// Tasks table with counters.
    Tasks,
}

impl View {
    /// Navigation order.
    pub const ALL: [Self; 4] = [Self::Dashboard, Self::Accounts, Self::Opportunities, Self::Tasks];

    /// Lowercase id used for navigation.
    #[must_use]
    pub const fn tab_id(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Accounts => "accounts",
            Self::Opportunities => "opportunities",
            Self::Tasks => "tasks",
        }
    }

    /// Parses a tab id, falling back to `Dashboard` for anything unknown.
    #[must_use]
    pub fn from_tab(tab: &str) -> Self {
        tab.parse().unwrap_or_default()
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tab_id())
    }
}

impl FromStr for View {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|v| v.tab_id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::UnknownLabel {
                kind: "view",
                label: s.to_string(),
            })
    }
}

/// Criteria the caller threads through every render.
///
/// The query is shared by all tabs; each table tab has its own filters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewCriteria {
    /// Free-text search, applied to the active table.
    pub query: String,
    /// Filters for the accounts tab.
    pub accounts: AccountFilters,
    /// Filters for the opportunities tab.
    pub opportunities: OpportunityFilters,
    /// Filters for the tasks tab.
    pub tasks: TaskFilters,
}

impl ViewCriteria {
    /// Criteria with only a free-text query.
    #[must_use]
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }
}

/// Inputs that are neither records nor criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    /// Reference date for overdue checks.
    pub today: NaiveDate,
    /// Panel sizes and stat changes.
    pub config: DashboardConfig,
}

impl RenderContext {
    /// Default configuration with the given reference date.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            config: DashboardConfig::default(),
        }
    }

    /// Uses the config's `reference_date` when set, `fallback_today` otherwise.
    #[must_use]
    pub fn from_config(config: DashboardConfig, fallback_today: NaiveDate) -> Self {
        Self {
            today: config.reference_date.unwrap_or(fallback_today),
            config,
        }
    }
}

/// Render-ready output for one tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum ViewModel<'a> {
    /// Overview tab.
    Dashboard(DashboardModel<'a>),
    /// Accounts tab.
    Accounts(TableModel<'a, crate::record::Account>),
    /// Opportunities tab.
    Opportunities(OpportunitiesModel<'a>),
    /// Tasks tab.
    Tasks(TasksModel<'a>),
}

impl ViewModel<'_> {
    /// The tab this model was rendered for.
    #[must_use]
    pub const fn view(&self) -> View {
        match self {
            Self::Dashboard(_) => View::Dashboard,
            Self::Accounts(_) => View::Accounts,
            Self::Opportunities(_) => View::Opportunities,
            Self::Tasks(_) => View::Tasks,
        }
    }

    /// `(matched, total)` for table views; `None` for the dashboard.
    #[must_use]
    pub fn match_counts(&self) -> Option<(usize, usize)> {
        match self {
            Self::Dashboard(_) => None,
            Self::Accounts(m) => Some((m.matched, m.total)),
            Self::Opportunities(m) => Some((m.table.matched, m.table.total)),
            Self::Tasks(m) => Some((m.matched, m.total)),
        }
    }
}

/// Derives the view model for `view`.
///
/// The dashboard always covers the whole store and ignores `criteria`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use crmdeck::{render, RecordStore, RenderContext, View, ViewCriteria};
///
/// let store = RecordStore::sample();
/// let ctx = RenderContext::new(NaiveDate::from_ymd_opt(2024, 1, 22).unwrap());
/// let model = render(&store, View::Accounts, &ViewCriteria::with_query("acme"), &ctx);
/// assert_eq!(model.match_counts(), Some((1, 8)));
/// ```
#[must_use]
pub fn render<'a>(
    store: &'a RecordStore,
    view: View,
    criteria: &ViewCriteria,
    ctx: &RenderContext,
) -> ViewModel<'a> {
    let model = match view {
        View::Dashboard => ViewModel::Dashboard(assemble_dashboard(store, ctx)),
        View::Accounts => ViewModel::Accounts(assemble_accounts(store, &criteria.query, &criteria.accounts)),
        View::Opportunities => ViewModel::Opportunities(assemble_opportunities(
            store,
            &criteria.query,
            &criteria.opportunities,
        )),
        View::Tasks => ViewModel::Tasks(assemble_tasks(store, &criteria.query, &criteria.tasks, ctx.today)),
    };

    if let Some((matched, total)) = model.match_counts() {
        tracing::debug!(%view, matched, total, query = %criteria.query, "rendered table view");
    } else {
        tracing::debug!(%view, "rendered dashboard");
    }
    model
}
