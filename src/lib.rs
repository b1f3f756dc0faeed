//! # crmdeck - derivation core for a CRM dashboard
//!
//! crmdeck holds a small, immutable book of sales records and derives
//! everything a dashboard front end renders from it: filtered tables,
//! pipeline and status chart series, stat tiles and short ranked lists.
//!
//! ## Core Concepts
//!
//! - **Record Store**: accounts, opportunities and tasks, fixed once built
//! - **Derivation Layer**: pure filter, sort and aggregate functions
//! - **View Assembly**: per-tab shaping into a serializable [`ViewModel`]
//!
//! ## Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use crmdeck::{render, RecordStore, RenderContext, View, ViewCriteria, ViewModel};
//!
//! let store = RecordStore::sample();
//! let ctx = RenderContext::new(NaiveDate::from_ymd_opt(2024, 1, 22).unwrap());
//!
//! let ViewModel::Dashboard(dashboard) =
//!     render(&store, View::Dashboard, &ViewCriteria::default(), &ctx)
//! else {
//!     unreachable!()
//! };
//! assert_eq!(dashboard.stats[2].display, "$1,015,000");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod category;
pub mod config;
pub mod derive;
pub mod error;
pub mod format;
pub mod record;
pub mod store;
pub mod view;

// Re-export primary types at crate root for convenience
pub use category::{AccountStatus, AccountType, Category, Priority, RelatedType, Stage, TaskStatus, Tone};
pub use config::{DashboardConfig, StatChanges};
pub use derive::{
	aggregate_by_stage, aggregate_by_status, compute_pipeline_total, compute_task_counters,
	compute_won_revenue, filter_records, overdue_tasks, sort_by_amount_descending,
	sort_by_due_date_ascending, top_open_opportunities, upcoming_open_tasks, AccountFilters,
	FieldFilter, OpportunityFilters, OpportunitySummary, RecordFilter, StageTotal, StatusCount,
	TaskCounters, TaskFilters,
};
pub use error::{CrmError, CrmResult, LoadError, ValidationError};
pub use record::{Account, Opportunity, RecordId, Searchable, Task};
pub use store::{RecordStore, RecordStoreBuilder};
pub use view::{render, RenderContext, View, ViewCriteria, ViewModel};
