//! crmdeck command-line renderer
//!
//! Renders one dashboard tab as pretty JSON on stdout.

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crmdeck::record::parse_date;
use crmdeck::{
    render, AccountFilters, CrmResult, DashboardConfig, FieldFilter, LoadError, OpportunityFilters,
    RecordStore, RenderContext, TaskFilters, View, ViewCriteria,
};

#[derive(Debug, Parser)]
#[command(name = "crmdeck", version, about = "Render a CRM dashboard view as JSON")]
struct Cli {
    /// Tab to render: dashboard, accounts, opportunities or tasks
    #[arg(short, long, default_value = "dashboard")]
    view: View,

    /// Free-text search over the tab's searchable fields
    #[arg(short, long, default_value = "")]
    query: String,

    /// Account status (accounts tab) or task status (tasks tab)
    #[arg(long)]
    status: Option<String>,

    /// Account type: Customer or Lead
    #[arg(long = "type")]
    account_type: Option<String>,

    /// Opportunity stage, e.g. "Closed Won"
    #[arg(long)]
    stage: Option<String>,

    /// Task priority: High, Medium or Low
    #[arg(long)]
    priority: Option<String>,

    /// Reference date for overdue checks (YYYY-MM-DD); defaults to today
    #[arg(long)]
    today: Option<String>,

    /// JSON record store to load instead of the built-in sample
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// JSON dashboard config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the built-in sample store as JSON and exit
    #[arg(long)]
    dump_sample: bool,
}

/// "All" and absent flags both mean no constraint.
fn field<T: FromStr>(raw: Option<&str>) -> FieldFilter<T> {
    match raw {
        None => FieldFilter::Any,
        Some(label) if label.trim().eq_ignore_ascii_case("all") => FieldFilter::Any,
        Some(label) => FieldFilter::from_label(label),
    }
}

fn criteria(cli: &Cli) -> ViewCriteria {
    ViewCriteria {
        query: cli.query.clone(),
        accounts: AccountFilters {
            status: field(cli.status.as_deref()),
            account_type: field(cli.account_type.as_deref()),
        },
        opportunities: OpportunityFilters {
            stage: field(cli.stage.as_deref()),
        },
        tasks: TaskFilters {
            status: field(cli.status.as_deref()),
            priority: field(cli.priority.as_deref()),
        },
    }
}

fn init_logging(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn to_pretty<T: serde::Serialize>(what: &'static str, value: &T) -> CrmResult<String> {
    serde_json::to_string_pretty(value).map_err(|source| LoadError::Encode { what, source }.into())
}

fn run(cli: &Cli) -> CrmResult<()> {
    let config = match &cli.config {
        Some(path) => DashboardConfig::load(path)?,
        None => DashboardConfig::default(),
    };
    init_logging(&config.log_level);

    if cli.dump_sample {
        println!("{}", RecordStore::sample().to_json()?);
        return Ok(());
    }

    let store = match &cli.data {
        Some(path) => RecordStore::load(path)?,
        None => RecordStore::sample(),
    };

    let fallback_today: NaiveDate = match &cli.today {
        Some(raw) => parse_date(raw)?,
        None => chrono::Local::now().date_naive(),
    };
    let ctx = RenderContext::from_config(config, fallback_today);
    let ctx = match &cli.today {
        // An explicit --today wins over the config's reference date.
        Some(_) => RenderContext {
            today: fallback_today,
            ..ctx
        },
        None => ctx,
    };

    let model = render(&store, cli.view, &criteria(cli), &ctx);
    println!("{}", to_pretty("view model", &model)?);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
