//! Dashboard configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CrmResult, LoadError, ValidationError};

/// Illustrative month-over-month changes shown on the stat tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatChanges {
    /// Total accounts tile.
    pub accounts: i32,
    /// Active opportunities tile.
    pub active_opportunities: i32,
    /// Pipeline value tile.
    pub pipeline_value: i32,
    /// Pending tasks tile.
    pub pending_tasks: i32,
}

impl Default for StatChanges {
    fn default() -> Self {
        Self {
            accounts: 12,
            active_opportunities: 8,
            pipeline_value: 15,
            pending_tasks: -5,
        }
    }
}

/// Tunables for view assembly and the command-line front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardConfig {
    /// Rows in the dashboard's top opportunities panel.
    pub top_opportunities: usize,
    /// Rows in the dashboard's upcoming tasks panel.
    pub upcoming_tasks: usize,
    /// Month-over-month change shown under each stat tile.
    pub stat_changes: StatChanges,
    /// Fixed "today" for overdue checks. When unset the caller supplies one.
    pub reference_date: Option<NaiveDate>,
    /// Default `tracing` filter directive for the binary.
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            top_opportunities: 4,
            upcoming_tasks: 4,
            stat_changes: StatChanges::default(),
            reference_date: None,
            log_level: "warn".to_string(),
        }
    }
}

impl DashboardConfig {
    const MAX_PANEL_ROWS: usize = 100;

    /// Checks bounds that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidConfig` if a panel size exceeds the
    /// maximum or the log level is blank.
    pub fn validate(self) -> Result<Self, ValidationError> {
        if self.top_opportunities > Self::MAX_PANEL_ROWS {
            return Err(ValidationError::InvalidConfig {
                reason: format!(
                    "topOpportunities must be at most {} (got {})",
                    Self::MAX_PANEL_ROWS,
                    self.top_opportunities
                ),
            });
        }
        if self.upcoming_tasks > Self::MAX_PANEL_ROWS {
            return Err(ValidationError::InvalidConfig {
                reason: format!(
                    "upcomingTasks must be at most {} (got {})",
                    Self::MAX_PANEL_ROWS,
                    self.upcoming_tasks
                ),
            });
        }
        if self.log_level.trim().is_empty() {
            return Err(ValidationError::InvalidConfig {
                reason: "logLevel must not be empty".to_string(),
            });
        }
        Ok(self)
    }

    /// Decodes and validates a config from JSON.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Decode` for malformed JSON and
    /// `ValidationError::InvalidConfig` for out-of-range values.
    pub fn from_json(json: &str) -> CrmResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|source| LoadError::Decode {
            what: "dashboard config",
            source,
        })?;
        Ok(config.validate()?)
    }

    /// Reads a config file.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Io` if the file cannot be read, otherwise the
    /// errors of [`DashboardConfig::from_json`].
    pub fn load(path: impl AsRef<Path>) -> CrmResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = DashboardConfig::from_json("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.top_opportunities, 4);
        assert_eq!(config.stat_changes.pending_tasks, -5);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = DashboardConfig::from_json(
            r#"{"upcomingTasks": 6, "statChanges": {"pipelineValue": 20}, "referenceDate": "2024-01-22"}"#,
        )
        .unwrap();
        assert_eq!(config.upcoming_tasks, 6);
        assert_eq!(config.top_opportunities, 4);
        assert_eq!(config.stat_changes.pipeline_value, 20);
        assert_eq!(config.stat_changes.accounts, 12);
        assert_eq!(config.reference_date, NaiveDate::from_ymd_opt(2024, 1, 22));
    }

    #[test]
    fn oversized_panel_is_rejected() {
        let err = DashboardConfig::from_json(r#"{"topOpportunities": 1000}"#).unwrap_err();
        assert!(err.is_validation());
        assert!(format!("{err}").contains("topOpportunities"));
    }

    #[test]
    fn blank_log_level_is_rejected() {
        let config = DashboardConfig {
            log_level: " ".to_string(),
            ..DashboardConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_json_is_a_load_error() {
        assert!(DashboardConfig::from_json("[").unwrap_err().is_load());
    }
}
