//! Closed enumerations used by the record types.
//!
//! Every enumeration serializes and parses using its human label
//! ("Closed Won", "In Progress", ...) and exposes `ALL`, its fixed display
//! order. Chart axes and filter menus iterate `ALL`, so the order matters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

fn parse_label<T: Copy>(
    kind: &'static str,
    all: &[T],
    label_of: fn(T) -> &'static str,
    s: &str,
) -> Result<T, ValidationError> {
    let wanted = s.trim();
    all.iter()
        .copied()
        .find(|v| label_of(*v).eq_ignore_ascii_case(wanted))
        .ok_or_else(|| ValidationError::UnknownLabel {
            kind,
            label: s.to_string(),
        })
}

/// Relationship status of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountStatus {
    /// Current, engaged relationship.
    Active,
    /// Being courted.
    Prospect,
    /// No longer engaged.
    Inactive,
}

impl AccountStatus {
    /// Display order used by the status distribution chart.
    pub const ALL: [Self; 3] = [Self::Active, Self::Prospect, Self::Inactive];

    /// Human label, as shown in badges and filter menus.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Prospect => "Prospect",
            Self::Inactive => "Inactive",
        }
    }

    /// Badge tone for this status.
    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Active => Tone::Green,
            Self::Prospect => Tone::Blue,
            Self::Inactive => Tone::Neutral,
        }
    }
}

/// Whether an account is a paying customer or still a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    /// Paying customer.
    Customer,
    /// Not yet a customer.
    Lead,
}

impl AccountType {
    /// Filter menu order.
    pub const ALL: [Self; 2] = [Self::Customer, Self::Lead];

    /// Human label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Lead => "Lead",
        }
    }
}

/// Ordered phase of the opportunity pipeline.
///
/// `ClosedWon` and `ClosedLost` are terminal: opportunities in those stages
/// never count toward the active pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Initial needs discovery.
    Discovery,
    /// Fit and budget being confirmed.
    Qualification,
    /// Proposal sent.
    Proposal,
    /// Terms under negotiation.
    Negotiation,
    /// Deal won.
    #[serde(rename = "Closed Won")]
    ClosedWon,
    /// Deal lost.
    #[serde(rename = "Closed Lost")]
    ClosedLost,
}

impl Stage {
    /// Pipeline order, earliest phase first.
    pub const ALL: [Self; 6] = [
        Self::Discovery,
        Self::Qualification,
        Self::Proposal,
        Self::Negotiation,
        Self::ClosedWon,
        Self::ClosedLost,
    ];

    /// Human label, including the space in the closed stages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Discovery => "Discovery",
            Self::Qualification => "Qualification",
            Self::Proposal => "Proposal",
            Self::Negotiation => "Negotiation",
            Self::ClosedWon => "Closed Won",
            Self::ClosedLost => "Closed Lost",
        }
    }

    /// Returns true for `ClosedWon` and `ClosedLost`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::ClosedWon | Self::ClosedLost)
    }

    /// Chart color for this stage.
    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Discovery => Tone::Purple,
            Self::Qualification => Tone::Teal,
            Self::Proposal => Tone::Blue,
            Self::Negotiation => Tone::Yellow,
            Self::ClosedWon => Tone::Green,
            Self::ClosedLost => Tone::Red,
        }
    }
}

/// Progress of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Not yet started.
    #[serde(rename = "Not Started")]
    NotStarted,
    /// Being worked on.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Done.
    Completed,
}

impl TaskStatus {
    /// Workflow order.
    pub const ALL: [Self; 3] = [Self::NotStarted, Self::InProgress, Self::Completed];

    /// Human label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// Returns true unless the task is completed.
    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Completed)
    }

    /// Badge tone for this status.
    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Completed => Tone::Green,
            Self::InProgress => Tone::Blue,
            Self::NotStarted => Tone::Neutral,
        }
    }
}

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Needs attention first.
    High,
    /// Normal urgency.
    Medium,
    /// Can wait.
    Low,
}

impl Priority {
    /// Most to least urgent.
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Human label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Badge tone for this priority.
    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::High => Tone::Red,
            Self::Medium => Tone::Yellow,
            Self::Low => Tone::Neutral,
        }
    }
}

/// Kind of record a task is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelatedType {
    /// Attached to an account.
    Account,
    /// Attached to an opportunity.
    Opportunity,
}

impl RelatedType {
    /// Declaration order.
    pub const ALL: [Self; 2] = [Self::Account, Self::Opportunity];

    /// Human label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Account => "Account",
            Self::Opportunity => "Opportunity",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for RelatedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AccountStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("account status", &Self::ALL, Self::label, s)
    }
}

impl FromStr for AccountType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("account type", &Self::ALL, Self::label, s)
    }
}

impl FromStr for Stage {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("stage", &Self::ALL, Self::label, s)
    }
}

impl FromStr for TaskStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("task status", &Self::ALL, Self::label, s)
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("priority", &Self::ALL, Self::label, s)
    }
}

impl FromStr for RelatedType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("related type", &Self::ALL, Self::label, s)
    }
}

/// Visual tone a presentation layer maps to its palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Success.
    Green,
    /// Informational.
    Blue,
    /// Caution.
    Yellow,
    /// Danger.
    Red,
    /// Early-stage accent.
    Purple,
    /// Secondary accent.
    Teal,
    /// Fallback for anything without a dedicated tone.
    Neutral,
}

impl Tone {
    /// Palette cycled by index for the account status pie chart.
    pub const PIE_PALETTE: [Self; 3] = [Self::Green, Self::Blue, Self::Red];

    /// Hex color in the Lightning-style palette.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Green => "#2e844a",
            Self::Blue => "#0176d3",
            Self::Yellow => "#fe9339",
            Self::Red => "#ea001e",
            Self::Purple => "#9050e9",
            Self::Teal => "#0b827c",
            Self::Neutral => "#6b7280",
        }
    }

    /// Tone of a raw label within a category, `Neutral` when unrecognized.
    #[must_use]
    pub fn for_label(category: Category, label: &str) -> Self {
        match category {
            Category::Stage => label.parse::<Stage>().map_or(Self::Neutral, Stage::tone),
            Category::AccountStatus => label
                .parse::<AccountStatus>()
                .map_or(Self::Neutral, AccountStatus::tone),
            Category::TaskStatus => label
                .parse::<TaskStatus>()
                .map_or(Self::Neutral, TaskStatus::tone),
            Category::Priority => label.parse::<Priority>().map_or(Self::Neutral, Priority::tone),
        }
    }

    /// Tone of a close-probability bar: green from 75, yellow from 50,
    /// red below.
    #[must_use]
    pub const fn for_probability(probability: u8) -> Self {
        match probability {
            75..=u8::MAX => Self::Green,
            50..=74 => Self::Yellow,
            _ => Self::Red,
        }
    }

    /// Pie color for the series entry at `index`.
    #[must_use]
    pub const fn pie(index: usize) -> Self {
        Self::PIE_PALETTE[index % Self::PIE_PALETTE.len()]
    }
}

/// Categories that carry a tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Opportunity stage labels.
    Stage,
    /// Account status labels.
    AccountStatus,
    /// Task status labels.
    TaskStatus,
    /// Task priority labels.
    Priority,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_labels_round_trip_through_from_str() {
        for stage in Stage::ALL {
            assert_eq!(stage.label().parse::<Stage>().unwrap(), stage);
        }
        assert_eq!("closed won".parse::<Stage>().unwrap(), Stage::ClosedWon);
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = "Closed Maybe".parse::<Stage>().unwrap_err();
        assert!(matches!(err, ValidationError::UnknownLabel { kind: "stage", .. }));
        assert!("All".parse::<AccountStatus>().is_err());
    }

    #[test]
    fn terminal_stages() {
        let terminal: Vec<Stage> = Stage::ALL.into_iter().filter(|s| s.is_terminal()).collect();
        assert_eq!(terminal, vec![Stage::ClosedWon, Stage::ClosedLost]);
    }

    #[test]
    fn serde_uses_human_labels() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
        let stage: Stage = serde_json::from_str("\"Closed Lost\"").unwrap();
        assert_eq!(stage, Stage::ClosedLost);
    }

    #[test]
    fn tone_lookup_falls_back_to_neutral() {
        assert_eq!(Tone::for_label(Category::Priority, "High"), Tone::Red);
        assert_eq!(Tone::for_label(Category::Stage, "Negotiation"), Tone::Yellow);
        assert_eq!(Tone::for_label(Category::TaskStatus, "Blocked"), Tone::Neutral);
        assert_eq!(Tone::for_label(Category::AccountStatus, ""), Tone::Neutral);
    }

    #[test]
    fn probability_bands_split_at_75_and_50() {
        assert_eq!(Tone::for_probability(100), Tone::Green);
        assert_eq!(Tone::for_probability(75), Tone::Green);
        assert_eq!(Tone::for_probability(74), Tone::Yellow);
        assert_eq!(Tone::for_probability(50), Tone::Yellow);
        assert_eq!(Tone::for_probability(49), Tone::Red);
        assert_eq!(Tone::for_probability(0), Tone::Red);
    }

    #[test]
    fn pie_palette_cycles() {
        assert_eq!(Tone::pie(0), Tone::Green);
        assert_eq!(Tone::pie(2), Tone::Red);
        assert_eq!(Tone::pie(3), Tone::Green);
    }
}
