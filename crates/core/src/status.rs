//! Workflow status vocabulary.
//!
//! The set is closed and carries no ordering or transition rules: any
//! value may replace any other. Remote payloads spell the values exactly
//! as they are displayed, so the serde names double as display labels.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One department's workflow state on a shot or asset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Work has not begun. Also the display default for unset fields.
    #[default]
    #[serde(rename = "Not started")]
    NotStarted,
    /// Work in progress.
    #[serde(rename = "WIP")]
    Wip,
    /// Awaiting supervisor review.
    #[serde(rename = "Ready to Review")]
    ReadyToReview,
    /// Approved and finished.
    #[serde(rename = "Complete")]
    Complete,
    /// Cut from the production; no further work expected.
    #[serde(rename = "Omitted")]
    Omitted,
}

/// All status values in display order.
pub const ALL_STATUSES: &[Status] = &[
    Status::NotStarted,
    Status::Wip,
    Status::ReadyToReview,
    Status::Complete,
    Status::Omitted,
];

impl Status {
    /// Return the wire/display representation of a status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not started",
            Self::Wip => "WIP",
            Self::ReadyToReview => "Ready to Review",
            Self::Complete => "Complete",
            Self::Omitted => "Omitted",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_STATUSES
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid status '{s}'. Must be one of: {}",
                    ALL_STATUSES
                        .iter()
                        .map(|v| v.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}

/// Lenient serde deserializer for optional status fields.
///
/// The remote store predates the closed vocabulary, so a field may be
/// absent, `null`, or hold a string outside the set. All three map to
/// `None`; the stored record is never rewritten to hide the difference.
pub mod lenient {
    use serde::{Deserialize, Deserializer};

    use super::Status;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Status>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(|s| s.parse().ok()))
    }
}
