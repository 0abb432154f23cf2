//! Project record.

use serde::{Deserialize, Serialize};
use tracktor_core::Id;

/// A production project owning shots and assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Id,
    pub name: String,
    /// Free-form production type ("feature", "short", ...).
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Server-assigned lifecycle label; "New" at creation.
    #[serde(default)]
    pub status: Option<String>,
    /// Target shot count declared at creation.
    #[serde(rename = "shotsNum", default)]
    pub shots_target: Option<i64>,
    /// Free-form deadline text as entered by the owner.
    #[serde(default)]
    pub deadline: Option<String>,
    /// Join code; `None` until generated on demand.
    #[serde(rename = "project_sharecode", alias = "sharecode", default)]
    pub sharecode: Option<String>,
}
