//! Shot record.

use serde::{Deserialize, Serialize};
use tracktor_core::status::lenient;
use tracktor_core::{Department, Id, Status};

/// A shot and its per-department workflow state.
///
/// The remote rows spell the identifier `shot_id` while sibling payloads
/// use plain `id`; both are accepted and normalized to `id` here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    #[serde(alias = "shot_id")]
    pub id: Id,
    #[serde(default)]
    pub project_id: Id,
    #[serde(rename = "shot_name", alias = "name")]
    pub name: String,
    #[serde(rename = "status", default, deserialize_with = "lenient::deserialize")]
    pub overall: Option<Status>,
    #[serde(rename = "lay_status", default, deserialize_with = "lenient::deserialize")]
    pub layout: Option<Status>,
    #[serde(rename = "anim_status", default, deserialize_with = "lenient::deserialize")]
    pub animation: Option<Status>,
    #[serde(rename = "cfx_status", default, deserialize_with = "lenient::deserialize")]
    pub effects: Option<Status>,
    #[serde(rename = "lit_status", default, deserialize_with = "lenient::deserialize")]
    pub lighting: Option<Status>,
}

impl Shot {
    /// The stored status for a department, if the department applies to
    /// shots and the field has a recognized value.
    pub fn status(&self, department: Department) -> Option<Status> {
        match department {
            Department::Overall => self.overall,
            Department::Layout => self.layout,
            Department::Animation => self.animation,
            Department::Effects => self.effects,
            Department::Lighting => self.lighting,
            _ => None,
        }
    }

    /// Replace one department's status. Returns false (and changes
    /// nothing) for departments not tracked on shots.
    pub fn set_status(&mut self, department: Department, value: Status) -> bool {
        let slot = match department {
            Department::Overall => &mut self.overall,
            Department::Layout => &mut self.layout,
            Department::Animation => &mut self.animation,
            Department::Effects => &mut self.effects,
            Department::Lighting => &mut self.lighting,
            _ => return false,
        };
        *slot = Some(value);
        true
    }

    /// Status for display: unset fields read as "Not started" without
    /// rewriting the record.
    pub fn display_status(&self, department: Department) -> Status {
        self.status(department).unwrap_or_default()
    }
}
