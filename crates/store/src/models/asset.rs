//! Asset record.

use serde::{Deserialize, Serialize};
use tracktor_core::status::lenient;
use tracktor_core::{Department, Id, Status};

/// An asset and its per-department workflow state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    #[serde(alias = "asset_id")]
    pub id: Id,
    #[serde(default)]
    pub project_id: Id,
    #[serde(rename = "asset_name", alias = "name")]
    pub name: String,
    /// Free-form asset category ("prop", "character", ...).
    #[serde(rename = "asset_type", default)]
    pub kind: Option<String>,
    #[serde(rename = "asset_status", default, deserialize_with = "lenient::deserialize")]
    pub overall: Option<Status>,
    #[serde(rename = "prepro_status", default, deserialize_with = "lenient::deserialize")]
    pub pre_production: Option<Status>,
    #[serde(rename = "mod_status", default, deserialize_with = "lenient::deserialize")]
    pub modelling: Option<Status>,
    #[serde(rename = "srf_status", default, deserialize_with = "lenient::deserialize")]
    pub surfacing: Option<Status>,
    #[serde(rename = "cfx_status", default, deserialize_with = "lenient::deserialize")]
    pub effects: Option<Status>,
    #[serde(rename = "lit_status", default, deserialize_with = "lenient::deserialize")]
    pub lighting: Option<Status>,
}

impl Asset {
    /// The stored status for a department, if the department applies to
    /// assets and the field has a recognized value.
    pub fn status(&self, department: Department) -> Option<Status> {
        match department {
            Department::Overall => self.overall,
            Department::PreProduction => self.pre_production,
            Department::Modelling => self.modelling,
            Department::Surfacing => self.surfacing,
            Department::Effects => self.effects,
            Department::Lighting => self.lighting,
            _ => None,
        }
    }

    /// Replace one department's status. Returns false (and changes
    /// nothing) for departments not tracked on assets.
    pub fn set_status(&mut self, department: Department, value: Status) -> bool {
        let slot = match department {
            Department::Overall => &mut self.overall,
            Department::PreProduction => &mut self.pre_production,
            Department::Modelling => &mut self.modelling,
            Department::Surfacing => &mut self.surfacing,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_remote_row() {
        let asset: Asset = serde_json::from_str(
            r#"{
                "id": 3,
                "project_id": 42,
                "asset_name": "chair",
                "asset_type": "prop",
                "asset_status": "Ready to Review",
                "prepro_status": "Complete",
                "mod_status": "Complete",
                "srf_status": "WIP",
                "cfx_status": "Not started",
                "lit_status": "Omitted"
            }"#,
        )
        .unwrap();
        assert_eq!(asset.name, "chair");
        assert_eq!(asset.kind.as_deref(), Some("prop"));
        assert_eq!(asset.overall, Some(Status::ReadyToReview));
        assert_eq!(asset.surfacing, Some(Status::Wip));
        assert_eq!(asset.lighting, Some(Status::Omitted));
    }

    #[test]
    fn shot_departments_do_not_apply() {
        let mut asset: Asset =
            serde_json::from_str(r#"{"id": 3, "asset_name": "chair"}"#).unwrap();
        assert!(!asset.set_status(Department::Layout, Status::Wip));
        assert!(asset.set_status(Department::Surfacing, Status::Wip));
        assert_eq!(asset.display_status(Department::Layout), Status::NotStarted);
    }
}
