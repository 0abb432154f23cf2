//! Note record.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracktor_core::{Department, Id, ItemKind};

/// A review note attached to one (item, department) pair.
///
/// Notes are append-only: never edited, never deleted. Display order is
/// timestamp-descending regardless of insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: Id,
    #[serde(rename = "item_type")]
    pub item_kind: ItemKind,
    pub item_id: Id,
    #[serde(rename = "item_dept", with = "dept_code")]
    pub department: Department,
    #[serde(with = "timestamp")]
    pub timestamp: NaiveDateTime,
    #[serde(rename = "note_body")]
    pub body: String,
    pub author: String,
}

/// Department short codes on the wire (`"lay"`, `"cfx"`, ...).
mod dept_code {
    use serde::{Deserialize, Deserializer, Serializer};
    use tracktor_core::Department;

    pub fn serialize<S: Serializer>(dept: &Department, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(dept.code())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Department, D::Error> {
        let code = String::deserialize(deserializer)?;
        Department::from_code(&code).map_err(serde::de::Error::custom)
    }
}

/// Note timestamps arrive as ISO-8601 text, historically at minute
/// precision and later at second precision; both are accepted.
mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const WRITE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
    const READ_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

    pub fn serialize<S: Serializer>(
        value: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(WRITE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        READ_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(&raw, format).ok())
            .ok_or_else(|| serde::de::Error::custom(format!("unrecognized timestamp '{raw}'")))
    }
}
