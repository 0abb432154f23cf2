//! Declared field schemas for the creation flow.
//!
//! The schema-to-fields mapping is data: a creatable kind is defined
//! entirely by its field list, and the validation rule below is the only
//! logic. Field keys are the wire names the remote create endpoints
//! expect.

use std::collections::HashMap;

/// One input field of a creation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire name of the field, also the key entered values are stored under.
    pub key: &'static str,
    /// Human-facing label.
    pub label: &'static str,
    /// Required fields must be non-blank before submission.
    pub required: bool,
    /// Hint for renderers that support multi-line input.
    pub multiline: bool,
}

impl FieldSpec {
    const fn required(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            required: true,
            multiline: false,
        }
    }

    const fn optional(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            required: false,
            multiline: false,
        }
    }
}

/// Fields collected when creating a project.
pub const PROJECT_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", "Project name"),
    FieldSpec::optional("type", "Project type"),
    FieldSpec::optional("shotsNum", "Number of shots"),
    FieldSpec::optional("deadline", "Project deadline"),
];

/// Fields collected when creating a shot.
pub const SHOT_FIELDS: &[FieldSpec] = &[FieldSpec::required("shot_name", "Shot Name")];

/// Fields collected when creating an asset.
pub const ASSET_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("asset_name", "Asset Name"),
    FieldSpec::required("asset_type", "Asset Type"),
];

/// Fields collected when adding a note.
pub const NOTE_FIELDS: &[FieldSpec] = &[FieldSpec {
    key: "note_body",
    label: "Note",
    required: true,
    multiline: true,
}];

/// Whether an entered value counts as blank. Whitespace-only is blank.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Keys of required fields that are absent or blank in `values`.
///
/// An empty result means the form may be submitted.
pub fn missing_required<'a>(
    fields: &'a [FieldSpec],
    values: &HashMap<String, String>,
) -> Vec<&'a str> {
    fields
        .iter()
        .filter(|field| field.required)
        .filter(|field| values.get(field.key).map_or(true, |v| is_blank(v)))
        .map(|field| field.key)
        .collect()
}
