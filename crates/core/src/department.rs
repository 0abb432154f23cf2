//! Tracked item categories and their per-category department lists.
//!
//! Every (category, department) pair maps to exactly one status field on
//! the remote record; the mapping tables here are the single place that
//! knows those field names.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// ItemKind
// ---------------------------------------------------------------------------

/// The two tracked item categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    #[serde(rename = "shots")]
    Shots,
    #[serde(rename = "assets")]
    Assets,
}

impl ItemKind {
    /// Wire representation, also used as the path segment in item routes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shots => "shots",
            Self::Assets => "assets",
        }
    }

    /// Singular display label for one item of this kind.
    pub fn singular(&self) -> &'static str {
        match self {
            Self::Shots => "Shot",
            Self::Assets => "Asset",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ItemKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shots" => Ok(Self::Shots),
            "assets" => Ok(Self::Assets),
            other => Err(CoreError::Validation(format!(
                "Invalid item kind '{other}'. Must be one of: shots, assets"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Department
// ---------------------------------------------------------------------------

/// A workflow department carrying its own status field on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Overall,
    Layout,
    Animation,
    PreProduction,
    Modelling,
    Surfacing,
    Effects,
    Lighting,
}

/// Departments tracked on a shot, in column order.
pub const SHOT_DEPARTMENTS: &[Department] = &[
    Department::Overall,
    Department::Layout,
    Department::Animation,
    Department::Effects,
    Department::Lighting,
];

/// Departments tracked on an asset, in column order.
pub const ASSET_DEPARTMENTS: &[Department] = &[
    Department::Overall,
    Department::PreProduction,
    Department::Modelling,
    Department::Surfacing,
    Department::Effects,
    Department::Lighting,
];

/// The fixed department list for an item category.
pub fn departments_for(kind: ItemKind) -> &'static [Department] {
    match kind {
        ItemKind::Shots => SHOT_DEPARTMENTS,
        ItemKind::Assets => ASSET_DEPARTMENTS,
    }
}

impl Department {
    /// Short code used in note routes and URL query strings.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Overall => "overall",
            Self::Layout => "lay",
            Self::Animation => "anim",
            Self::PreProduction => "prepro",
            Self::Modelling => "mod",
            Self::Surfacing => "srf",
            Self::Effects => "cfx",
            Self::Lighting => "lit",
        }
    }

    /// Column header / tab label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Overall => "Status",
            Self::Layout => "Layout",
            Self::Animation => "Animation",
            Self::PreProduction => "Pre-production",
            Self::Modelling => "Modelling",
            Self::Surfacing => "Surfacing",
            Self::Effects => "CFX",
            Self::Lighting => "Lighting",
        }
    }

    /// Whether this department is tracked on items of `kind`.
    pub fn applies_to(&self, kind: ItemKind) -> bool {
        departments_for(kind).contains(self)
    }

    /// The remote status field this department maps to on items of `kind`.
    ///
    /// Returns `None` when the department is not tracked on that kind.
    /// The overall field is the one place the remote schema diverges
    /// between the two categories.
    pub fn status_field(&self, kind: ItemKind) -> Option<&'static str> {
        let field = match (self, kind) {
            (Self::Overall, ItemKind::Shots) => "status",
            (Self::Overall, ItemKind::Assets) => "asset_status",
            (Self::Layout, ItemKind::Shots) => "lay_status",
            (Self::Animation, ItemKind::Shots) => "anim_status",
            (Self::PreProduction, ItemKind::Assets) => "prepro_status",
            (Self::Modelling, ItemKind::Assets) => "mod_status",
            (Self::Surfacing, ItemKind::Assets) => "srf_status",
            (Self::Effects, _) => "cfx_status",
            (Self::Lighting, _) => "lit_status",
            _ => return None,
        };
        Some(field)
    }

    /// Parse a short code back into a department.
    pub fn from_code(code: &str) -> Result<Self, CoreError> {
        const ALL: &[Department] = &[
            Department::Overall,
            Department::Layout,
            Department::Animation,
            Department::PreProduction,
            Department::Modelling,
            Department::Surfacing,
            Department::Effects,
            Department::Lighting,
        ];
        ALL.iter()
            .copied()
            .find(|dept| dept.code() == code)
            .ok_or_else(|| CoreError::Validation(format!("Invalid department code '{code}'")))
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
