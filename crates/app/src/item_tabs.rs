//! Department tabs on the item detail page.
//!
//! Narrower than the category tabs: the allowed tab list depends on the
//! item kind, the active tab resets to the first entry whenever the kind
//! changes, and the selection round-trips through the page URL's query
//! string so it survives reload and back-navigation.

use tracktor_core::department::departments_for;
use tracktor_core::{CoreError, Department, ItemKind};

/// Query parameter carrying the active department.
const QUERY_KEY: &str = "department";

/// Active department tab for one item page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemTabs {
    kind: ItemKind,
    active: Department,
}

impl ItemTabs {
    /// Tabs for an item of `kind`, defaulting to the first department.
    pub fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            active: departments_for(kind)[0],
        }
    }

    /// Restore tabs from a URL query string (`department=lay`). An
    /// absent, unknown, or inapplicable value falls back to the default
    /// first tab rather than failing.
    pub fn from_query(kind: ItemKind, query: &str) -> Self {
        let mut tabs = Self::new(kind);
        let selected = query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == QUERY_KEY)
            .and_then(|(_, code)| Department::from_code(code).ok());
        if let Some(department) = selected {
            let _ = tabs.select(department);
        }
        tabs
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn active(&self) -> Department {
        self.active
    }

    /// The tab list for the current kind, in display order.
    pub fn departments(&self) -> &'static [Department] {
        departments_for(self.kind)
    }

    /// Switch to a different item kind; the active tab resets to that
    /// kind's first department.
    pub fn set_kind(&mut self, kind: ItemKind) {
        if kind != self.kind {
            self.kind = kind;
            self.active = departments_for(kind)[0];
        }
    }

    /// Activate a department tab. Rejects departments not tracked on the
    /// current kind, leaving the selection unchanged.
    pub fn select(&mut self, department: Department) -> Result<(), CoreError> {
        if !department.applies_to(self.kind) {
            return Err(CoreError::Validation(format!(
                "Department '{}' is not tracked on {}",
                department.code(),
                self.kind
            )));
        }
        self.active = department;
        Ok(())
    }

    /// The query string that makes the current selection survive a
    /// reload.
    pub fn query_string(&self) -> String {
        format!("{QUERY_KEY}={}", self.active.code())
    }
}
