//! Tabbed table view: which category is active, which columns it shows,
//! and what each row renders as.
//!
//! Everything here is a pure function of an explicit store snapshot, so
//! the same snapshot always produces the same table. Rendering itself is
//! someone else's job; anything that can print rows given columns can
//! consume the output.

use tracktor_core::department::departments_for;
use tracktor_core::{Department, Id, ItemKind};
use tracktor_store::models::{Asset, Shot};
use tracktor_store::EntityStore;

/// What a table cell renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// The item's name; frontends typically render it as the link to the
    /// item page.
    Name,
    /// The asset's free-form type (assets only).
    AssetType,
    /// One department's status value.
    Status(Department),
}

/// One column of the tracking table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Stable key, matching the remote field where one exists.
    pub key: &'static str,
    pub header: &'static str,
    pub cell: CellKind,
}

/// The active category tab. Switching is a pure local transition and
/// never triggers a fetch -- both collections are loaded eagerly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableTabs {
    active: ItemKind,
}

impl TableTabs {
    pub fn active(&self) -> ItemKind {
        self.active
    }

    pub fn select(&mut self, kind: ItemKind) {
        self.active = kind;
    }
}

impl Default for TableTabs {
    fn default() -> Self {
        Self {
            active: ItemKind::Shots,
        }
    }
}

/// Ordered column list for a category: name (+ type for assets), then
/// one status column per department in declared order.
pub fn columns_for(kind: ItemKind) -> Vec<Column> {
    let mut columns = vec![Column {
        key: "name",
        header: match kind {
            ItemKind::Shots => "Shot Name",
            ItemKind::Assets => "Asset Name",
        },
        cell: CellKind::Name,
    }];
    if kind == ItemKind::Assets {
        columns.push(Column {
            key: "asset_type",
            header: "Asset Type",
            cell: CellKind::AssetType,
        });
    }
    for department in departments_for(kind) {
        columns.push(Column {
            key: department
                .status_field(kind)
                .expect("listed departments always map to a field"),
            header: department.label(),
            cell: CellKind::Status(*department),
        });
    }
    columns
}

/// One row projected through the column list into display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: Id,
    pub cells: Vec<String>,
}

fn shot_row(shot: &Shot, columns: &[Column]) -> RowView {
    let cells = columns
        .iter()
        .map(|column| match column.cell {
            CellKind::Name => shot.name.clone(),
            CellKind::AssetType => String::new(),
            CellKind::Status(department) => shot.display_status(department).to_string(),
        })
        .collect();
    RowView { id: shot.id, cells }
}

fn asset_row(asset: &Asset, columns: &[Column]) -> RowView {
    let cells = columns
        .iter()
        .map(|column| match column.cell {
            CellKind::Name => asset.name.clone(),
            CellKind::AssetType => asset.kind.clone().unwrap_or_default(),
            CellKind::Status(department) => asset.display_status(department).to_string(),
        })
        .collect();
    RowView {
        id: asset.id,
        cells,
    }
}

/// The visible rows for a category: the matching loaded collection,
/// unfiltered, projected through [`columns_for`]. Empty while loading or
/// not found -- callers that care about the distinction read the store's
/// load state directly.
pub fn row_views(store: &EntityStore, kind: ItemKind) -> Vec<RowView> {
    let columns = columns_for(kind);
    match kind {
        ItemKind::Shots => store
            .shots()
            .loaded()
            .map(|shots| shots.iter().map(|shot| shot_row(shot, &columns)).collect())
            .unwrap_or_default(),
        ItemKind::Assets => store
            .assets()
            .loaded()
            .map(|assets| {
                assets
                    .iter()
                    .map(|asset| asset_row(asset, &columns))
                    .collect()
            })
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shot_columns_are_name_plus_departments() {
        let headers: Vec<&str> = columns_for(ItemKind::Shots)
            .iter()
            .map(|c| c.header)
            .collect();
        assert_eq!(
            headers,
            ["Shot Name", "Status", "Layout", "Animation", "CFX", "Lighting"]
        );
    }

    #[test]
    fn asset_columns_include_type() {
        let headers: Vec<&str> = columns_for(ItemKind::Assets)
            .iter()
            .map(|c| c.header)
            .collect();
        assert_eq!(
            headers,
            [
                "Asset Name",
                "Asset Type",
                "Status",
                "Pre-production",
                "Modelling",
                "Surfacing",
                "CFX",
                "Lighting"
            ]
        );
    }

    #[test]
    fn columns_are_pure() {
        assert_eq!(columns_for(ItemKind::Shots), columns_for(ItemKind::Shots));
    }

    #[test]
    fn default_tab_is_shots() {
        let mut tabs = TableTabs::default();
        assert_eq!(tabs.active(), ItemKind::Shots);
        tabs.select(ItemKind::Assets);
        assert_eq!(tabs.active(), ItemKind::Assets);
    }
}
