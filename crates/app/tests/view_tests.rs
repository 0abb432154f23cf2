//! Tabbed table projection over store snapshots.

mod support;

use tracktor_app::view::{columns_for, row_views, TableTabs};
use tracktor_core::{Department, ItemKind, Status};

#[tokio::test]
async fn category_switch_shows_exactly_the_other_collection() {
    let store = support::loaded_store(
        vec![support::shot(7, "sh010"), support::shot(8, "sh020")],
        vec![
            support::asset(1, "chair"),
            support::asset(2, "table"),
            support::asset(3, "lamp"),
        ],
    )
    .await;
    let guard = store.read().await;

    let mut tabs = TableTabs::default();
    assert_eq!(row_views(&guard, tabs.active()).len(), 2);

    tabs.select(ItemKind::Assets);
    let rows = row_views(&guard, tabs.active());
    assert_eq!(rows.len(), 3, "exactly the assets, unaffected by shots");
    let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
    assert_eq!(ids, [1, 2, 3]);
}

#[tokio::test]
async fn unset_statuses_render_as_not_started() {
    let store = support::loaded_store(vec![support::shot(7, "sh010")], vec![]).await;
    let guard = store.read().await;

    let rows = row_views(&guard, ItemKind::Shots);
    assert_eq!(rows[0].cells[0], "sh010");
    for cell in &rows[0].cells[1..] {
        assert_eq!(cell, "Not started");
    }
}

#[tokio::test]
async fn stored_statuses_render_by_display_name() {
    let mut shot = support::shot(7, "sh010");
    shot.set_status(Department::Layout, Status::ReadyToReview);
    let store = support::loaded_store(vec![shot], vec![]).await;
    let guard = store.read().await;

    let columns = columns_for(ItemKind::Shots);
    let layout_index = columns
        .iter()
        .position(|column| column.header == "Layout")
        .unwrap();
    let rows = row_views(&guard, ItemKind::Shots);
    assert_eq!(rows[0].cells[layout_index], "Ready to Review");
}

#[tokio::test]
async fn unloaded_collections_yield_no_rows() {
    let store = tracktor_app::shared_store();
    let guard = store.read().await;
    assert!(row_views(&guard, ItemKind::Shots).is_empty());
    assert!(row_views(&guard, ItemKind::Assets).is_empty());
}
