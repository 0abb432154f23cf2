//! Status update engine behavior against the fake remote.

mod support;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use assert_matches::assert_matches;

use support::FakeService;
use tracktor_app::engine::{submit_status_update, StatusUpdate};
use tracktor_app::{AppError, Notifier};
use tracktor_core::{CoreError, Department, ItemKind, Status};
use tracktor_remote::RemoteError;

fn layout_update(item_id: i64, value: Status) -> StatusUpdate {
    StatusUpdate {
        kind: ItemKind::Shots,
        item_id,
        department: Department::Layout,
        value,
    }
}

#[tokio::test]
async fn confirmed_update_replaces_exactly_one_field() {
    let fake = FakeService::new();
    let store =
        support::loaded_store(vec![support::shot(7, "sh010"), support::shot(8, "sh020")], vec![])
            .await;
    let notifier = Notifier::default();

    submit_status_update(&fake, &store, &notifier, 42, layout_update(7, Status::Wip))
        .await
        .unwrap();

    let guard = store.read().await;
    let shots = guard.shots().loaded().unwrap();
    assert_eq!(shots[0].layout, Some(Status::Wip));
    assert_eq!(shots[0].overall, None);
    assert_eq!(shots[0].animation, None);
    assert_eq!(shots[1], support::shot(8, "sh020"), "other rows untouched");
    assert_eq!(fake.update_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn failed_update_leaves_store_unchanged_and_notifies() {
    let fake = FakeService::new();
    fake.fail_updates.store(true, Ordering::SeqCst);
    let store = support::loaded_store(vec![support::shot(7, "sh010")], vec![]).await;
    let notifier = Notifier::default();
    let mut notices = notifier.subscribe();

    let before = store.read().await.clone();
    let result =
        submit_status_update(&fake, &store, &notifier, 42, layout_update(7, Status::Complete)).await;

    assert_matches!(
        result,
        Err(AppError::Remote(RemoteError::Rejected { .. }))
    );
    assert_eq!(*store.read().await, before, "store must be untouched");

    let notice = notices.recv().await.unwrap();
    assert_eq!(notice.message, "update refused");
}

#[tokio::test]
async fn inapplicable_department_never_reaches_the_remote() {
    let fake = FakeService::new();
    let store = support::loaded_store(vec![support::shot(7, "sh010")], vec![]).await;
    let notifier = Notifier::default();

    let result = submit_status_update(
        &fake,
        &store,
        &notifier,
        42,
        StatusUpdate {
            kind: ItemKind::Shots,
            item_id: 7,
            department: Department::Surfacing,
            value: Status::Wip,
        },
    )
    .await;

    assert_matches!(result, Err(AppError::Core(CoreError::Validation(_))));
    assert_eq!(fake.update_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn update_for_departed_item_is_dropped_quietly() {
    // The remote confirms, but the user has navigated elsewhere and the
    // item is no longer in the store: the confirmation lands nowhere.
    let fake = FakeService::new();
    let store = support::loaded_store(vec![support::shot(8, "sh020")], vec![]).await;
    let notifier = Notifier::default();

    submit_status_update(&fake, &store, &notifier, 42, layout_update(7, Status::Wip))
        .await
        .unwrap();

    let guard = store.read().await;
    assert_eq!(guard.shots().loaded().unwrap()[0].layout, None);
}

#[tokio::test]
async fn same_field_race_resolves_to_last_arriving_response() {
    let fake = Arc::new(FakeService::new());
    let store = support::loaded_store(vec![support::shot(7, "sh010")], vec![]).await;
    let notifier = Notifier::default();

    let (first_release, first_gate) = tokio::sync::oneshot::channel();
    let (second_release, second_gate) = tokio::sync::oneshot::channel();
    fake.update_gates
        .lock()
        .unwrap()
        .extend([first_gate, second_gate]);

    // First edit: WIP. Wait until its PATCH is in flight before issuing
    // the second, so the gates pair up deterministically.
    let first = tokio::spawn({
        let (fake, store, notifier) = (Arc::clone(&fake), Arc::clone(&store), notifier.clone());
        async move {
            submit_status_update(&*fake, &store, &notifier, 42, layout_update(7, Status::Wip)).await
        }
    });
    while fake.update_calls.load(Ordering::SeqCst) < 1 {
        tokio::task::yield_now().await;
    }

    // Second edit: Complete.
    let second = tokio::spawn({
        let (fake, store, notifier) = (Arc::clone(&fake), Arc::clone(&store), notifier.clone());
        async move {
            submit_status_update(&*fake, &store, &notifier, 42, layout_update(7, Status::Complete))
                .await
        }
    });
    while fake.update_calls.load(Ordering::SeqCst) < 2 {
        tokio::task::yield_now().await;
    }

    // Responses arrive out of submission order: Complete first, WIP last.
    second_release.send(()).unwrap();
    second.await.unwrap().unwrap();
    assert_eq!(
        store.read().await.shots().loaded().unwrap()[0].layout,
        Some(Status::Complete)
    );

    first_release.send(()).unwrap();
    first.await.unwrap().unwrap();

    // Last response wins: the earlier edit's value stands.
    assert_eq!(
        store.read().await.shots().loaded().unwrap()[0].layout,
        Some(Status::Wip)
    );
}
