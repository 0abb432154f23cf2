//! Page loaders.
//!
//! A load is bracketed by the store's generation counter: the token taken
//! at `begin_*` must still be current when the responses land, otherwise
//! the completion belongs to a page the user already left and is
//! discarded rather than applied.

use tracktor_core::{Department, Id, ItemKind};
use tracktor_remote::{ProductionService, RemoteError};
use tracktor_store::store::ProjectData;

use crate::engine::SharedStore;
use crate::notify::Notifier;

/// Load a project page: project, shots, and assets are fetched
/// concurrently. Any failure installs the not-found marker for all
/// three -- the page never renders partially populated.
pub async fn load_project<S>(service: &S, store: &SharedStore, notifier: &Notifier, project_id: Id)
where
    S: ProductionService + ?Sized,
{
    let generation = store.write().await.begin_load();
    tracing::debug!(project_id, generation, "Loading project");

    let (project, shots, assets) = tokio::join!(
        service.fetch_project(project_id),
        service.list_shots(project_id),
        service.list_assets(project_id),
    );

    let outcome = match (project, shots, assets) {
        (Ok(project), Ok(shots), Ok(assets)) => Some(ProjectData {
            project,
            shots,
            assets,
        }),
        (Err(err), _, _) | (_, Err(err), _) | (_, _, Err(err)) => {
            tracing::warn!(project_id, error = %err, "Project load failed");
            if !matches!(err, RemoteError::NotFound) {
                notifier.error(err.user_message());
            }
            None
        }
    };

    if !store.write().await.complete_load(generation, outcome) {
        tracing::debug!(project_id, generation, "Project load superseded");
    }
}

/// Load the notes for one (item, department) pair, with the same
/// staleness contract as [`load_project`].
pub async fn load_notes<S>(
    service: &S,
    store: &SharedStore,
    notifier: &Notifier,
    project_id: Id,
    kind: ItemKind,
    item_id: Id,
    department: Department,
) where
    S: ProductionService + ?Sized,
{
    let generation = store.write().await.begin_notes_load();

    let outcome = match service
        .list_notes(project_id, kind, item_id, department)
        .await
    {
        Ok(notes) => Some(notes),
        Err(err) => {
            tracing::warn!(project_id, item_id, error = %err, "Notes load failed");
            if !matches!(err, RemoteError::NotFound) {
                notifier.error(err.user_message());
            }
            None
        }
    };

    if !store.write().await.complete_notes_load(generation, outcome) {
        tracing::debug!(project_id, item_id, generation, "Notes load superseded");
    }
}
