//! Status update engine.
//!
//! Updates are confirm-then-apply: the remote PATCH goes out first and
//! the local table only changes once the remote has accepted the new
//! value, so a failed update can never leave the store lying. Each
//! user action is attempted at most once; nothing retries.
//!
//! Updates to different fields may be in flight simultaneously and are
//! independent. Updates to the *same* field are not serialized: whichever
//! response arrives last determines the stored value (last-response-wins,
//! see DESIGN.md).

use std::sync::Arc;

use tokio::sync::RwLock;

use tracktor_core::{CoreError, Department, Id, ItemKind, Status};
use tracktor_remote::ProductionService;
use tracktor_store::EntityStore;

use crate::error::AppResult;
use crate::notify::Notifier;

/// Shared handle to the entity store.
///
/// The store is only ever mutated under the write lock for a single
/// synchronous step, so readers never observe a half-applied update.
pub type SharedStore = Arc<RwLock<EntityStore>>;

/// Fresh store handle for a new client session.
pub fn shared_store() -> SharedStore {
    Arc::new(RwLock::new(EntityStore::new()))
}

/// One requested status edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusUpdate {
    pub kind: ItemKind,
    pub item_id: Id,
    pub department: Department,
    pub value: Status,
}

/// Submit one status edit: PATCH the remote, then mirror the confirmed
/// value into the store.
///
/// On failure the store is untouched and a notice carries the remote's
/// message (or a generic fallback) to the user; the cell keeps showing
/// the pre-update value.
pub async fn submit_status_update<S>(
    service: &S,
    store: &SharedStore,
    notifier: &Notifier,
    project_id: Id,
    update: StatusUpdate,
) -> AppResult<()>
where
    S: ProductionService + ?Sized,
{
    let status_item = update
        .department
        .status_field(update.kind)
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "Department '{}' is not tracked on {}",
                update.department.code(),
                update.kind
            ))
        })?;

    match service
        .update_status(
            project_id,
            update.kind,
            update.item_id,
            status_item,
            update.value,
        )
        .await
    {
        Ok(()) => {
            store
                .write()
                .await
                .replace_status(update.kind, update.item_id, update.department, update.value);
            tracing::info!(
                project_id,
                item_id = update.item_id,
                kind = %update.kind,
                status_item,
                value = %update.value,
                "Status update confirmed"
            );
            Ok(())
        }
        Err(err) => {
            tracing::warn!(
                project_id,
                item_id = update.item_id,
                status_item,
                error = %err,
                "Status update failed"
            );
            notifier.error(err.user_message());
            Err(err.into())
        }
    }
}
