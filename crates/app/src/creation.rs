//! Creation flow: a two-phase create for projects, shots, assets, and
//! notes.
//!
//! Phase one collects values for the target's declared field schema;
//! phase two validates and submits. Blank required fields abort before
//! any network call and keep the form open. A remote failure also keeps
//! the form open, with the entered values intact, so the user can retry.
//! Only a confirmed create closes the form -- and the entity appended to
//! the store is the remote's response, carrying the server-assigned id.

use std::collections::HashMap;

use tracktor_core::forms::{
    self, FieldSpec, ASSET_FIELDS, NOTE_FIELDS, PROJECT_FIELDS, SHOT_FIELDS,
};
use tracktor_core::{CoreError, Department, Id, ItemKind};
use tracktor_remote::api::CreateProjectRequest;
use tracktor_remote::ProductionService;
use tracktor_store::models::{Asset, Note, Project, Shot};

use crate::engine::SharedStore;
use crate::error::{AppError, AppResult};
use crate::notify::Notifier;

/// What the form is creating, with the context needed to submit it.
///
/// A new creatable kind needs a variant here and a field list in
/// `tracktor_core::forms` -- nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateTarget {
    Project {
        user_id: Id,
    },
    Shot {
        project_id: Id,
    },
    Asset {
        project_id: Id,
    },
    Note {
        project_id: Id,
        kind: ItemKind,
        item_id: Id,
        department: Department,
    },
}

impl CreateTarget {
    /// The declared field schema for this target.
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Self::Project { .. } => PROJECT_FIELDS,
            Self::Shot { .. } => SHOT_FIELDS,
            Self::Asset { .. } => ASSET_FIELDS,
            Self::Note { .. } => NOTE_FIELDS,
        }
    }
}

/// A successfully created entity, as returned by the remote.
#[derive(Debug, Clone, PartialEq)]
pub enum Created {
    Project(Project),
    Shot(Shot),
    Asset(Asset),
    Note(Note),
}

#[derive(Debug)]
struct FormState {
    target: CreateTarget,
    values: HashMap<String, String>,
}

/// The modal form state machine.
#[derive(Debug, Default)]
pub struct CreationFlow {
    form: Option<FormState>,
}

impl CreationFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.form.is_some()
    }

    /// Open the form for a target, discarding any previous form.
    pub fn open_for(&mut self, target: CreateTarget) {
        self.form = Some(FormState {
            target,
            values: HashMap::new(),
        });
    }

    /// The open form's field schema.
    pub fn fields(&self) -> Option<&'static [FieldSpec]> {
        self.form.as_ref().map(|form| form.target.fields())
    }

    /// Record an entered value. Keys outside the schema are ignored.
    pub fn set_field(&mut self, key: &str, value: impl Into<String>) -> bool {
        let Some(form) = self.form.as_mut() else {
            return false;
        };
        if !form.target.fields().iter().any(|field| field.key == key) {
            return false;
        }
        form.values.insert(key.to_string(), value.into());
        true
    }

    /// The currently entered value for a field.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.form
            .as_ref()
            .and_then(|form| form.values.get(key))
            .map(String::as_str)
    }

    /// Close the form without submitting.
    pub fn cancel(&mut self) {
        self.form = None;
    }

    /// Validate and submit the open form.
    ///
    /// Validation failures return before any remote call and silently
    /// keep the form open. Remote failures publish a notice and keep the
    /// form open. Success appends the created entity to the store and
    /// closes the form.
    pub async fn submit<S>(
        &mut self,
        service: &S,
        store: &SharedStore,
        notifier: &Notifier,
    ) -> AppResult<Created>
    where
        S: ProductionService + ?Sized,
    {
        let form = self
            .form
            .as_ref()
            .ok_or_else(|| CoreError::Internal("Submit with no open form".to_string()))?;

        let missing = forms::missing_required(form.target.fields(), &form.values);
        if !missing.is_empty() {
            return Err(AppError::Validation(
                missing.iter().map(|key| key.to_string()).collect(),
            ));
        }

        let target = form.target;
        let values = form.values.clone();

        match perform_create(service, target, &values).await {
            Ok(created) => {
                tracing::info!(?target, "Create confirmed");
                self.form = None;
                install(store, &created).await?;
                Ok(created)
            }
            Err(err) => {
                tracing::warn!(?target, error = %err, "Create failed");
                if !is_validation(&err) {
                    notifier.error(err.user_message());
                }
                Err(err)
            }
        }
    }
}

fn is_validation(err: &AppError) -> bool {
    matches!(
        err,
        AppError::Validation(_) | AppError::Core(CoreError::Validation(_))
    )
}

/// Entered value for a required field; validation has already run.
fn required<'a>(values: &'a HashMap<String, String>, key: &str) -> &'a str {
    values.get(key).map(String::as_str).unwrap_or_default()
}

/// Entered value for an optional field, with blank treated as absent.
fn optional(values: &HashMap<String, String>, key: &str) -> Option<String> {
    values
        .get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

async fn perform_create<S>(
    service: &S,
    target: CreateTarget,
    values: &HashMap<String, String>,
) -> AppResult<Created>
where
    S: ProductionService + ?Sized,
{
    match target {
        CreateTarget::Project { user_id } => {
            let shots_target = match optional(values, "shotsNum") {
                None => None,
                Some(raw) => Some(raw.parse::<i64>().map_err(|_| {
                    CoreError::Validation(format!(
                        "Number of shots must be an integer, got '{raw}'"
                    ))
                })?),
            };
            let kind = optional(values, "type");
            let deadline = optional(values, "deadline");
            let request = CreateProjectRequest {
                name: required(values, "name").to_string(),
                kind: kind.clone(),
                shots_target,
                deadline: deadline.clone(),
                user_id,
            };
            let created = service.create_project(&request).await?;
            // The remote answers with just the assigned identity; the
            // rest of the record is materialized from what was submitted.
            Ok(Created::Project(Project {
                id: created.id,
                name: created.name,
                kind,
                status: Some("New".to_string()),
                shots_target,
                deadline,
                sharecode: None,
            }))
        }
        CreateTarget::Shot { project_id } => {
            let shot = service
                .create_shot(project_id, required(values, "shot_name"))
                .await?;
            Ok(Created::Shot(shot))
        }
        CreateTarget::Asset { project_id } => {
            let asset = service
                .create_asset(
                    project_id,
                    required(values, "asset_name"),
                    required(values, "asset_type"),
                )
                .await?;
            Ok(Created::Asset(asset))
        }
        CreateTarget::Note {
            project_id,
            kind,
            item_id,
            department,
        } => {
            let note = service
                .create_note(project_id, kind, item_id, department, required(values, "note_body"))
                .await?;
            Ok(Created::Note(note))
        }
    }
}

/// Mirror a confirmed create into the store. Projects are not held in
/// the entity store (project lists are fetched per page), so only items
/// and notes land here.
async fn install(store: &SharedStore, created: &Created) -> AppResult<()> {
    let mut store = store.write().await;
    match created {
        Created::Project(_) => Ok(()),
        Created::Shot(shot) => store.append_shot(shot.clone()).map_err(AppError::from),
        Created::Asset(asset) => store.append_asset(asset.clone()).map_err(AppError::from),
        Created::Note(note) => store.append_note(note.clone()).map_err(AppError::from),
    }
}
