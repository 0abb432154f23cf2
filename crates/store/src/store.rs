//! Single source of truth for the currently loaded project page.
//!
//! The store is process-local and mutated only from the event loop; each
//! mutator is one synchronous step, so a reader can never observe a
//! partially applied update. Remote I/O lives entirely upstream -- the
//! store is handed finished outcomes.

use tracktor_core::{CoreError, Department, Id, ItemKind, Status};

use crate::models::{Asset, Note, Project, Shot};

/// Load state of a remote-backed collection.
///
/// `NotFound` is a terminal marker distinct from `Loading`, so the view
/// layer can render an explicit not-found state instead of an empty
/// table.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Loadable<T> {
    #[default]
    Loading,
    Loaded(T),
    NotFound,
}

impl<T> Loadable<T> {
    /// The loaded value, if any.
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Everything a successful project load produces.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectData {
    pub project: Project,
    pub shots: Vec<Shot>,
    pub assets: Vec<Asset>,
}

/// In-memory collections for the active session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityStore {
    /// Bumped by every `begin_*` call; completions carrying an older
    /// value belong to a superseded page mount and are discarded.
    generation: u64,
    project: Loadable<Project>,
    shots: Loadable<Vec<Shot>>,
    assets: Loadable<Vec<Asset>>,
    /// Notes for the active (item, department) pair.
    notes: Loadable<Vec<Note>>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current mount generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn project(&self) -> &Loadable<Project> {
        &self.project
    }

    pub fn shots(&self) -> &Loadable<Vec<Shot>> {
        &self.shots
    }

    pub fn assets(&self) -> &Loadable<Vec<Asset>> {
        &self.assets
    }

    pub fn notes(&self) -> &Loadable<Vec<Note>> {
        &self.notes
    }

    // -- loading ------------------------------------------------------------

    /// Start a fresh project page load: everything back to `Loading`,
    /// new generation. Returns the token the completion must present.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.project = Loadable::Loading;
        self.shots = Loadable::Loading;
        self.assets = Loadable::Loading;
        self.notes = Loadable::Loading;
        self.generation
    }

    /// Install a load outcome. `None` means the project (or any of its
    /// collections) could not be fetched: all three become `NotFound`,
    /// never a partial mix. Returns false when `generation` is stale, in
    /// which case nothing changes.
    pub fn complete_load(&mut self, generation: u64, outcome: Option<ProjectData>) -> bool {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "Discarding stale load");
            return false;
        }
        match outcome {
            Some(data) => {
                self.project = Loadable::Loaded(data.project);
                self.shots = Loadable::Loaded(data.shots);
                self.assets = Loadable::Loaded(data.assets);
            }
            None => {
                self.project = Loadable::NotFound;
                self.shots = Loadable::NotFound;
                self.assets = Loadable::NotFound;
            }
        }
        true
    }

    /// Start a notes load for a newly mounted notes page.
    pub fn begin_notes_load(&mut self) -> u64 {
        self.generation += 1;
        self.notes = Loadable::Loading;
        self.generation
    }

    /// Install a notes load outcome; same staleness contract as
    /// [`complete_load`](Self::complete_load).
    pub fn complete_notes_load(&mut self, generation: u64, outcome: Option<Vec<Note>>) -> bool {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "Discarding stale notes load");
            return false;
        }
        self.notes = match outcome {
            Some(notes) => Loadable::Loaded(notes),
            None => Loadable::NotFound,
        };
        true
    }

    // -- field replacement --------------------------------------------------

    /// Replace exactly one department status on exactly one item.
    ///
    /// Returns false without touching anything when the id is absent or
    /// the department is not tracked on that kind -- an update confirmed
    /// for an entity the user has since navigated away from is simply
    /// dropped.
    pub fn replace_status(
        &mut self,
        kind: ItemKind,
        id: Id,
        department: Department,
        value: Status,
    ) -> bool {
        let replaced = match kind {
            ItemKind::Shots => self
                .shots
                .loaded_mut()
                .and_then(|shots| shots.iter_mut().find(|shot| shot.id == id))
                .is_some_and(|shot| shot.set_status(department, value)),
            ItemKind::Assets => self
                .assets
                .loaded_mut()
                .and_then(|assets| assets.iter_mut().find(|asset| asset.id == id))
                .is_some_and(|asset| asset.set_status(department, value)),
        };
        if !replaced {
            tracing::debug!(%kind, id, department = %department, "No matching item for status replacement");
        }
        replaced
    }

    // -- appends ------------------------------------------------------------

    /// Append a newly created shot. Duplicate ids are a contract
    /// violation: the remote assigns ids, so a collision means two
    /// creations were reconciled against the same response.
    pub fn append_shot(&mut self, shot: Shot) -> Result<(), CoreError> {
        let shots = self.shots.loaded_mut().ok_or_else(|| {
            CoreError::Internal("Cannot append a shot before the project is loaded".to_string())
        })?;
        if shots.iter().any(|existing| existing.id == shot.id) {
            return Err(CoreError::Conflict(format!(
                "Shot with id {} already exists",
                shot.id
            )));
        }
        shots.push(shot);
        Ok(())
    }

    /// Append a newly created asset. Same id contract as shots.
    pub fn append_asset(&mut self, asset: Asset) -> Result<(), CoreError> {
        let assets = self.assets.loaded_mut().ok_or_else(|| {
            CoreError::Internal("Cannot append an asset before the project is loaded".to_string())
        })?;
        if assets.iter().any(|existing| existing.id == asset.id) {
            return Err(CoreError::Conflict(format!(
                "Asset with id {} already exists",
                asset.id
            )));
        }
        assets.push(asset);
        Ok(())
    }

    /// Append a newly created note. Same id contract as items.
    pub fn append_note(&mut self, note: Note) -> Result<(), CoreError> {
        let notes = self.notes.loaded_mut().ok_or_else(|| {
            CoreError::Internal("Cannot append a note before notes are loaded".to_string())
        })?;
        if notes.iter().any(|existing| existing.id == note.id) {
            return Err(CoreError::Conflict(format!(
                "Note with id {} already exists",
                note.id
            )));
        }
        notes.push(note);
        Ok(())
    }

    /// Notes in display order: most recent first, stable for equal
    /// timestamps. Empty when notes are not loaded.
    pub fn notes_sorted(&self) -> Vec<&Note> {
        let mut notes: Vec<&Note> = self
            .notes
            .loaded()
            .map(|notes| notes.iter().collect())
            .unwrap_or_default();
        notes.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        notes
    }
}

impl<T> Loadable<T> {
    fn loaded_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }
}
