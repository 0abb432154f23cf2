//! In-process fake of the remote service.
//!
//! Supports the behaviors the engine tests need to pin down: call
//! counting (to prove validation short-circuits before the network),
//! programmable failures, and oneshot gates that hold a response until
//! the test releases it (to drive response-ordering races
//! deterministically).

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use tracktor_app::engine::SharedStore;
use tracktor_core::{Department, Id, ItemKind, Status};
use tracktor_remote::api::{CreateProjectRequest, CreatedProject};
use tracktor_remote::{ProductionService, RemoteError};
use tracktor_store::models::{Asset, Note, Project, Shot, User};
use tracktor_store::store::ProjectData;

pub fn rejected(message: &str) -> RemoteError {
    RemoteError::Rejected {
        status: 500,
        message: Some(message.to_string()),
    }
}

pub fn project(id: Id, name: &str) -> Project {
    Project {
        id,
        name: name.to_string(),
        kind: None,
        status: Some("New".to_string()),
        shots_target: None,
        deadline: None,
        sharecode: None,
    }
}

pub fn shot(id: Id, name: &str) -> Shot {
    Shot {
        id,
        project_id: 42,
        name: name.to_string(),
        overall: None,
        layout: None,
        animation: None,
        effects: None,
        lighting: None,
    }
}

pub fn asset(id: Id, name: &str) -> Asset {
    Asset {
        id,
        project_id: 42,
        name: name.to_string(),
        kind: Some("prop".to_string()),
        overall: None,
        pre_production: None,
        modelling: None,
        surfacing: None,
        effects: None,
        lighting: None,
    }
}

pub fn note(id: Id, minute: u32, body: &str) -> Note {
    Note {
        id,
        item_kind: ItemKind::Shots,
        item_id: 7,
        department: Department::Layout,
        timestamp: NaiveDate::from_ymd_opt(2026, 8, 6)
            .unwrap()
            .and_hms_opt(10, minute, 0)
            .unwrap(),
        body: body.to_string(),
        author: "janedoe".to_string(),
    }
}

/// A store whose project page finished loading with the given items.
pub async fn loaded_store(shots: Vec<Shot>, assets: Vec<Asset>) -> SharedStore {
    let store = tracktor_app::shared_store();
    let mut guard = store.write().await;
    let generation = guard.begin_load();
    guard.complete_load(
        generation,
        Some(ProjectData {
            project: project(42, "spring"),
            shots,
            assets,
        }),
    );
    drop(guard);
    store
}

/// A store whose notes page finished loading with the given notes.
pub async fn store_with_notes(notes: Vec<Note>) -> SharedStore {
    let store = tracktor_app::shared_store();
    let mut guard = store.write().await;
    let generation = guard.begin_notes_load();
    guard.complete_notes_load(generation, Some(notes));
    drop(guard);
    store
}

pub struct FakeService {
    pub project: Mutex<Option<Project>>,
    pub shots: Mutex<Vec<Shot>>,
    pub assets: Mutex<Vec<Asset>>,
    pub notes: Mutex<Vec<Note>>,

    /// When set, `update_status` rejects with "update refused".
    pub fail_updates: AtomicBool,
    /// When set, the create endpoints reject with "create refused".
    pub fail_creates: AtomicBool,
    /// When set, shot listing rejects with "listing failed".
    pub fail_shot_list: AtomicBool,

    pub update_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub project_fetches: AtomicUsize,

    /// Each `update_status` call takes the next gate (if any) and waits
    /// for the test to release it before responding.
    pub update_gates: Mutex<VecDeque<tokio::sync::oneshot::Receiver<()>>>,
    /// Same, for `fetch_project`.
    pub project_gates: Mutex<VecDeque<tokio::sync::oneshot::Receiver<()>>>,

    next_id: AtomicI64,
}

impl FakeService {
    pub fn new() -> Self {
        Self {
            project: Mutex::new(Some(project(42, "spring"))),
            shots: Mutex::new(Vec::new()),
            assets: Mutex::new(Vec::new()),
            notes: Mutex::new(Vec::new()),
            fail_updates: AtomicBool::new(false),
            fail_creates: AtomicBool::new(false),
            fail_shot_list: AtomicBool::new(false),
            update_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            project_fetches: AtomicUsize::new(0),
            update_gates: Mutex::new(VecDeque::new()),
            project_gates: Mutex::new(VecDeque::new()),
            next_id: AtomicI64::new(100),
        }
    }

    fn assign_id(&self) -> Id {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    async fn wait_for_gate(gates: &Mutex<VecDeque<tokio::sync::oneshot::Receiver<()>>>) {
        let gate = gates.lock().unwrap().pop_front();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
    }
}

#[async_trait]
impl ProductionService for FakeService {
    async fn login(&self, _name: &str, _password: &str) -> Result<Id, RemoteError> {
        Ok(5)
    }

    async fn signup(&self, _name: &str, _password: &str) -> Result<(), RemoteError> {
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, RemoteError> {
        Ok(Vec::new())
    }

    async fn list_projects(&self) -> Result<Vec<Project>, RemoteError> {
        Ok(self.project.lock().unwrap().clone().into_iter().collect())
    }

    async fn memberships(&self, _user_id: Id) -> Result<Vec<Id>, RemoteError> {
        Ok(vec![42])
    }

    async fn fetch_project(&self, _project_id: Id) -> Result<Project, RemoteError> {
        self.project_fetches.fetch_add(1, Ordering::SeqCst);
        Self::wait_for_gate(&self.project_gates).await;
        self.project
            .lock()
            .unwrap()
            .clone()
            .ok_or(RemoteError::NotFound)
    }

    async fn create_project(
        &self,
        request: &CreateProjectRequest,
    ) -> Result<CreatedProject, RemoteError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_creates.load(Ordering::SeqCst) {
            return Err(rejected("create refused"));
        }
        Ok(CreatedProject {
            id: self.assign_id(),
            name: request.name.clone(),
        })
    }

    async fn delete_project(&self, _project_id: Id) -> Result<(), RemoteError> {
        Ok(())
    }

    async fn share_code(&self, _project_id: Id) -> Result<String, RemoteError> {
        Ok("CODE123".to_string())
    }

    async fn join_project(&self, _sharecode: &str, _user_id: Id) -> Result<Id, RemoteError> {
        Ok(42)
    }

    async fn list_shots(&self, _project_id: Id) -> Result<Vec<Shot>, RemoteError> {
        if self.fail_shot_list.load(Ordering::SeqCst) {
            return Err(rejected("listing failed"));
        }
        Ok(self.shots.lock().unwrap().clone())
    }

    async fn list_assets(&self, _project_id: Id) -> Result<Vec<Asset>, RemoteError> {
        Ok(self.assets.lock().unwrap().clone())
    }

    async fn fetch_shot(&self, _project_id: Id, shot_id: Id) -> Result<Shot, RemoteError> {
        self.shots
            .lock()
            .unwrap()
            .iter()
            .find(|shot| shot.id == shot_id)
            .cloned()
            .ok_or(RemoteError::NotFound)
    }

    async fn fetch_asset(&self, _project_id: Id, asset_id: Id) -> Result<Asset, RemoteError> {
        self.assets
            .lock()
            .unwrap()
            .iter()
            .find(|asset| asset.id == asset_id)
            .cloned()
            .ok_or(RemoteError::NotFound)
    }

    async fn create_shot(&self, project_id: Id, name: &str) -> Result<Shot, RemoteError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_creates.load(Ordering::SeqCst) {
            return Err(rejected("create refused"));
        }
        let mut created = shot(self.assign_id(), name);
        created.project_id = project_id;
        Ok(created)
    }

    async fn create_asset(
        &self,
        project_id: Id,
        name: &str,
        kind: &str,
    ) -> Result<Asset, RemoteError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_creates.load(Ordering::SeqCst) {
            return Err(rejected("create refused"));
        }
        let mut created = asset(self.assign_id(), name);
        created.project_id = project_id;
        created.kind = Some(kind.to_string());
        Ok(created)
    }

    async fn update_status(
        &self,
        _project_id: Id,
        _kind: ItemKind,
        _item_id: Id,
        _status_item: &str,
        _value: Status,
    ) -> Result<(), RemoteError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        Self::wait_for_gate(&self.update_gates).await;
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(rejected("update refused"));
        }
        Ok(())
    }

    async fn list_notes(
        &self,
        _project_id: Id,
        _kind: ItemKind,
        _item_id: Id,
        _department: Department,
    ) -> Result<Vec<Note>, RemoteError> {
        Ok(self.notes.lock().unwrap().clone())
    }

    async fn create_note(
        &self,
        _project_id: Id,
        kind: ItemKind,
        item_id: Id,
        department: Department,
        body: &str,
    ) -> Result<Note, RemoteError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_creates.load(Ordering::SeqCst) {
            return Err(rejected("create refused"));
        }
        let id = self.assign_id();
        let mut created = note(id, (id % 60) as u32, body);
        created.item_kind = kind;
        created.item_id = item_id;
        created.department = department;
        Ok(created)
    }
}
