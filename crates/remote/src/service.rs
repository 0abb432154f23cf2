//! Service seam between the client engine and the remote store.
//!
//! The engine, loader, and creation flow depend on this trait rather
//! than on [`TracktorApi`] directly, so tests drive them with an
//! in-process fake and can count or gate individual calls.

use async_trait::async_trait;

use tracktor_core::{Department, Id, ItemKind, Status};
use tracktor_store::models::{Asset, Note, Project, Shot, User};

use crate::api::{CreateProjectRequest, CreatedProject, TracktorApi};
use crate::error::RemoteError;

/// Every remote operation the client performs.
#[async_trait]
pub trait ProductionService: Send + Sync {
    // -- session ----------------------------------------------------------
    async fn login(&self, name: &str, password: &str) -> Result<Id, RemoteError>;
    async fn signup(&self, name: &str, password: &str) -> Result<(), RemoteError>;
    async fn list_users(&self) -> Result<Vec<User>, RemoteError>;

    // -- projects ---------------------------------------------------------
    async fn list_projects(&self) -> Result<Vec<Project>, RemoteError>;
    async fn memberships(&self, user_id: Id) -> Result<Vec<Id>, RemoteError>;
    async fn fetch_project(&self, project_id: Id) -> Result<Project, RemoteError>;
    async fn create_project(
        &self,
        request: &CreateProjectRequest,
    ) -> Result<CreatedProject, RemoteError>;
    async fn delete_project(&self, project_id: Id) -> Result<(), RemoteError>;
    async fn share_code(&self, project_id: Id) -> Result<String, RemoteError>;
    async fn join_project(&self, sharecode: &str, user_id: Id) -> Result<Id, RemoteError>;

    // -- items ------------------------------------------------------------
    async fn list_shots(&self, project_id: Id) -> Result<Vec<Shot>, RemoteError>;
    async fn list_assets(&self, project_id: Id) -> Result<Vec<Asset>, RemoteError>;
    async fn fetch_shot(&self, project_id: Id, shot_id: Id) -> Result<Shot, RemoteError>;
    async fn fetch_asset(&self, project_id: Id, asset_id: Id) -> Result<Asset, RemoteError>;
    async fn create_shot(&self, project_id: Id, name: &str) -> Result<Shot, RemoteError>;
    async fn create_asset(
        &self,
        project_id: Id,
        name: &str,
        kind: &str,
    ) -> Result<Asset, RemoteError>;
    async fn update_status(
        &self,
        project_id: Id,
        kind: ItemKind,
        item_id: Id,
        status_item: &str,
        value: Status,
    ) -> Result<(), RemoteError>;

    // -- notes ------------------------------------------------------------
    async fn list_notes(
        &self,
        project_id: Id,
        kind: ItemKind,
        item_id: Id,
        department: Department,
    ) -> Result<Vec<Note>, RemoteError>;
    async fn create_note(
        &self,
        project_id: Id,
        kind: ItemKind,
        item_id: Id,
        department: Department,
        body: &str,
    ) -> Result<Note, RemoteError>;
}

#[async_trait]
impl ProductionService for TracktorApi {
    async fn login(&self, name: &str, password: &str) -> Result<Id, RemoteError> {
        TracktorApi::login(self, name, password).await
    }

    async fn signup(&self, name: &str, password: &str) -> Result<(), RemoteError> {
        TracktorApi::signup(self, name, password).await
    }

    async fn list_users(&self) -> Result<Vec<User>, RemoteError> {
        TracktorApi::list_users(self).await
    }

    async fn list_projects(&self) -> Result<Vec<Project>, RemoteError> {
        TracktorApi::list_projects(self).await
    }

    async fn memberships(&self, user_id: Id) -> Result<Vec<Id>, RemoteError> {
        TracktorApi::memberships(self, user_id).await
    }

    async fn fetch_project(&self, project_id: Id) -> Result<Project, RemoteError> {
        TracktorApi::fetch_project(self, project_id).await
    }

    async fn create_project(
        &self,
        request: &CreateProjectRequest,
    ) -> Result<CreatedProject, RemoteError> {
        TracktorApi::create_project(self, request).await
    }

    async fn delete_project(&self, project_id: Id) -> Result<(), RemoteError> {
        TracktorApi::delete_project(self, project_id).await
    }

    async fn share_code(&self, project_id: Id) -> Result<String, RemoteError> {
        TracktorApi::share_code(self, project_id).await
    }

    async fn join_project(&self, sharecode: &str, user_id: Id) -> Result<Id, RemoteError> {
        TracktorApi::join_project(self, sharecode, user_id).await
    }

    async fn list_shots(&self, project_id: Id) -> Result<Vec<Shot>, RemoteError> {
        TracktorApi::list_shots(self, project_id).await
    }

    async fn list_assets(&self, project_id: Id) -> Result<Vec<Asset>, RemoteError> {
        TracktorApi::list_assets(self, project_id).await
    }

    async fn fetch_shot(&self, project_id: Id, shot_id: Id) -> Result<Shot, RemoteError> {
        TracktorApi::fetch_shot(self, project_id, shot_id).await
    }

    async fn fetch_asset(&self, project_id: Id, asset_id: Id) -> Result<Asset, RemoteError> {
        TracktorApi::fetch_asset(self, project_id, asset_id).await
    }

    async fn create_shot(&self, project_id: Id, name: &str) -> Result<Shot, RemoteError> {
        TracktorApi::create_shot(self, project_id, name).await
    }

    async fn create_asset(
        &self,
        project_id: Id,
        name: &str,
        kind: &str,
    ) -> Result<Asset, RemoteError> {
        TracktorApi::create_asset(self, project_id, name, kind).await
    }

    async fn update_status(
        &self,
        project_id: Id,
        kind: ItemKind,
        item_id: Id,
        status_item: &str,
        value: Status,
    ) -> Result<(), RemoteError> {
        TracktorApi::update_status(self, project_id, kind, item_id, status_item, value).await
    }

    async fn list_notes(
        &self,
        project_id: Id,
        kind: ItemKind,
        item_id: Id,
        department: Department,
    ) -> Result<Vec<Note>, RemoteError> {
        TracktorApi::list_notes(self, project_id, kind, item_id, department).await
    }

    async fn create_note(
        &self,
        project_id: Id,
        kind: ItemKind,
        item_id: Id,
        department: Department,
        body: &str,
    ) -> Result<Note, RemoteError> {
        TracktorApi::create_note(self, project_id, kind, item_id, department, body).await
    }
}
