//! REST client for the tracktor remote store.
//!
//! One method per endpoint, shared response plumbing at the bottom.
//! The remote has two failure styles: proper non-2xx statuses, and
//! 200-OK bodies carrying an `error` key (login, join, share, status
//! patches). Both are folded into [`RemoteError::Rejected`] here so
//! upstream code only ever sees one shape.

use serde::{Deserialize, Serialize};

use tracktor_core::{Department, Id, ItemKind, Status};
use tracktor_store::models::{Asset, Note, Project, Shot, User};

use crate::error::RemoteError;

/// Correlation header attached to every outgoing request.
const REQUEST_ID_HEADER: &str = "x-request-id";

/// HTTP client for a tracktor server instance.
pub struct TracktorApi {
    client: reqwest::Client,
    base_url: String,
}

// ---------------------------------------------------------------------------
// Request / response payloads
// ---------------------------------------------------------------------------

/// Body for `POST /api/projects`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(rename = "shotsNum")]
    pub shots_target: Option<i64>,
    pub deadline: Option<String>,
    pub user_id: Id,
}

/// The remote answers project creation with just the assigned identity.
#[derive(Debug, Deserialize)]
pub struct CreatedProject {
    #[serde(rename = "project_id")]
    pub id: Id,
    #[serde(rename = "project_name")]
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct UsersResponse {
    users: Vec<User>,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    user_id: Option<Id>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ShareCodeResponse {
    #[serde(default)]
    sharecode: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JoinResponse {
    #[serde(default)]
    project_id: Option<Id>,
    #[serde(default)]
    error: Option<String>,
}

/// Generic body for endpoints that acknowledge with a message or reject
/// with an error, always under HTTP 200.
#[derive(Debug, Deserialize)]
struct AckResponse {
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct StatusPatch<'a> {
    status_item: &'a str,
    value: &'a str,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

impl TracktorApi {
    /// Create a new client.
    ///
    /// * `base_url` - server root, e.g. `http://localhost:8080`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`] for
    /// connection pooling.
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Server root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -- users / session ----------------------------------------------------

    /// `GET /api/users` -- all registered users, passwords excluded.
    pub async fn list_users(&self) -> Result<Vec<User>, RemoteError> {
        let response = self.get(format!("{}/api/users", self.base_url)).send().await?;
        let body: UsersResponse = Self::parse_response(response).await?;
        Ok(body.users)
    }

    /// `POST /api/users` -- register a new account.
    pub async fn signup(&self, name: &str, password: &str) -> Result<(), RemoteError> {
        let body = serde_json::json!({
            "user_name": name,
            "user_password": password,
        });
        let response = self
            .post(format!("{}/api/users", self.base_url))
            .json(&body)
            .send()
            .await?;
        Self::check_status(response).await
    }

    /// `POST /api/login` -- verify credentials, returning the user id.
    ///
    /// The remote signals bad credentials with a 200 body
    /// (`success: false` plus an error message); that becomes a
    /// [`RemoteError::Rejected`] like any other refusal.
    pub async fn login(&self, name: &str, password: &str) -> Result<Id, RemoteError> {
        let body = serde_json::json!({
            "user_name": name,
            "user_password": password,
        });
        let response = self
            .post(format!("{}/api/login", self.base_url))
            .json(&body)
            .send()
            .await?;
        let status = response.status().as_u16();
        let login: LoginResponse = Self::parse_response(response).await?;
        match (login.success, login.user_id) {
            (true, Some(user_id)) => Ok(user_id),
            _ => Err(RemoteError::Rejected {
                status,
                message: login.error,
            }),
        }
    }

    /// `GET /api/usersProjects?user_id=` -- ids of the projects a user
    /// belongs to.
    pub async fn memberships(&self, user_id: Id) -> Result<Vec<Id>, RemoteError> {
        let response = self
            .get(format!("{}/api/usersProjects?user_id={user_id}", self.base_url))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    // -- projects -----------------------------------------------------------

    /// `GET /api/projects` -- every project on the server.
    pub async fn list_projects(&self) -> Result<Vec<Project>, RemoteError> {
        let response = self
            .get(format!("{}/api/projects", self.base_url))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `GET /api/projects/{id}` -- one project, 404 when absent.
    pub async fn fetch_project(&self, project_id: Id) -> Result<Project, RemoteError> {
        let response = self
            .get(format!("{}/api/projects/{project_id}", self.base_url))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `POST /api/projects` -- create a project owned by `user_id`.
    pub async fn create_project(
        &self,
        request: &CreateProjectRequest,
    ) -> Result<CreatedProject, RemoteError> {
        let response = self
            .post(format!("{}/api/projects", self.base_url))
            .json(request)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `DELETE /api/projects/{id}` -- remove a project and its contents.
    pub async fn delete_project(&self, project_id: Id) -> Result<(), RemoteError> {
        let response = self
            .delete(format!("{}/api/projects/{project_id}", self.base_url))
            .send()
            .await?;
        Self::check_status(response).await
    }

    /// `GET /api/projects/{id}/share` -- generate (or fetch) the join
    /// code for a project.
    pub async fn share_code(&self, project_id: Id) -> Result<String, RemoteError> {
        let response = self
            .get(format!("{}/api/projects/{project_id}/share", self.base_url))
            .send()
            .await?;
        let status = response.status().as_u16();
        let body: ShareCodeResponse = Self::parse_response(response).await?;
        body.sharecode.ok_or(RemoteError::Rejected {
            status,
            message: body.error,
        })
    }

    /// `POST /api/join_project` -- redeem a share code, returning the
    /// joined project's id.
    pub async fn join_project(&self, sharecode: &str, user_id: Id) -> Result<Id, RemoteError> {
        let body = serde_json::json!({
            "sharecode": sharecode,
            "user_id": user_id,
        });
        let response = self
            .post(format!("{}/api/join_project", self.base_url))
            .json(&body)
            .send()
            .await?;
        let status = response.status().as_u16();
        let join: JoinResponse = Self::parse_response(response).await?;
        join.project_id.ok_or(RemoteError::Rejected {
            status,
            message: join.error,
        })
    }

    // -- items --------------------------------------------------------------

    /// `GET /api/projects/{id}/shots` -- all shots of a project.
    pub async fn list_shots(&self, project_id: Id) -> Result<Vec<Shot>, RemoteError> {
        let response = self
            .get(format!("{}/api/projects/{project_id}/shots", self.base_url))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `GET /api/projects/{id}/assets` -- all assets of a project.
    pub async fn list_assets(&self, project_id: Id) -> Result<Vec<Asset>, RemoteError> {
        let response = self
            .get(format!("{}/api/projects/{project_id}/assets", self.base_url))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `GET /api/projects/{id}/shots/{itemId}` -- one shot.
    pub async fn fetch_shot(&self, project_id: Id, shot_id: Id) -> Result<Shot, RemoteError> {
        let response = self
            .get(format!(
                "{}/api/projects/{project_id}/shots/{shot_id}",
                self.base_url
            ))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `GET /api/projects/{id}/assets/{itemId}` -- one asset.
    pub async fn fetch_asset(&self, project_id: Id, asset_id: Id) -> Result<Asset, RemoteError> {
        let response = self
            .get(format!(
                "{}/api/projects/{project_id}/assets/{asset_id}",
                self.base_url
            ))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `POST /api/projects/{id}/create_shot` -- create a shot, returning
    /// the full row with its assigned id.
    pub async fn create_shot(&self, project_id: Id, name: &str) -> Result<Shot, RemoteError> {
        let body = serde_json::json!({
            "project_id": project_id,
            "shot_name": name,
        });
        let response = self
            .post(format!(
                "{}/api/projects/{project_id}/create_shot",
                self.base_url
            ))
            .json(&body)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `POST /api/projects/{id}/create_asset` -- create an asset,
    /// returning the full row with its assigned id.
    pub async fn create_asset(
        &self,
        project_id: Id,
        name: &str,
        kind: &str,
    ) -> Result<Asset, RemoteError> {
        let body = serde_json::json!({
            "project_id": project_id,
            "asset_name": name,
            "asset_type": kind,
        });
        let response = self
            .post(format!(
                "{}/api/projects/{project_id}/create_asset",
                self.base_url
            ))
            .json(&body)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `PATCH /api/projects/{id}/{kind}/{itemId}` -- replace one status
    /// field on one item.
    pub async fn update_status(
        &self,
        project_id: Id,
        kind: ItemKind,
        item_id: Id,
        status_item: &str,
        value: Status,
    ) -> Result<(), RemoteError> {
        let patch = StatusPatch {
            status_item,
            value: value.as_str(),
        };
        let response = self
            .patch(format!(
                "{}/api/projects/{project_id}/{}/{item_id}",
                self.base_url,
                kind.as_str()
            ))
            .json(&patch)
            .send()
            .await?;
        let status = response.status().as_u16();
        let ack: AckResponse = Self::parse_response(response).await?;
        match ack.error {
            None => Ok(()),
            Some(message) => Err(RemoteError::Rejected {
                status,
                message: Some(message),
            }),
        }
    }

    // -- notes --------------------------------------------------------------

    /// `GET /api/projects/{id}/{kind}/{itemId}/{dept}/notes` -- notes for
    /// one (item, department) pair.
    pub async fn list_notes(
        &self,
        project_id: Id,
        kind: ItemKind,
        item_id: Id,
        department: Department,
    ) -> Result<Vec<Note>, RemoteError> {
        let response = self
            .get(format!(
                "{}/api/projects/{project_id}/{}/{item_id}/{}/notes",
                self.base_url,
                kind.as_str(),
                department.code()
            ))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `POST /api/projects/{id}/{kind}/{itemId}/{dept}/notes` -- append a
    /// note, returning the stored row with id, author, and timestamp.
    pub async fn create_note(
        &self,
        project_id: Id,
        kind: ItemKind,
        item_id: Id,
        department: Department,
        body: &str,
    ) -> Result<Note, RemoteError> {
        let payload = serde_json::json!({ "note_body": body });
        let response = self
            .post(format!(
                "{}/api/projects/{project_id}/{}/{item_id}/{}/notes",
                self.base_url,
                kind.as_str(),
                department.code()
            ))
            .json(&payload)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    // -- request plumbing ---------------------------------------------------

    fn get(&self, url: String) -> reqwest::RequestBuilder {
        self.client.get(url).header(REQUEST_ID_HEADER, request_id())
    }

    fn post(&self, url: String) -> reqwest::RequestBuilder {
        self.client.post(url).header(REQUEST_ID_HEADER, request_id())
    }

    fn patch(&self, url: String) -> reqwest::RequestBuilder {
        self.client.patch(url).header(REQUEST_ID_HEADER, request_id())
    }

    fn delete(&self, url: String) -> reqwest::RequestBuilder {
        self.client.delete(url).header(REQUEST_ID_HEADER, request_id())
    }

    /// Ensure the response has a success status. 404 maps to
    /// [`RemoteError::NotFound`]; any other failure status is a
    /// [`RemoteError::Rejected`] carrying the body's `error` message
    /// when one can be extracted.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, RemoteError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RemoteError::NotFound);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), %body, "Remote rejected request");
        Err(RemoteError::Rejected {
            status: status.as_u16(),
            message: extract_error_message(&body),
        })
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, RemoteError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Assert the response has a success status, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), RemoteError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

/// Fresh correlation id for one outgoing request.
fn request_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Pull the `error` field out of a JSON failure body, if it is one.
fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<AckResponse>(body)
        .ok()
        .and_then(|ack| ack.error)
}
