//! Project CRUD tools

use draftboard_domain::Project;
use draftboard_store::{FileStore, ProjectUpdate};
use serde::{Deserialize, Serialize};

use crate::error::McpError;
use crate::tools::parse_project_id;

/// Parameters for creating a project
#[derive(Debug, Deserialize)]
pub struct CreateProjectParams {
    /// Project name
    pub name: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Parameters addressing a project by id
#[derive(Debug, Deserialize)]
pub struct ProjectIdParams {
    /// Project id
    pub project_id: String,
}

/// Parameters for updating a project
#[derive(Debug, Deserialize)]
pub struct UpdateProjectParams {
    /// Project id
    pub project_id: String,
    /// New name
    #[serde(default)]
    pub name: Option<String>,
    /// New description
    #[serde(default)]
    pub description: Option<String>,
    /// New tag list
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Result of deleting a project
#[derive(Debug, Serialize)]
pub struct DeleteProjectResult {
    /// Deleted project id
    pub project_id: String,
    /// Confirmation message
    pub message: String,
}

/// Handle create_project tool invocation
pub fn handle_create_project(
    store: &FileStore,
    params: CreateProjectParams,
) -> Result<Project, McpError> {
    if params.name.trim().is_empty() {
        return Err(McpError::InvalidRequest(
            "Project name must not be empty".to_string(),
        ));
    }
    Ok(store.create_project(params.name, params.description, params.tags)?)
}

/// Handle get_project tool invocation
pub fn handle_get_project(store: &FileStore, params: ProjectIdParams) -> Result<Project, McpError> {
    Ok(store.get_project(parse_project_id(&params.project_id)?)?)
}

/// Handle update_project tool invocation
pub fn handle_update_project(
    store: &FileStore,
    params: UpdateProjectParams,
) -> Result<Project, McpError> {
    let id = parse_project_id(&params.project_id)?;
    Ok(store.update_project(
        id,
        ProjectUpdate {
            name: params.name,
            description: params.description,
            tags: params.tags,
        },
    )?)
}

/// Handle delete_project tool invocation (cascades to entities)
pub fn handle_delete_project(
    store: &FileStore,
    params: ProjectIdParams,
) -> Result<DeleteProjectResult, McpError> {
    let id = parse_project_id(&params.project_id)?;
    store.delete_project(id)?;
    Ok(DeleteProjectResult {
        project_id: params.project_id,
        message: "Project and its entities deleted".to_string(),
    })
}

/// Handle list_projects tool invocation
pub fn handle_list_projects(store: &FileStore) -> Result<Vec<Project>, McpError> {
    Ok(store.list_projects()?)
}
