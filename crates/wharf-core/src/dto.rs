//! API request and response shapes.
//!
//! Required fields are plain values and always serialized. Optional ones are
//! `Option` and omitted when `None`. Secrets stay out because [`Project`]
//! never serializes its api key.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::ValidationError;
use crate::project::{Project, Workspace};
use crate::types::{BuildConfig, GitRepository};

/// Provider-reported facts about a workspace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_metadata: Option<String>,
}

/// Provider-reported facts about a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    pub name: String,
    pub created: String,
    pub is_running: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_metadata: Option<String>,
    pub workspace_id: String,
}

impl ProjectInfo {
    pub fn for_project(project: &Project, created: impl Into<String>) -> Self {
        Self {
            name: project.name().to_string(),
            created: created.into(),
            is_running: project.is_running(),
            provider_metadata: None,
            workspace_id: project.workspace_id.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkspaceDto {
    #[serde(flatten)]
    pub workspace: Workspace,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<WorkspaceInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectDto {
    #[serde(flatten)]
    pub project: Project,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<ProjectInfo>,
}

/// Project entry of a create-workspace request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectConfigDto {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_config: Option<BuildConfig>,
    pub repository: GitRepository,
    #[serde(default)]
    pub env_vars: BTreeMap<String, String>,
}

impl CreateProjectConfigDto {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if self.repository.url.trim().is_empty() {
            return Err(ValidationError::MissingField("repository.url"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateWorkspaceDto {
    pub id: String,
    pub name: String,
    pub target: String,
    pub projects: Vec<CreateProjectConfigDto>,
}

impl CreateWorkspaceDto {
    /// Check required fields, including every project entry.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [("id", &self.id), ("name", &self.name), ("target", &self.target)] {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }
        if self.projects.is_empty() {
            return Err(ValidationError::NoProjects);
        }
        for (index, project) in self.projects.iter().enumerate() {
            project
                .validate()
                .map_err(|source| ValidationError::InvalidProject {
                    index,
                    source: Box::new(source),
                })?;
        }
        Ok(())
    }
}
